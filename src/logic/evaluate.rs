//! Scoring Pipeline
//!
//! Composes the four components in fixed order:
//! Risk Estimator -> Green Scorer -> (Decision Engine, Pricing Engine).

use super::decision::decide;
use super::estimator::{EstimatorError, RiskEstimator};
use super::explain::{build_reasons, build_recommendations};
use super::green::score_inputs;
use super::pricing::interest_rate;
use super::types::{GreenInputs, LoanEvaluation};

/// Evaluate one applicant.
///
/// Pure given a fixed estimator: no state is read or written across calls.
pub fn evaluate(
    estimator: &dyn RiskEstimator,
    features: &[f32],
    green: &GreenInputs,
) -> Result<LoanEvaluation, EstimatorError> {
    let assessment = estimator.assess(features)?;

    let green_score = score_inputs(green);
    let (risk_tier, decision) = decide(assessment.probability, green_score);
    let rate = interest_rate(assessment.probability, green_score);

    let reasons = build_reasons(assessment.probability, green_score, risk_tier, decision);
    let recommendations = build_recommendations(green, risk_tier, decision);

    Ok(LoanEvaluation {
        probability: assessment.probability,
        predicted_class: assessment.predicted_class,
        risk_tier,
        green_score,
        decision,
        interest_rate: rate,
        reasons,
        recommendations,
    })
}
