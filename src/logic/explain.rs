//! Explanation Engine
//!
//! Derives human-readable reasons and actionable recommendations from the
//! scoring result. Pure functions of the same inputs as the decision, so
//! the determinism invariant of the pipeline is preserved.

use super::rules::{
    CONDITIONAL_GREEN_MIN, EMISSION_WEIGHT, GREEN_INCENTIVE_MIN, RENEWABLE_WEIGHT, WASTE_WEIGHT,
};
use super::types::{Decision, GreenInputs, RiskTier};

/// Maximum number of recommendations returned
const MAX_RECOMMENDATIONS: usize = 3;

/// One line per applied rule, in pipeline order
pub fn build_reasons(
    probability: f64,
    green_score: f64,
    tier: RiskTier,
    decision: Decision,
) -> Vec<String> {
    let mut reasons = Vec::new();

    reasons.push(format!(
        "Default probability {:.2}% places the applicant in the {} risk tier",
        probability * 100.0,
        tier
    ));

    match (tier, decision) {
        (RiskTier::Low, Decision::ApprovedWithGreenIncentive) => {
            reasons.push(format!(
                "Green score {:.2} clears the {} incentive threshold",
                green_score, GREEN_INCENTIVE_MIN
            ));
        }
        (RiskTier::Low, _) => {
            reasons.push(format!(
                "Green score {:.2} is at or below the {} incentive threshold",
                green_score, GREEN_INCENTIVE_MIN
            ));
        }
        (RiskTier::Medium, Decision::ConditionallyApproved) => {
            reasons.push(format!(
                "Green score {:.2} clears the {} conditional-approval threshold",
                green_score, CONDITIONAL_GREEN_MIN
            ));
        }
        (RiskTier::Medium, _) => {
            reasons.push(format!(
                "Green score {:.2} is at or below the {} conditional-approval threshold",
                green_score, CONDITIONAL_GREEN_MIN
            ));
        }
        (RiskTier::High, _) => {
            reasons.push("High risk tier is rejected regardless of green score".to_string());
        }
    }

    reasons
}

/// Up to 3 concrete actions, keyed off the outcome and the weakest
/// sustainability input
pub fn build_recommendations(
    inputs: &GreenInputs,
    tier: RiskTier,
    decision: Decision,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    match (tier, decision) {
        (RiskTier::High, _) => {
            recommendations.push(
                "Reduce the default risk profile before reapplying; green performance \
                 cannot offset a High risk tier"
                    .to_string(),
            );
        }
        (RiskTier::Medium, Decision::Rejected) => {
            recommendations.push(format!(
                "Lift the composite green score above {} to qualify for conditional approval",
                CONDITIONAL_GREEN_MIN
            ));
        }
        (RiskTier::Low, Decision::Approved) => {
            recommendations.push(format!(
                "Lift the composite green score above {} to unlock the green incentive rate",
                GREEN_INCENTIVE_MIN
            ));
        }
        _ => {}
    }

    recommendations.push(weakest_input_advice(inputs));
    recommendations.push(
        "Every green score point lowers the recommended rate by 0.02 percentage points"
            .to_string(),
    );

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

/// Advice targeting the lowest of the three sustainability inputs.
/// Ties resolve in declaration order (renewable, emission, waste).
fn weakest_input_advice(inputs: &GreenInputs) -> String {
    let mut weakest = ("renewable energy usage", inputs.renewable, RENEWABLE_WEIGHT);
    if inputs.emission_reduction < weakest.1 {
        weakest = (
            "emission reduction",
            inputs.emission_reduction,
            EMISSION_WEIGHT,
        );
    }
    if inputs.waste_management < weakest.1 {
        weakest = ("waste management", inputs.waste_management, WASTE_WEIGHT);
    }

    format!(
        "Improve {} first; it scores {:.1} and carries {:.0}% of the green score",
        weakest.0,
        weakest.1,
        weakest.2 * 100.0
    )
}
