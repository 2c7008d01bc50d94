//! Decision Engine
//!
//! Maps (default probability, green score) to a risk tier and a lending
//! decision via fixed thresholds. First match wins; boundaries are strict
//! as written (a value exactly at a threshold falls to the else branch).

use super::rules::DecisionRules;
use super::types::{Decision, RiskTier};

/// Tier and decision with the default rule set
pub fn decide(probability: f64, green_score: f64) -> (RiskTier, Decision) {
    decide_with_rules(probability, green_score, &DecisionRules::default())
}

/// Tier and decision with a custom rule set
pub fn decide_with_rules(
    probability: f64,
    green_score: f64,
    rules: &DecisionRules,
) -> (RiskTier, Decision) {
    let tier = if probability < rules.low_risk_max {
        RiskTier::Low
    } else if probability < rules.medium_risk_max {
        RiskTier::Medium
    } else {
        RiskTier::High
    };

    // High tier and Medium tier with a weak green score both fall through
    // to Rejected
    let decision = if tier == RiskTier::Low && green_score > rules.green_incentive_min {
        Decision::ApprovedWithGreenIncentive
    } else if tier == RiskTier::Low {
        Decision::Approved
    } else if tier == RiskTier::Medium && green_score > rules.conditional_green_min {
        Decision::ConditionallyApproved
    } else {
        Decision::Rejected
    };

    (tier, decision)
}
