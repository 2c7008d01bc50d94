//! Scoring Types
//!
//! Data structures only - no logic.

use serde::{Deserialize, Serialize};

// ============================================================================
// RISK TIER
// ============================================================================

/// Coarse risk bucket derived from the default probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    /// p < 0.3
    Low,
    /// 0.3 <= p < 0.6
    Medium,
    /// p >= 0.6
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// DECISION
// ============================================================================

/// Final categorical outcome of the lending request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    #[serde(rename = "Approved with Green Incentive")]
    ApprovedWithGreenIncentive,
    #[serde(rename = "Approved")]
    Approved,
    #[serde(rename = "Conditionally Approved")]
    ConditionallyApproved,
    #[serde(rename = "Rejected")]
    Rejected,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::ApprovedWithGreenIncentive => "Approved with Green Incentive",
            Decision::Approved => "Approved",
            Decision::ConditionallyApproved => "Conditionally Approved",
            Decision::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// GREEN INPUTS
// ============================================================================

/// Sustainability metrics, each nominally in [0, 100].
///
/// The core does not validate the range: out-of-range values propagate
/// through the weighted sum unchanged. Structural validation belongs to the
/// request boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GreenInputs {
    pub renewable: f64,
    pub emission_reduction: f64,
    pub waste_management: f64,
}

// ============================================================================
// EVALUATION RESULT
// ============================================================================

/// Full result of the scoring pipeline for one applicant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanEvaluation {
    /// Default probability in [0, 1]
    pub probability: f64,
    /// Estimator's thresholded label (0 = repay, 1 = default)
    pub predicted_class: u8,
    pub risk_tier: RiskTier,
    /// Weighted sustainability score, rounded to 2 decimals
    pub green_score: f64,
    pub decision: Decision,
    /// Recommended interest rate in percent, rounded to 2 decimals, unclamped
    pub interest_rate: f64,
    /// One line per applied scoring rule
    pub reasons: Vec<String>,
    /// Up to 3 actionable suggestions for the applicant
    pub recommendations: Vec<String>,
}
