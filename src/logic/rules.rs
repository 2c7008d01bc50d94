//! Scoring Rules & Thresholds
//!
//! Constants and configurable threshold sets for the decision and pricing
//! engines. No scoring logic here.

use serde::{Deserialize, Serialize};

// ============================================================================
// RISK TIER THRESHOLDS
// ============================================================================

/// Below this probability = Low tier
pub const LOW_RISK_MAX: f64 = 0.3;

/// Below this probability = Medium tier, at or above = High
pub const MEDIUM_RISK_MAX: f64 = 0.6;

// ============================================================================
// GREEN THRESHOLDS (strict >, values exactly at the threshold do not qualify)
// ============================================================================

/// Green score a Low-tier applicant must exceed for the incentive rate
pub const GREEN_INCENTIVE_MIN: f64 = 60.0;

/// Green score a Medium-tier applicant must exceed for conditional approval
pub const CONDITIONAL_GREEN_MIN: f64 = 70.0;

// ============================================================================
// GREEN SCORE WEIGHTS (sum to 1.0)
// ============================================================================

/// Weight of renewable energy usage (40%)
pub const RENEWABLE_WEIGHT: f64 = 0.4;

/// Weight of emission reduction (40%)
pub const EMISSION_WEIGHT: f64 = 0.4;

/// Weight of waste management (20%)
pub const WASTE_WEIGHT: f64 = 0.2;

// ============================================================================
// PRICING PARAMETERS
// ============================================================================

/// Base interest rate in percent
pub const BASE_RATE: f64 = 10.0;

/// Rate premium per unit of default probability
pub const RISK_PREMIUM_FACTOR: f64 = 5.0;

/// Rate discount per green score point
pub const GREEN_DISCOUNT_FACTOR: f64 = 0.02;

// ============================================================================
// CONFIGURABLE THRESHOLDS (for runtime adjustment)
// ============================================================================

/// Thresholds for tier assignment and decision (configurable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRules {
    /// Below this probability = Low
    pub low_risk_max: f64,
    /// Below this probability = Medium, at or above = High
    pub medium_risk_max: f64,
    /// Green score to exceed for the incentive (Low tier)
    pub green_incentive_min: f64,
    /// Green score to exceed for conditional approval (Medium tier)
    pub conditional_green_min: f64,
}

impl Default for DecisionRules {
    fn default() -> Self {
        Self {
            low_risk_max: LOW_RISK_MAX,
            medium_risk_max: MEDIUM_RISK_MAX,
            green_incentive_min: GREEN_INCENTIVE_MIN,
            conditional_green_min: CONDITIONAL_GREEN_MIN,
        }
    }
}

impl DecisionRules {
    /// Conservative profile - tighter risk ceilings, fewer approvals
    pub fn conservative() -> Self {
        Self {
            low_risk_max: 0.2,
            medium_risk_max: 0.5,
            ..Default::default()
        }
    }
}

/// Pricing parameters (configurable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateCard {
    pub base_rate: f64,
    pub risk_premium_factor: f64,
    pub green_discount_factor: f64,
}

impl Default for RateCard {
    fn default() -> Self {
        Self {
            base_rate: BASE_RATE,
            risk_premium_factor: RISK_PREMIUM_FACTOR,
            green_discount_factor: GREEN_DISCOUNT_FACTOR,
        }
    }
}
