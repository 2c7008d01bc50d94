//! Scoring Core
//!
//! Pure decision/scoring pipeline, fully separated from HTTP plumbing.
//! Every function here is deterministic: identical inputs always produce
//! identical outputs.

pub mod decision;
pub mod estimator;
pub mod evaluate;
pub mod explain;
pub mod green;
pub mod pricing;
pub mod rules;
pub mod types;

// Re-export common types
pub use estimator::{EstimatorError, RiskAssessment, RiskEstimator};
pub use evaluate::evaluate;
pub use types::{Decision, GreenInputs, LoanEvaluation, RiskTier};

/// Round to 2 decimal places, half away from zero.
///
/// The single rounding policy for the whole pipeline (green score,
/// interest rate, probability percentage).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
