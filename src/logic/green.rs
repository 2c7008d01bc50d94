//! Green Scorer
//!
//! Weighted sustainability score from three normalized inputs.

use super::round2;
use super::rules::{EMISSION_WEIGHT, RENEWABLE_WEIGHT, WASTE_WEIGHT};
use super::types::GreenInputs;

/// Composite green score: 0.4*renewable + 0.4*emission + 0.2*waste,
/// rounded to 2 decimals.
///
/// Inputs are expected in [0, 100] but the range is deliberately not
/// enforced: out-of-range values (negative, > 100) propagate through the
/// weighted sum unchanged. Range policing, if any, is the caller's job.
pub fn green_score(renewable: f64, emission_reduction: f64, waste_management: f64) -> f64 {
    round2(
        renewable * RENEWABLE_WEIGHT
            + emission_reduction * EMISSION_WEIGHT
            + waste_management * WASTE_WEIGHT,
    )
}

/// Convenience wrapper over [`green_score`] for the grouped inputs
pub fn score_inputs(inputs: &GreenInputs) -> f64 {
    green_score(
        inputs.renewable,
        inputs.emission_reduction,
        inputs.waste_management,
    )
}
