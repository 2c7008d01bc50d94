//! Loan evaluation handler

use axum::extract::{rejection::JsonRejection, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::logic::{evaluate, round2, Decision, GreenInputs, RiskTier};
use crate::{AppError, AppResult, AppState};

/// Request body. Field names follow the original public API.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub financial_features: Vec<f32>,
    pub renewable: f64,
    pub emission: f64,
    pub waste: f64,
}

/// Response body. The two percent fields keep their legacy wire names.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    #[serde(rename = "default_probability (%)")]
    pub default_probability_percent: f64,
    pub risk_level: RiskTier,
    pub green_score: f64,
    pub decision: Decision,
    #[serde(rename = "recommended_interest_rate (%)")]
    pub recommended_interest_rate_percent: f64,
    pub reasons: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Score one applicant
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> AppResult<Json<PredictResponse>> {
    let Json(req) = payload?;

    // Reject a wrong-sized vector at the boundary; the estimator enforces
    // the same contract for callers that bypass the handler
    let expected = state.estimator.input_dim();
    if req.financial_features.len() != expected {
        return Err(AppError::InvalidInput(format!(
            "expected {} financial features, got {}",
            expected,
            req.financial_features.len()
        )));
    }

    let green = GreenInputs {
        renewable: req.renewable,
        emission_reduction: req.emission,
        waste_management: req.waste,
    };

    let result = evaluate(state.estimator.as_ref(), &req.financial_features, &green)?;

    tracing::debug!(
        probability = result.probability,
        green_score = result.green_score,
        decision = %result.decision,
        "applicant scored"
    );

    Ok(Json(PredictResponse {
        default_probability_percent: round2(result.probability * 100.0),
        risk_level: result.risk_tier,
        green_score: result.green_score,
        decision: result.decision,
        recommended_interest_rate_percent: result.interest_rate,
        reasons: result.reasons,
        recommendations: result.recommendations,
    }))
}
