//! Error handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::logic::estimator::EstimatorError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    /// A required input field is absent from the request body
    MissingField(String),

    /// Malformed body, wrong feature-vector length, or non-numeric field
    InvalidInput(String),

    /// The risk model is not available to serve the request
    EstimatorUnavailable,

    /// Unexpected inference or internal failure
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                format!("Missing required field: {}", field),
            ),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::EstimatorUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Risk model is not available".to_string(),
            ),
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<EstimatorError> for AppError {
    fn from(err: EstimatorError) -> Self {
        match err {
            EstimatorError::DimensionMismatch { .. } => AppError::InvalidInput(err.to_string()),
            EstimatorError::ModelUnavailable(_) => AppError::EstimatorUnavailable,
            EstimatorError::Inference(msg) => AppError::InternalError(msg),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let body = rejection.body_text();

        // serde reports absent fields as: missing field `name`
        if let Some(rest) = body.split("missing field `").nth(1) {
            if let Some(field) = rest.split('`').next() {
                return AppError::MissingField(field.to_string());
            }
        }

        AppError::InvalidInput(body)
    }
}
