//! Router-level tests driving the full request path with a stub estimator.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use greenlend::config::Config;
use greenlend::logic::{EstimatorError, RiskAssessment, RiskEstimator};
use greenlend::{create_router, AppState};

/// Deterministic stand-in for the ONNX model
struct StubEstimator {
    probability: f64,
    dim: usize,
}

impl RiskEstimator for StubEstimator {
    fn input_dim(&self) -> usize {
        self.dim
    }

    fn assess(&self, features: &[f32]) -> Result<RiskAssessment, EstimatorError> {
        if features.len() != self.dim {
            return Err(EstimatorError::DimensionMismatch {
                expected: self.dim,
                actual: features.len(),
            });
        }
        Ok(RiskAssessment {
            probability: self.probability,
            predicted_class: u8::from(self.probability >= 0.5),
        })
    }
}

fn app(probability: f64) -> Router {
    create_router(AppState {
        estimator: Arc::new(StubEstimator {
            probability,
            dim: 4,
        }),
        config: Config::from_env(),
    })
}

fn predict_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_healthy() {
    let response = app(0.2)
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    // Dimensionality comes from the injected estimator, not configuration
    assert_eq!(body["model_input_dim"], json!(4));
    assert!(body["model"].as_str().is_some_and(|m| !m.is_empty()));
    assert!(body["environment"].as_str().is_some());
}

#[tokio::test]
async fn low_risk_green_applicant_gets_incentive() {
    let response = app(0.2)
        .oneshot(predict_request(json!({
            "financial_features": [1.0, 2.0, 3.0, 4.0],
            "renewable": 80.0,
            "emission": 80.0,
            "waste": 80.0
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["default_probability (%)"], json!(20.0));
    assert_eq!(body["risk_level"], "Low");
    assert_eq!(body["green_score"], json!(80.0));
    assert_eq!(body["decision"], "Approved with Green Incentive");
    // 10 + 0.2*5 - 80*0.02 = 9.40
    assert_eq!(body["recommended_interest_rate (%)"], json!(9.4));
    assert!(body["reasons"].as_array().is_some_and(|r| !r.is_empty()));
    assert!(body["recommendations"]
        .as_array()
        .is_some_and(|r| !r.is_empty()));
}

#[tokio::test]
async fn high_risk_applicant_is_rejected() {
    let response = app(0.75)
        .oneshot(predict_request(json!({
            "financial_features": [1.0, 2.0, 3.0, 4.0],
            "renewable": 100.0,
            "emission": 100.0,
            "waste": 100.0
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["risk_level"], "High");
    assert_eq!(body["decision"], "Rejected");
}

#[tokio::test]
async fn missing_field_is_a_client_error() {
    let response = app(0.2)
        .oneshot(predict_request(json!({
            "financial_features": [1.0, 2.0, 3.0, 4.0],
            "emission": 50.0,
            "waste": 50.0
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .is_some_and(|msg| msg.contains("renewable")));
}

#[tokio::test]
async fn wrong_feature_count_is_a_client_error() {
    let response = app(0.2)
        .oneshot(predict_request(json!({
            "financial_features": [1.0, 2.0],
            "renewable": 50.0,
            "emission": 50.0,
            "waste": 50.0
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .is_some_and(|msg| msg.contains("expected 4 financial features")));
}

#[tokio::test]
async fn non_numeric_field_is_a_client_error() {
    let response = app(0.2)
        .oneshot(predict_request(json!({
            "financial_features": [1.0, 2.0, 3.0, 4.0],
            "renewable": "lots",
            "emission": 50.0,
            "waste": 50.0
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn legacy_predict_route_still_works() {
    let response = app(0.5)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "financial_features": [1.0, 2.0, 3.0, 4.0],
                        "renewable": 90.0,
                        "emission": 90.0,
                        "waste": 90.0
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    // p=0.5 is Medium; green 90 clears the conditional threshold
    assert_eq!(body["risk_level"], "Medium");
    assert_eq!(body["decision"], "Conditionally Approved");
}
