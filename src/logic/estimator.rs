//! Risk Estimator - ONNX Runtime Integration
//!
//! Wraps the pre-trained credit default classifier behind a trait so the
//! decision/pricing core can be exercised with a deterministic stub in
//! place of a real model.

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Classifier output for one applicant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Probability of the positive ("default") class, in [0, 1]
    pub probability: f64,
    /// Thresholded label (0 = repay, 1 = default)
    pub predicted_class: u8,
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("expected {expected} financial features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("risk model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("inference failed: {0}")]
    Inference(String),
}

// ============================================================================
// ESTIMATOR TRAIT
// ============================================================================

/// Injected inference capability.
///
/// Implementations must be deterministic and side-effect free: repeated
/// calls with identical input return identical assessments, and concurrent
/// read-only use from multiple requests is safe.
pub trait RiskEstimator: Send + Sync {
    /// Number of features the underlying classifier expects
    fn input_dim(&self) -> usize;

    /// Assess one feature vector. Fails fast on a length mismatch rather
    /// than silently coercing.
    fn assess(&self, features: &[f32]) -> Result<RiskAssessment, EstimatorError>;
}

// ============================================================================
// ONNX IMPLEMENTATION
// ============================================================================

/// Production estimator backed by an ONNX session.
///
/// The session is loaded once at startup and never mutated afterwards; the
/// lock exists only because the runtime requires exclusive access per run.
#[derive(Debug)]
pub struct OnnxEstimator {
    session: RwLock<Session>,
    input_dim: usize,
    class_threshold: f32,
}

impl OnnxEstimator {
    /// Load the ONNX model from file. Failure here is fatal to the service.
    pub fn load(
        model_path: &str,
        input_dim: usize,
        class_threshold: f32,
    ) -> Result<Self, EstimatorError> {
        tracing::info!("Loading ONNX model from: {}", model_path);

        if !std::path::Path::new(model_path).exists() {
            return Err(EstimatorError::ModelUnavailable(format!(
                "model not found: {}",
                model_path
            )));
        }

        let session = Session::builder()
            .map_err(|e| {
                EstimatorError::ModelUnavailable(format!("failed to create session builder: {}", e))
            })?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| {
                EstimatorError::ModelUnavailable(format!("failed to set optimization: {}", e))
            })?
            .commit_from_file(model_path)
            .map_err(|e| EstimatorError::ModelUnavailable(format!("failed to load model: {}", e)))?;

        tracing::info!("ONNX model loaded successfully");

        Ok(Self {
            session: RwLock::new(session),
            input_dim,
            class_threshold,
        })
    }
}

impl RiskEstimator for OnnxEstimator {
    fn input_dim(&self) -> usize {
        self.input_dim
    }

    fn assess(&self, features: &[f32]) -> Result<RiskAssessment, EstimatorError> {
        if features.len() != self.input_dim {
            return Err(EstimatorError::DimensionMismatch {
                expected: self.input_dim,
                actual: features.len(),
            });
        }

        let input_array = Array2::<f32>::from_shape_vec((1, self.input_dim), features.to_vec())
            .map_err(|e| EstimatorError::Inference(format!("input tensor error: {}", e)))?;

        let mut session = self.session.write();

        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| EstimatorError::Inference("model defines no output".to_string()))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| EstimatorError::Inference(format!("tensor error: {}", e)))?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| EstimatorError::Inference(format!("inference failed: {}", e)))?;

        let output = outputs
            .get(&output_name)
            .ok_or_else(|| EstimatorError::Inference("no output produced".to_string()))?;

        let output_tensor = output
            .try_extract_tensor::<f32>()
            .map_err(|e| EstimatorError::Inference(format!("extract error: {}", e)))?;

        let data = output_tensor.1;

        // Binary classifiers emit either a [p_repay, p_default] row or a
        // single positive-class probability; the last value is the positive
        // class in both layouts.
        let probability = data
            .last()
            .copied()
            .ok_or_else(|| EstimatorError::Inference("empty model output".to_string()))?;
        let probability = f64::from(probability).clamp(0.0, 1.0);

        let predicted_class = u8::from(probability >= f64::from(self.class_threshold));

        Ok(RiskAssessment {
            probability,
            predicted_class,
        })
    }
}
