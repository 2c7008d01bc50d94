//! Configuration module

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Path to the ONNX credit default model
    pub model_path: String,

    /// Number of financial features the model was trained with
    pub model_input_dim: usize,

    /// Probability threshold for the predicted class label
    pub class_threshold: f32,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            model_path: env::var("MODEL_PATH")
                .unwrap_or_else(|_| "credit_default_model.onnx".to_string()),

            model_input_dim: env::var("MODEL_INPUT_DIM")
                .ok()
                .and_then(|d| d.parse().ok())
                .unwrap_or(4),

            class_threshold: env::var("CLASS_THRESHOLD")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(0.5),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
