//! Hosted inference abstraction
//!
//! The external text-classification model is a collaborator, not part of
//! the scoring core: its availability never changes what the heuristic
//! scorer returns for a given input.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::classifier::Label;

pub mod http;
pub mod mock;

pub use http::HttpInference;
pub use mock::MockInference;

/// Prediction returned by a hosted model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferencePrediction {
    /// Predicted label
    pub label: Label,
    /// Model score in [0, 1]
    pub score: f64,
}

/// Hosted text-classification engine
#[async_trait::async_trait]
pub trait InferenceEngine: Send + Sync {
    /// Classify a message
    async fn classify(&self, text: &str) -> Result<InferencePrediction>;

    /// Get model name
    fn model_name(&self) -> &str;
}
