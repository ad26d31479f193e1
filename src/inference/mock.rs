//! Mock inference engine for testing

use anyhow::{anyhow, Result};

use super::{InferenceEngine, InferencePrediction};
use crate::classifier::Label;

/// Mock inference implementation for testing
///
/// Returns a fixed prediction, or fails every call when constructed with
/// [`MockInference::failing`].
pub struct MockInference {
    model_name: String,
    prediction: Option<InferencePrediction>,
}

impl MockInference {
    /// Mock that always returns the given prediction
    pub fn new(label: Label, score: f64) -> Self {
        Self {
            model_name: "mock-classifier-v1".to_string(),
            prediction: Some(InferencePrediction { label, score }),
        }
    }

    /// Mock that fails every call, for exercising fallback paths
    pub fn failing() -> Self {
        Self {
            model_name: "mock-classifier-v1".to_string(),
            prediction: None,
        }
    }
}

#[async_trait::async_trait]
impl InferenceEngine for MockInference {
    async fn classify(&self, _text: &str) -> Result<InferencePrediction> {
        self.prediction
            .clone()
            .ok_or_else(|| anyhow!("mock inference configured to fail"))
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
