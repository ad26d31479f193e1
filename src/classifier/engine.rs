//! Classification engine
//!
//! Dispatches a classification request to the heuristic scorer or the
//! hosted model according to an explicit strategy. When the external path
//! is selected but unavailable or failing, the engine falls back to the
//! heuristic scorer.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

use crate::error::{Result, SpamCheckError};
use crate::inference::InferenceEngine;

use super::scorer::HeuristicScorer;
use super::types::ClassificationResult;

/// Which classifier handles a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelStrategy {
    /// Rule-based scorer only
    Heuristic,
    /// Hosted model, falling back to the rule-based scorer on failure
    External,
}

/// Strategy-selecting classification engine
pub struct ClassifierEngine {
    scorer: HeuristicScorer,
    inference: Option<Arc<dyn InferenceEngine>>,
}

impl ClassifierEngine {
    /// Create an engine with only the heuristic path
    pub fn new(scorer: HeuristicScorer) -> Self {
        Self {
            scorer,
            inference: None,
        }
    }

    /// Attach a hosted inference engine
    pub fn with_inference(mut self, engine: Arc<dyn InferenceEngine>) -> Self {
        self.inference = Some(engine);
        self
    }

    /// Get the heuristic scorer
    pub fn scorer(&self) -> &HeuristicScorer {
        &self.scorer
    }

    /// Classify a message with the requested strategy
    ///
    /// Blank input is rejected before any strategy runs.
    pub async fn classify(
        &self,
        text: &str,
        strategy: ModelStrategy,
    ) -> Result<ClassificationResult> {
        if text.trim().is_empty() {
            return Err(SpamCheckError::EmptyInput);
        }

        match strategy {
            ModelStrategy::Heuristic => self.scorer.classify(text),
            ModelStrategy::External => self.classify_external(text).await,
        }
    }

    async fn classify_external(&self, text: &str) -> Result<ClassificationResult> {
        let Some(engine) = &self.inference else {
            warn!("No inference engine configured, using rule-based scorer");
            return self.scorer.classify(text);
        };

        match engine.classify(text).await {
            Ok(prediction) => Ok(ClassificationResult {
                label: prediction.label,
                confidence: prediction.score,
                // Features are still extracted locally for display/storage
                features: self.scorer.extract(text),
                explanation: vec![format!(
                    "Model prediction from {}",
                    engine.model_name()
                )],
                model_used: engine.model_name().to_string(),
            }),
            Err(e) => {
                warn!("Inference failed, falling back to rule-based scorer: {}", e);
                self.scorer.classify(text)
            }
        }
    }
}
