//! Spam classification module
//!
//! Rule-based feature extraction and scoring, plus the strategy layer that
//! selects between the heuristic scorer and a hosted model.

pub mod engine;
pub mod features;
pub mod scorer;
pub mod types;

pub use engine::{ClassifierEngine, ModelStrategy};
pub use features::FeatureExtractor;
pub use scorer::{HeuristicScorer, MODEL_RULE_BASED};
pub use types::*;
