//! spamcheck-rs: Heuristic email spam classification service
//!
//! Backend for an email spam-classification demo: a rule-based scorer maps
//! raw message text to a SPAM/HAM label with a confidence score and a
//! human-readable explanation, optionally delegating to a hosted
//! text-classification model, and persists every result.
//!
//! # Features
//!
//! - **Heuristic scorer**: deterministic, additive rule-based scoring
//! - **Strategy selection**: explicit heuristic/external choice with a
//!   defined fallback from the hosted model to the scorer
//! - **Keyword list**: injected at construction, managed via the API
//! - **Persistence**: every classification recorded to SQLite
//!
//! # Example
//!
//! ```
//! use spamcheck_rs::classifier::{HeuristicScorer, ScoringWeights};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let scorer = HeuristicScorer::new(ScoringWeights::default(), &[]);
//!     let result = scorer.classify("Claim your prize at http://spam.example now!")?;
//!     println!("{} ({:.0}%)", result.label, result.confidence * 100.0);
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`classifier`]: feature extraction, scoring, strategy engine
//! - [`inference`]: hosted model abstraction and HTTP client
//! - [`store`]: SQLite persistence
//! - [`api`]: REST endpoints
//! - [`config`]: configuration management
//! - [`error`]: error types and handling

pub mod api;
pub mod classifier;
pub mod config;
pub mod error;
pub mod inference;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SpamCheckError};
