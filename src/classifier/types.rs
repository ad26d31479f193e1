//! Classifier types and data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classification label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "SPAM")]
    Spam,
    #[serde(rename = "HAM")]
    Ham,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Spam => "SPAM",
            Label::Ham => "HAM",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Features extracted from a single message
///
/// Built fresh for every analysis call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    /// Message contains at least one URL
    pub has_urls: bool,
    /// Number of URLs found
    pub url_count: usize,
    /// Number of email addresses found
    pub email_addresses: usize,
    /// Message contains special characters
    pub has_special_chars: bool,
    /// Number of `!`/`?` punctuation runs
    pub punctuation_score: usize,
    /// Number of whitespace-delimited words
    pub word_count: usize,
    /// Character length of the raw text
    pub length_score: usize,
    /// Configured keywords found in the text
    pub spam_words: Vec<String>,
    /// Placeholder reputation score (0.3 with URLs, 0.8 without)
    pub domain_reputation: f64,
}

/// Result of classifying one message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Spam or ham
    pub label: Label,
    /// Confidence in the label, clamped to [0.51, 0.99]
    pub confidence: f64,
    /// Features the decision was based on
    pub features: FeatureSet,
    /// One human-readable line per triggered rule, in evaluation order
    pub explanation: Vec<String>,
    /// Identifier of the model that produced the label
    pub model_used: String,
}

/// A configured spam keyword
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpamKeyword {
    /// Unique ID
    pub id: String,
    /// Keyword matched case-insensitively as a substring
    pub keyword: String,
    /// Relative weight (informational, the scorer weighs all keywords equally)
    pub weight: f64,
    /// Category label (e.g. "urgency", "money")
    pub category: Option<String>,
}

/// Scoring weights and thresholds
///
/// The default values are the original demo tuning and have no documented
/// derivation beyond that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Added when the message contains any URL
    pub url_weight: f64,
    /// Added per matched spam keyword
    pub keyword_weight: f64,
    /// Added when the message has fewer than `short_message_words` words
    pub short_message_weight: f64,
    /// Added when punctuation runs exceed `punctuation_limit`
    pub punctuation_weight: f64,
    /// Added when the message contains a currency symbol
    pub money_weight: f64,
    /// Score above which the message is labeled spam
    pub spam_threshold: f64,
    /// Word count below which the short-message rule triggers
    pub short_message_words: usize,
    /// Punctuation-run count above which the punctuation rule triggers
    pub punctuation_limit: usize,
    /// Lower confidence clamp
    pub min_confidence: f64,
    /// Upper confidence clamp
    pub max_confidence: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            url_weight: 0.3,
            keyword_weight: 0.2,
            short_message_weight: 0.15,
            punctuation_weight: 0.1,
            money_weight: 0.2,
            spam_threshold: 0.4,
            short_message_words: 10,
            punctuation_limit: 2,
            min_confidence: 0.51,
            max_confidence: 0.99,
        }
    }
}

/// A persisted classification record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationRecord {
    /// Unique ID
    pub id: String,
    /// Raw message content
    pub content: String,
    /// Predicted label
    pub label: Label,
    /// Confidence score
    pub confidence: f64,
    /// Extracted features (JSON)
    pub features: String,
    /// Model that produced the prediction
    pub model_used: String,
    /// Timestamp
    pub created_at: DateTime<Utc>,
}
