//! Heuristic spam scorer
//!
//! Additive rule-based scoring over extracted features. The scorer is a
//! pure function of the input text, the keyword list, and the configured
//! weights: same inputs always produce the same result, and calls share no
//! mutable state.

use crate::error::{Result, SpamCheckError};

use super::features::FeatureExtractor;
use super::types::{ClassificationResult, FeatureSet, Label, ScoringWeights, SpamKeyword};

/// Model identifier reported by the heuristic path
pub const MODEL_RULE_BASED: &str = "rule-based";

const CURRENCY_SYMBOLS: [char; 3] = ['$', '£', '€'];

/// Rule-based spam scorer
pub struct HeuristicScorer {
    weights: ScoringWeights,
    extractor: FeatureExtractor,
}

impl HeuristicScorer {
    /// Create a scorer with the given weights and keyword list
    pub fn new(weights: ScoringWeights, keywords: &[SpamKeyword]) -> Self {
        Self {
            weights,
            extractor: FeatureExtractor::new(keywords),
        }
    }

    /// Get the configured weights
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Extract features without scoring
    pub fn extract(&self, text: &str) -> FeatureSet {
        self.extractor.extract(text)
    }

    /// Classify a message
    ///
    /// Blank or whitespace-only input is rejected with
    /// [`SpamCheckError::EmptyInput`]; every other string is scored.
    pub fn classify(&self, text: &str) -> Result<ClassificationResult> {
        if text.trim().is_empty() {
            return Err(SpamCheckError::EmptyInput);
        }

        let features = self.extractor.extract(text);
        let (score, explanation) = self.score(text, &features);

        let is_spam = score > self.weights.spam_threshold;
        let raw_confidence = if is_spam { 0.5 + score } else { 1.0 - score };
        let confidence =
            raw_confidence.clamp(self.weights.min_confidence, self.weights.max_confidence);

        Ok(ClassificationResult {
            label: if is_spam { Label::Spam } else { Label::Ham },
            confidence,
            features,
            explanation,
            model_used: MODEL_RULE_BASED.to_string(),
        })
    }

    /// Apply the scoring rules in their fixed evaluation order
    ///
    /// Explanation lines are appended in the same order rules are checked;
    /// callers may rely on that ordering.
    fn score(&self, text: &str, features: &FeatureSet) -> (f64, Vec<String>) {
        let mut score = 0.0;
        let mut explanation = Vec::new();

        if features.has_urls {
            score += self.weights.url_weight;
            explanation.push(format!(
                "Contains {} URL(s) (+{}%)",
                features.url_count,
                percent(self.weights.url_weight)
            ));
        }

        if !features.spam_words.is_empty() {
            let keyword_score = self.weights.keyword_weight * features.spam_words.len() as f64;
            score += keyword_score;
            explanation.push(format!(
                "Contains spam keywords: {} (+{}%)",
                features.spam_words.join(", "),
                percent(keyword_score)
            ));
        }

        if features.word_count < self.weights.short_message_words {
            score += self.weights.short_message_weight;
            explanation.push(format!(
                "Very short message (+{}%)",
                percent(self.weights.short_message_weight)
            ));
        }

        if features.punctuation_score > self.weights.punctuation_limit {
            score += self.weights.punctuation_weight;
            explanation.push(format!(
                "Excessive punctuation (+{}%)",
                percent(self.weights.punctuation_weight)
            ));
        }

        if text.chars().any(|c| CURRENCY_SYMBOLS.contains(&c)) {
            score += self.weights.money_weight;
            explanation.push(format!(
                "Contains money symbols (+{}%)",
                percent(self.weights.money_weight)
            ));
        }

        (score, explanation)
    }
}

impl Default for HeuristicScorer {
    fn default() -> Self {
        Self::new(ScoringWeights::default(), &[])
    }
}

fn percent(weight: f64) -> i64 {
    (weight * 100.0).round() as i64
}
