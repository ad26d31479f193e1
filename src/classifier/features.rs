//! Feature extraction
//!
//! Derives a read-only [`FeatureSet`] snapshot from raw message text.
//! Extraction is deterministic and has no side effects.

use regex::Regex;

use super::types::{FeatureSet, SpamKeyword};

/// Reputation placeholder when the message links out
const URL_REPUTATION: f64 = 0.3;
/// Reputation placeholder for link-free messages
const NO_URL_REPUTATION: f64 = 0.8;

/// Extracts scoring features from message text
///
/// Regexes are compiled once at construction. The keyword list is supplied
/// by the host; an empty list simply yields zero keyword matches.
pub struct FeatureExtractor {
    /// (as configured, lowercase) keyword pairs
    keywords: Vec<(String, String)>,
    url_re: Regex,
    email_re: Regex,
    special_re: Regex,
    punctuation_re: Regex,
}

impl FeatureExtractor {
    /// Create an extractor for the given keyword list
    pub fn new(keywords: &[SpamKeyword]) -> Self {
        Self {
            keywords: keywords
                .iter()
                .filter(|k| !k.keyword.trim().is_empty())
                .map(|k| (k.keyword.clone(), k.keyword.to_lowercase()))
                .collect(),
            url_re: Regex::new(r"https?://\S+").expect("URL pattern is valid"),
            email_re: Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
                .expect("email pattern is valid"),
            special_re: Regex::new(r#"[!@#$%^&*()_+\-=\[\]{};':"\\|,.<>?]"#)
                .expect("special character pattern is valid"),
            punctuation_re: Regex::new(r"[!?]+").expect("punctuation pattern is valid"),
        }
    }

    /// Number of configured keywords
    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    /// Extract all features from the given text
    pub fn extract(&self, text: &str) -> FeatureSet {
        let url_count = self.url_re.find_iter(text).count();
        let email_addresses = self.email_re.find_iter(text).count();
        let punctuation_score = self.punctuation_re.find_iter(text).count();

        let lower = text.to_lowercase();
        let spam_words: Vec<String> = self
            .keywords
            .iter()
            .filter(|(_, lowered)| lower.contains(lowered.as_str()))
            .map(|(original, _)| original.clone())
            .collect();

        FeatureSet {
            has_urls: url_count > 0,
            url_count,
            email_addresses,
            has_special_chars: self.special_re.is_match(text),
            punctuation_score,
            word_count: text.split_whitespace().count(),
            length_score: text.chars().count(),
            spam_words,
            domain_reputation: if url_count > 0 {
                URL_REPUTATION
            } else {
                NO_URL_REPUTATION
            },
        }
    }
}
