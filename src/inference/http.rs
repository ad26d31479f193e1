//! HTTP inference client
//!
//! Talks to a hosted text-classification endpoint over its JSON API. The
//! endpoint receives `{"inputs": "<text>"}` and answers with a list of
//! label/score predictions, either flat or nested one level as common
//! pipeline deployments do.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::{InferenceEngine, InferencePrediction};
use crate::classifier::Label;

/// Hosted model client
pub struct HttpInference {
    model_name: String,
    endpoint: String,
    client: reqwest::Client,
}

/// Classification request body
#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

/// One raw prediction from the endpoint
#[derive(Debug, Deserialize)]
struct RawPrediction {
    label: String,
    score: f64,
}

impl HttpInference {
    /// Create a client for the given endpoint
    pub fn new(model_name: String, endpoint: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            model_name,
            endpoint,
            client,
        })
    }
}

#[async_trait::async_trait]
impl InferenceEngine for HttpInference {
    async fn classify(&self, text: &str) -> Result<InferencePrediction> {
        debug!("Sending classification request to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&InferenceRequest { inputs: text })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "inference endpoint returned {}",
                response.status()
            ));
        }

        let body: serde_json::Value = response.json().await?;
        parse_prediction(&body)
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

/// Parse the top-ranked prediction out of the endpoint response
fn parse_prediction(body: &serde_json::Value) -> Result<InferencePrediction> {
    // Unwrap one level of nesting if the endpoint batches: [[{..}]] -> [{..}]
    let predictions = match body.as_array() {
        Some(outer) if outer.first().map(|v| v.is_array()).unwrap_or(false) => outer[0].clone(),
        Some(_) => body.clone(),
        None => return Err(anyhow!("unexpected inference response shape")),
    };

    let raw: Vec<RawPrediction> = serde_json::from_value(predictions)?;
    let top = raw
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("inference endpoint returned no predictions"))?;

    let label = if top.label.eq_ignore_ascii_case("spam") || top.label == "LABEL_1" {
        Label::Spam
    } else {
        Label::Ham
    };

    Ok(InferencePrediction {
        label,
        score: top.score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_flat_response() {
        let body = json!([{"label": "SPAM", "score": 0.97}]);
        let prediction = parse_prediction(&body).unwrap();
        assert_eq!(prediction.label, Label::Spam);
        assert!((prediction.score - 0.97).abs() < 1e-9);
    }

    #[test]
    fn test_parse_nested_response() {
        let body = json!([[{"label": "ham", "score": 0.8}, {"label": "spam", "score": 0.2}]]);
        let prediction = parse_prediction(&body).unwrap();
        assert_eq!(prediction.label, Label::Ham);
    }

    #[test]
    fn test_parse_label_1_is_spam() {
        let body = json!([{"label": "LABEL_1", "score": 0.6}]);
        let prediction = parse_prediction(&body).unwrap();
        assert_eq!(prediction.label, Label::Spam);
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let body = json!({"error": "model loading"});
        assert!(parse_prediction(&body).is_err());
    }

    #[test]
    fn test_parse_rejects_empty() {
        let body = json!([]);
        assert!(parse_prediction(&body).is_err());
    }
}
