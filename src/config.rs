use crate::classifier::ScoringWeights;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub classifier: ClassifierConfig,
    pub inference: InferenceConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub listen_addr: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassifierConfig {
    /// Scoring weights and thresholds (demo tuning, overridable per deployment)
    #[serde(default)]
    pub weights: ScoringWeights,
    /// Seed the keyword table with the default demo list when empty
    pub seed_keywords: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InferenceConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub model_name: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::SpamCheckError::Config(e.to_string()))?;

        toml::from_str(&content)
            .map_err(|e| crate::error::SpamCheckError::Config(e.to_string()))
    }

    pub fn default() -> Self {
        Self {
            server: ServerConfig {
                listen_addr: "0.0.0.0:8080".to_string(),
            },
            classifier: ClassifierConfig {
                weights: ScoringWeights::default(),
                seed_keywords: true,
            },
            inference: InferenceConfig {
                enabled: false,
                endpoint: "http://localhost:8501/v1/classify".to_string(),
                model_name: "distilbert".to_string(),
                timeout_secs: 10,
            },
            storage: StorageConfig {
                database_url: "sqlite://spamcheck.db?mode=rwc".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        }
    }
}
