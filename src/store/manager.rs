//! Classification store
//!
//! Persists classification results and the configurable keyword list to
//! SQLite. Store failures are the caller's concern and never change the
//! classification itself.

use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::classifier::{ClassificationRecord, ClassificationResult, Label, SpamKeyword};

/// Store-level statistics
#[derive(Debug, Clone, serde::Serialize)]
pub struct StoreStats {
    /// Total messages classified
    pub messages_scanned: u64,
    /// Messages labeled spam
    pub spam_detected: u64,
    /// Messages labeled ham
    pub ham_detected: u64,
    /// Configured keywords
    pub keyword_count: usize,
}

/// SQLite-backed classification store
pub struct ClassificationStore {
    db: SqlitePool,
}

impl ClassificationStore {
    /// Create a new store
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Initialize database tables
    pub async fn init_db(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS emails (
                id TEXT PRIMARY KEY,
                content TEXT NOT NULL,
                prediction_label TEXT NOT NULL,
                confidence_score REAL NOT NULL,
                features TEXT,
                model_used TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.db)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS spam_keywords (
                id TEXT PRIMARY KEY,
                keyword TEXT NOT NULL UNIQUE,
                weight REAL NOT NULL DEFAULT 1.0,
                category TEXT
            )
            "#,
        )
        .execute(&self.db)
        .await?;

        Ok(())
    }

    /// Persist one classification result
    pub async fn save_result(
        &self,
        content: &str,
        result: &ClassificationResult,
    ) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        let features_json = serde_json::to_string(&result.features)?;

        sqlx::query(
            "INSERT INTO emails (id, content, prediction_label, confidence_score, features, model_used, created_at) VALUES (?, ?, ?, ?, ?, ?, ?)"
        )
        .bind(&id)
        .bind(content)
        .bind(result.label.as_str())
        .bind(result.confidence)
        .bind(&features_json)
        .bind(&result.model_used)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.db)
        .await?;

        Ok(id)
    }

    /// Most recent classification records
    pub async fn recent(&self, limit: i64) -> Result<Vec<ClassificationRecord>> {
        let rows = sqlx::query_as::<_, (String, String, String, f64, String, String, String)>(
            "SELECT id, content, prediction_label, confidence_score, features, model_used, created_at FROM emails ORDER BY created_at DESC LIMIT ?"
        )
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        let records = rows
            .into_iter()
            .map(
                |(id, content, label, confidence, features, model_used, created_at)| {
                    ClassificationRecord {
                        id,
                        content,
                        label: match label.as_str() {
                            "SPAM" => Label::Spam,
                            _ => Label::Ham,
                        },
                        confidence,
                        features,
                        model_used,
                        created_at: chrono::DateTime::parse_from_rfc3339(&created_at)
                            .map(|d| d.with_timezone(&Utc))
                            .unwrap_or_else(|_| Utc::now()),
                    }
                },
            )
            .collect();

        Ok(records)
    }

    /// Get store statistics
    pub async fn stats(&self) -> Result<StoreStats> {
        let (messages_scanned,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM emails")
            .fetch_one(&self.db)
            .await?;

        let (spam_detected,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM emails WHERE prediction_label = 'SPAM'")
                .fetch_one(&self.db)
                .await?;

        let (keyword_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM spam_keywords")
            .fetch_one(&self.db)
            .await?;

        Ok(StoreStats {
            messages_scanned: messages_scanned as u64,
            spam_detected: spam_detected as u64,
            ham_detected: (messages_scanned - spam_detected) as u64,
            keyword_count: keyword_count as usize,
        })
    }

    /// List all configured keywords
    pub async fn list_keywords(&self) -> Result<Vec<SpamKeyword>> {
        let rows = sqlx::query_as::<_, (String, String, f64, Option<String>)>(
            "SELECT id, keyword, weight, category FROM spam_keywords ORDER BY keyword",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, keyword, weight, category)| SpamKeyword {
                id,
                keyword,
                weight,
                category,
            })
            .collect())
    }

    /// Add a keyword
    pub async fn add_keyword(
        &self,
        keyword: &str,
        weight: f64,
        category: Option<&str>,
    ) -> Result<SpamKeyword> {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            "INSERT INTO spam_keywords (id, keyword, weight, category) VALUES (?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(keyword)
        .bind(weight)
        .bind(category)
        .execute(&self.db)
        .await?;

        Ok(SpamKeyword {
            id,
            keyword: keyword.to_string(),
            weight,
            category: category.map(|c| c.to_string()),
        })
    }

    /// Delete a keyword
    pub async fn delete_keyword(&self, id: &str) -> Result<()> {
        sqlx::query("DELETE FROM spam_keywords WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(())
    }

    /// Seed the keyword table with the default demo list when empty
    pub async fn seed_keywords(&self) -> Result<usize> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM spam_keywords")
            .fetch_one(&self.db)
            .await?;

        if count > 0 {
            return Ok(0);
        }

        let defaults: &[(&str, f64, &str)] = &[
            ("free", 1.0, "offer"),
            ("winner", 2.0, "prize"),
            ("urgent", 1.0, "urgency"),
            ("lottery", 3.0, "prize"),
            ("click here", 1.0, "offer"),
            ("act now", 1.5, "urgency"),
            ("limited time", 1.0, "urgency"),
            ("million dollar", 3.0, "money"),
            ("bank transfer", 2.0, "money"),
            ("congratulations", 1.0, "prize"),
            ("viagra", 5.0, "pharma"),
            ("unsubscribe", 0.5, "offer"),
        ];

        for (keyword, weight, category) in defaults {
            self.add_keyword(keyword, *weight, Some(category)).await?;
        }

        Ok(defaults.len())
    }
}
