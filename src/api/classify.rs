//! Classification API endpoints
//!
//! REST handlers for the analyze widget: classify a message, browse
//! history and stats, manage the keyword list.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

use crate::classifier::{
    ClassificationRecord, ClassificationResult, ClassifierEngine, ModelStrategy, SpamKeyword,
};
use crate::error::SpamCheckError;
use crate::store::{ClassificationStore, StoreStats};

/// Shared API state
pub struct AppState {
    pub engine: Arc<ClassifierEngine>,
    pub store: Arc<ClassificationStore>,
}

/// API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(msg: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.to_string()),
        }
    }
}

/// Classify request
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub content: String,
    /// Route through the hosted model instead of the rule-based scorer
    #[serde(default)]
    pub use_model: bool,
}

/// History query parameters
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<i64>,
}

/// Keyword creation request
#[derive(Debug, Deserialize)]
pub struct KeywordRequest {
    pub keyword: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
    pub category: Option<String>,
}

fn default_weight() -> f64 {
    1.0
}

// === API Handlers ===

/// Health check
pub async fn health() -> Json<ApiResponse<&'static str>> {
    Json(ApiResponse::success("ok"))
}

/// Classify a message and persist the result
///
/// Blank content is a client error and answers 400; other classification
/// failures answer 500. The body carries the [`ApiResponse`] wrapper in
/// every case.
pub async fn classify(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ClassifyRequest>,
) -> (StatusCode, Json<ApiResponse<ClassificationResult>>) {
    let strategy = if req.use_model {
        ModelStrategy::External
    } else {
        ModelStrategy::Heuristic
    };

    match state.engine.classify(&req.content, strategy).await {
        Ok(result) => {
            // Persistence is best-effort; the result is returned either way
            if let Err(e) = state.store.save_result(&req.content, &result).await {
                warn!("Failed to persist classification: {}", e);
            }
            (StatusCode::OK, Json(ApiResponse::success(result)))
        }
        Err(SpamCheckError::EmptyInput) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("Please enter email content to analyze")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(&format!("Classification failed: {}", e))),
        ),
    }
}

/// Recent classification history
pub async fn history(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<ApiResponse<Vec<ClassificationRecord>>>, StatusCode> {
    let limit = query.limit.unwrap_or(50).clamp(1, 500);

    match state.store.recent(limit).await {
        Ok(records) => Ok(Json(ApiResponse::success(records))),
        Err(e) => Ok(Json(ApiResponse::error(&format!(
            "Failed to load history: {}",
            e
        )))),
    }
}

/// Store statistics
pub async fn stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<StoreStats>>, StatusCode> {
    match state.store.stats().await {
        Ok(stats) => Ok(Json(ApiResponse::success(stats))),
        Err(e) => Ok(Json(ApiResponse::error(&format!(
            "Failed to load stats: {}",
            e
        )))),
    }
}

/// List configured keywords
pub async fn list_keywords(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<SpamKeyword>>>, StatusCode> {
    match state.store.list_keywords().await {
        Ok(keywords) => Ok(Json(ApiResponse::success(keywords))),
        Err(e) => Ok(Json(ApiResponse::error(&format!(
            "Failed to list keywords: {}",
            e
        )))),
    }
}

/// Add a keyword
///
/// Takes effect for scoring after the next engine reload; the running
/// scorer keeps the keyword list it was built with.
pub async fn add_keyword(
    State(state): State<Arc<AppState>>,
    Json(req): Json<KeywordRequest>,
) -> Result<Json<ApiResponse<SpamKeyword>>, StatusCode> {
    if req.keyword.trim().is_empty() {
        return Ok(Json(ApiResponse::error("Keyword must not be blank")));
    }

    match state
        .store
        .add_keyword(req.keyword.trim(), req.weight, req.category.as_deref())
        .await
    {
        Ok(keyword) => Ok(Json(ApiResponse::success(keyword))),
        Err(e) => Ok(Json(ApiResponse::error(&format!(
            "Failed to add keyword: {}",
            e
        )))),
    }
}

/// Delete a keyword
pub async fn delete_keyword(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, StatusCode> {
    match state.store.delete_keyword(&id).await {
        Ok(()) => Ok(Json(ApiResponse::success(()))),
        Err(e) => Ok(Json(ApiResponse::error(&format!(
            "Failed to delete keyword: {}",
            e
        )))),
    }
}
