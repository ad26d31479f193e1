//! API Server - HTTP server for the REST API

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::classify::{self, AppState};
use crate::classifier::ClassifierEngine;
use crate::store::ClassificationStore;

/// API server
pub struct ApiServer {
    state: Arc<AppState>,
    addr: String,
}

impl ApiServer {
    /// Create a new API server
    pub fn new(
        engine: Arc<ClassifierEngine>,
        store: Arc<ClassificationStore>,
        addr: String,
    ) -> Self {
        let state = Arc::new(AppState { engine, store });

        Self { state, addr }
    }

    /// Build the router with all routes
    pub fn router(&self) -> Router {
        // CORS configuration (the demo front-end is served from elsewhere)
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let api_routes = Router::new()
            .route("/health", get(classify::health))
            .route("/classify", post(classify::classify))
            .route("/history", get(classify::history))
            .route("/stats", get(classify::stats))
            .route("/keywords", get(classify::list_keywords))
            .route("/keywords", post(classify::add_keyword))
            .route("/keywords/:id", delete(classify::delete_keyword));

        Router::new()
            .nest("/api", api_routes)
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(self.state.clone())
    }

    /// Start the API server
    pub async fn run(&self) -> std::io::Result<()> {
        let router = self.router();

        info!("Starting API server on {}", self.addr);

        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}
