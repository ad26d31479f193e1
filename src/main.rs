use spamcheck_rs::api::ApiServer;
use spamcheck_rs::classifier::{ClassifierEngine, HeuristicScorer};
use spamcheck_rs::config::Config;
use spamcheck_rs::inference::HttpInference;
use spamcheck_rs::store::ClassificationStore;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = if std::path::Path::new("config.toml").exists() {
        Config::from_file("config.toml")?
    } else {
        Config::default()
    };

    // Initialize logging; RUST_LOG overrides the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    if config.logging.format == "pretty" {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .pretty()
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let subscriber = tracing_subscriber::fmt().with_env_filter(filter).finish();
        tracing::subscriber::set_global_default(subscriber)
    }
    .expect("Failed to set tracing subscriber");

    info!("Starting spamcheck-rs");
    info!("  API listening on: {}", config.server.listen_addr);
    info!("  Database: {}", config.storage.database_url);
    info!("  Hosted inference: {}", config.inference.enabled);

    // Initialize storage
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.storage.database_url)
        .await?;

    let store = Arc::new(ClassificationStore::new(pool));
    store.init_db().await?;

    if config.classifier.seed_keywords {
        let seeded = store.seed_keywords().await?;
        if seeded > 0 {
            info!("Seeded {} default spam keywords", seeded);
        }
    }

    // Build the classification engine from the stored keyword list
    let keywords = store.list_keywords().await?;
    info!("Loaded {} spam keywords", keywords.len());

    let scorer = HeuristicScorer::new(config.classifier.weights.clone(), &keywords);
    let mut engine = ClassifierEngine::new(scorer);

    if config.inference.enabled {
        match HttpInference::new(
            config.inference.model_name.clone(),
            config.inference.endpoint.clone(),
            Duration::from_secs(config.inference.timeout_secs),
        ) {
            Ok(inference) => {
                info!("Hosted model enabled: {}", config.inference.model_name);
                engine = engine.with_inference(Arc::new(inference));
            }
            Err(e) => {
                warn!("Failed to build inference client, heuristic only: {}", e);
            }
        }
    }

    // Serve the API
    let server = ApiServer::new(
        Arc::new(engine),
        store,
        config.server.listen_addr.clone(),
    );
    server.run().await?;

    Ok(())
}
