use spamcheck_rs::classifier::{
    ClassifierEngine, HeuristicScorer, Label, ModelStrategy, ScoringWeights,
};
use spamcheck_rs::inference::MockInference;
use spamcheck_rs::store::ClassificationStore;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;

async fn memory_store() -> ClassificationStore {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite should connect");

    let store = ClassificationStore::new(pool);
    store.init_db().await.expect("init_db should succeed");
    store
}

/// Full flow: seed keywords, build the engine from them, classify, persist
#[tokio::test]
async fn test_end_to_end_heuristic_flow() {
    let store = memory_store().await;
    store.seed_keywords().await.unwrap();

    let keywords = store.list_keywords().await.unwrap();
    assert!(!keywords.is_empty());

    let scorer = HeuristicScorer::new(ScoringWeights::default(), &keywords);
    let engine = ClassifierEngine::new(scorer);

    let content = "URGENT winner! Claim your free lottery prize at http://scam.example";
    let result = engine
        .classify(content, ModelStrategy::Heuristic)
        .await
        .unwrap();

    assert_eq!(result.label, Label::Spam);
    assert!(result.confidence > 0.9);
    assert!(result.features.spam_words.iter().any(|w| w == "urgent"));
    assert!(result.features.spam_words.iter().any(|w| w == "winner"));

    store.save_result(content, &result).await.unwrap();
    let stats = store.stats().await.unwrap();
    assert_eq!(stats.messages_scanned, 1);
    assert_eq!(stats.spam_detected, 1);
}

/// The external strategy carries the model's verdict but local features
#[tokio::test]
async fn test_external_result_keeps_local_features() {
    let scorer = HeuristicScorer::default();
    let engine = ClassifierEngine::new(scorer)
        .with_inference(Arc::new(MockInference::new(Label::Spam, 0.88)));

    let content = "totally ordinary note about lunch plans at http://cafe.example";
    let result = engine
        .classify(content, ModelStrategy::External)
        .await
        .unwrap();

    assert_eq!(result.label, Label::Spam);
    assert_eq!(result.model_used, "mock-classifier-v1");
    assert!(result.features.has_urls);
    assert_eq!(result.features.url_count, 1);
}

/// A failing external model must yield exactly the heuristic verdict
#[tokio::test]
async fn test_fallback_matches_heuristic_exactly() {
    let content = "free cash waiting for you, act now!!! http://grab.example $500";

    let reference = HeuristicScorer::default().classify(content).unwrap();

    let engine = ClassifierEngine::new(HeuristicScorer::default())
        .with_inference(Arc::new(MockInference::failing()));
    let fallback = engine
        .classify(content, ModelStrategy::External)
        .await
        .unwrap();

    assert_eq!(fallback.label, reference.label);
    assert_eq!(fallback.confidence, reference.confidence);
    assert_eq!(fallback.explanation, reference.explanation);
    assert_eq!(fallback.model_used, reference.model_used);
}
