//! End-to-end flow: in-memory corpus → context engine → packed context.

use std::sync::Arc;

use baler_core::{KnowledgeBase, MetadataFilter, Query};
use baler_engine::{
    ContextEngine, OverflowPolicy, QUERY_RESULTS_DEBUG_KEY, StuffingContextBuilder,
};
use baler_knowledge::{Document, InMemoryKnowledgeBase, NoopKnowledgeBase};
use baler_tokenizer::WhitespaceTokenCounter;

fn test_corpus() -> InMemoryKnowledgeBase {
    let mut kb = InMemoryKnowledgeBase::new();
    // 20 words
    kb.upsert(Document::new(
        "doc_ownership",
        "Every value in Rust has a single owner and the value is dropped when the owner goes out of scope",
        "ownership.md",
    ));
    // 11 words
    kb.upsert(Document::new(
        "doc_borrowing",
        "References let code borrow a value without taking ownership of it",
        "borrowing.md",
    ));
    // 11 words
    kb.upsert(Document::new(
        "doc_lifetimes",
        "Lifetimes describe how long a borrow of a value may live",
        "lifetimes.md",
    ));
    // 9 words
    kb.upsert(Document::new(
        "doc_async",
        "The tokio runtime schedules asynchronous tasks onto worker threads",
        "async.md",
    ));
    kb
}

fn test_engine(kb: Arc<dyn KnowledgeBase>) -> ContextEngine {
    ContextEngine::new(kb).with_context_builder(Box::new(
        StuffingContextBuilder::new().with_counter(Arc::new(WhitespaceTokenCounter::new())),
    ))
}

#[test]
fn packs_corpus_across_queries_within_budget() {
    let engine = test_engine(Arc::new(test_corpus()));
    let queries = [Query::new("value ownership"), Query::new("tokio tasks")];

    // 11-word doc fits, the 20-word one is skipped, the next 11-word one
    // fits, and the second query's 9-word doc no longer does.
    let context = engine.query(&queries, 25).unwrap();

    let ids: Vec<&str> = context.snippets.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["doc_borrowing", "doc_lifetimes"]);
    assert_eq!(context.num_tokens, 22);

    let text = context.to_text();
    assert!(text.contains("[Source: borrowing.md]"));
    assert!(text.contains("[Source: lifetimes.md]"));
}

#[test]
fn wider_budget_extends_the_same_selection() {
    let engine = test_engine(Arc::new(test_corpus()));
    let queries = [Query::new("value ownership"), Query::new("tokio tasks")];

    let narrow = engine.query(&queries, 25).unwrap();
    let wide = engine.query(&queries, 60).unwrap();

    assert_eq!(wide.snippets.len(), 4);
    assert_eq!(wide.num_tokens, 51);
    // Everything selected at 25 tokens is still selected at 60.
    for snippet in &narrow.snippets {
        assert!(wide.snippets.iter().any(|s| s.id == snippet.id));
    }
}

#[test]
fn debug_payload_mirrors_backend_results() {
    let kb = Arc::new(test_corpus());
    let engine = test_engine(kb.clone()).with_debug_info(true);
    let queries = [Query::new("value ownership")];

    let context = engine.query(&queries, 25).unwrap();

    let expected = kb.query(&queries, None).unwrap();
    assert_eq!(
        context.debug_info.get(QUERY_RESULTS_DEBUG_KEY),
        Some(&serde_json::to_value(&expected).unwrap())
    );
}

#[test]
fn global_filter_narrows_results_end_to_end() {
    let mut kb = InMemoryKnowledgeBase::new();
    kb.upsert(
        Document::new("doc_internal", "deploy steps for the platform", "internal.md")
            .with_metadata("audience", "internal"),
    );
    kb.upsert(
        Document::new("doc_public", "deploy steps for the platform", "public.md")
            .with_metadata("audience", "public"),
    );

    let engine = test_engine(Arc::new(kb))
        .with_global_metadata_filter(MetadataFilter::new().with("audience", "public"));

    let context = engine.query(&[Query::new("deploy platform")], 50).unwrap();
    assert_eq!(context.snippets.len(), 1);
    assert_eq!(context.snippets[0].id, "doc_public");
}

#[test]
fn truncate_policy_fills_the_last_tokens() {
    let builder = StuffingContextBuilder::new()
        .with_counter(Arc::new(WhitespaceTokenCounter::new()))
        .with_overflow_policy(OverflowPolicy::Truncate);
    let engine =
        ContextEngine::new(Arc::new(test_corpus())).with_context_builder(Box::new(builder));

    // Nothing fits whole in 5 tokens; the best match is prefix-truncated.
    let context = engine.query(&[Query::new("value ownership")], 5).unwrap();
    assert_eq!(context.snippets.len(), 1);
    assert_eq!(context.snippets[0].id, "doc_borrowing");
    assert_eq!(context.snippets[0].text, "References let code borrow a");
    assert_eq!(context.num_tokens, 5);
}

#[test]
fn noop_backend_yields_empty_context() {
    let engine = ContextEngine::new(Arc::new(NoopKnowledgeBase)).with_debug_info(true);

    let context = engine
        .query(&[Query::new("first"), Query::new("second")], 100)
        .unwrap();

    assert!(context.is_empty());
    assert_eq!(context.num_tokens, 0);
    // The payload still mirrors the (empty) match sets.
    let payload = context.debug_info.get(QUERY_RESULTS_DEBUG_KEY).unwrap();
    assert_eq!(payload.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn aquery_is_not_implemented_yet() {
    let engine = test_engine(Arc::new(test_corpus()));

    let err = engine
        .aquery(&[Query::new("value ownership")], 25)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        baler_core::Error::NotImplemented { operation: "aquery" }
    ));
}
