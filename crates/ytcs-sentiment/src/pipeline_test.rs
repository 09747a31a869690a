use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;
use ytcs_core::{RawComment, SentimentLabel, SourceError};
use ytcs_db::{CommentStore, StoreConfig};

use super::*;
use crate::classifier::LexicalClassifier;
use crate::error::SentimentError;

struct FakeSource {
    comments: Vec<RawComment>,
    calls: Arc<AtomicUsize>,
}

impl FakeSource {
    fn new(comments: Vec<RawComment>) -> Self {
        Self {
            comments,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl CommentSource for FakeSource {
    async fn fetch_comments(
        &self,
        _video_id: &str,
        max_results: u32,
    ) -> Result<Vec<RawComment>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .comments
            .iter()
            .take(max_results as usize)
            .cloned()
            .collect())
    }
}

struct DownSource;

impl CommentSource for DownSource {
    async fn fetch_comments(&self, _: &str, _: u32) -> Result<Vec<RawComment>, SourceError> {
        Err(SourceError::Unreachable("connection refused".to_string()))
    }
}

/// Finishes later for earlier inputs so completion order is reversed.
struct SlowFirstClassifier;

impl SentimentClassifier for SlowFirstClassifier {
    async fn classify(&self, text: &str) -> Result<SentimentLabel, SentimentError> {
        let n: u64 = text.parse().unwrap_or(0);
        tokio::time::sleep(Duration::from_millis(50u64.saturating_sub(n * 5))).await;
        Ok(if n % 2 == 0 {
            SentimentLabel::Positive
        } else {
            SentimentLabel::Negative
        })
    }
}

/// Fails on any text containing "boom".
struct FailingClassifier;

impl SentimentClassifier for FailingClassifier {
    async fn classify(&self, text: &str) -> Result<SentimentLabel, SentimentError> {
        if text.contains("boom") {
            Err(SentimentError::Tei("model crashed".to_string()))
        } else {
            Ok(SentimentLabel::Neutral)
        }
    }
}

async fn temp_store() -> (TempDir, CommentStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = CommentStore::open(&dir.path().join("comments.db"), StoreConfig::default())
        .await
        .expect("open store");
    (dir, store)
}

fn fixture_comments() -> Vec<RawComment> {
    vec![
        RawComment::new("alice", "This video is amazing, I loved it!"),
        RawComment::new("bob", "This was terrible and a waste of time."),
        RawComment::new("carol", "It exists."),
    ]
}

#[tokio::test]
async fn run_classifies_and_stores_fixture_comments() {
    let (_dir, store) = temp_store().await;
    let pipeline = ClassificationPipeline::new(
        FakeSource::new(fixture_comments()),
        LexicalClassifier,
        store,
    );

    let result = pipeline.run("vid", 3).await.expect("run");
    let labels: Vec<_> = result.iter().map(|c| (c.author.as_str(), c.sentiment)).collect();
    assert_eq!(
        labels,
        [
            ("alice", SentimentLabel::Positive),
            ("bob", SentimentLabel::Negative),
            ("carol", SentimentLabel::Neutral),
        ]
    );

    let stored = pipeline.read_all().await.expect("read_all");
    assert_eq!(stored, result);
}

#[tokio::test]
async fn run_preserves_source_order_under_concurrency() {
    let (_dir, store) = temp_store().await;
    let comments: Vec<_> = (0..10)
        .map(|i| RawComment::new(format!("user{i}"), i.to_string()))
        .collect();
    let pipeline =
        ClassificationPipeline::new(FakeSource::new(comments), SlowFirstClassifier, store)
            .with_concurrency(8);

    let result = pipeline.run("vid", 10).await.expect("run");
    let authors: Vec<_> = result.iter().map(|c| c.author.clone()).collect();
    let expected: Vec<_> = (0..10).map(|i| format!("user{i}")).collect();
    assert_eq!(authors, expected);
    assert_eq!(result[0].sentiment, SentimentLabel::Positive);
    assert_eq!(result[1].sentiment, SentimentLabel::Negative);

    let stored = pipeline.read_all().await.expect("read_all");
    assert_eq!(stored, result);
}

#[tokio::test]
async fn zero_max_results_skips_source_and_store() {
    let (_dir, store) = temp_store().await;
    let source = FakeSource::new(fixture_comments());
    let calls = Arc::clone(&source.calls);
    let pipeline = ClassificationPipeline::new(source, LexicalClassifier, store);

    let result = pipeline.run("vid", 0).await.expect("run");
    assert!(result.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(pipeline.store().count().await.expect("count"), 0);
}

#[tokio::test]
async fn empty_source_batch_writes_nothing() {
    let (_dir, store) = temp_store().await;
    let pipeline = ClassificationPipeline::new(FakeSource::new(vec![]), LexicalClassifier, store);

    let result = pipeline.run("quiet", 20).await.expect("run");
    assert!(result.is_empty());
    assert!(pipeline.read_all().await.expect("read_all").is_empty());
}

#[tokio::test]
async fn max_results_caps_the_batch() {
    let (_dir, store) = temp_store().await;
    let pipeline = ClassificationPipeline::new(
        FakeSource::new(fixture_comments()),
        LexicalClassifier,
        store,
    );

    let result = pipeline.run("vid", 2).await.expect("run");
    assert_eq!(result.len(), 2);
    assert_eq!(pipeline.store().count().await.expect("count"), 2);
}

#[tokio::test]
async fn source_failure_is_source_unavailable() {
    let (_dir, store) = temp_store().await;
    let pipeline = ClassificationPipeline::new(DownSource, LexicalClassifier, store);

    let err = pipeline.run("vid", 5).await.unwrap_err();
    assert!(matches!(err, PipelineError::SourceUnavailable(_)), "{err:?}");
    assert_eq!(err.code(), "source_unavailable");
    assert_eq!(pipeline.store().count().await.expect("count"), 0);
}

#[tokio::test]
async fn classification_failure_persists_nothing() {
    let (_dir, store) = temp_store().await;
    let comments = vec![
        RawComment::new("alice", "fine"),
        RawComment::new("bob", "boom"),
        RawComment::new("carol", "fine"),
    ];
    let pipeline = ClassificationPipeline::new(FakeSource::new(comments), FailingClassifier, store);

    let err = pipeline.run("vid", 3).await.unwrap_err();
    match &err {
        PipelineError::ClassificationFailure { index, author, .. } => {
            assert_eq!(*index, 1);
            assert_eq!(author, "bob");
        }
        other => panic!("expected ClassificationFailure, got {other:?}"),
    }
    assert_eq!(err.code(), "classification_failure");
    assert_eq!(pipeline.store().count().await.expect("count"), 0);
}

#[tokio::test]
async fn closed_store_is_storage_failure() {
    let (_dir, store) = temp_store().await;
    store.close().await;
    let pipeline = ClassificationPipeline::new(
        FakeSource::new(fixture_comments()),
        LexicalClassifier,
        store,
    );

    let err = pipeline.run("vid", 3).await.unwrap_err();
    assert!(matches!(err, PipelineError::StorageFailure(_)), "{err:?}");
    assert_eq!(err.code(), "storage_failure");
}

#[tokio::test]
async fn runs_accumulate_in_the_store() {
    let (_dir, store) = temp_store().await;
    let pipeline = ClassificationPipeline::new(
        FakeSource::new(fixture_comments()),
        LexicalClassifier,
        store,
    );

    pipeline.run("vid", 3).await.expect("first run");
    pipeline.run("vid", 3).await.expect("second run");

    let stored = pipeline.read_all().await.expect("read_all");
    assert_eq!(stored.len(), 6);
    assert_eq!(stored[3].author, "alice");
}
