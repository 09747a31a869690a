//! Fetch, classify and persist one video's comments.

use futures::stream::{self, StreamExt, TryStreamExt};
use ytcs_core::{ClassifiedComment, CommentSource, RawComment};
use ytcs_db::CommentStore;

use crate::classifier::SentimentClassifier;
use crate::error::PipelineError;

const DEFAULT_CONCURRENCY: usize = 4;

/// Wires a comment source, a classifier and the store together.
///
/// A run classifies the whole batch before writing anything, then appends it
/// in one transaction. A failed run therefore leaves the store untouched.
pub struct ClassificationPipeline<S, C> {
    source: S,
    classifier: C,
    store: CommentStore,
    concurrency: usize,
}

impl<S, C> ClassificationPipeline<S, C>
where
    S: CommentSource,
    C: SentimentClassifier,
{
    #[must_use]
    pub fn new(source: S, classifier: C, store: CommentStore) -> Self {
        Self {
            source,
            classifier,
            store,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Maximum number of classifications in flight at once. Zero is treated
    /// as one.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    #[must_use]
    pub fn store(&self) -> &CommentStore {
        &self.store
    }

    #[must_use]
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Fetch up to `max_results` comments for `video_id`, label each one and
    /// append them to the store in source order.
    ///
    /// Returns the classified batch in the order the source produced it.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::SourceUnavailable`] if the source fails.
    /// - [`PipelineError::ClassificationFailure`] for the first comment the
    ///   classifier cannot label.
    /// - [`PipelineError::StorageFailure`] if the batch cannot be written.
    pub async fn run(
        &self,
        video_id: &str,
        max_results: u32,
    ) -> Result<Vec<ClassifiedComment>, PipelineError> {
        if max_results == 0 {
            return Ok(Vec::new());
        }

        let raw = self
            .source
            .fetch_comments(video_id, max_results)
            .await
            .inspect_err(|e| tracing::warn!(video_id, error = %e, "comment source failed"))?;
        if raw.is_empty() {
            tracing::info!(video_id, "source returned no comments");
            return Ok(Vec::new());
        }

        let classified = self.classify_batch(raw).await?;
        self.store
            .append_batch(&classified)
            .await
            .inspect_err(|e| tracing::error!(video_id, error = %e, "failed to store comments"))?;

        tracing::info!(
            video_id,
            count = classified.len(),
            "classified and stored comments"
        );
        Ok(classified)
    }

    /// Every stored comment in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::StorageFailure`] if the store cannot be read.
    pub async fn read_all(&self) -> Result<Vec<ClassifiedComment>, PipelineError> {
        Ok(self.store.read_all().await?)
    }

    async fn classify_batch(
        &self,
        raw: Vec<RawComment>,
    ) -> Result<Vec<ClassifiedComment>, PipelineError> {
        // `buffered` keeps output in input order regardless of completion order.
        stream::iter(raw.into_iter().enumerate())
            .map(|(index, comment)| async move {
                match self.classifier.classify(&comment.text).await {
                    Ok(label) => Ok(ClassifiedComment::from_raw(comment, label)),
                    Err(source) => {
                        tracing::warn!(
                            index,
                            author = %comment.author,
                            error = %source,
                            "classification failed"
                        );
                        Err(PipelineError::ClassificationFailure {
                            index,
                            author: comment.author,
                            source,
                        })
                    }
                }
            })
            .buffered(self.concurrency)
            .try_collect()
            .await
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
