use thiserror::Error;
use ytcs_core::SourceError;
use ytcs_db::DbError;

/// Failure to produce a label for one comment.
#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TEI predict error: {0}")]
    Tei(String),

    #[error("classifier returned unknown label {0:?}")]
    UnknownLabel(String),

    #[error("classifier returned no predictions")]
    EmptyPrediction,

    #[error("classifier is not configured: {0}")]
    Config(String),
}

/// Failure of one pipeline run. Nothing from the run is persisted when a
/// run returns any of these.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("source unavailable: {0}")]
    SourceUnavailable(#[from] SourceError),

    #[error("classification failed for comment {index} by {author:?}: {source}")]
    ClassificationFailure {
        index: usize,
        author: String,
        #[source]
        source: SentimentError,
    },

    #[error("storage failure: {0}")]
    StorageFailure(#[from] DbError),
}

impl PipelineError {
    /// Stable machine-readable code for API envelopes and logs.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::SourceUnavailable(_) => "source_unavailable",
            Self::ClassificationFailure { .. } => "classification_failure",
            Self::StorageFailure(_) => "storage_failure",
        }
    }
}
