//! The classifier seam and its two backends.

use std::future::Future;

use ytcs_core::{AppConfig, ClassifierKind, SentimentLabel};

use crate::error::SentimentError;
use crate::scorer::{compound_score, label_for_compound};
use crate::tei::TeiClassifier;

/// Assigns a [`SentimentLabel`] to one comment text.
///
/// Implementations must be safe to call concurrently from many tasks.
pub trait SentimentClassifier: Send + Sync {
    fn classify(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<SentimentLabel, SentimentError>> + Send;
}

/// Deterministic lexicon scorer. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalClassifier;

impl SentimentClassifier for LexicalClassifier {
    async fn classify(&self, text: &str) -> Result<SentimentLabel, SentimentError> {
        Ok(label_for_compound(compound_score(text)))
    }
}

impl SentimentClassifier for TeiClassifier {
    async fn classify(&self, text: &str) -> Result<SentimentLabel, SentimentError> {
        self.predict(text).await
    }
}

/// Backend chosen at startup from [`AppConfig::classifier`].
#[derive(Debug, Clone)]
pub enum Classifier {
    Lexical(LexicalClassifier),
    Pretrained(TeiClassifier),
}

impl Classifier {
    /// Build the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Config`] when the pretrained backend is
    /// selected without a TEI URL, or [`SentimentError::Http`] if its HTTP
    /// client cannot be built.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, SentimentError> {
        match config.classifier {
            ClassifierKind::Lexical => Ok(Self::Lexical(LexicalClassifier)),
            ClassifierKind::Pretrained => {
                let url = config.tei_url.as_deref().ok_or_else(|| {
                    SentimentError::Config("SENTIMENT_TEI_URL is required".to_string())
                })?;
                Ok(Self::Pretrained(TeiClassifier::new(url)?))
            }
        }
    }

    /// Short backend name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Lexical(_) => "lexical",
            Self::Pretrained(_) => "pretrained",
        }
    }
}

impl SentimentClassifier for Classifier {
    async fn classify(&self, text: &str) -> Result<SentimentLabel, SentimentError> {
        match self {
            Self::Lexical(c) => c.classify(text).await,
            Self::Pretrained(c) => c.classify(text).await,
        }
    }
}
