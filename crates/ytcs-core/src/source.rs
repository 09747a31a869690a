//! The seam through which raw comment batches enter the system.

use std::future::Future;

use thiserror::Error;

use crate::comments::RawComment;

/// Bounds the presentation surfaces enforce on `max_results` before a run.
pub const MIN_RESULTS: u32 = 1;
pub const MAX_RESULTS: u32 = 200;

/// Failure reported by a [`CommentSource`]. Any retry has already happened
/// inside the source by the time one of these is returned.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("comment source unreachable: {0}")]
    Unreachable(String),

    #[error("comment source rejected the request: {0}")]
    Rejected(String),

    #[error("comment source returned malformed data: {0}")]
    Malformed(String),

    #[error("comment source is not configured: {0}")]
    NotConfigured(String),
}

/// Supplies the raw comments for one video.
pub trait CommentSource: Send + Sync {
    /// Fetch at most `max_results` top-level comments for `video_id`.
    ///
    /// An empty batch is a valid result.
    fn fetch_comments(
        &self,
        video_id: &str,
        max_results: u32,
    ) -> impl Future<Output = Result<Vec<RawComment>, SourceError>> + Send;
}

/// An absent source fails every fetch with [`SourceError::NotConfigured`],
/// so binaries can start without credentials and only fail when asked to run.
impl<T: CommentSource> CommentSource for Option<T> {
    async fn fetch_comments(
        &self,
        video_id: &str,
        max_results: u32,
    ) -> Result<Vec<RawComment>, SourceError> {
        match self {
            Some(source) => source.fetch_comments(video_id, max_results).await,
            None => Err(SourceError::NotConfigured(
                "no comment source configured (is YOUTUBE_API_KEY set?)".to_string(),
            )),
        }
    }
}
