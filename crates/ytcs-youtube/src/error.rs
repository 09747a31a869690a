use thiserror::Error;
use ytcs_core::SourceError;

/// Errors returned by the `YouTube` Data API client.
#[derive(Debug, Error)]
pub enum YoutubeError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status and a JSON error envelope.
    #[error("YouTube API error ({status}{}): {message}", reason_suffix(.reason))]
    Api {
        status: u16,
        reason: Option<String>,
        message: String,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// No developer key was configured.
    #[error("YOUTUBE_API_KEY is not set")]
    MissingApiKey,

    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

fn reason_suffix(reason: &Option<String>) -> String {
    reason.as_deref().map(|r| format!(", {r}")).unwrap_or_default()
}

impl From<YoutubeError> for SourceError {
    fn from(err: YoutubeError) -> Self {
        match err {
            YoutubeError::Http(_) => SourceError::Unreachable(err.to_string()),
            YoutubeError::Api { status, .. } if status >= 500 => {
                SourceError::Unreachable(err.to_string())
            }
            YoutubeError::Api { .. } => SourceError::Rejected(err.to_string()),
            YoutubeError::Deserialize { .. } => SourceError::Malformed(err.to_string()),
            YoutubeError::MissingApiKey | YoutubeError::InvalidBaseUrl { .. } => {
                SourceError::NotConfigured(err.to_string())
            }
        }
    }
}
