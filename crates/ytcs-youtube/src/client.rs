//! HTTP client for the `YouTube` Data API v3 `commentThreads.list` endpoint.
//!
//! Wraps `reqwest` with API key handling, page-token pagination, retry of
//! transient failures, and typed decoding of both success and error bodies.

use std::time::Duration;

use reqwest::{Client, Url};
use ytcs_core::{AppConfig, CommentSource, RawComment, SourceError};

use crate::error::YoutubeError;
use crate::retry::retry_with_backoff;
use crate::types::{CommentThreadListResponse, ErrorEnvelope};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";

/// Largest `maxResults` the API accepts for one `commentThreads` page.
pub const MAX_PAGE_SIZE: u32 = 100;

const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_BACKOFF_BASE_MS: u64 = 1_000;

/// Client for `commentThreads.list`.
///
/// Use [`YoutubeClient::new`] for production or
/// [`YoutubeClient::with_base_url`] to point at a mock server in tests.
pub struct YoutubeClient {
    client: Client,
    api_key: String,
    base_url: Url,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl YoutubeClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, YoutubeError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the `reqwest::Client` cannot be
    /// constructed, or [`YoutubeError::InvalidBaseUrl`] if `base_url` does
    /// not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, YoutubeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("ytcs/0.1 (comment-sentiment)")
            .build()?;

        // Exactly one trailing slash, so `join` appends rather than replaces
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| YoutubeError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_base_ms: DEFAULT_BACKOFF_BASE_MS,
        })
    }

    /// Builds a client from application config.
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::MissingApiKey`] when no key is configured,
    /// plus anything [`YoutubeClient::with_base_url`] can return.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, YoutubeError> {
        let api_key = config
            .youtube_api_key
            .as_deref()
            .ok_or(YoutubeError::MissingApiKey)?;
        Ok(Self::with_base_url(
            api_key,
            config.youtube_request_timeout_secs,
            &config.youtube_base_url,
        )?
        .with_retry_policy(
            config.youtube_max_retries,
            config.youtube_retry_backoff_base_ms,
        ))
    }

    /// Overrides the retry policy applied to each page request.
    #[must_use]
    pub fn with_retry_policy(mut self, max_retries: u32, backoff_base_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.backoff_base_ms = backoff_base_ms;
        self
    }

    /// Fetches one page of top-level comment threads for `video_id`.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::Api`] if the API returns a non-2xx status.
    /// - [`YoutubeError::Http`] on network failure.
    /// - [`YoutubeError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn list_comment_threads(
        &self,
        video_id: &str,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<CommentThreadListResponse, YoutubeError> {
        let url = self.build_url(video_id, page_size, page_token);
        let body = retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            self.request_json(&url)
        })
        .await?;

        serde_json::from_value(body).map_err(|e| YoutubeError::Deserialize {
            context: format!("commentThreads(videoId={video_id})"),
            source: e,
        })
    }

    /// Fetches up to `max_results` top-level comments, following
    /// `nextPageToken` until enough have been collected or the thread list
    /// runs out.
    ///
    /// # Errors
    ///
    /// Propagates the first error from [`YoutubeClient::list_comment_threads`].
    pub async fn fetch_top_level_comments(
        &self,
        video_id: &str,
        max_results: u32,
    ) -> Result<Vec<RawComment>, YoutubeError> {
        let wanted = max_results as usize;
        let mut comments = Vec::with_capacity(wanted.min(MAX_PAGE_SIZE as usize));
        let mut page_token: Option<String> = None;

        while comments.len() < wanted {
            let remaining = u32::try_from(wanted - comments.len()).unwrap_or(u32::MAX);
            let page = self
                .list_comment_threads(video_id, remaining.min(MAX_PAGE_SIZE), page_token.as_deref())
                .await?;

            let room = wanted - comments.len();
            comments.extend(page.items.into_iter().take(room).map(|thread| {
                let snippet = thread.snippet.top_level_comment.snippet;
                RawComment::new(snippet.author_display_name, snippet.text_display)
            }));

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        tracing::debug!(video_id, count = comments.len(), "fetched YouTube comments");
        Ok(comments)
    }

    /// Builds the `commentThreads` URL with percent-encoded query parameters.
    fn build_url(&self, video_id: &str, page_size: u32, page_token: Option<&str>) -> Url {
        let mut url = self
            .base_url
            .join("commentThreads")
            .unwrap_or_else(|_| self.base_url.clone());
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("part", "snippet");
            pairs.append_pair("videoId", video_id);
            pairs.append_pair("maxResults", &page_size.to_string());
            pairs.append_pair("textFormat", "plainText");
            pairs.append_pair("key", &self.api_key);
            if let Some(token) = page_token {
                pairs.append_pair("pageToken", token);
            }
        }
        url
    }

    /// Sends a GET request and parses the body as JSON, turning non-2xx
    /// statuses into [`YoutubeError::Api`].
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, YoutubeError> {
        // The URL carries the API key, so it is stripped from transport errors.
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| YoutubeError::Deserialize {
            context: "commentThreads".to_string(),
            source: e,
        })
    }
}

/// Decodes the Google error envelope, falling back to the raw body.
fn api_error(status: u16, body: &str) -> YoutubeError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => YoutubeError::Api {
            status,
            reason: envelope.error.errors.into_iter().find_map(|d| d.reason),
            message: envelope.error.message,
        },
        Err(_) => YoutubeError::Api {
            status,
            reason: None,
            message: body.chars().take(200).collect(),
        },
    }
}

impl CommentSource for YoutubeClient {
    async fn fetch_comments(
        &self,
        video_id: &str,
        max_results: u32,
    ) -> Result<Vec<RawComment>, SourceError> {
        self.fetch_top_level_comments(video_id, max_results)
            .await
            .map_err(SourceError::from)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
