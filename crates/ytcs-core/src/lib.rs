pub mod app_config;
pub mod comments;
pub mod config;
pub mod source;

pub use app_config::{AppConfig, ClassifierKind, Environment};
pub use comments::{ClassifiedComment, RawComment, SentimentLabel, UnknownSentimentLabel};
pub use config::{load_app_config, load_app_config_from_env, DEFAULT_YOUTUBE_BASE_URL};
pub use source::{CommentSource, SourceError, MAX_RESULTS, MIN_RESULTS};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
