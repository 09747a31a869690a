use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Which sentiment backend is wired up at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierKind {
    /// Lexicon + heuristics compound scorer.
    Lexical,
    /// 3-class text classification model behind a TEI `/predict` endpoint.
    Pretrained,
}

impl std::fmt::Display for ClassifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassifierKind::Lexical => write!(f, "lexical"),
            ClassifierKind::Pretrained => write!(f, "pretrained"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub database_path: PathBuf,
    pub db_max_connections: u32,
    pub db_acquire_timeout_secs: u64,
    pub youtube_api_key: Option<String>,
    pub youtube_base_url: String,
    pub youtube_request_timeout_secs: u64,
    pub youtube_max_retries: u32,
    pub youtube_retry_backoff_base_ms: u64,
    pub classifier: ClassifierKind,
    pub tei_url: Option<String>,
    pub classify_concurrency: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("database_path", &self.database_path)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .field(
                "youtube_api_key",
                &self.youtube_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("youtube_base_url", &self.youtube_base_url)
            .field(
                "youtube_request_timeout_secs",
                &self.youtube_request_timeout_secs,
            )
            .field("youtube_max_retries", &self.youtube_max_retries)
            .field(
                "youtube_retry_backoff_base_ms",
                &self.youtube_retry_backoff_base_ms,
            )
            .field("classifier", &self.classifier)
            .field("tei_url", &self.tei_url)
            .field("classify_concurrency", &self.classify_concurrency)
            .finish()
    }
}
