use crate::app_config::{AppConfig, ClassifierKind, Environment};
use crate::ConfigError;

pub const DEFAULT_YOUTUBE_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("YTCS_ENV", "development"));
    let bind_addr = parse_addr("YTCS_BIND_ADDR", "127.0.0.1:3000")?;
    let log_level = or_default("YTCS_LOG_LEVEL", "info");

    let database_path = PathBuf::from(or_default("YTCS_DATABASE_PATH", "youtube_comments.db"));
    let db_max_connections = parse_u32("YTCS_DB_MAX_CONNECTIONS", "5")?;
    let db_acquire_timeout_secs = parse_u64("YTCS_DB_ACQUIRE_TIMEOUT_SECS", "10")?;
    if db_max_connections == 0 {
        return Err(invalid("YTCS_DB_MAX_CONNECTIONS", "must be at least 1".into()));
    }

    let youtube_api_key = lookup("YOUTUBE_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty());
    let youtube_base_url = or_default("YTCS_YOUTUBE_BASE_URL", DEFAULT_YOUTUBE_BASE_URL);
    let youtube_request_timeout_secs = parse_u64("YTCS_YOUTUBE_REQUEST_TIMEOUT_SECS", "30")?;
    let youtube_max_retries = parse_u32("YTCS_YOUTUBE_MAX_RETRIES", "3")?;
    let youtube_retry_backoff_base_ms = parse_u64("YTCS_YOUTUBE_RETRY_BACKOFF_BASE_MS", "1000")?;

    let classifier = parse_classifier(&or_default("YTCS_CLASSIFIER", "lexical"))
        .ok_or_else(|| invalid("YTCS_CLASSIFIER", "expected `lexical` or `pretrained`".into()))?;
    let tei_url = lookup("SENTIMENT_TEI_URL")
        .ok()
        .filter(|u| !u.trim().is_empty());
    if classifier == ClassifierKind::Pretrained && tei_url.is_none() {
        return Err(ConfigError::MissingEnvVar("SENTIMENT_TEI_URL".to_string()));
    }

    let classify_concurrency = or_default("YTCS_CLASSIFY_CONCURRENCY", "4")
        .parse::<usize>()
        .map_err(|e| invalid("YTCS_CLASSIFY_CONCURRENCY", e.to_string()))?;
    if classify_concurrency == 0 {
        return Err(invalid(
            "YTCS_CLASSIFY_CONCURRENCY",
            "must be at least 1".into(),
        ));
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        database_path,
        db_max_connections,
        db_acquire_timeout_secs,
        youtube_api_key,
        youtube_base_url,
        youtube_request_timeout_secs,
        youtube_max_retries,
        youtube_retry_backoff_base_ms,
        classifier,
        tei_url,
        classify_concurrency,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

fn parse_classifier(s: &str) -> Option<ClassifierKind> {
    match s.trim().to_ascii_lowercase().as_str() {
        "lexical" | "vader" => Some(ClassifierKind::Lexical),
        "pretrained" | "roberta" => Some(ClassifierKind::Pretrained),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
