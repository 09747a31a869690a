mod api;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use ytcs_db::{CommentStore, StoreConfig};
use ytcs_sentiment::{ClassificationPipeline, Classifier};
use ytcs_youtube::{YoutubeClient, YoutubeError};

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ytcs_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let store = CommentStore::open(
        &config.database_path,
        StoreConfig::from_app_config(&config),
    )
    .await?;

    let source = match YoutubeClient::from_app_config(&config) {
        Ok(client) => Some(client),
        Err(YoutubeError::MissingApiKey) => {
            tracing::warn!("YOUTUBE_API_KEY not set; analyze requests will fail");
            None
        }
        Err(e) => return Err(e.into()),
    };
    let classifier = Classifier::from_app_config(&config)?;

    tracing::info!(
        env = %config.env,
        database = %config.database_path.display(),
        classifier = classifier.name(),
        "starting ytcs-server"
    );

    let pipeline = ClassificationPipeline::new(source, classifier, store.clone())
        .with_concurrency(config.classify_concurrency);
    let app = build_app(AppState {
        pipeline: Arc::new(pipeline),
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
