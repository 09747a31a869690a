//! Command handlers for `analyze` and `comments`.

use std::fmt::Write as _;

use anyhow::Context;
use ytcs_core::{AppConfig, ClassifiedComment};
use ytcs_db::{CommentStore, StoreConfig};
use ytcs_sentiment::{ClassificationPipeline, Classifier};
use ytcs_youtube::YoutubeClient;

async fn open_store(config: &AppConfig) -> anyhow::Result<CommentStore> {
    CommentStore::open(&config.database_path, StoreConfig::from_app_config(config))
        .await
        .with_context(|| format!("opening {}", config.database_path.display()))
}

/// Run the pipeline for one video and print the classified batch.
///
/// # Errors
///
/// Returns an error if the store cannot be opened, the `YouTube` client or
/// classifier is misconfigured, or the run fails.
pub(crate) async fn run_analyze(
    config: &AppConfig,
    video_id: &str,
    max_results: u32,
    json: bool,
) -> anyhow::Result<()> {
    let source = YoutubeClient::from_app_config(config)?;
    let classifier = Classifier::from_app_config(config)?;
    let store = open_store(config).await?;

    let pipeline = ClassificationPipeline::new(source, classifier, store.clone())
        .with_concurrency(config.classify_concurrency);
    let result = pipeline.run(video_id, max_results).await;
    store.close().await;

    let comments = result.with_context(|| format!("analyzing video {video_id}"))?;
    if comments.is_empty() && !json {
        println!("no comments found for video '{video_id}'");
        return Ok(());
    }
    print_comments(&comments, json)
}

/// Print every stored comment.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or read.
pub(crate) async fn run_list(config: &AppConfig, json: bool) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let result = store.read_all().await;
    store.close().await;

    let comments = result?;
    if comments.is_empty() && !json {
        println!("no comments stored yet; run `analyze` first");
        return Ok(());
    }
    print_comments(&comments, json)
}

fn print_comments(comments: &[ClassifiedComment], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(comments)?);
    } else {
        print!("{}", render_table(comments));
    }
    Ok(())
}

/// Aligned `AUTHOR  SENTIMENT  COMMENT` table. Line breaks inside a comment
/// are flattened so every comment stays on one row.
pub(crate) fn render_table(comments: &[ClassifiedComment]) -> String {
    const AUTHOR: &str = "AUTHOR";
    const SENTIMENT: &str = "SENTIMENT";

    let author_width = comments
        .iter()
        .map(|c| c.author.chars().count())
        .chain(std::iter::once(AUTHOR.len()))
        .max()
        .unwrap_or(AUTHOR.len())
        + 2;
    let sentiment_width = SENTIMENT.len() + 2;

    let mut out = String::new();
    let _ = writeln!(out, "{AUTHOR:<author_width$}{SENTIMENT:<sentiment_width$}COMMENT");
    for c in comments {
        let text: String = c.text.split_whitespace().collect::<Vec<_>>().join(" ");
        let _ = writeln!(
            out,
            "{:<author_width$}{:<sentiment_width$}{}",
            c.author,
            c.sentiment.as_str(),
            text
        );
    }
    out
}
