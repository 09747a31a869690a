mod comments;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use ytcs_core::{MAX_RESULTS, MIN_RESULTS};

#[derive(Debug, Parser)]
#[command(name = "ytcs-cli")]
#[command(about = "Classify and store YouTube comment sentiment")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch, classify and store comments for one video
    Analyze {
        /// `YouTube` video id (the `v=` parameter of a watch URL)
        #[arg(long)]
        video_id: String,

        /// Number of top-level comments to fetch
        #[arg(
            long,
            default_value_t = 20,
            value_parser = clap::value_parser!(u32)
                .range(i64::from(MIN_RESULTS)..=i64::from(MAX_RESULTS))
        )]
        max_results: u32,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List every stored comment
    Comments {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = ytcs_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Analyze {
            video_id,
            max_results,
            json,
        } => comments::run_analyze(&config, &video_id, max_results, json).await,
        Commands::Comments { json } => comments::run_list(&config, json).await,
    }
}
