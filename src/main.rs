//! Sentiment analysis pipeline for crypto news headlines
//!
//! Usage:
//! ```bash
//! cargo run
//! cargo run -- --api-key YOUR_KEY
//! cargo run -- --log-level debug
//! ```

use anyhow::Result;
use clap::Parser;
use crypto_sentiment::{config::Config, pipeline};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "crypto-sentiment")]
#[command(version = "0.1.0")]
#[command(about = "Lexicon-based sentiment analysis for crypto news headlines", long_about = None)]
struct Cli {
    /// News API key; enables the live fetch path
    #[arg(short, long)]
    api_key: Option<String>,

    /// Path of the CSV results file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.log_level.as_str() {
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = Config::default();
    if let Some(api_key) = cli.api_key {
        config.api_key = Some(api_key);
    }
    if let Some(output) = cli.output {
        config.output_path = output;
    }

    pipeline::run(&config).await?;
    Ok(())
}
