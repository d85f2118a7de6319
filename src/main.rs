use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use swaproxy::fetch::{FetchConfig, PageFetcher};
use swaproxy::replacer::WordSwap;
use swaproxy::server::{self, AppState};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "swaproxy")]
#[command(about = "Case-preserving word replacement proxy for fetched HTML pages")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(long, default_value_t = 3001)]
    port: u16,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Word to search for, matched case-insensitively
    #[arg(long, default_value = "yale")]
    target_word: String,

    /// Word substituted for each match, casing adapted per occurrence
    #[arg(long, default_value = "fale")]
    replacement_word: String,

    /// Upstream request timeout in seconds
    #[arg(long, default_value_t = 15)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Structured JSON logging for observability in production
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();

    info!("Starting swaproxy");
    info!(?args, "Parsed CLI arguments");

    // Validate the word pair early to fail fast with a clear error
    let swap = WordSwap::new(&args.target_word, &args.replacement_word)?;

    let fetcher = PageFetcher::new(FetchConfig {
        timeout: Duration::from_secs(args.timeout_secs),
        user_agent: format!("swaproxy/{}", env!("CARGO_PKG_VERSION")),
    })?;

    info!(
        target_word = %args.target_word,
        replacement_word = %args.replacement_word,
        "Word swap configured"
    );

    let state = AppState::new(fetcher, swap);
    let addr = format!("{}:{}", args.bind, args.port);

    server::serve(&addr, state).await
}
