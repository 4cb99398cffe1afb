//! `channel-catalog` CLI.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]) and set up logging.
//! 2. Load config and build the classifier once.
//! 3. Fetch the channel's uploads (or read `--input`) and drop placeholders.
//! 4. Enrich every video; an empty listing aborts the run with exit code `1`.
//! 5. Write `videos.json` and `videos.min.json`, then print the report.

mod cli;

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::EnvFilter;

use channel_catalog::config::{load_config, Config};
use channel_catalog::ingest::retain_public;
use channel_catalog::ingest::youtube::YouTubeClient;
use channel_catalog::report;
use channel_catalog::{enrich, Classifier, IngestError, RawVideo};
use cli::{Cli, ReportFormat};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let cwd = std::env::current_dir().context("cannot resolve working directory")?;
    let config = load_config(&cwd, cli.config.as_deref())?;
    let classifier = Classifier::from_config(&config)?;

    let listing = match &cli.input {
        Some(path) => read_listing(path)?,
        None => fetch_listing(&cli, &config).await?,
    };
    let videos = retain_public(listing);

    let enriched = enrich(&classifier, &videos).context("refusing to write empty artifacts")?;
    report::json::write_artifacts(&cli.out_dir, &config.output, &enriched)?;

    match cli.report {
        ReportFormat::Terminal => report::terminal::render(&enriched, cli.verbose, cli.quiet),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&enriched)?),
    }

    Ok(())
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default_filter = if verbose {
        "channel_catalog=debug"
    } else if quiet {
        "channel_catalog=warn"
    } else {
        "channel_catalog=info"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Read a listing previously saved as a JSON array of videos.
fn read_listing(path: &Path) -> Result<Vec<RawVideo>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let videos: Vec<RawVideo> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON array of videos", path.display()))?;
    info!(path = %path.display(), videos = videos.len(), "loaded listing");
    Ok(videos)
}

async fn fetch_listing(cli: &Cli, config: &Config) -> Result<Vec<RawVideo>> {
    let api_key = cli.api_key.clone().ok_or(IngestError::MissingApiKey)?;
    let client = YouTubeClient::new(api_key)?;

    let channel_id = cli.channel.as_deref().unwrap_or(&config.channel.id);
    let playlist = client
        .uploads_playlist(channel_id)
        .await
        .with_context(|| format!("failed to resolve uploads of channel {}", channel_id))?;
    info!(channel = channel_id, playlist = %playlist, "resolved uploads playlist");

    let pb = if !cli.quiet {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?,
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let videos = client
        .playlist_videos(&playlist, |fetched| {
            if let Some(pb) = &pb {
                pb.set_message(format!("{} videos fetched", fetched));
            }
        })
        .await
        .with_context(|| format!("failed to list playlist {}", playlist))?;

    if let Some(pb) = pb {
        pb.finish_with_message(format!("{} videos fetched", videos.len()));
    }

    Ok(videos)
}
