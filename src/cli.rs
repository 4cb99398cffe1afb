use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "channel-catalog",
    about = "Fetch a channel's uploads and classify them by topic, difficulty and tags",
    version
)]
pub struct Cli {
    /// YouTube channel id [default: channel.id from config]
    #[arg(long, value_name = "ID")]
    pub channel: Option<String>,

    /// YouTube Data API key
    #[arg(long, env = "YT_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Classify a saved JSON listing instead of calling the API
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Config file [default: ./.channel-catalog/config.toml, fallback ~/.config/channel-catalog/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory the JSON artifacts are written to
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub out_dir: PathBuf,

    /// Report printed after the artifacts are written
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// List every video and enable debug logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
