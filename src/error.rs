//! Error types for each stage of a catalog run.
//!
//! Classification itself never fails; only configuration, ingestion, the
//! orchestrator's empty-input check and artifact writing can.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("duplicate taxonomy category: {0}")]
    DuplicateCategory(String),

    #[error("taxonomy category \"{0}\" is reserved for unmatched videos")]
    ReservedCategory(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EnrichError {
    #[error("no videos to classify")]
    EmptyInput,
}

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("no API key: pass --api-key or set YT_API_KEY")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("YouTube API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("channel {0} not found")]
    ChannelNotFound(String),
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
