//! `channel-catalog` — classify a channel's uploads by topic, difficulty and tags.
//!
//! # Flow
//! 1. Load config ([`config::load_config`]) and build a [`classify::Classifier`] once.
//! 2. Fetch the uploads listing ([`ingest::youtube`]) and drop placeholders
//!    ([`ingest::retain_public`]), or read a saved listing.
//! 3. Annotate every video ([`enrich::enrich`]).
//! 4. Write the full and minified artifacts ([`report::json`]) and print a
//!    summary ([`report::terminal`]).
//!
//! Steps 1 and 3 are pure and synchronous; only ingestion touches the network.

pub mod classify;
pub mod config;
pub mod enrich;
pub mod error;
pub mod ingest;
pub mod models;
pub mod report;

pub use classify::Classifier;
pub use enrich::{enrich, enrich_one, minify};
pub use error::{ConfigError, EnrichError, IngestError, OutputError};
pub use models::{CategoryMatch, Difficulty, EnrichedVideo, MinifiedVideo, RawVideo, Thumbnail};
