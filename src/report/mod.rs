//! Outputs of a catalog run.
//!
//! - [`json`] — the two persisted artifacts: the full enriched listing and its
//!   minified projection.
//! - [`terminal`] — colored summary with per-category and per-difficulty counts;
//!   respects `--verbose` / `--quiet`.

pub mod json;
pub mod terminal;
