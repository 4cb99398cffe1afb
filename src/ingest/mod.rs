//! Fetching a channel's uploads and cleaning the listing before classification.
//!
//! - [`youtube`] — async YouTube Data API client with playlist pagination.
//! - [`retain_public`] — drops private/deleted placeholders and repeated ids.

pub mod youtube;

use std::collections::HashSet;

use tracing::{debug, info};

use crate::models::RawVideo;

/// Titles YouTube substitutes for entries the viewer cannot see.
const PLACEHOLDER_TITLES: &[&str] = &["Private video", "Deleted video"];

pub fn is_placeholder(video: &RawVideo) -> bool {
    let title = video.title.trim();
    PLACEHOLDER_TITLES.iter().any(|p| *p == title)
}

/// Keep only public videos, first occurrence of each id, in listing order.
pub fn retain_public(videos: Vec<RawVideo>) -> Vec<RawVideo> {
    let total = videos.len();
    let mut seen = HashSet::new();

    let kept: Vec<RawVideo> = videos
        .into_iter()
        .filter(|v| {
            if is_placeholder(v) {
                debug!(id = %v.id, title = %v.title, "skipping placeholder");
                return false;
            }
            seen.insert(v.id.clone())
        })
        .collect();

    if kept.len() != total {
        info!(dropped = total - kept.len(), kept = kept.len(), "filtered listing");
    }
    kept
}
