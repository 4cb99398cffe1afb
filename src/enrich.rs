use std::collections::BTreeMap;

use tracing::debug;

use crate::classify::Classifier;
use crate::error::EnrichError;
use crate::models::{EnrichedVideo, MinifiedVideo, RawVideo};

/// Classify every video, preserving input order.
///
/// Fails with [`EnrichError::EmptyInput`] when there is nothing to classify;
/// no partial output is produced in that case.
pub fn enrich(classifier: &Classifier, videos: &[RawVideo]) -> Result<Vec<EnrichedVideo>, EnrichError> {
    if videos.is_empty() {
        return Err(EnrichError::EmptyInput);
    }

    Ok(videos.iter().map(|v| enrich_one(classifier, v)).collect())
}

/// Annotate a single video. Never fails: unmatched text ends up as
/// `"General"` / intermediate with no tags.
pub fn enrich_one(classifier: &Classifier, video: &RawVideo) -> EnrichedVideo {
    let text = format!("{} {}", video.title, video.description);

    let category = classifier.taxonomy.pick_category(&text);
    let difficulty = classifier.difficulty.classify(&text);
    let tags = classifier.tags.build_tags(&category.tags, &text);

    debug!(
        id = %video.id,
        category = %category.category,
        score = category.score,
        %difficulty,
        "classified"
    );

    EnrichedVideo {
        video: video.clone(),
        category: category.category,
        difficulty,
        tags,
        metrics: BTreeMap::new(),
        scores: BTreeMap::new(),
    }
}

/// Reduce an enriched video to the fields kept in the minified artifact.
///
/// The thumbnail is the first size in `preference` that the video has; if
/// none of them is present, the first available size is used.
pub fn minify(video: &EnrichedVideo, preference: &[String]) -> MinifiedVideo {
    let thumbnails = &video.video.thumbnails;
    let thumbnail = preference
        .iter()
        .find_map(|size| thumbnails.get(size))
        .or_else(|| thumbnails.values().next())
        .map(|t| t.url.clone());

    MinifiedVideo {
        id: video.video.id.clone(),
        title: video.video.title.clone(),
        published_at: video.video.published_at.clone(),
        thumbnail,
        category: video.category.clone(),
        difficulty: video.difficulty,
        tags: video.tags.clone(),
    }
}
