use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::config::OutputConfig;
use crate::enrich::minify;
use crate::error::OutputError;
use crate::models::{EnrichedVideo, MinifiedVideo};

/// Where the two artifacts of a run were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub full: PathBuf,
    pub minified: PathBuf,
}

/// Write the full listing and its minified projection into `dir`,
/// creating the directory if needed. Existing files are overwritten.
pub fn write_artifacts(
    dir: &Path,
    output: &OutputConfig,
    videos: &[EnrichedVideo],
) -> Result<ArtifactPaths, OutputError> {
    std::fs::create_dir_all(dir).map_err(|source| OutputError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let paths = ArtifactPaths {
        full: dir.join(&output.full),
        minified: dir.join(&output.minified),
    };

    let minified: Vec<MinifiedVideo> = videos
        .iter()
        .map(|v| minify(v, &output.thumbnail))
        .collect();

    write_pretty(&paths.full, videos)?;
    write_pretty(&paths.minified, &minified)?;

    info!(
        full = %paths.full.display(),
        minified = %paths.minified.display(),
        videos = videos.len(),
        "wrote artifacts"
    );
    Ok(paths)
}

fn write_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), OutputError> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })
}
