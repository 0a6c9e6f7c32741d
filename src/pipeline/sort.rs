use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::pipeline::average::average_color;
use crate::pipeline::classify::{find_best_color, ReferencePalette};
use crate::pipeline::ImageCollection;

/// Which files were written under which color folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortReport {
    pub groups: BTreeMap<String, Vec<String>>,
    /// Files that were classified but could not be encoded.
    pub failed: Vec<String>,
}

impl SortReport {
    /// Number of files written.
    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Color folder a file was written to.
    pub fn color_of(&self, file_name: &str) -> Option<&str> {
        self.groups
            .iter()
            .find(|(_, files)| files.iter().any(|f| f == file_name))
            .map(|(color, _)| color.as_str())
    }
}

/// Create `dir` unless it exists. Returns whether it was created by this call.
fn ensure_dir(dir: &Path) -> Result<bool> {
    match std::fs::create_dir(dir) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => {
            Err(e).with_context(|| format!("failed to create folder: {}", dir.display()))
        }
    }
}

/// File every image under `dest/<closest color name>/<file name>`.
///
/// The destination root and each color folder are created on first use.
/// Classification errors (an empty palette, an empty image) abort the run;
/// an image that cannot be encoded is logged and skipped.
pub fn sort_images(
    images: &ImageCollection,
    palette: &ReferencePalette,
    dest: &Path,
) -> Result<SortReport> {
    std::fs::create_dir_all(dest)
        .with_context(|| format!("failed to create destination: {}", dest.display()))?;
    if images.is_empty() {
        warn!(dest = %dest.display(), "no images to sort");
    }

    let mut report = SortReport::default();
    for (file_name, image) in images {
        let average = average_color(image)
            .with_context(|| format!("cannot average colors of {file_name}"))?;
        let best = find_best_color(&average, palette)
            .with_context(|| format!("cannot classify {file_name}"))?;
        debug!(file = %file_name, ?average, color = best, "classified image");

        let folder = dest.join(best);
        if ensure_dir(&folder)? {
            info!(folder = %folder.display(), "creating color folder");
        }

        let target = folder.join(file_name);
        match image.save(&target) {
            Ok(()) => report
                .groups
                .entry(best.to_string())
                .or_default()
                .push(file_name.clone()),
            Err(e) => {
                warn!(file = %file_name, error = %e, "failed to write sorted image");
                report.failed.push(file_name.clone());
            }
        }
    }

    info!(
        sorted = report.total(),
        colors = report.groups.len(),
        failed = report.failed.len(),
        "sorting finished"
    );
    Ok(report)
}
