use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::pipeline::ImageCollection;

/// Folder used when no usable `--path` is given.
pub const DEFAULT_SAMPLE_DIR: &str = "sample";

/// Resolve the sample folder, falling back to [`DEFAULT_SAMPLE_DIR`]
/// when none is given or the given one is not a directory.
pub fn check_path(path: Option<&Path>) -> PathBuf {
    match path {
        Some(p) if p.is_dir() => p.to_path_buf(),
        Some(p) => {
            warn!(
                path = %p.display(),
                "given path is not a directory; using the default sample folder"
            );
            PathBuf::from(DEFAULT_SAMPLE_DIR)
        }
        None => PathBuf::from(DEFAULT_SAMPLE_DIR),
    }
}

/// Decode every image file in `dir`.
///
/// Files the codec cannot read are logged and skipped.
pub fn collect_images(dir: &Path) -> Result<ImageCollection> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to list directory: {}", dir.display()))?;

    let mut images = ImageCollection::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().into_owned();

        match image::open(&path) {
            Ok(img) => {
                images.insert(file_name, img.to_rgb8());
            }
            Err(e) => {
                warn!(file = %file_name, error = %e, "file is probably not a valid image type");
            }
        }
    }

    info!(count = images.len(), "images chosen");
    if images.is_empty() {
        warn!(dir = %dir.display(), "the directory does not contain any images");
    }

    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("hue-sort-collect-{name}"));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn check_path_keeps_existing_directory() {
        let dir = scratch_dir("check-existing");
        assert_eq!(check_path(Some(&dir)), dir);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn check_path_falls_back_to_default() {
        assert_eq!(check_path(None), PathBuf::from(DEFAULT_SAMPLE_DIR));
        assert_eq!(
            check_path(Some(Path::new("/nonexistent/hue-sort/folder"))),
            PathBuf::from(DEFAULT_SAMPLE_DIR)
        );
    }

    #[test]
    fn skips_files_that_are_not_images() {
        let dir = scratch_dir("mixed");
        image::RgbImage::from_fn(2, 2, |_, _| image::Rgb([0, 0, 1]))
            .save(dir.join("file1.png"))
            .unwrap();
        image::RgbImage::from_fn(2, 2, |_, _| image::Rgb([0, 0, 2]))
            .save(dir.join("file2.png"))
            .unwrap();
        std::fs::write(dir.join("file3.png"), "this is not an image").unwrap();
        std::fs::create_dir_all(dir.join("nested")).unwrap();

        let images = collect_images(&dir).unwrap();

        assert_eq!(images.len(), 2);
        assert_eq!(images["file1.png"].get_pixel(0, 0), &image::Rgb([0, 0, 1]));
        assert_eq!(images["file2.png"].get_pixel(1, 1), &image::Rgb([0, 0, 2]));
        assert!(!images.contains_key("file3.png"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn empty_directory_yields_empty_collection() {
        let dir = scratch_dir("empty");
        assert!(collect_images(&dir).unwrap().is_empty());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_directory_is_an_error() {
        let err = collect_images(Path::new("/nonexistent/hue-sort/dir")).unwrap_err();
        assert!(err.to_string().contains("failed to list directory"));
    }
}
