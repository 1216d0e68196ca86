//! Corpus directory enumeration.
//!
//! Training images live flat in one directory; a file's class label is the
//! first character of its base name (`3_0017.png` → `'3'`). Listing is
//! sorted by file name so corpus builds are reproducible across runs and
//! platforms.

use crate::image::{load_rgb_image, RgbImageBuf};
use crate::types::Label;
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

/// A decoded training image awaiting vectorization.
#[derive(Clone, Debug)]
pub struct Sample {
    pub label: Label,
    /// Where the sample came from, for reporting.
    pub source: String,
    pub image: RgbImageBuf,
}

/// Enumerate candidate image files in `dir`, sorted by file name.
///
/// Directories and files without a leading stem character are skipped
/// with a warning.
pub fn list_corpus_dir(dir: &Path) -> Result<Vec<(PathBuf, Label)>, String> {
    let entries =
        fs::read_dir(dir).map_err(|e| format!("Failed to read {}: {e}", dir.display()))?;
    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| format!("Failed to read {}: {e}", dir.display()))?;
        let path = entry.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut listed = Vec::with_capacity(paths.len());
    for path in paths {
        let label = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(|stem| stem.chars().next());
        match label {
            Some(label) => listed.push((path, label)),
            None => warn!("skipping {}: no label character in file name", path.display()),
        }
    }
    Ok(listed)
}

/// List and decode every labeled image under `dir`.
///
/// Decode failures are per-file: the file is skipped with a warning and
/// the rest of the directory still loads. Returns the decoded samples and
/// the number of files dropped.
pub fn load_samples(dir: &Path) -> Result<(Vec<Sample>, usize), String> {
    let mut samples = Vec::new();
    let mut skipped = 0usize;
    for (path, label) in list_corpus_dir(dir)? {
        match load_rgb_image(&path) {
            Ok(image) => samples.push(Sample {
                label,
                source: path.display().to_string(),
                image,
            }),
            Err(cause) => {
                warn!("skipping {}: {cause}", path.display());
                skipped += 1;
            }
        }
    }
    Ok((samples, skipped))
}
