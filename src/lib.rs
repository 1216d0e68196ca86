#![doc = include_str!("../README.md")]

pub mod classify;
pub mod config;
pub mod corpus;
pub mod crop;
pub mod export;
pub mod grid;
pub mod image;
pub mod marking;
pub mod types;

// --- High-level re-exports -------------------------------------------------

// Main entry points: aggregation + results.
pub use crate::corpus::{build_corpus, build_corpus_from_dir, ConfigError, CorpusParams, Sample};
pub use crate::types::{Corpus, FeatureVector, Label, LabeledSample};

// Pipeline stages, usable standalone.
pub use crate::crop::{crop, CropError, CROP_DEBOUNCE};
pub use crate::grid::{block_grid, vectorize, BlockGrid, GridError};
pub use crate::marking::{contains_marking, Region, MARKING_THRESHOLD};

// Export + classification helpers.
pub use crate::classify::{hamming, nearest_label};
pub use crate::export::write_training_csv;

/// Small prelude for quick experiments.
///
/// ```no_run
/// use glyph_corpus::prelude::*;
///
/// # fn main() -> Result<(), String> {
/// let params = CorpusParams::default();
/// let corpus = build_corpus_from_dir("img".as_ref(), &params)?;
/// write_training_csv("data.csv".as_ref(), &corpus)?;
/// println!("{} samples, {} mean vectors", corpus.samples.len(), corpus.means.len());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::corpus::{build_corpus, build_corpus_from_dir, CorpusParams, Sample};
    pub use crate::crop::crop;
    pub use crate::export::write_training_csv;
    pub use crate::grid::vectorize;
    pub use crate::image::{load_rgb_image, ImageRgb8, RgbImageBuf};
    pub use crate::types::{Corpus, FeatureVector, Label};
}
