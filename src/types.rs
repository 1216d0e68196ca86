use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Single-character class identifier; an opaque grouping key.
pub type Label = char;

/// Flat binary feature vector of `grid_size`² bits in raster order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector(Vec<u8>);

impl FeatureVector {
    /// Wrap raw bits; every element must be 0 or 1.
    pub fn from_bits(bits: Vec<u8>) -> Self {
        debug_assert!(bits.iter().all(|&b| b <= 1), "feature bits must be 0 or 1");
        Self(bits)
    }

    pub fn bits(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One vectorized training image.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LabeledSample {
    pub label: Label,
    /// Where the sample came from, for reporting.
    pub source: String,
    pub vector: FeatureVector,
}

/// A fully aggregated training set: every sample plus the per-label
/// majority-vote mean vectors derived from them.
///
/// Built in one pass and read-only afterward; export is a separate step.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Corpus {
    /// Grid size the vectors were produced with.
    pub grid_size: usize,
    /// Samples in source order.
    pub samples: Vec<LabeledSample>,
    /// One mean vector per label that received at least one sample.
    pub means: BTreeMap<Label, FeatureVector>,
    /// Alphabet labels that received no samples, omitted from `means`.
    pub empty_labels: Vec<Label>,
    /// Sources dropped during aggregation (decode, crop, or grid failures).
    pub skipped: usize,
}
