//! Nearest-vector lookup against a corpus' mean map.

use crate::types::{Corpus, FeatureVector, Label};

/// Number of positions where `a` and `b` disagree.
///
/// Both vectors must share one length.
pub fn hamming(a: &FeatureVector, b: &FeatureVector) -> usize {
    debug_assert_eq!(a.len(), b.len(), "mixed vector lengths");
    a.bits()
        .iter()
        .zip(b.bits())
        .filter(|(x, y)| x != y)
        .count()
}

/// The label whose mean vector lies closest to `probe` in Hamming
/// distance, with the distance. Ties break toward the smaller label so
/// the answer is deterministic. `None` when the mean map is empty.
pub fn nearest_label(corpus: &Corpus, probe: &FeatureVector) -> Option<(Label, usize)> {
    corpus
        .means
        .iter()
        .map(|(&label, mean)| (label, hamming(mean, probe)))
        .min_by_key(|&(label, distance)| (distance, label))
}
