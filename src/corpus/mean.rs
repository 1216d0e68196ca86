//! Per-label majority-vote mean vectors.
//!
//! The mean is a bitwise majority, not an arithmetic average: position `p`
//! of the mean is 0 iff strictly more samples carry 0 than 1 there. An
//! exact tie resolves to 1. Reference vectors computed elsewhere encode
//! this asymmetry, so the tie direction must not change.

use crate::types::{FeatureVector, Label, LabeledSample};
use std::collections::BTreeMap;

/// Majority bit per position across `vectors`, ties toward 1.
///
/// All vectors must share one length; the slice must be non-empty.
pub fn mean_vector(vectors: &[&FeatureVector]) -> FeatureVector {
    debug_assert!(!vectors.is_empty(), "mean of an empty vector set");
    let len = vectors[0].len();
    let mut bits = Vec::with_capacity(len);
    for p in 0..len {
        let mut zeros = 0usize;
        let mut ones = 0usize;
        for v in vectors {
            debug_assert_eq!(v.len(), len, "mixed vector lengths");
            if v.bits()[p] == 0 {
                zeros += 1;
            } else {
                ones += 1;
            }
        }
        bits.push(if zeros > ones { 0 } else { 1 });
    }
    FeatureVector::from_bits(bits)
}

/// Group `samples` by label over `alphabet` and reduce each group to its
/// mean vector. Returns the mean map plus the alphabet labels that had no
/// samples (reported by the caller, omitted from the map).
pub(crate) fn mean_map(
    samples: &[LabeledSample],
    alphabet: &[Label],
) -> (BTreeMap<Label, FeatureVector>, Vec<Label>) {
    let mut groups: BTreeMap<Label, Vec<&FeatureVector>> = BTreeMap::new();
    for &label in alphabet {
        groups.insert(label, Vec::new());
    }
    for sample in samples {
        if let Some(group) = groups.get_mut(&sample.label) {
            group.push(&sample.vector);
        }
    }

    let mut means = BTreeMap::new();
    let mut empty = Vec::new();
    for (label, group) in groups {
        if group.is_empty() {
            empty.push(label);
        } else {
            means.insert(label, mean_vector(&group));
        }
    }
    (means, empty)
}
