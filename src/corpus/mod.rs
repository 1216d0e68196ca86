//! Corpus aggregation: vectorize a labeled image set and derive per-label
//! majority-vote mean vectors.
//!
//! Overview
//! - Validates parameters up-front; a bad grid size or alphabet fails the
//!   whole build before any pixel is read.
//! - Fans the per-sample crop+vectorize work out over rayon; samples are
//!   independent, and the order-preserving collect keeps output identical
//!   to a sequential pass.
//! - Per-sample failures (decode, degenerate crop, oversized grid, label
//!   outside the alphabet) skip that sample with a warning and never abort
//!   the build.
//! - Labels from the alphabet that end up with no samples are warned
//!   about, recorded on the corpus, and omitted from the mean map.
//!
//! Modules
//! - [`params`] – build parameters and fatal configuration errors.
//! - [`mean`] – the majority-vote reduction.
//! - [`sources`] – directory listing and decoding.

pub mod mean;
pub mod params;
pub mod sources;

pub use mean::mean_vector;
pub use params::{ConfigError, CorpusParams};
pub use sources::{list_corpus_dir, load_samples, Sample};

use crate::crop::crop;
use crate::grid::vectorize;
use crate::types::{Corpus, LabeledSample};
use log::{debug, warn};
use rayon::prelude::*;
use std::path::Path;

/// Build a corpus from decoded samples.
///
/// Samples are consumed in the order supplied; the result is deterministic
/// for a fixed input sequence.
pub fn build_corpus<I>(samples: I, params: &CorpusParams) -> Result<Corpus, ConfigError>
where
    I: IntoIterator<Item = Sample>,
{
    params.validate()?;
    let alphabet = params.alphabet();
    let samples: Vec<Sample> = samples.into_iter().collect();
    debug!(
        "building corpus: {} samples, grid_size={}, crop={}",
        samples.len(),
        params.grid_size,
        params.crop
    );

    let vectorized: Vec<Result<LabeledSample, (String, String)>> = samples
        .into_par_iter()
        .map(|sample| vectorize_sample(sample, params, &alphabet))
        .collect();

    let mut kept = Vec::with_capacity(vectorized.len());
    let mut skipped = 0usize;
    for outcome in vectorized {
        match outcome {
            Ok(sample) => kept.push(sample),
            Err((source, cause)) => {
                warn!("skipping {source}: {cause}");
                skipped += 1;
            }
        }
    }

    let (means, empty_labels) = mean::mean_map(&kept, &alphabet);
    for &label in &empty_labels {
        warn!("label '{label}' has no samples; omitted from the mean map");
    }

    Ok(Corpus {
        grid_size: params.grid_size,
        samples: kept,
        means,
        empty_labels,
        skipped,
    })
}

/// List, decode, and aggregate every labeled image under `dir`.
pub fn build_corpus_from_dir(dir: &Path, params: &CorpusParams) -> Result<Corpus, String> {
    params.validate().map_err(|e| e.to_string())?;
    let (samples, undecoded) = load_samples(dir)?;
    let mut corpus = build_corpus(samples, params).map_err(|e| e.to_string())?;
    corpus.skipped += undecoded;
    Ok(corpus)
}

fn vectorize_sample(
    sample: Sample,
    params: &CorpusParams,
    alphabet: &[char],
) -> Result<LabeledSample, (String, String)> {
    let Sample {
        label,
        source,
        image,
    } = sample;
    if !alphabet.contains(&label) {
        return Err((source, format!("label '{label}' outside the alphabet")));
    }
    let view = image.as_view();
    let vector = if params.crop {
        let cropped = crop(&view).map_err(|e| (source.clone(), e.to_string()))?;
        vectorize(&cropped, params.grid_size)
    } else {
        vectorize(&view, params.grid_size)
    }
    .map_err(|e| (source.clone(), e.to_string()))?;
    Ok(LabeledSample {
        label,
        source,
        vector,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::RgbImageBuf;

    /// White canvas with a dark filled rectangle `[x0, x1) × [y0, y1)`.
    fn inked_sample(label: char, source: &str, bounds: (usize, usize, usize, usize)) -> Sample {
        let (x0, x1, y0, y1) = bounds;
        let mut data = vec![255u8; 32 * 32 * 3];
        for y in y0..y1 {
            for x in x0..x1 {
                let i = (y * 32 + x) * 3;
                data[i..i + 3].copy_from_slice(&[0, 0, 0]);
            }
        }
        Sample {
            label,
            source: source.to_string(),
            image: RgbImageBuf::new(32, 32, data),
        }
    }

    fn test_params() -> CorpusParams {
        CorpusParams {
            grid_size: 2,
            crop: false,
            labels: "0123456789".to_string(),
        }
    }

    #[test]
    fn samples_group_under_their_labels() {
        let samples = vec![
            inked_sample('3', "3_a.png", (0, 10, 0, 10)),
            inked_sample('3', "3_b.png", (0, 10, 0, 10)),
            inked_sample('7', "7_a.png", (20, 32, 20, 32)),
        ];
        let corpus = build_corpus(samples, &test_params()).unwrap();
        assert_eq!(corpus.samples.len(), 3);
        assert_eq!(corpus.means.len(), 2);
        assert_eq!(corpus.means[&'3'].bits(), &[1, 0, 0, 0]);
        assert_eq!(corpus.means[&'7'].bits(), &[0, 0, 0, 1]);
        assert_eq!(corpus.empty_labels.len(), 8);
        assert_eq!(corpus.skipped, 0);
    }

    #[test]
    fn failing_samples_are_skipped_not_fatal() {
        let params = CorpusParams {
            crop: true,
            ..test_params()
        };
        let samples = vec![
            // too sparse to crop: 3 marked columns
            inked_sample('1', "1_sparse.png", (10, 13, 5, 25)),
            // crops cleanly to a 2x2 ink core
            inked_sample('2', "2_ok.png", (8, 18, 6, 16)),
        ];
        let corpus = build_corpus(samples, &params).unwrap();
        assert_eq!(corpus.samples.len(), 1);
        assert_eq!(corpus.samples[0].label, '2');
        assert_eq!(corpus.skipped, 1);
    }

    #[test]
    fn labels_outside_the_alphabet_are_skipped() {
        let samples = vec![
            inked_sample('x', "x_a.png", (0, 10, 0, 10)),
            inked_sample('4', "4_a.png", (0, 10, 0, 10)),
        ];
        let corpus = build_corpus(samples, &test_params()).unwrap();
        assert_eq!(corpus.samples.len(), 1);
        assert_eq!(corpus.samples[0].label, '4');
        assert_eq!(corpus.skipped, 1);
    }

    #[test]
    fn invalid_grid_size_rejects_the_whole_build() {
        let params = CorpusParams {
            grid_size: 0,
            ..test_params()
        };
        let samples = vec![inked_sample('3', "3_a.png", (0, 10, 0, 10))];
        assert_eq!(
            build_corpus(samples, &params),
            Err(ConfigError::InvalidGridSize { grid_size: 0 })
        );
    }

    #[test]
    fn build_is_deterministic() {
        let make = || {
            vec![
                inked_sample('3', "3_a.png", (0, 10, 0, 10)),
                inked_sample('3', "3_b.png", (0, 16, 0, 16)),
                inked_sample('7', "7_a.png", (16, 32, 0, 32)),
            ]
        };
        let first = build_corpus(make(), &test_params()).unwrap();
        let second = build_corpus(make(), &test_params()).unwrap();
        assert_eq!(first, second);
    }
}
