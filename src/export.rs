//! Training-table CSV export.
//!
//! One header row `a(1x1),a(1x2),…,a(NxN),class`, then one row per sample
//! with the N² bit values followed by the class label. Exports the full
//! sample table, not the mean map; downstream data-mining tools expect
//! every observation.

use crate::image::io::ensure_parent_dir;
use crate::types::Corpus;
use std::io::Write;
use std::path::Path;

/// Write the sample table of `corpus` as CSV to `path`, creating parent
/// directories.
pub fn write_training_csv(path: &Path, corpus: &Corpus) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let writer = csv::Writer::from_path(path)
        .map_err(|e| format!("Failed to create {}: {e}", path.display()))?;
    write_training_table(writer, corpus)
        .map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

/// Write the sample table of `corpus` as CSV to an arbitrary sink.
pub fn write_training_table<W: Write>(
    mut writer: csv::Writer<W>,
    corpus: &Corpus,
) -> Result<(), csv::Error> {
    let n = corpus.grid_size;
    let mut header = Vec::with_capacity(n * n + 1);
    for i in 1..=n {
        for j in 1..=n {
            header.push(format!("a({i}x{j})"));
        }
    }
    header.push("class".to_string());
    writer.write_record(&header)?;

    for sample in &corpus.samples {
        let mut record = Vec::with_capacity(n * n + 1);
        for bit in sample.vector.bits() {
            record.push(bit.to_string());
        }
        record.push(sample.label.to_string());
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FeatureVector, LabeledSample};
    use std::collections::BTreeMap;

    fn tiny_corpus() -> Corpus {
        let samples = vec![
            LabeledSample {
                label: '3',
                source: "3_a.png".to_string(),
                vector: FeatureVector::from_bits(vec![1, 0, 0, 1]),
            },
            LabeledSample {
                label: '7',
                source: "7_a.png".to_string(),
                vector: FeatureVector::from_bits(vec![0, 1, 1, 0]),
            },
        ];
        Corpus {
            grid_size: 2,
            samples,
            means: BTreeMap::new(),
            empty_labels: Vec::new(),
            skipped: 0,
        }
    }

    #[test]
    fn header_and_rows_match_the_table_layout() {
        let mut out = Vec::new();
        write_training_table(csv::Writer::from_writer(&mut out), &tiny_corpus()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "a(1x1),a(1x2),a(2x1),a(2x2),class\n1,0,0,1,3\n0,1,1,0,7\n"
        );
    }

    #[test]
    fn file_export_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/data.csv");
        write_training_csv(&path, &tiny_corpus()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("a(1x1),"));
        assert_eq!(text.lines().count(), 3);
    }
}
