//! # Nimbus Data
//!
//! Labeled dataset loading for the nimbus classifier.
//!
//! A [`Dataset`] is an ordered list of labeled feature vectors. Loaders exist
//! for a plain CSV layout (`label,f1,f2,...`, one sample per line) and a JSON
//! array of `{"label": .., "features": [..]}` objects. Row order is preserved
//! everywhere: the classifier's training is order-sensitive, so the dataset
//! layer never reorders samples.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading or validating a dataset.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: label {value} is not a positive integer")]
    InvalidLabel { line: usize, value: String },

    #[error("line {line}: expected {expected} features, got {actual}")]
    RaggedRow {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("dataset is empty")]
    Empty,
}

/// Result type for dataset operations.
pub type DataResult<T> = Result<T, DataError>;

/// One labeled feature vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Class label: positive dense integers starting at 1.
    pub label: u32,
    pub features: Vec<f64>,
}

/// An ordered collection of labeled samples sharing one dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    /// Build a dataset from rows, validating labels and dimensions.
    pub fn from_rows(samples: Vec<Sample>) -> DataResult<Self> {
        if samples.is_empty() {
            return Err(DataError::Empty);
        }
        let dimension = samples[0].features.len();
        for (i, sample) in samples.iter().enumerate() {
            if sample.label == 0 {
                return Err(DataError::InvalidLabel {
                    line: i + 1,
                    value: "0".to_string(),
                });
            }
            if sample.features.len() != dimension {
                return Err(DataError::RaggedRow {
                    line: i + 1,
                    expected: dimension,
                    actual: sample.features.len(),
                });
            }
        }
        Ok(Self { samples })
    }

    /// Load a CSV file laid out as `label,f1,f2,...`, one sample per line.
    ///
    /// Blank lines and lines starting with `#` are skipped. Reported line
    /// numbers refer to the file, not the row index.
    pub fn load_csv(path: &Path) -> DataResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut samples = Vec::new();
        let mut dimension: Option<usize> = None;

        for (i, raw_line) in content.lines().enumerate() {
            let line_no = i + 1;
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split(',').map(str::trim);
            let label_field = fields.next().unwrap_or_default();
            let label: u32 = label_field.parse().map_err(|_| DataError::InvalidLabel {
                line: line_no,
                value: label_field.to_string(),
            })?;
            if label == 0 {
                return Err(DataError::InvalidLabel {
                    line: line_no,
                    value: label_field.to_string(),
                });
            }

            let features = fields
                .map(|f| {
                    f.parse::<f64>().map_err(|_| DataError::Parse {
                        line: line_no,
                        message: format!("invalid feature value '{}'", f),
                    })
                })
                .collect::<DataResult<Vec<f64>>>()?;
            if features.is_empty() {
                return Err(DataError::Parse {
                    line: line_no,
                    message: "row has a label but no features".to_string(),
                });
            }

            match dimension {
                None => dimension = Some(features.len()),
                Some(expected) if expected != features.len() => {
                    return Err(DataError::RaggedRow {
                        line: line_no,
                        expected,
                        actual: features.len(),
                    });
                }
                Some(_) => {}
            }

            samples.push(Sample { label, features });
        }

        if samples.is_empty() {
            return Err(DataError::Empty);
        }
        Ok(Self { samples })
    }

    /// Load a JSON array of `{"label": .., "features": [..]}` objects.
    pub fn load_json(path: &Path) -> DataResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let samples: Vec<Sample> = serde_json::from_str(&content)?;
        Self::from_rows(samples)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Shared feature dimension, or 0 for a dataset emptied by `split_at`.
    pub fn dimension(&self) -> usize {
        self.samples.first().map_or(0, |s| s.features.len())
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Labels in row order.
    pub fn labels(&self) -> Vec<u32> {
        self.samples.iter().map(|s| s.label).collect()
    }

    /// Feature vectors in row order.
    pub fn features(&self) -> Vec<Vec<f64>> {
        self.samples.iter().map(|s| s.features.clone()).collect()
    }

    /// Group samples by class, preserving row order within each class.
    ///
    /// This is the shape the classifier trains on.
    pub fn samples_by_class(&self) -> BTreeMap<u32, Vec<Vec<f64>>> {
        let mut by_class: BTreeMap<u32, Vec<Vec<f64>>> = BTreeMap::new();
        for sample in &self.samples {
            by_class
                .entry(sample.label)
                .or_default()
                .push(sample.features.clone());
        }
        by_class
    }

    /// Split into a head of `n` rows and the remaining tail.
    pub fn split_at(self, n: usize) -> (Dataset, Dataset) {
        let mut head = self.samples;
        let tail = head.split_off(n.min(head.len()));
        (Dataset { samples: head }, Dataset { samples: tail })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn csv_loads_labels_and_features_in_order() {
        let file = write_temp("1,1.0,0.0\n2,0.0,1.0\n1,0.9,0.1\n");
        let dataset = Dataset::load_csv(file.path()).unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.dimension(), 2);
        assert_eq!(dataset.labels(), vec![1, 2, 1]);
        assert_eq!(dataset.samples()[2].features, vec![0.9, 0.1]);
    }

    #[test]
    fn csv_skips_comments_and_blank_lines() {
        let file = write_temp("# header comment\n\n1,1.0,0.0\n\n# trailing\n2,0.0,1.0\n");
        let dataset = Dataset::load_csv(file.path()).unwrap();
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn csv_reports_bad_feature_with_line_number() {
        let file = write_temp("1,1.0,0.0\n2,oops,1.0\n");
        let err = Dataset::load_csv(file.path()).unwrap_err();
        match err {
            DataError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn csv_rejects_zero_label() {
        let file = write_temp("0,1.0,0.0\n");
        assert!(matches!(
            Dataset::load_csv(file.path()),
            Err(DataError::InvalidLabel { line: 1, .. })
        ));
    }

    #[test]
    fn csv_rejects_ragged_rows() {
        let file = write_temp("1,1.0,0.0\n2,0.5\n");
        assert!(matches!(
            Dataset::load_csv(file.path()),
            Err(DataError::RaggedRow {
                line: 2,
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn empty_file_is_an_error() {
        let file = write_temp("# only comments\n");
        assert!(matches!(Dataset::load_csv(file.path()), Err(DataError::Empty)));
    }

    #[test]
    fn json_round_trip() {
        let file = write_temp(
            r#"[{"label": 1, "features": [1.0, 0.0]}, {"label": 2, "features": [0.0, 1.0]}]"#,
        );
        let dataset = Dataset::load_json(file.path()).unwrap();
        assert_eq!(dataset.labels(), vec![1, 2]);
    }

    #[test]
    fn grouping_preserves_within_class_order() {
        let rows = vec![
            Sample { label: 2, features: vec![0.0, 1.0] },
            Sample { label: 1, features: vec![1.0, 0.0] },
            Sample { label: 2, features: vec![0.1, 0.9] },
            Sample { label: 1, features: vec![0.9, 0.1] },
        ];
        let dataset = Dataset::from_rows(rows).unwrap();
        let by_class = dataset.samples_by_class();

        assert_eq!(by_class[&1], vec![vec![1.0, 0.0], vec![0.9, 0.1]]);
        assert_eq!(by_class[&2], vec![vec![0.0, 1.0], vec![0.1, 0.9]]);
    }

    #[test]
    fn split_at_keeps_order() {
        let rows = (1..=4)
            .map(|i| Sample { label: 1, features: vec![i as f64] })
            .collect();
        let dataset = Dataset::from_rows(rows).unwrap();
        let (head, tail) = dataset.split_at(3);
        assert_eq!(head.len(), 3);
        assert_eq!(tail.len(), 1);
        assert_eq!(tail.samples()[0].features, vec![4.0]);
    }
}
