//! # Nimbus Eval
//!
//! Evaluation of predicted against true labels: accuracy, per-class
//! precision/recall, and a confusion matrix. Consumes plain label slices, so
//! it has no dependency on the classifier itself.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Errors that can occur while evaluating predictions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("label count mismatch: {truth} true labels vs {predicted} predictions")]
    LengthMismatch { truth: usize, predicted: usize },

    #[error("no labels to evaluate")]
    Empty,
}

/// Result type for evaluation operations.
pub type EvalResult<T> = Result<T, EvalError>;

/// A square confusion matrix over the union of observed labels.
///
/// Rows are true labels, columns are predicted labels, both in ascending
/// label order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfusionMatrix {
    /// Observed labels in ascending order; indexes both axes of `counts`.
    labels: Vec<u32>,
    /// `counts[i][j]` = samples with true label `labels[i]` predicted as
    /// `labels[j]`.
    counts: Vec<Vec<u64>>,
    total: u64,
    correct: u64,
}

impl ConfusionMatrix {
    /// Build from aligned slices of true and predicted labels.
    pub fn from_labels(truth: &[u32], predicted: &[u32]) -> EvalResult<Self> {
        if truth.len() != predicted.len() {
            return Err(EvalError::LengthMismatch {
                truth: truth.len(),
                predicted: predicted.len(),
            });
        }
        if truth.is_empty() {
            return Err(EvalError::Empty);
        }

        // BTreeSet iteration yields the union of labels in ascending order.
        let labels: Vec<u32> = truth
            .iter()
            .chain(predicted.iter())
            .copied()
            .collect::<std::collections::BTreeSet<u32>>()
            .into_iter()
            .collect();

        let index: BTreeMap<u32, usize> =
            labels.iter().enumerate().map(|(i, &l)| (l, i)).collect();
        let n = labels.len();
        let mut counts = vec![vec![0u64; n]; n];
        let mut correct = 0;

        for (&t, &p) in truth.iter().zip(predicted.iter()) {
            counts[index[&t]][index[&p]] += 1;
            if t == p {
                correct += 1;
            }
        }

        Ok(Self {
            labels,
            counts,
            total: truth.len() as u64,
            correct,
        })
    }

    /// Labels indexing both axes, ascending.
    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    /// Count of samples with true label `truth` predicted as `predicted`.
    pub fn count(&self, truth: u32, predicted: u32) -> u64 {
        let t = self.labels.iter().position(|&l| l == truth);
        let p = self.labels.iter().position(|&l| l == predicted);
        match (t, p) {
            (Some(t), Some(p)) => self.counts[t][p],
            _ => 0,
        }
    }

    /// Fraction of samples predicted correctly.
    pub fn accuracy(&self) -> f64 {
        self.correct as f64 / self.total as f64
    }

    /// Per-class recall: correct predictions over true occurrences.
    ///
    /// Classes that never occur as a true label are omitted.
    pub fn per_class_recall(&self) -> BTreeMap<u32, f64> {
        let mut recall = BTreeMap::new();
        for (i, &label) in self.labels.iter().enumerate() {
            let row_total: u64 = self.counts[i].iter().sum();
            if row_total > 0 {
                recall.insert(label, self.counts[i][i] as f64 / row_total as f64);
            }
        }
        recall
    }

    /// Per-class precision: correct predictions over predicted occurrences.
    ///
    /// Classes that are never predicted are omitted.
    pub fn per_class_precision(&self) -> BTreeMap<u32, f64> {
        let mut precision = BTreeMap::new();
        for (j, &label) in self.labels.iter().enumerate() {
            let col_total: u64 = self.counts.iter().map(|row| row[j]).sum();
            if col_total > 0 {
                precision.insert(label, self.counts[j][j] as f64 / col_total as f64);
            }
        }
        precision
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "true\\pred")?;
        for label in &self.labels {
            write!(f, " {:>6}", label)?;
        }
        writeln!(f)?;
        for (i, label) in self.labels.iter().enumerate() {
            write!(f, "{:>9}", label)?;
            for count in &self.counts[i] {
                write!(f, " {:>6}", count)?;
            }
            if i + 1 < self.labels.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
