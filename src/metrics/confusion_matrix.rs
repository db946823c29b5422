use log::debug;
use ndarray::Array2;

use super::binary_classification::{
    accuracy_from_counts, check_same_length, f1_from_counts, precision_from_counts,
    recall_from_counts,
};
use super::BinaryMetricType;
use crate::error::MetricsError;

const TRUE_INDEX: usize = 0;
const FALSE_INDEX: usize = 1;

fn label_index(label: bool) -> usize {
    if label {
        TRUE_INDEX
    } else {
        FALSE_INDEX
    }
}

/// Two-by-two confusion matrix for boolean labels.
///
/// `matrix[[predicted, truth]]` holds the sample count, with index 0 for `true`
/// and index 1 for `false`, so the first row is TP/FP and the second FN/TN.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ConfusionMatrix {
    matrix: Array2<usize>,
    n_samples: usize,

    true_positives: usize,
    false_positives: usize,
    false_negatives: usize,
    true_negatives: usize,
}

impl ConfusionMatrix {
    /// # Arguments
    /// * `true_labels` ground truth, one entry per sample
    /// * `predicted_labels` predictions, same length as `true_labels`
    pub fn from(true_labels: &[bool], predicted_labels: &[bool]) -> Result<Self, MetricsError> {
        check_same_length(true_labels, predicted_labels)?;

        let mut matrix: Array2<usize> = Array2::zeros((2, 2));
        for (&true_label, &predicted_label) in true_labels.iter().zip(predicted_labels.iter()) {
            matrix[[label_index(predicted_label), label_index(true_label)]] += 1;
        }

        let confusion_matrix: ConfusionMatrix = Self {
            true_positives: matrix[[TRUE_INDEX, TRUE_INDEX]],
            false_positives: matrix[[TRUE_INDEX, FALSE_INDEX]],
            false_negatives: matrix[[FALSE_INDEX, TRUE_INDEX]],
            true_negatives: matrix[[FALSE_INDEX, FALSE_INDEX]],
            n_samples: true_labels.len(),
            matrix,
        };

        debug!(
            "Confusion matrix over {} samples: tp={} fp={} fn={} tn={}",
            confusion_matrix.n_samples,
            confusion_matrix.true_positives,
            confusion_matrix.false_positives,
            confusion_matrix.false_negatives,
            confusion_matrix.true_negatives
        );

        Ok(confusion_matrix)
    }

    pub fn matrix(&self) -> &Array2<usize> {
        &self.matrix
    }

    pub fn total(&self) -> usize {
        self.n_samples
    }

    pub fn true_positives(&self) -> usize {
        self.true_positives
    }

    pub fn false_positives(&self) -> usize {
        self.false_positives
    }

    pub fn false_negatives(&self) -> usize {
        self.false_negatives
    }

    pub fn true_negatives(&self) -> usize {
        self.true_negatives
    }

    /// Fails with `MetricsError::EmptyInput` on a matrix built from no samples.
    pub fn accuracy(&self) -> Result<f64, MetricsError> {
        accuracy_from_counts(self.true_positives, self.true_negatives, self.n_samples)
    }

    pub fn precision(&self) -> f64 {
        precision_from_counts(self.true_positives, self.false_positives)
    }

    pub fn recall(&self) -> f64 {
        recall_from_counts(self.true_positives, self.false_negatives)
    }

    pub fn f1_score(&self) -> f64 {
        f1_from_counts(
            self.true_positives,
            self.false_positives,
            self.false_negatives,
        )
    }

    pub fn get_metric(&self, metric_type: BinaryMetricType) -> Result<f64, MetricsError> {
        match metric_type {
            BinaryMetricType::Accuracy => self.accuracy(),
            BinaryMetricType::Precision => Ok(self.precision()),
            BinaryMetricType::Recall => Ok(self.recall()),
            BinaryMetricType::F1Score => Ok(self.f1_score()),
        }
    }
}
