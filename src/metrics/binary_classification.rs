use log::error;

use crate::error::MetricsError;

pub(crate) fn check_same_length(
    true_labels: &[bool],
    predicted_labels: &[bool],
) -> Result<(), MetricsError> {
    if true_labels.len() != predicted_labels.len() {
        error!(
            "Length mismatch between {} true labels and {} predicted labels",
            true_labels.len(),
            predicted_labels.len()
        );
        return Err(MetricsError::LengthMismatch {
            true_len: true_labels.len(),
            predicted_len: predicted_labels.len(),
        });
    }
    Ok(())
}

fn count_outcome(
    true_labels: &[bool],
    predicted_labels: &[bool],
    truth: bool,
    prediction: bool,
) -> Result<usize, MetricsError> {
    check_same_length(true_labels, predicted_labels)?;

    Ok(true_labels
        .iter()
        .zip(predicted_labels.iter())
        .filter(|&(&true_label, &predicted_label)| {
            true_label == truth && predicted_label == prediction
        })
        .count())
}

pub(crate) fn accuracy_from_counts(
    true_positives: usize,
    true_negatives: usize,
    n_samples: usize,
) -> Result<f64, MetricsError> {
    if n_samples == 0 {
        error!("Accuracy requested over an empty label sequence");
        return Err(MetricsError::EmptyInput);
    }
    Ok((true_positives + true_negatives) as f64 / n_samples as f64)
}

pub(crate) fn precision_from_counts(true_positives: usize, false_positives: usize) -> f64 {
    let denominator: f64 = (true_positives + false_positives) as f64;
    if denominator > 0.0 {
        true_positives as f64 / denominator
    } else {
        0.0
    }
}

pub(crate) fn recall_from_counts(true_positives: usize, false_negatives: usize) -> f64 {
    let denominator: f64 = (true_positives + false_negatives) as f64;
    if denominator > 0.0 {
        true_positives as f64 / denominator
    } else {
        0.0
    }
}

/// Zero true positives short-circuit to 0.0, even where precision or recall
/// would be undefined.
pub(crate) fn f1_from_counts(
    true_positives: usize,
    false_positives: usize,
    false_negatives: usize,
) -> f64 {
    if true_positives == 0 {
        return 0.0;
    }

    let precision: f64 = precision_from_counts(true_positives, false_positives);
    let recall: f64 = recall_from_counts(true_positives, false_negatives);

    2.0 * precision * recall / (precision + recall)
}

/// Number of samples labelled false but predicted true.
pub fn count_false_positives(
    true_labels: &[bool],
    predicted_labels: &[bool],
) -> Result<usize, MetricsError> {
    count_outcome(true_labels, predicted_labels, false, true)
}

/// Number of samples labelled true and predicted true.
pub fn count_true_positives(
    true_labels: &[bool],
    predicted_labels: &[bool],
) -> Result<usize, MetricsError> {
    count_outcome(true_labels, predicted_labels, true, true)
}

/// Number of samples labelled true but predicted false.
pub fn count_false_negatives(
    true_labels: &[bool],
    predicted_labels: &[bool],
) -> Result<usize, MetricsError> {
    count_outcome(true_labels, predicted_labels, true, false)
}

/// Number of samples labelled false and predicted false.
pub fn count_true_negatives(
    true_labels: &[bool],
    predicted_labels: &[bool],
) -> Result<usize, MetricsError> {
    count_outcome(true_labels, predicted_labels, false, false)
}

/// Fraction of samples whose prediction matches the true label.
///
/// # Arguments
/// * `true_labels` ground truth, one entry per sample
/// * `predicted_labels` predictions, same length as `true_labels`
///
/// Returns `MetricsError::EmptyInput` when there are no samples.
pub fn accuracy(true_labels: &[bool], predicted_labels: &[bool]) -> Result<f64, MetricsError> {
    let true_positives: usize = count_true_positives(true_labels, predicted_labels)?;
    let true_negatives: usize = count_true_negatives(true_labels, predicted_labels)?;

    accuracy_from_counts(true_positives, true_negatives, true_labels.len())
}

pub fn precision(true_labels: &[bool], predicted_labels: &[bool]) -> Result<f64, MetricsError> {
    let true_positives: usize = count_true_positives(true_labels, predicted_labels)?;
    let false_positives: usize = count_false_positives(true_labels, predicted_labels)?;

    Ok(precision_from_counts(true_positives, false_positives))
}

pub fn recall(true_labels: &[bool], predicted_labels: &[bool]) -> Result<f64, MetricsError> {
    let true_positives: usize = count_true_positives(true_labels, predicted_labels)?;
    let false_negatives: usize = count_false_negatives(true_labels, predicted_labels)?;

    Ok(recall_from_counts(true_positives, false_negatives))
}

/// Harmonic mean of precision and recall.
///
/// # Arguments
/// * `true_labels` ground truth, one entry per sample
/// * `predicted_labels` predictions, same length as `true_labels`
///
/// Returns 0.0 whenever there is no true positive, which includes empty input.
pub fn f1_score(true_labels: &[bool], predicted_labels: &[bool]) -> Result<f64, MetricsError> {
    let true_positives: usize = count_true_positives(true_labels, predicted_labels)?;
    let false_positives: usize = count_false_positives(true_labels, predicted_labels)?;
    let false_negatives: usize = count_false_negatives(true_labels, predicted_labels)?;

    Ok(f1_from_counts(
        true_positives,
        false_positives,
        false_negatives,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: bool = true;
    const F: bool = false;

    #[test]
    fn test_counts_one_of_each() {
        let true_labels: Vec<bool> = vec![T, T, F, F];
        let predicted_labels: Vec<bool> = vec![T, F, F, T];

        assert_eq!(count_true_positives(&true_labels, &predicted_labels).unwrap(), 1);
        assert_eq!(count_false_positives(&true_labels, &predicted_labels).unwrap(), 1);
        assert_eq!(count_false_negatives(&true_labels, &predicted_labels).unwrap(), 1);
        assert_eq!(count_true_negatives(&true_labels, &predicted_labels).unwrap(), 1);
        assert_eq!(accuracy(&true_labels, &predicted_labels).unwrap(), 0.5);
        assert!((f1_score(&true_labels, &predicted_labels).unwrap() - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_perfect_predictions() {
        let true_labels: Vec<bool> = vec![T, T, T];
        let predicted_labels: Vec<bool> = vec![T, T, T];

        assert_eq!(count_true_positives(&true_labels, &predicted_labels).unwrap(), 3);
        assert_eq!(count_false_positives(&true_labels, &predicted_labels).unwrap(), 0);
        assert_eq!(count_false_negatives(&true_labels, &predicted_labels).unwrap(), 0);
        assert_eq!(count_true_negatives(&true_labels, &predicted_labels).unwrap(), 0);
        assert_eq!(accuracy(&true_labels, &predicted_labels).unwrap(), 1.0);
        assert_eq!(f1_score(&true_labels, &predicted_labels).unwrap(), 1.0);
    }

    #[test]
    fn test_no_true_positives_gives_zero_f1() {
        let true_labels: Vec<bool> = vec![F, F];
        let predicted_labels: Vec<bool> = vec![T, T];

        assert_eq!(count_true_positives(&true_labels, &predicted_labels).unwrap(), 0);
        assert_eq!(count_false_positives(&true_labels, &predicted_labels).unwrap(), 2);
        assert_eq!(accuracy(&true_labels, &predicted_labels).unwrap(), 0.0);
        assert_eq!(f1_score(&true_labels, &predicted_labels).unwrap(), 0.0);
    }

    #[test]
    fn test_all_negative_gives_zero_f1() {
        // No positives anywhere: precision and recall are both 0/0.
        let true_labels: Vec<bool> = vec![F, F, F];
        let predicted_labels: Vec<bool> = vec![F, F, F];

        assert_eq!(accuracy(&true_labels, &predicted_labels).unwrap(), 1.0);
        assert_eq!(f1_score(&true_labels, &predicted_labels).unwrap(), 0.0);
        assert_eq!(precision(&true_labels, &predicted_labels).unwrap(), 0.0);
        assert_eq!(recall(&true_labels, &predicted_labels).unwrap(), 0.0);
    }

    #[test]
    fn test_empty_input() {
        let empty: Vec<bool> = vec![];

        assert!(matches!(
            accuracy(&empty, &empty),
            Err(MetricsError::EmptyInput)
        ));
        assert_eq!(count_true_positives(&empty, &empty).unwrap(), 0);
        assert_eq!(count_true_negatives(&empty, &empty).unwrap(), 0);
        assert_eq!(f1_score(&empty, &empty).unwrap(), 0.0);
    }

    #[test]
    fn test_length_mismatch_rejected_everywhere() {
        let true_labels: Vec<bool> = vec![T, F, T];
        let predicted_labels: Vec<bool> = vec![T, F];

        fn is_mismatch<V>(result: Result<V, MetricsError>) -> bool {
            matches!(
                result,
                Err(MetricsError::LengthMismatch {
                    true_len: 3,
                    predicted_len: 2
                })
            )
        }

        assert!(is_mismatch(count_true_positives(&true_labels, &predicted_labels)));
        assert!(is_mismatch(count_false_positives(&true_labels, &predicted_labels)));
        assert!(is_mismatch(count_false_negatives(&true_labels, &predicted_labels)));
        assert!(is_mismatch(count_true_negatives(&true_labels, &predicted_labels)));
        assert!(is_mismatch(accuracy(&true_labels, &predicted_labels)));
        assert!(is_mismatch(precision(&true_labels, &predicted_labels)));
        assert!(is_mismatch(recall(&true_labels, &predicted_labels)));
        assert!(is_mismatch(f1_score(&true_labels, &predicted_labels)));
    }

    #[test]
    fn test_precision_and_recall() {
        // TP = 2, FP = 1, FN = 2, TN = 1
        let true_labels: Vec<bool> = vec![T, T, T, T, F, F];
        let predicted_labels: Vec<bool> = vec![T, T, F, F, T, F];

        let precision: f64 = precision(&true_labels, &predicted_labels).unwrap();
        let recall: f64 = recall(&true_labels, &predicted_labels).unwrap();
        let f1_score: f64 = f1_score(&true_labels, &predicted_labels).unwrap();

        assert!((precision - 2.0 / 3.0).abs() < 1e-10);
        assert!((recall - 0.5).abs() < 1e-10);
        assert!((f1_score - 4.0 / 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_swap_exchanges_false_positives_and_negatives() {
        let true_labels: Vec<bool> = vec![T, T, T, T, F, F];
        let predicted_labels: Vec<bool> = vec![T, T, F, F, T, F];

        assert_eq!(
            count_false_positives(&true_labels, &predicted_labels).unwrap(),
            count_false_negatives(&predicted_labels, &true_labels).unwrap()
        );
        assert_eq!(
            count_false_negatives(&true_labels, &predicted_labels).unwrap(),
            count_false_positives(&predicted_labels, &true_labels).unwrap()
        );
        assert_eq!(
            accuracy(&true_labels, &predicted_labels).unwrap(),
            accuracy(&predicted_labels, &true_labels).unwrap()
        );
        assert_eq!(
            precision(&true_labels, &predicted_labels).unwrap(),
            recall(&predicted_labels, &true_labels).unwrap()
        );
        // F1 is symmetric in precision and recall, so a swap leaves it unchanged.
        assert_eq!(
            f1_score(&true_labels, &predicted_labels).unwrap(),
            f1_score(&predicted_labels, &true_labels).unwrap()
        );
    }

    #[test]
    fn test_f1_unchanged_by_swap_with_unequal_errors() {
        // TP = 1, FP = 1, FN = 3
        let true_labels: Vec<bool> = vec![T, T, T, T, F, F];
        let predicted_labels: Vec<bool> = vec![T, F, F, F, T, F];

        let forward: f64 = f1_score(&true_labels, &predicted_labels).unwrap();
        let swapped: f64 = f1_score(&predicted_labels, &true_labels).unwrap();

        assert!((forward - 1.0 / 3.0).abs() < 1e-10);
        assert_eq!(forward, swapped);
    }
}
