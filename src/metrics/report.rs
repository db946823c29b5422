use std::fmt;
use std::io::{self, Write};

use super::ConfusionMatrix;
use crate::error::MetricsError;

/// Confusion matrix plus the headline metrics, rendered as an ASCII table.
#[derive(Clone, PartialEq, Debug)]
pub struct Report {
    confusion_matrix: ConfusionMatrix,
    accuracy: f64,
    f1_score: f64,
}

impl Report {
    pub fn from(true_labels: &[bool], predicted_labels: &[bool]) -> Result<Self, MetricsError> {
        let confusion_matrix: ConfusionMatrix =
            ConfusionMatrix::from(true_labels, predicted_labels)?;
        let accuracy: f64 = confusion_matrix.accuracy()?;
        let f1_score: f64 = confusion_matrix.f1_score();

        Ok(Self {
            confusion_matrix,
            accuracy,
            f1_score,
        })
    }

    pub fn confusion_matrix(&self) -> &ConfusionMatrix {
        &self.confusion_matrix
    }

    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    pub fn f1_score(&self) -> f64 {
        self.f1_score
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let confusion_matrix: &ConfusionMatrix = &self.confusion_matrix;

        writeln!(f, "      |    true    |")?;
        writeln!(f, " pred | TRUE FALSE |")?;
        writeln!(f, "------|------------|")?;
        writeln!(
            f,
            " TRUE | {:4}  {:4} |",
            confusion_matrix.true_positives(),
            confusion_matrix.false_positives()
        )?;
        writeln!(
            f,
            "FALSE | {:4}  {:4} |",
            confusion_matrix.false_negatives(),
            confusion_matrix.true_negatives()
        )?;
        writeln!(f)?;
        writeln!(f, "Accuracy: {:.4}", self.accuracy)?;
        writeln!(f, "F1-score: {:.4}", self.f1_score)
    }
}

pub fn render_report(
    true_labels: &[bool],
    predicted_labels: &[bool],
) -> Result<String, MetricsError> {
    Ok(Report::from(true_labels, predicted_labels)?.to_string())
}

/// Writes the report to `writer`. Nothing is written if the labels are rejected.
pub fn write_report<W: Write>(
    mut writer: W,
    true_labels: &[bool],
    predicted_labels: &[bool],
) -> Result<(), MetricsError> {
    let report: Report = Report::from(true_labels, predicted_labels)?;
    write!(writer, "{}", report)?;
    writer.flush()?;
    Ok(())
}

pub fn print_report(true_labels: &[bool], predicted_labels: &[bool]) -> Result<(), MetricsError> {
    let stdout: io::Stdout = io::stdout();
    write_report(stdout.lock(), true_labels, predicted_labels)
}
