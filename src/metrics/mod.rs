mod binary_classification;
mod confusion_matrix;
mod metrics_type;
mod report;

pub use binary_classification::{
    accuracy, count_false_negatives, count_false_positives, count_true_negatives,
    count_true_positives, f1_score, precision, recall,
};
pub use confusion_matrix::ConfusionMatrix;
pub use metrics_type::BinaryMetricType;
pub use report::{print_report, render_report, write_report, Report};
