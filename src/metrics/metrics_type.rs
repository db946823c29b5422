#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, PartialOrd, Ord)]
pub enum BinaryMetricType {
    #[default]
    Accuracy,
    Precision,
    Recall,
    F1Score,
}
