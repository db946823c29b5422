use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error(
        "Label sequences differ in length: {true_len} true labels, {predicted_len} predicted labels"
    )]
    LengthMismatch { true_len: usize, predicted_len: usize },

    #[error("Cannot compute accuracy over zero samples")]
    EmptyInput,

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
