use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Contract violations surfaced by the network core. These are caller bugs,
/// not transient conditions; nothing here is retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("input size does not match weight size (expected {expected}, got {actual})")]
    InputSizeMismatch { expected: usize, actual: usize },

    #[error("model shape does not match network topology: {0}")]
    ShapeMismatch(String),

    #[error("training set is empty")]
    EmptyTrainingSet,

    #[error("learning rate must be finite and positive, got {0}")]
    InvalidLearningRate(f64),
}
