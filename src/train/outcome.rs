use serde::{Deserialize, Serialize};

/// Summary of one training run, returned by `NeuralNetwork::train`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingOutcome {
    /// Epochs actually executed; less than `max_epochs` on early stop.
    pub epochs_run: usize,
    /// Total squared error of the last completed epoch (0.0 if none ran).
    pub final_error: f64,
    /// Whether every sample cleared the confidence threshold.
    pub converged: bool,
    /// One total-error entry per epoch, in order.
    pub error_history: Vec<f64>,
}
