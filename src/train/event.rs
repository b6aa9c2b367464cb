/// Notifications emitted during `NeuralNetwork::train_with_observer`.
///
/// Delivery is synchronous, inline on the training thread. Observers that
/// block stall the epoch loop.
#[derive(Debug, Clone, PartialEq)]
pub enum TrainEvent {
    /// Emitted once per completed epoch. `total_error` is the sum of squared
    /// output errors over all samples in that epoch (not averaged).
    Progress { epoch: usize, total_error: f64 },
    /// Emitted at most once, only when every sample cleared the confidence
    /// threshold and training stopped early.
    Converged {
        confidence_threshold: f64,
        epoch: usize,
    },
    /// Emitted exactly once after the epoch loop, carrying one total-error
    /// entry per epoch actually run.
    Completed { errors: Vec<f64> },
}
