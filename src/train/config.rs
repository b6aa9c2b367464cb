use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Configuration for one `NeuralNetwork::train` run.
///
/// # Fields
/// - `max_epochs`           — upper bound on full passes over the samples
/// - `learning_rate`        — step size for every weight/bias adjustment;
///                            must be finite and positive
/// - `confidence_threshold` — a 1-expected sample counts as learned at or
///                            above this output, a 0-expected sample at or
///                            below its complement
/// - `stop_flag`            — optional atomic flag; when set to `true` from
///                            another thread the loop exits at the top of the
///                            next epoch
pub struct TrainConfig {
    pub max_epochs: usize,
    pub learning_rate: f64,
    pub confidence_threshold: f64,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with no stop flag.
    pub fn new(max_epochs: usize, learning_rate: f64, confidence_threshold: f64) -> Self {
        TrainConfig {
            max_epochs,
            learning_rate,
            confidence_threshold,
            stop_flag: None,
        }
    }
}
