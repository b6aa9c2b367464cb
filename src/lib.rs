pub mod activation;
pub mod error;
pub mod network;
pub mod train;

// Convenience re-exports
pub use activation::activation::{sigmoid, sigmoid_derivative};
pub use error::{Error, Result};
pub use network::model::ModelParameters;
pub use network::network::{ForwardResult, NeuralNetwork};
pub use network::neuron::Neuron;
pub use train::config::TrainConfig;
pub use train::event::TrainEvent;
pub use train::outcome::TrainingOutcome;
pub use train::sample::TrainingSample;
