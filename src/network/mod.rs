pub mod model;
pub mod network;
pub mod neuron;

pub use model::ModelParameters;
pub use network::{ForwardResult, NeuralNetwork};
pub use neuron::Neuron;
