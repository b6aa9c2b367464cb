use rand::Rng;

use crate::activation::activation::sigmoid;
use crate::error::{Error, Result};

/// A single neuron: weighted inputs, a bias, and a sigmoid activation.
///
/// The weight count is fixed at construction. The weight/bias accessors use
/// plain index contracts; out-of-bounds indexing panics like any slice access.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<f64>,
    bias: f64,
    last_output: f64,
}

impl Neuron {
    /// Creates a neuron with `input_count` weights and a bias, each drawn
    /// independently and uniformly from [-1.0, 1.0).
    pub fn new<R: Rng + ?Sized>(input_count: usize, rng: &mut R) -> Neuron {
        let weights = (0..input_count)
            .map(|_| rng.gen::<f64>() * 2.0 - 1.0)
            .collect();
        let bias = rng.gen::<f64>() * 2.0 - 1.0;

        Neuron {
            weights,
            bias,
            last_output: 0.0,
        }
    }

    pub fn input_count(&self) -> usize {
        self.weights.len()
    }

    /// The cached post-activation value of the most recent `compute` call.
    pub fn last_output(&self) -> f64 {
        self.last_output
    }

    /// Forward computation: `sigmoid(Σ inputs[i] * weights[i] + bias)`.
    /// Caches the activation before returning it. A length mismatch fails
    /// without touching the cached value.
    pub fn compute(&mut self, inputs: &[f64]) -> Result<f64> {
        if inputs.len() != self.weights.len() {
            return Err(Error::InputSizeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }

        let mut sum = self.bias;
        for (input, weight) in inputs.iter().zip(self.weights.iter()) {
            sum += input * weight;
        }

        self.last_output = sigmoid(sum);
        Ok(self.last_output)
    }

    pub fn weight(&self, index: usize) -> f64 {
        self.weights[index]
    }

    pub fn set_weight(&mut self, index: usize, value: f64) {
        self.weights[index] = value;
    }

    pub fn adjust_weight(&mut self, index: usize, delta: f64) {
        self.weights[index] += delta;
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn set_bias(&mut self, value: f64) {
        self.bias = value;
    }

    pub fn adjust_bias(&mut self, delta: f64) {
        self.bias += delta;
    }
}
