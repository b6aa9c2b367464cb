use std::sync::atomic::Ordering;

use rand::Rng;

use crate::error::{Error, Result};
use crate::network::model::ModelParameters;
use crate::network::neuron::Neuron;
use crate::train::config::TrainConfig;
use crate::train::event::TrainEvent;
use crate::train::outcome::TrainingOutcome;
use crate::train::sample::TrainingSample;

/// One forward pass with the intermediate values backpropagation needs.
/// Created fresh per pass and never retained by the network.
#[derive(Debug, Clone)]
pub struct ForwardResult {
    pub inputs: Vec<f64>,
    pub hidden_outputs: Vec<f64>,
    pub output: f64,
}

/// A feedforward network with one hidden layer and a single output neuron.
/// Input and hidden sizes are fixed for the lifetime of the object.
///
/// Not safe for concurrent mutation: `train`, `compute` and `import_model`
/// must not run at the same time on one instance.
pub struct NeuralNetwork {
    hidden: Vec<Neuron>,
    output: Neuron,
}

impl NeuralNetwork {
    /// Creates a network with randomly initialized parameters drawn from the
    /// thread-local generator.
    pub fn new(input_count: usize, hidden_count: usize) -> NeuralNetwork {
        NeuralNetwork::with_rng(input_count, hidden_count, &mut rand::thread_rng())
    }

    /// Creates a network drawing its initial parameters from `rng`, so that
    /// seeded generators give reproducible initializations.
    pub fn with_rng<R: Rng + ?Sized>(
        input_count: usize,
        hidden_count: usize,
        rng: &mut R,
    ) -> NeuralNetwork {
        let hidden = (0..hidden_count)
            .map(|_| Neuron::new(input_count, rng))
            .collect();
        let output = Neuron::new(hidden_count, rng);

        NeuralNetwork { hidden, output }
    }

    pub fn input_count(&self) -> usize {
        self.hidden.first().map_or(0, Neuron::input_count)
    }

    pub fn hidden_count(&self) -> usize {
        self.hidden.len()
    }

    /// Computes the network output for the given inputs. Parameters are never
    /// modified; only the per-neuron cached activations change.
    pub fn compute(&mut self, inputs: &[f64]) -> Result<f64> {
        let mut hidden_outputs = Vec::with_capacity(self.hidden.len());
        for neuron in &mut self.hidden {
            hidden_outputs.push(neuron.compute(inputs)?);
        }
        self.output.compute(&hidden_outputs)
    }

    /// Same pass as `compute`, but retains the inputs and per-hidden-neuron
    /// activations that the weight updates need.
    pub fn forward_with_internals(&mut self, inputs: &[f64]) -> Result<ForwardResult> {
        let mut hidden_outputs = Vec::with_capacity(self.hidden.len());
        for neuron in &mut self.hidden {
            hidden_outputs.push(neuron.compute(inputs)?);
        }
        let output = self.output.compute(&hidden_outputs)?;

        Ok(ForwardResult {
            inputs: inputs.to_vec(),
            hidden_outputs,
            output,
        })
    }

    /// Trains on `samples` until every sample clears the confidence threshold
    /// or `config.max_epochs` is exhausted. See `train_with_observer`.
    pub fn train(
        &mut self,
        samples: &[TrainingSample],
        config: &TrainConfig,
    ) -> Result<TrainingOutcome> {
        self.train_with_observer(samples, config, |_| {})
    }

    /// Online backpropagation over `samples` in caller order, one update per
    /// sample. `on_event` is invoked inline on the calling thread: once per
    /// completed epoch with `Progress`, at most once with `Converged` on
    /// early stop, and exactly once with `Completed` carrying the full error
    /// history. Callers must not block inside the callback.
    ///
    /// If `config.stop_flag` is set from another thread, the loop exits at
    /// the top of the next epoch with `converged: false`.
    pub fn train_with_observer<F>(
        &mut self,
        samples: &[TrainingSample],
        config: &TrainConfig,
        mut on_event: F,
    ) -> Result<TrainingOutcome>
    where
        F: FnMut(TrainEvent),
    {
        if samples.is_empty() {
            return Err(Error::EmptyTrainingSet);
        }
        if !config.learning_rate.is_finite() || config.learning_rate <= 0.0 {
            return Err(Error::InvalidLearningRate(config.learning_rate));
        }
        for sample in samples {
            if sample.expected.len() != 1 {
                return Err(Error::ShapeMismatch(format!(
                    "expected vector must have length 1, got {}",
                    sample.expected.len()
                )));
            }
        }

        let lr = config.learning_rate;
        let mut errors: Vec<f64> = Vec::new();
        let mut converged = false;

        for epoch in 1..=config.max_epochs {
            if let Some(ref flag) = config.stop_flag {
                if flag.load(Ordering::Relaxed) {
                    log::debug!("stop flag set, training halted before epoch {epoch}");
                    break;
                }
            }

            let mut total_error = 0.0;

            for sample in samples {
                let result = self.forward_with_internals(&sample.inputs)?;
                let output_error = sample.expected[0] - result.output;
                let output_delta = output_error * result.output * (1.0 - result.output);
                total_error += output_error * output_error;

                // Output neuron update.
                for i in 0..self.output.input_count() {
                    self.output
                        .adjust_weight(i, lr * output_delta * result.hidden_outputs[i]);
                }
                self.output.adjust_bias(lr * output_delta);

                // Hidden layer update. The deltas read the output weights as
                // adjusted just above; saved models depend on this ordering,
                // so it must not be swapped with the output update.
                for i in 0..self.hidden.len() {
                    let hidden_output = result.hidden_outputs[i];
                    let hidden_delta =
                        output_delta * self.output.weight(i) * hidden_output * (1.0 - hidden_output);

                    for j in 0..self.hidden[i].input_count() {
                        self.hidden[i].adjust_weight(j, lr * hidden_delta * result.inputs[j]);
                    }
                    self.hidden[i].adjust_bias(lr * hidden_delta);
                }
            }

            errors.push(total_error);
            on_event(TrainEvent::Progress { epoch, total_error });

            if self.has_learned_all(samples, config.confidence_threshold)? {
                log::debug!("converged at epoch {epoch}, total error {total_error:.6}");
                converged = true;
                on_event(TrainEvent::Converged {
                    confidence_threshold: config.confidence_threshold,
                    epoch,
                });
                break;
            }
        }

        on_event(TrainEvent::Completed {
            errors: errors.clone(),
        });

        Ok(TrainingOutcome {
            epochs_run: errors.len(),
            final_error: errors.last().copied().unwrap_or(0.0),
            converged,
            error_history: errors,
        })
    }

    /// Fresh-inference convergence check: every 1-expected sample must reach
    /// `confidence_threshold` and every 0-expected sample must stay at or
    /// below its complement.
    fn has_learned_all(
        &mut self,
        samples: &[TrainingSample],
        confidence_threshold: f64,
    ) -> Result<bool> {
        for sample in samples {
            let predicted = self.compute(&sample.inputs)?;
            let expected = sample.expected[0];

            if expected == 1.0 && predicted < confidence_threshold {
                return Ok(false);
            }
            if expected == 0.0 && predicted > 1.0 - confidence_threshold {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Snapshots every weight and bias for persistence.
    pub fn export_model(&self) -> ModelParameters {
        ModelParameters {
            hidden_weights: self
                .hidden
                .iter()
                .map(|n| (0..n.input_count()).map(|j| n.weight(j)).collect())
                .collect(),
            hidden_biases: self.hidden.iter().map(Neuron::bias).collect(),
            output_weights: (0..self.output.input_count())
                .map(|i| self.output.weight(i))
                .collect(),
            output_bias: self.output.bias(),
        }
    }

    /// Overwrites every weight and bias from a snapshot. The shapes are
    /// checked against the network topology before any value is written, so
    /// a mismatch leaves the network untouched.
    pub fn import_model(&mut self, model: &ModelParameters) -> Result<()> {
        if model.hidden_weights.len() != self.hidden.len() {
            return Err(Error::ShapeMismatch(format!(
                "hiddenWeights has {} rows, network has {} hidden neurons",
                model.hidden_weights.len(),
                self.hidden.len()
            )));
        }
        if model.hidden_biases.len() != self.hidden.len() {
            return Err(Error::ShapeMismatch(format!(
                "hiddenBiases has {} entries, network has {} hidden neurons",
                model.hidden_biases.len(),
                self.hidden.len()
            )));
        }
        if model.output_weights.len() != self.output.input_count() {
            return Err(Error::ShapeMismatch(format!(
                "outputWeights has {} entries, output neuron takes {} inputs",
                model.output_weights.len(),
                self.output.input_count()
            )));
        }
        for (i, row) in model.hidden_weights.iter().enumerate() {
            if row.len() != self.hidden[i].input_count() {
                return Err(Error::ShapeMismatch(format!(
                    "hiddenWeights row {i} has {} columns, neuron takes {} inputs",
                    row.len(),
                    self.hidden[i].input_count()
                )));
            }
        }

        for (i, neuron) in self.hidden.iter_mut().enumerate() {
            for (j, &value) in model.hidden_weights[i].iter().enumerate() {
                neuron.set_weight(j, value);
            }
            neuron.set_bias(model.hidden_biases[i]);
        }
        for (i, &value) in model.output_weights.iter().enumerate() {
            self.output.set_weight(i, value);
        }
        self.output.set_bias(model.output_bias);

        Ok(())
    }
}
