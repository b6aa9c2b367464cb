use serde::{Deserialize, Serialize};

/// Flattened snapshot of every weight and bias in a network. This is the only
/// state that crosses the persistence boundary; the JSON field names are
/// stable because saved models are reloaded into identically-shaped networks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelParameters {
    /// One row per hidden neuron, one column per network input.
    pub hidden_weights: Vec<Vec<f64>>,
    /// One bias per hidden neuron.
    pub hidden_biases: Vec<f64>,
    /// One weight per hidden neuron, feeding the output neuron.
    pub output_weights: Vec<f64>,
    pub output_bias: f64,
}

impl ModelParameters {
    /// Serializes the parameters to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes parameters from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<ModelParameters> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
