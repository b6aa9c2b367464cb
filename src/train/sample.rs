/// A single training sample: an input vector and the expected output vector
/// (length 1 for this network). Immutable once built; supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSample {
    pub inputs: Vec<f64>,
    pub expected: Vec<f64>,
}

impl TrainingSample {
    pub fn new(inputs: Vec<f64>, expected: Vec<f64>) -> TrainingSample {
        TrainingSample { inputs, expected }
    }
}
