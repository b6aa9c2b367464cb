//! The single activation pair the network uses. The topology is fixed and
//! sigmoid-only, so these are plain functions rather than a dispatch enum.

/// Sigmoid function: squashes any real value into (0, 1).
/// Large-magnitude inputs saturate toward 0 or 1 per floating-point behavior.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Derivative of the sigmoid at `x`.
///
/// The training loop computes the equivalent `out * (1 - out)` term from
/// cached activations instead of calling this; it is kept for callers that
/// work in pre-activation space.
pub fn sigmoid_derivative(x: f64) -> f64 {
    let fx = sigmoid(x);
    fx * (1.0 - fx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_is_centered_at_half() {
        assert_eq!(sigmoid(0.0), 0.5);
    }

    #[test]
    fn sigmoid_saturates_without_domain_errors() {
        assert!(sigmoid(1000.0) > 0.999);
        assert!(sigmoid(-1000.0) < 0.001);
        assert!(sigmoid(f64::MAX).is_finite());
        assert!(sigmoid(f64::MIN).is_finite());
    }

    #[test]
    fn sigmoid_is_symmetric_around_origin() {
        for x in [0.1, 0.5, 2.0, 7.3] {
            assert!((sigmoid(x) + sigmoid(-x) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn derivative_peaks_at_origin() {
        assert!((sigmoid_derivative(0.0) - 0.25).abs() < 1e-12);
        assert!(sigmoid_derivative(3.0) < 0.25);
        assert!(sigmoid_derivative(-3.0) < 0.25);
    }

    #[test]
    fn derivative_matches_cached_output_form() {
        for x in [-2.0, -0.3, 0.0, 1.7, 4.2] {
            let out = sigmoid(x);
            assert!((sigmoid_derivative(x) - out * (1.0 - out)).abs() < 1e-12);
        }
    }
}
