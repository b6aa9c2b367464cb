use rand::rngs::StdRng;
use rand::SeedableRng;

use xornet::{NeuralNetwork, TrainConfig, TrainEvent, TrainingSample};

fn xor_set() -> Vec<TrainingSample> {
    vec![
        TrainingSample::new(vec![0.0, 0.0], vec![0.0]),
        TrainingSample::new(vec![0.0, 1.0], vec![1.0]),
        TrainingSample::new(vec![1.0, 0.0], vec![1.0]),
        TrainingSample::new(vec![1.0, 1.0], vec![0.0]),
    ]
}

#[test]
fn learns_xor_and_reports_the_full_event_sequence() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut network = NeuralNetwork::with_rng(2, 3, &mut rng);
    let samples = xor_set();
    let config = TrainConfig::new(200_000, 0.1, 0.95);

    let mut progress_events = 0usize;
    let mut converged_at = None;
    let mut completed_errors = None;

    let outcome = network
        .train_with_observer(&samples, &config, |event| match event {
            TrainEvent::Progress { .. } => progress_events += 1,
            TrainEvent::Converged { epoch, .. } => converged_at = Some(epoch),
            TrainEvent::Completed { errors } => completed_errors = Some(errors),
        })
        .unwrap();

    assert!(outcome.converged, "XOR must converge within the epoch budget");
    assert!(outcome.epochs_run < config.max_epochs);
    assert_eq!(progress_events, outcome.epochs_run);
    assert_eq!(converged_at, Some(outcome.epochs_run));
    assert_eq!(outcome.error_history.len(), outcome.epochs_run);
    assert_eq!(completed_errors.as_deref(), Some(&outcome.error_history[..]));

    // Aggregate trend: errors end well below where they started, even if
    // individual epochs wobble.
    let first = outcome.error_history[0];
    assert!(outcome.final_error < first);

    // Directional correctness of the learned gate.
    assert!(network.compute(&[0.0, 0.0]).unwrap() < 0.1);
    assert!(network.compute(&[1.0, 1.0]).unwrap() < 0.1);
    assert!(network.compute(&[0.0, 1.0]).unwrap() > 0.9);
    assert!(network.compute(&[1.0, 0.0]).unwrap() > 0.9);
}

#[test]
fn retraining_a_converged_network_passes_at_epoch_one() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut network = NeuralNetwork::with_rng(2, 3, &mut rng);
    let samples = xor_set();
    let config = TrainConfig::new(200_000, 0.1, 0.95);

    let first = network.train(&samples, &config).unwrap();
    assert!(first.converged);

    let second = network.train(&samples, &config).unwrap();
    assert!(second.converged);
    assert_eq!(second.epochs_run, 1);
}

#[test]
fn a_trained_model_survives_a_save_and_reload() {
    let mut rng = StdRng::seed_from_u64(100);
    let mut network = NeuralNetwork::with_rng(2, 3, &mut rng);
    let samples = xor_set();
    let config = TrainConfig::new(200_000, 0.1, 0.95);
    network.train(&samples, &config).unwrap();

    let json = serde_json::to_string_pretty(&network.export_model()).unwrap();
    let reloaded = serde_json::from_str(&json).unwrap();

    let mut fresh_rng = StdRng::seed_from_u64(0);
    let mut restored = NeuralNetwork::with_rng(2, 3, &mut fresh_rng);
    restored.import_model(&reloaded).unwrap();

    for sample in &samples {
        assert_eq!(
            restored.compute(&sample.inputs).unwrap(),
            network.compute(&sample.inputs).unwrap()
        );
    }
}

#[test]
fn compute_stays_usable_indefinitely_after_training() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut network = NeuralNetwork::with_rng(2, 3, &mut rng);
    let config = TrainConfig::new(200_000, 0.1, 0.95);
    network.train(&xor_set(), &config).unwrap();

    let reference = network.compute(&[1.0, 0.0]).unwrap();
    for _ in 0..1000 {
        assert_eq!(network.compute(&[1.0, 0.0]).unwrap(), reference);
    }
}
