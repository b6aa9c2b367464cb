use std::io::{self, BufRead, Write};
use std::path::Path;

use xornet::{ModelParameters, NeuralNetwork, TrainConfig, TrainEvent, TrainingSample};

const MODEL_PATH: &str = "model.json";
const GRAPH_HEIGHT: usize = 10;
const GRAPH_WIDTH: usize = 50;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    show_intro();

    let mut network = NeuralNetwork::new(2, 2);

    if ask_model_preference()? && Path::new(MODEL_PATH).exists() {
        load_model(&mut network)?;
    } else {
        train_and_save(&mut network)?;
    }

    run_interaction_loop(&mut network)
}

/// Prints the intro explaining the XOR gate the network is about to learn.
fn show_intro() {
    println!(
        r"
╔════════════════════════════════════════════════════╗
║        Neural network: the XOR logic gate          ║
╚════════════════════════════════════════════════════╝

An XOR (exclusive OR) gate returns:
 → 1 when the two inputs differ
 → 0 when they are identical

  Input A    Input B    Expected result
  ─────────  ─────────  ─────────────────
     0          0              0
     0          1              1
     1          0              1
     1          1              0

This program teaches that logic to a neural network without
ever telling it the rules up front. It works the answers out
by adjusting its own weights.
"
    );
}

/// Asks whether an existing saved model should be reused. Answering "n"
/// forces retraining; anything else (including end of input) keeps it.
fn ask_model_preference() -> io::Result<bool> {
    print!("Use the existing model if one is present? (Y/n): ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(!answer.trim().eq_ignore_ascii_case("n"))
}

/// Trains on the 4-row XOR set, then saves the parameters next to the binary.
fn train_and_save(network: &mut NeuralNetwork) -> Result<(), Box<dyn std::error::Error>> {
    println!("Training the network...\n");

    let training_set = vec![
        TrainingSample::new(vec![0.0, 0.0], vec![0.0]),
        TrainingSample::new(vec![0.0, 1.0], vec![1.0]),
        TrainingSample::new(vec![1.0, 0.0], vec![1.0]),
        TrainingSample::new(vec![1.0, 1.0], vec![0.0]),
    ];
    let config = TrainConfig::new(200_000, 0.1, 0.95);

    network.train_with_observer(&training_set, &config, |event| match event {
        TrainEvent::Progress { epoch, total_error } => {
            println!("Epoch {epoch} - Total Error: {total_error:.6}");
        }
        TrainEvent::Converged {
            confidence_threshold,
            epoch,
        } => {
            println!(
                "\nThe network reached a confidence level of {:.0}% or more at epoch {epoch}!",
                confidence_threshold * 100.0
            );
        }
        TrainEvent::Completed { errors } => render_error_curve(&errors),
    })?;

    println!("\nTraining finished!");

    let model = network.export_model();
    model.save_json(MODEL_PATH)?;
    log::info!("model saved to {MODEL_PATH}");
    Ok(())
}

/// Loads a previously saved model and installs its parameters.
fn load_model(network: &mut NeuralNetwork) -> Result<(), Box<dyn std::error::Error>> {
    println!("Loading the existing model...");
    let model = ModelParameters::load_json(MODEL_PATH)?;
    network.import_model(&model)?;
    log::info!("model loaded from {MODEL_PATH}");
    println!("Model loaded!");
    Ok(())
}

/// Draws the per-epoch error history as a block-character curve.
fn render_error_curve(errors: &[f64]) {
    if errors.is_empty() {
        return;
    }

    let max_error = errors.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min_error = errors.iter().cloned().fold(f64::INFINITY, f64::min);
    let range = max_error - min_error;

    println!("\nError curve:");
    for y in (0..GRAPH_HEIGHT).rev() {
        let threshold = min_error + range * y as f64 / (GRAPH_HEIGHT - 1) as f64;
        let mut line = String::with_capacity(GRAPH_WIDTH);

        for x in 0..GRAPH_WIDTH {
            let index = x * errors.len() / GRAPH_WIDTH;
            if index < errors.len() && errors[index] >= threshold {
                line.push('█');
            } else {
                line.push(' ');
            }
        }

        println!("{line}");
    }
    println!("{}", "─".repeat(GRAPH_WIDTH));
}

/// Interactive loop: reads two binary inputs, prints the network's answer.
/// Ends when stdin is closed.
fn run_interaction_loop(network: &mut NeuralNetwork) -> Result<(), Box<dyn std::error::Error>> {
    println!("\nYou can now test the network with inputs (0 or 1).\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let Some(a) = read_binary_input(&mut lines, "Input A (0 or 1): ")? else {
            break;
        };
        let Some(b) = read_binary_input(&mut lines, "Input B (0 or 1): ")? else {
            break;
        };

        let output = network.compute(&[a, b])?;
        println!("→ Network output: {output:.0} ({output:.4})");
        println!("---\n");
    }

    Ok(())
}

/// Reads one validated binary value, re-prompting on anything that is not
/// exactly "0" or "1". Returns `None` at end of input.
fn read_binary_input<I>(lines: &mut I, prompt: &str) -> io::Result<Option<f64>>
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("{prompt}");
    io::stdout().flush()?;

    loop {
        match lines.next() {
            None => return Ok(None),
            Some(line) => match line?.trim() {
                "0" => return Ok(Some(0.0)),
                "1" => return Ok(Some(1.0)),
                _ => {
                    print!("Please enter 0 or 1: ");
                    io::stdout().flush()?;
                }
            },
        }
    }
}
