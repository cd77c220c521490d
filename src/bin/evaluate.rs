//! Train-and-test evaluation driver.
//!
//! Trains a tree on one dataset file, classifies a second, and prints the
//! number of correct predictions plus the accuracy.
//!
//! Usage:
//!   `evaluate <train.bin> <test.bin> [--threshold RATIO] [-v | -vv]`

use std::process::ExitCode;

use pixeltree::data::read_dataset;
use pixeltree::metrics::{correct_count, Accuracy, Metric};
use pixeltree::training::{GrowerParams, TreeGrower, Verbosity};

#[derive(Debug)]
struct Args {
    train_path: String,
    test_path: String,
    threshold_ratio: f64,
    verbosity: Verbosity,
}

fn parse_args() -> Result<Args, String> {
    let mut train_path = None;
    let mut test_path = None;
    let mut threshold_ratio = GrowerParams::default().threshold_ratio;
    let mut verbosity = Verbosity::Silent;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--threshold" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--threshold requires a value".to_string())?;
                threshold_ratio = value
                    .parse::<f64>()
                    .map_err(|e| format!("invalid --threshold {value:?}: {e}"))?;
                if !(0.0..=1.0).contains(&threshold_ratio) {
                    return Err(format!("--threshold must be in [0, 1], got {threshold_ratio}"));
                }
            }
            "-v" => verbosity = Verbosity::Info,
            "-vv" => verbosity = Verbosity::Debug,
            _ if train_path.is_none() => train_path = Some(arg),
            _ if test_path.is_none() => test_path = Some(arg),
            _ => return Err(format!("unexpected argument {arg:?}")),
        }
    }

    Ok(Args {
        train_path: train_path.ok_or("missing training dataset path")?,
        test_path: test_path.ok_or("missing testing dataset path")?,
        threshold_ratio,
        verbosity,
    })
}

fn run(args: &Args) -> Result<(), String> {
    let train = read_dataset(&args.train_path)
        .map_err(|e| format!("failed to load {}: {e}", args.train_path))?;
    let test = read_dataset(&args.test_path)
        .map_err(|e| format!("failed to load {}: {e}", args.test_path))?;

    if train.is_empty() {
        return Err(format!("{} contains no images", args.train_path));
    }

    let params = GrowerParams::default()
        .with_threshold_ratio(args.threshold_ratio)
        .with_verbosity(args.verbosity);
    let tree = TreeGrower::new(params).grow(&train);

    let preds: Vec<u8> = (0..test.len())
        .map(|i| tree.classify(test.image(i)))
        .collect();

    let correct = correct_count(&preds, test.labels());
    println!("{correct}");
    println!(
        "accuracy: {:.4} ({correct}/{} test images)",
        Accuracy.compute(&preds, test.labels()),
        test.len()
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("usage: evaluate <train.bin> <test.bin> [--threshold RATIO] [-v | -vv]");
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}
