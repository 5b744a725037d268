//! ChurnForge: customer churn prediction CLI driven by pre-fitted artifacts
//!
//! This is the main entrypoint: parse the submitted form fields, load the
//! artifact set once, run the single-shot inference pipeline, and render the
//! verdict.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use churnforge::{load_artifacts, predict_churn, Args, ChurnLabel};
use clap::Parser;

fn main() -> Result<()> {
    // Parse command-line arguments (the "form submission")
    let args = Args::parse();

    if args.verbose {
        println!("ChurnForge - Customer Churn Prediction");
        println!("======================================\n");
    }

    let start_time = Instant::now();

    // One-time artifact load; fatal if any file is missing or corrupt
    if args.verbose {
        println!("Loading artifacts from: {}", args.artifacts);
    }
    let artifacts = load_artifacts(Path::new(&args.artifacts))
        .with_context(|| format!("prediction unavailable without artifacts in '{}'", args.artifacts))?;

    if args.verbose {
        println!("  Gender classes: {:?}", artifacts.gender_encoder.classes());
        println!(
            "  Subscription classes: {:?}",
            artifacts.subscription_encoder.classes()
        );
        println!(
            "  Contract classes: {:?}",
            artifacts.contract_encoder.classes()
        );
        println!("  Feature width: {}\n", artifacts.scaler.n_features());
    }

    // Build the record and run the pipeline
    let record = args.to_record();
    if args.verbose {
        println!("Input record: {record:?}\n");
    }

    let verdict = predict_churn(&artifacts, &record).context("submission rejected")?;

    let elapsed = start_time.elapsed();

    // Render the verdict the way the intake form did: one banner, two decimals
    let who = if record.customer_id.is_empty() {
        "Customer".to_string()
    } else {
        format!("Customer {}", record.customer_id)
    };
    match verdict.label {
        ChurnLabel::Churn => {
            println!(
                "✗ {} is likely to churn with a probability of {:.2}.",
                who, verdict.probability
            );
        }
        ChurnLabel::NoChurn => {
            println!(
                "✓ {} is not likely to churn with a probability of {:.2}.",
                who, verdict.probability
            );
        }
    }

    if args.verbose {
        println!("\nProcessing time: {:.3}s", elapsed.as_secs_f64());
    }

    Ok(())
}
