//! Command implementations for the nimbus binary.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use nimbus::eval::ConfusionMatrix;
use nimbus::prelude::*;
use nimbus::Dataset;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a dataset, inferring CSV or JSON from the file extension.
fn load_dataset(path: &Path) -> Result<Dataset> {
    let dataset = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Dataset::load_json(path),
        _ => Dataset::load_csv(path),
    };
    dataset.with_context(|| format!("failed to load dataset from {}", path.display()))
}

fn load_model(path: &Path) -> Result<Model> {
    let file =
        File::open(path).with_context(|| format!("failed to open model {}", path.display()))?;
    let model = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse model {}", path.display()))?;
    Ok(model)
}

pub fn train(data: &Path, out: &Path, initial_radius: Option<f64>) -> Result<()> {
    let dataset = load_dataset(data)?;
    println!(
        "Loaded {} samples ({} features) from {}",
        dataset.len().to_string().cyan(),
        dataset.dimension(),
        data.display()
    );

    let config = match initial_radius {
        Some(radius) => {
            if radius <= 0.0 {
                bail!("initial radius must be positive, got {}", radius);
            }
            CloudConfig::with_initial_radius(radius)
        }
        None => CloudConfig::default(),
    };

    let classifier = CloudClassifier::new(config);
    let model = classifier.train(&dataset.samples_by_class())?;

    for label in model.labels() {
        if let Some(store) = model.store(label) {
            println!(
                "  class {}: {} clouds",
                label.to_string().green(),
                store.len()
            );
        }
    }

    let file =
        File::create(out).with_context(|| format!("failed to create {}", out.display()))?;
    serde_json::to_writer_pretty(file, &model)?;
    println!("Model written to {}", out.display().to_string().cyan());
    Ok(())
}

pub fn classify(model_path: &Path, vector: &str) -> Result<()> {
    let model = load_model(model_path)?;

    let query = vector
        .split(',')
        .map(|f| {
            f.trim()
                .parse::<f64>()
                .with_context(|| format!("invalid feature value '{}'", f.trim()))
        })
        .collect::<Result<Vec<f64>>>()?;

    let label = model.classify(&query)?;
    println!("{}", label.to_string().green().bold());
    Ok(())
}

pub fn eval(model_path: &Path, data: &Path) -> Result<()> {
    let model = load_model(model_path)?;
    let dataset = load_dataset(data)?;

    let predicted = model.classify_batch(&dataset.features())?;
    let matrix = ConfusionMatrix::from_labels(&dataset.labels(), &predicted)?;

    println!("{}", matrix);
    println!(
        "accuracy: {}",
        format!("{:.2}%", matrix.accuracy() * 100.0).green().bold()
    );
    for (label, recall) in matrix.per_class_recall() {
        println!("  class {} recall: {:.4}", label, recall);
    }
    Ok(())
}
