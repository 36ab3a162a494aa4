//! Nimbus CLI - train, classify, and evaluate data-cloud models.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nimbus")]
#[command(author, version, about = "Nimbus - online data-cloud classifier", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug-level logging)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a model from a labeled dataset
    Train {
        /// Training dataset (CSV: label,f1,f2,... or JSON)
        #[arg(short, long)]
        data: PathBuf,

        /// Where to write the trained model (JSON)
        #[arg(short, long)]
        out: PathBuf,

        /// Initial radius for newly spawned clouds (default: 1 - cos(pi/6))
        #[arg(short = 'r', long)]
        initial_radius: Option<f64>,
    },

    /// Classify a single vector with a trained model
    Classify {
        /// Trained model file (JSON)
        #[arg(short, long)]
        model: PathBuf,

        /// Feature vector, comma-separated (e.g. "0.5,1.2,-0.3")
        #[arg(short, long)]
        vector: String,
    },

    /// Evaluate a trained model against a labeled dataset
    Eval {
        /// Trained model file (JSON)
        #[arg(short, long)]
        model: PathBuf,

        /// Test dataset (CSV: label,f1,f2,... or JSON)
        #[arg(short, long)]
        data: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Train {
            data,
            out,
            initial_radius,
        } => commands::train(&data, &out, initial_radius),
        Commands::Classify { model, vector } => commands::classify(&model, &vector),
        Commands::Eval { model, data } => commands::eval(&model, &data),
    }
}
