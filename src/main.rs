//! binarizer CLI - Turn a color photo into a black-and-white image.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use binarizer::{naming, Config, Error, Pipeline};

/// Convert a color photograph into a black-and-white image using a fixed
/// brightness threshold of 128.
#[derive(Parser, Debug)]
#[command(name = "binarizer")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input image path.
    #[arg(long, default_value = "images/input/pumpkins.jpg", value_name = "PATH")]
    input: PathBuf,

    /// Directory for the timestamped output image.
    #[arg(long, default_value = "images/output", value_name = "DIR")]
    output_dir: PathBuf,

    /// Skip the preview windows.
    #[arg(long)]
    no_preview: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("binarizer={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    tracing::info!("Starting the image binarization process...");

    // Errors are reported, not turned into a failing exit status
    if let Err(err) = run(&args) {
        match err.downcast_ref::<Error>() {
            Some(file_err) if file_err.is_file_error() => println!("File Error: {file_err}"),
            _ => println!("Error: {err:#}"),
        }
    }
}

fn run(args: &Args) -> Result<()> {
    // Named once, before anything is loaded
    let output_path = naming::output_path(&args.output_dir, "binarized", "png");

    let config = Config {
        preview: !args.no_preview,
        ..Config::default()
    };

    let pipeline = Pipeline::new(config).context("Failed to initialize pipeline")?;

    pipeline
        .process(&args.input, &output_path)
        .context("Failed to binarize image")?;

    Ok(())
}
