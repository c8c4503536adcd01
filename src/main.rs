use anyhow::Context;
use clap::{Parser, ValueHint};
use file_handler::{create_handler, create_handler_for_path, supported_formats, Handler};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Converts record files from one format into another.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the file to load records from.
    #[arg(value_hint = ValueHint::FilePath, required_unless_present = "list_formats")]
    input: Option<PathBuf>,

    /// Path to the file to save records to.
    #[arg(value_hint = ValueHint::FilePath, required_unless_present = "list_formats")]
    output: Option<PathBuf>,

    /// Format of the input file. Detected from its extension if omitted.
    #[arg(long)]
    from: Option<String>,

    /// Format of the output file. Detected from its extension if omitted.
    #[arg(long)]
    to: Option<String>,

    /// Print the supported formats and exit.
    #[arg(long)]
    list_formats: bool,
}

fn handler(format: Option<&str>, path: &Path) -> Result<Box<dyn Handler>, anyhow::Error> {
    match format {
        Some(format) => create_handler(format),
        None => create_handler_for_path(path),
    }
    .with_context(|| format!("no handler for {}", path.display()))
}

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::ERROR)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if cli.list_formats {
        for format in supported_formats() {
            println!("{}", format);
        }
        return Ok(());
    }

    let (Some(input), Some(output)) = (cli.input, cli.output) else {
        anyhow::bail!("input and output paths are required");
    };
    let loader = handler(cli.from.as_deref(), &input)?;
    let saver = handler(cli.to.as_deref(), &output)?;

    let records = loader.load(&input).context("unable to load input file")?;
    saver.save(&output, &records).context("unable to save output file")?;
    info!(
        input = %input.display(),
        output = %output.display(),
        records = records.len(),
        "converted {} to {}", loader.format_key(), saver.format_key(),
    );
    Ok(())
}
