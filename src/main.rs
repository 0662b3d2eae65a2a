//! priority-bucket command-line tool
//!
//! Loads a manifest of prioritized entries and prints their traversal.

use clap::Parser;
use priority_bucket::{
    BucketError,
    cli::{Cli, Command, generate_manifest_template},
    config::Manifest,
    output, telemetry,
};
use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Command::Template { output: path }) => write_template(path.as_deref())?,
        None => print_traversal(&cli)?,
    }

    Ok(())
}

fn write_template(path: Option<&str>) -> Result<(), BucketError> {
    let template = generate_manifest_template();
    match path {
        Some(path) => {
            std::fs::write(path, template).map_err(|source| BucketError::OutputWrite {
                path: path.to_string(),
                source,
            })?;
            eprintln!("Manifest template written to {}", path);
        }
        None => write_stdout(template)?,
    }
    Ok(())
}

fn print_traversal(cli: &Cli) -> Result<(), BucketError> {
    let manifest = Manifest::from_file(&cli.manifest)?;

    telemetry::init(&manifest.observability.log_level);

    let format = cli.format.unwrap_or(manifest.output.format);
    let bucket = manifest.bucket();

    tracing::info!(
        manifest = %cli.manifest,
        values = bucket.len(),
        groups = bucket.group_count(),
        "Loaded priority bucket"
    );

    let rendered = output::render(&bucket, format)?;
    write_stdout(&rendered)
}

fn write_stdout(content: &str) -> Result<(), BucketError> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(content.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|source| BucketError::OutputWrite {
            path: "<stdout>".to_string(),
            source,
        })
}
