//! Command-line interface for priority-bucket
//!
//! Provides argument parsing and subcommand handling for the priority-bucket binary.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};

/// Print manifest entries in priority order
#[derive(Parser)]
#[command(name = "priority-bucket")]
#[command(version)]
#[command(about = "Print manifest entries in priority order")]
#[command(
    long_about = "Loads a TOML manifest of prioritized entries into a priority bucket and \
    prints its traversal: highest priority first, push order within a priority."
)]
pub struct Cli {
    /// Path to manifest file
    #[arg(short, long, default_value = "bucket.toml", global = true)]
    pub manifest: String,

    /// Output format (overrides `output.format` in the manifest)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a template manifest file
    Template {
        /// Output file path (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// Generate template manifest content
pub fn generate_manifest_template() -> &'static str {
    r#"# priority-bucket manifest
# ========================
#
# Entries are pushed into a priority bucket in the order they appear here.
# The traversal visits the highest priority first; entries sharing a priority
# keep their order from this file.

# ─────────────────────────────────────────────────────────────────────────────
# OBSERVABILITY
# ─────────────────────────────────────────────────────────────────────────────

[observability]
# Log level: "trace", "debug", "info", "warn", "error"
# RUST_LOG overrides this when set. Logs are written to stderr.
log_level = "info"

# ─────────────────────────────────────────────────────────────────────────────
# OUTPUT
# ─────────────────────────────────────────────────────────────────────────────

[output]
# Output format:
#   - "text": one value per line
#   - "json": a JSON array of values
format = "text"

# ─────────────────────────────────────────────────────────────────────────────
# ENTRIES
# ─────────────────────────────────────────────────────────────────────────────
#
# Entry fields:
#   - value: The string to push
#   - priority: Signed integer, higher = visited first (default 0)

[[entries]]
value = "c1"

[[entries]]
value = "c2"
priority = 0

[[entries]]
value = "b1"
priority = 5

[[entries]]
value = "a1"
priority = 10

[[entries]]
value = "c3"

[[entries]]
value = "cleanup"
priority = -1
"#
}
