//! Manifest management for the priority-bucket tool
//!
//! Parses TOML manifests listing prioritized entries and provides typed access
//! to output and logging settings.

use crate::bucket::{Priority, PriorityBucket};
use crate::error::{BucketError, BucketResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Log levels accepted by `observability.log_level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Root manifest structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Manifest {
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// A single value to push, with its priority
///
/// Fields are private; entries are only created through deserialization or
/// `Entry::new`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Entry {
    value: String,
    /// Higher priority entries are traversed first
    #[serde(default)]
    priority: Priority,
}

impl Entry {
    pub fn new(value: impl Into<String>, priority: impl Into<Priority>) -> Self {
        Self {
            value: value.into(),
            priority: priority.into(),
        }
    }

    /// Get the entry value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get the entry priority (defaults to 0 when omitted)
    pub fn priority(&self) -> Priority {
        self.priority
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// How the traversal is printed
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One value per line
    #[default]
    Text,
    /// A JSON array of values
    Json,
}

/// Observability configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Manifest {
    /// Load a manifest from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> BucketResult<Self> {
        let path_display = path.as_ref().display().to_string();

        // Phase 1: Read file (preserves io::Error context)
        let content = std::fs::read_to_string(path.as_ref()).map_err(|source| {
            BucketError::ConfigFileRead {
                path: path_display.clone(),
                source,
            }
        })?;

        // Phase 2: Parse TOML (preserves toml::de::Error context)
        let manifest: Self =
            toml::from_str(&content).map_err(|source| BucketError::ConfigParseFailed {
                path: path_display.clone(),
                source,
            })?;

        // Phase 3: Validate parsed manifest
        manifest
            .validate()
            .map_err(|e| BucketError::ConfigValidationFailed {
                path: path_display.clone(),
                reason: e.to_string(),
            })?;

        tracing::debug!(
            path = %path_display,
            entries = manifest.entries.len(),
            "Loaded manifest"
        );

        Ok(manifest)
    }

    /// Validate the manifest after parsing
    ///
    /// Called automatically by `from_file()` and `from_str()`.
    pub fn validate(&self) -> BucketResult<()> {
        let level = self.observability.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(BucketError::Config(format!(
                "observability.log_level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.observability.log_level
            )));
        }
        Ok(())
    }

    /// Build a bucket borrowing every entry value, pushed in file order
    pub fn bucket(&self) -> PriorityBucket<&str> {
        self.entries
            .iter()
            .map(|entry| (entry.value(), entry.priority()))
            .collect()
    }
}

impl FromStr for Manifest {
    type Err = BucketError;

    fn from_str(toml_str: &str) -> Result<Self, Self::Err> {
        let manifest: Manifest =
            toml::from_str(toml_str).map_err(|source| BucketError::ConfigParseFailed {
                path: "<string>".to_string(),
                source,
            })?;

        manifest.validate()?;
        Ok(manifest)
    }
}
