//! Error types for LUT generation.
//!
//! Everything here is fatal for the current run: inputs are validated
//! before generation starts, so a failure surfacing mid-pipeline is either
//! a configuration problem or an I/O problem, never something to retry.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while configuring or running a generation.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Camera identifier not present in the profile registry.
    #[error("unknown camera profile '{0}'; run `stoplight profiles` for the supported list")]
    UnknownCamera(String),

    /// Target identifier not present in the profile registry.
    #[error("unknown target profile '{0}'; run `stoplight profiles` for the supported list")]
    UnknownTarget(String),

    /// A registry profile violates its own invariants.
    ///
    /// Raised by the integrity check that runs once before any table is
    /// generated; the numeric pipeline itself trusts the registry.
    #[error("profile '{name}' failed integrity check: {reason}")]
    InvalidProfile {
        /// Offending profile name
        name: &'static str,
        /// What was wrong with it
        reason: String,
    },

    /// A configuration field holds an unusable value.
    #[error("invalid config field `{field}`: {reason}")]
    InvalidConfig {
        /// Field name as it appears in the config file
        field: &'static str,
        /// What was wrong with it
        reason: String,
    },

    /// A color string could not be parsed.
    #[error("invalid color '{0}': expected #RRGGBB hex")]
    InvalidColor(String),

    /// Failed to read a configuration file.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        /// Path the read was attempted at
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A configuration file did not parse as JSON.
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        /// Path of the offending file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Failed to write a configuration file.
    #[error("failed to write config {path}: {source}")]
    ConfigWrite {
        /// Path the write was attempted at
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// LUT container or `.cube` write error.
    #[error(transparent)]
    Lut(#[from] stoplight_lut::LutError),
}
