//! Configuration error types

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Unknown {kind} '{name}' (expected one of: {expected})")]
    UnknownBackend {
        kind: &'static str,
        name: String,
        expected: String,
    },

    #[error("The {kind} '{name}' is not available on this system")]
    Unavailable { kind: &'static str, name: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
