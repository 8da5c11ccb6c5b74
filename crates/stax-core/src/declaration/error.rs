//! Declaration error types

use std::path::PathBuf;

use thiserror::Error;

use crate::registry::RegistryError;

#[derive(Debug, Error)]
pub enum DeclarationError {
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

    #[error("Invalid stack name '{name}' in {path}: {reason}")]
    InvalidStackName {
        path: PathBuf,
        name: String,
        reason: &'static str,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

pub type DeclarationResult<T> = Result<T, DeclarationError>;
