//! Key pair error types

use thiserror::Error;

use crate::params::ParameterError;

/// Errors returned by a `KeyPairProvider`
#[derive(Error, Debug)]
pub enum KeyPairError {
    /// No key pair exists under this name
    #[error("The key pair '{0}' does not exist")]
    NotFound(String),

    /// A key pair already exists under this name
    #[error("The keypair '{0}' already exists")]
    Duplicate(String),

    /// The name cannot be used as a key pair name
    #[error("Invalid key pair name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// An external tool exited unsuccessfully
    #[error("{program} failed: {message}")]
    Command { program: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl KeyPairError {
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn command(program: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Command {
            program: program.into(),
            message: message.into(),
        }
    }
}

pub type KeyPairResult<T> = Result<T, KeyPairError>;

/// Fatal failures of the key pair lifecycle
///
/// Expected-absent and expected-conflict conditions never show up here; the
/// manager reports and recovers from those itself.
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("key pair provider: {0}")]
    KeyPair(#[from] KeyPairError),

    #[error("parameter store: {0}")]
    Parameter(#[from] ParameterError),

    #[error("key file: {0}")]
    Io(#[from] std::io::Error),
}

pub type CredentialResult<T> = Result<T, CredentialError>;
