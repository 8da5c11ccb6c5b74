//! Dispatch error types

use thiserror::Error;

use crate::keypair::CredentialError;

#[derive(Error, Debug)]
pub enum CommandError {
    /// A command was expected but none was given
    #[error("'{0}' requires a subcommand")]
    MissingCommand(String),

    /// No route or capability handles this command
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type CommandResult<T> = Result<T, CommandError>;
