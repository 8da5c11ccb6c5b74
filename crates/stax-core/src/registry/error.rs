//! Registry error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A mixin identifier did not resolve to a known capability
    #[error("Unknown capability '{capability}' for stack '{stack}'")]
    UnknownCapability { stack: String, capability: String },
}

pub type RegistryResult<T> = Result<T, RegistryError>;
