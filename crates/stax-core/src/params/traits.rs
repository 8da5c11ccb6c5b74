//! Core traits and types for parameter storage

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Options for writing a parameter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutOptions {
    /// Store the value encrypted at rest
    pub encrypted: bool,
    /// Encryption key identifier; the store's default key is used when absent
    pub key_id: Option<String>,
    /// Replace an existing value instead of failing with `AlreadyExists`
    pub overwrite: bool,
}

impl PutOptions {
    /// Encrypted, overwriting write with the store's default key
    pub fn secure() -> Self {
        Self {
            encrypted: true,
            key_id: None,
            overwrite: true,
        }
    }

    /// Set the encryption key identifier
    pub fn with_key_id(mut self, key_id: Option<impl Into<String>>) -> Self {
        self.key_id = key_id.map(Into::into);
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

/// A parameter read back from a store
#[derive(Debug)]
pub struct Parameter {
    pub name: String,
    value: SecretString,
    pub encrypted: bool,
    pub key_id: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: String, encrypted: bool, key_id: Option<String>) -> Self {
        Self {
            name: name.into(),
            value: SecretString::new(value),
            encrypted,
            key_id,
        }
    }

    /// The plaintext value
    pub fn value(&self) -> &str {
        self.value.expose_secret()
    }
}

/// Errors that can occur during parameter store operations
#[derive(Error, Debug)]
pub enum ParameterError {
    #[error("Parameter {0} does not exist")]
    NotFound(String),

    #[error("Parameter {0} already exists")]
    AlreadyExists(String),

    #[error("Parameter {0} is encrypted; read it with decryption")]
    Encrypted(String),

    #[error("Store not available: {0}")]
    NotAvailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Other(String),
}

pub type ParameterResult<T> = Result<T, ParameterError>;

/// Trait for secure parameter storage
///
/// Absence is reported as `ParameterError::NotFound` so callers can decide
/// whether it is an expected state or a failure.
pub trait ParameterStore: Send + Sync {
    /// Human-readable name of this store
    fn name(&self) -> &str;

    /// Check if this store is usable in the current environment
    fn is_available(&self) -> bool {
        true
    }

    /// Write a parameter
    fn put(&self, name: &str, value: &str, options: &PutOptions) -> ParameterResult<()>;

    /// Read a parameter, decrypting it when `decrypt` is set
    fn get(&self, name: &str, decrypt: bool) -> ParameterResult<Parameter>;

    /// Delete a parameter
    fn delete(&self, name: &str) -> ParameterResult<()>;

    /// Check if a parameter exists
    fn has(&self, name: &str) -> bool {
        self.get(name, true).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_options() {
        let options = PutOptions::secure().with_key_id(Some("alias/stax"));
        assert!(options.encrypted);
        assert!(options.overwrite);
        assert_eq!(options.key_id.as_deref(), Some("alias/stax"));

        let plain = PutOptions::default().with_key_id(None::<String>);
        assert!(!plain.encrypted);
        assert!(plain.key_id.is_none());
    }

    #[test]
    fn test_parameter_debug_is_redacted() {
        let param = Parameter::new("payments.key_pair", "PRIVATE".to_string(), true, None);
        assert_eq!(param.value(), "PRIVATE");
        assert!(!format!("{:?}", param).contains("PRIVATE"));
    }
}
