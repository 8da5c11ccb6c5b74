//! Key pair provider trait and the values it exchanges

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use super::error::KeyPairResult;

/// Private key material
///
/// Redacted in `Debug` and zeroized on drop. The only way to read it is
/// `expose_secret`, which keeps every plaintext access greppable.
pub struct KeyMaterial(SecretString);

impl KeyMaterial {
    pub fn new(material: String) -> Self {
        Self(SecretString::new(material))
    }

    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyMaterial([REDACTED])")
    }
}

/// Public description of a key pair held by a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPairInfo {
    pub name: String,
    pub fingerprint: String,
    /// Only filled in by extended listings
    pub key_type: Option<String>,
    /// Only filled in by extended listings
    pub public_key: Option<String>,
}

impl KeyPairInfo {
    pub fn new(name: impl Into<String>, fingerprint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fingerprint: fingerprint.into(),
            key_type: None,
            public_key: None,
        }
    }

    pub fn with_key_type(mut self, key_type: impl Into<String>) -> Self {
        self.key_type = Some(key_type.into());
        self
    }

    pub fn with_public_key(mut self, public_key: impl Into<String>) -> Self {
        self.public_key = Some(public_key.into());
        self
    }
}

impl fmt::Display for KeyPairInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.name, self.fingerprint)?;
        if let Some(key_type) = &self.key_type {
            write!(f, "\t{}", key_type)?;
        }
        Ok(())
    }
}

/// Result of a successful `create`: the public description plus the private
/// material, which the provider hands out exactly once
#[derive(Debug)]
pub struct CreatedKeyPair {
    pub info: KeyPairInfo,
    pub material: KeyMaterial,
}

/// A system that holds key pair resources
///
/// Implementations report absence as `KeyPairError::NotFound` and name
/// collisions on create as `KeyPairError::Duplicate`. Private material must
/// never be retrievable after `create` returns.
pub trait KeyPairProvider: Send + Sync {
    /// Provider name (e.g. "memory", "ssh-keygen")
    fn name(&self) -> &str;

    /// Describe one key pair; `extended` adds key type and public key
    fn list(&self, name: &str, extended: bool) -> KeyPairResult<KeyPairInfo>;

    /// Create a key pair and return its private material
    fn create(&self, name: &str) -> KeyPairResult<CreatedKeyPair>;

    /// Delete a key pair
    fn delete(&self, name: &str) -> KeyPairResult<()>;
}
