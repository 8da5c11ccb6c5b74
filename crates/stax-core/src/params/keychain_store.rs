//! System keychain parameter store
//!
//! Uses the OS keychain for encrypted-at-rest storage:
//! - macOS: Keychain
//! - Windows: Credential Manager
//! - Linux: Secret Service (GNOME Keyring, KWallet)

use keyring::Entry;
use serde::{Deserialize, Serialize};

use super::traits::{Parameter, ParameterError, ParameterResult, ParameterStore, PutOptions};

/// What is written into a keychain entry
#[derive(Debug, Serialize, Deserialize)]
struct KeychainPayload {
    value: String,
    #[serde(default)]
    encrypted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    key_id: Option<String>,
}

/// Parameter store backed by the system keychain
///
/// The keychain encrypts every entry itself, so `PutOptions::key_id` is only
/// recorded next to the value for bookkeeping.
///
/// # Example
///
/// ```no_run
/// use stax_core::params::{KeychainParameterStore, ParameterStore, PutOptions};
///
/// let store = KeychainParameterStore::new();
/// store.put("payments.key_pair", "-----BEGIN ...", &PutOptions::secure()).unwrap();
/// let key = store.get("payments.key_pair", true).unwrap();
/// ```
pub struct KeychainParameterStore {
    service_name: String,
}

impl KeychainParameterStore {
    /// Create a keychain store with the default service name "stax"
    pub fn new() -> Self {
        Self::with_service("stax")
    }

    /// Create a keychain store namespaced under `service`
    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service_name: service.into(),
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    fn entry(&self, name: &str) -> ParameterResult<Entry> {
        Entry::new(&self.service_name, name)
            .map_err(|e| ParameterError::Other(format!("Failed to create keychain entry: {}", e)))
    }
}

impl Default for KeychainParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterStore for KeychainParameterStore {
    fn name(&self) -> &str {
        "keychain"
    }

    fn is_available(&self) -> bool {
        // fails on headless servers without a keychain daemon
        Entry::new(&self.service_name, "__stax_availability_check__").is_ok()
    }

    fn put(&self, name: &str, value: &str, options: &PutOptions) -> ParameterResult<()> {
        let entry = self.entry(name)?;
        if !options.overwrite {
            match entry.get_password() {
                Ok(_) => return Err(ParameterError::AlreadyExists(name.to_string())),
                Err(keyring::Error::NoEntry) => {}
                Err(e) => return Err(ParameterError::Other(format!("Failed to read keychain: {}", e))),
            }
        }

        let payload = serde_json::to_string(&KeychainPayload {
            value: value.to_string(),
            encrypted: options.encrypted,
            key_id: options.key_id.clone(),
        })
        .map_err(|e| ParameterError::Other(format!("Failed to encode keychain payload: {}", e)))?;

        entry
            .set_password(&payload)
            .map_err(|e| ParameterError::Other(format!("Failed to store in keychain: {}", e)))
    }

    fn get(&self, name: &str, _decrypt: bool) -> ParameterResult<Parameter> {
        let entry = self.entry(name)?;
        let raw = match entry.get_password() {
            Ok(raw) => raw,
            Err(keyring::Error::NoEntry) => return Err(ParameterError::NotFound(name.to_string())),
            Err(keyring::Error::NoStorageAccess(e)) => {
                return Err(ParameterError::NotAvailable(e.to_string()))
            }
            Err(e) => return Err(ParameterError::Other(format!("Failed to read keychain: {}", e))),
        };
        let payload: KeychainPayload = serde_json::from_str(&raw)
            .map_err(|e| ParameterError::Other(format!("Corrupt keychain entry {}: {}", name, e)))?;
        Ok(Parameter::new(name, payload.value, payload.encrypted, payload.key_id))
    }

    fn delete(&self, name: &str) -> ParameterResult<()> {
        let entry = self.entry(name)?;
        match entry.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Err(ParameterError::NotFound(name.to_string())),
            Err(e) => Err(ParameterError::Other(format!("Failed to delete from keychain: {}", e))),
        }
    }
}
