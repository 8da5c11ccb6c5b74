//! In-memory parameter store

use std::collections::HashMap;

use parking_lot::RwLock;

use super::traits::{Parameter, ParameterError, ParameterResult, ParameterStore, PutOptions};

#[derive(Debug, Clone)]
struct StoredParameter {
    value: String,
    encrypted: bool,
    key_id: Option<String>,
}

/// In-memory parameter store for testing and dry runs
///
/// Values are kept in memory and lost when the store is dropped. Encryption is
/// modelled, not performed: encrypted values refuse to be read without
/// `decrypt`, and the key id is recorded alongside the value.
///
/// # Example
///
/// ```
/// use stax_core::params::{MemoryParameterStore, ParameterStore, PutOptions};
///
/// let store = MemoryParameterStore::new();
/// store.put("web.key_pair", "secret", &PutOptions::secure()).unwrap();
/// assert_eq!(store.get("web.key_pair", true).unwrap().value(), "secret");
/// ```
#[derive(Debug, Default)]
pub struct MemoryParameterStore {
    params: RwLock<HashMap<String, StoredParameter>>,
    puts: RwLock<Vec<String>>,
}

impl MemoryParameterStore {
    /// Create a new empty memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored parameters
    pub fn len(&self) -> usize {
        self.params.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names passed to successful `put` calls, in order
    pub fn puts(&self) -> Vec<String> {
        self.puts.read().clone()
    }

    /// The key id recorded for a parameter
    pub fn key_id(&self, name: &str) -> Option<String> {
        self.params.read().get(name).and_then(|p| p.key_id.clone())
    }

    /// Remove a parameter without going through `delete`
    pub fn remove(&self, name: &str) -> bool {
        self.params.write().remove(name).is_some()
    }
}

impl ParameterStore for MemoryParameterStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn put(&self, name: &str, value: &str, options: &PutOptions) -> ParameterResult<()> {
        let mut params = self.params.write();
        if !options.overwrite && params.contains_key(name) {
            return Err(ParameterError::AlreadyExists(name.to_string()));
        }
        params.insert(
            name.to_string(),
            StoredParameter {
                value: value.to_string(),
                encrypted: options.encrypted,
                key_id: options.key_id.clone(),
            },
        );
        self.puts.write().push(name.to_string());
        Ok(())
    }

    fn get(&self, name: &str, decrypt: bool) -> ParameterResult<Parameter> {
        let params = self.params.read();
        let stored = params
            .get(name)
            .ok_or_else(|| ParameterError::NotFound(name.to_string()))?;
        if stored.encrypted && !decrypt {
            return Err(ParameterError::Encrypted(name.to_string()));
        }
        Ok(Parameter::new(
            name,
            stored.value.clone(),
            stored.encrypted,
            stored.key_id.clone(),
        ))
    }

    fn delete(&self, name: &str) -> ParameterResult<()> {
        match self.params.write().remove(name) {
            Some(_) => Ok(()),
            None => Err(ParameterError::NotFound(name.to_string())),
        }
    }
}
