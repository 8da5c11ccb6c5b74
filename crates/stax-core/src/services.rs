//! Collaborators handed to commands at dispatch time

use std::sync::Arc;

use crate::keypair::{KeyPairProvider, MemoryKeyPairProvider};
use crate::logging::{Logger, NoOpLogger};
use crate::params::{MemoryParameterStore, ParameterStore};

/// The external systems commands operate on
#[derive(Clone)]
pub struct Services {
    pub key_pairs: Arc<dyn KeyPairProvider>,
    pub parameters: Arc<dyn ParameterStore>,
    pub logger: Arc<dyn Logger>,
    /// Encryption key id used when a stack does not name its own
    pub kms_id: Option<String>,
}

impl Services {
    pub fn new(
        key_pairs: Arc<dyn KeyPairProvider>,
        parameters: Arc<dyn ParameterStore>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            key_pairs,
            parameters,
            logger,
            kms_id: None,
        }
    }

    /// Memory backends and a silent logger
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryKeyPairProvider::new()),
            Arc::new(MemoryParameterStore::new()),
            Arc::new(NoOpLogger::new()),
        )
    }

    pub fn with_kms_id(mut self, kms_id: Option<impl Into<String>>) -> Self {
        self.kms_id = kms_id.map(Into::into);
        self
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("key_pairs", &self.key_pairs.name())
            .field("parameters", &self.parameters.name())
            .field("kms_id", &self.kms_id)
            .finish()
    }
}
