//! Backend factories keyed by name

use std::sync::Arc;

use super::error::{ConfigError, ConfigResult};
use super::settings::Settings;
use crate::keypair::{KeyPairProvider, MemoryKeyPairProvider, SshKeygenProvider};
use crate::logging::Logger;
use crate::params::{KeychainParameterStore, MemoryParameterStore, ParameterStore};
use crate::services::Services;

const DEFAULT_PARAMETER_STORE: &str = "keychain";
const DEFAULT_KEY_PAIR_PROVIDER: &str = "ssh-keygen";

const PARAMETER_STORES: &[&str] = &["keychain", "memory"];
const KEY_PAIR_PROVIDERS: &[&str] = &["ssh-keygen", "memory"];

fn unknown(kind: &'static str, name: &str, known: &[&str]) -> ConfigError {
    ConfigError::UnknownBackend {
        kind,
        name: name.to_string(),
        expected: known.join(", "),
    }
}

/// Refuse a store that cannot be used here, e.g. a keychain on a headless host
fn ensure_available(store: Arc<dyn ParameterStore>) -> ConfigResult<Arc<dyn ParameterStore>> {
    if store.is_available() {
        Ok(store)
    } else {
        Err(ConfigError::Unavailable {
            kind: "parameter store",
            name: store.name().to_string(),
        })
    }
}

/// Parameter store selected by `settings.parameter_store`
pub fn create_parameter_store(settings: &Settings) -> ConfigResult<Arc<dyn ParameterStore>> {
    let name = settings
        .parameter_store
        .as_deref()
        .unwrap_or(DEFAULT_PARAMETER_STORE);
    let store: Arc<dyn ParameterStore> = match name.to_lowercase().as_str() {
        "keychain" => Arc::new(match &settings.keychain_service {
            Some(service) => KeychainParameterStore::with_service(service),
            None => KeychainParameterStore::new(),
        }),
        "memory" => Arc::new(MemoryParameterStore::new()),
        _ => return Err(unknown("parameter store", name, PARAMETER_STORES)),
    };
    ensure_available(store)
}

/// Key pair provider selected by `settings.key_pair_provider`
pub fn create_key_pair_provider(settings: &Settings) -> ConfigResult<Arc<dyn KeyPairProvider>> {
    let name = settings
        .key_pair_provider
        .as_deref()
        .unwrap_or(DEFAULT_KEY_PAIR_PROVIDER);
    match name.to_lowercase().as_str() {
        "ssh-keygen" | "ssh_keygen" => {
            let dir = settings
                .key_pair_dir
                .clone()
                .unwrap_or_else(SshKeygenProvider::default_dir);
            let provider = SshKeygenProvider::new(dir);
            Ok(Arc::new(match &settings.key_type {
                Some(key_type) => provider.with_key_type(key_type),
                None => provider,
            }))
        }
        "memory" => Ok(Arc::new(MemoryKeyPairProvider::new())),
        _ => Err(unknown("key pair provider", name, KEY_PAIR_PROVIDERS)),
    }
}

/// Everything commands need, built from settings
pub fn create_services(settings: &Settings, logger: Arc<dyn Logger>) -> ConfigResult<Services> {
    let services = Services::new(
        create_key_pair_provider(settings)?,
        create_parameter_store(settings)?,
        logger,
    );
    Ok(services.with_kms_id(settings.kms_id.as_deref()))
}
