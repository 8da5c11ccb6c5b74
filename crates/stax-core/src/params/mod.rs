//! Secure parameter storage
//!
//! This module provides the secret store seam the key pair lifecycle writes to:
//! - `ParameterStore` trait for implementing custom stores
//! - Built-in implementations: `MemoryParameterStore`, `KeychainParameterStore`

mod traits;
mod memory_store;
mod keychain_store;

pub use traits::{Parameter, ParameterError, ParameterResult, ParameterStore, PutOptions};
pub use memory_store::MemoryParameterStore;
pub use keychain_store::KeychainParameterStore;
