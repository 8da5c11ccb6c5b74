//! Key pair lifecycle
//!
//! A credential for a stack lives in three places: the key pair resource at the
//! provider (public half only, after creation), the encrypted copy in a
//! `ParameterStore`, and transiently a `0400` file handed to ssh.
//!
//! ```text
//!   Absent --create--> Provisioned --store--> Stored --delete--> Absent
//! ```
//!
//! `KeyPairManager` drives those transitions for one credential name;
//! `command` exposes them as `<stack> key [--create|--delete]`.

mod error;
mod traits;
mod memory;
mod ssh_keygen;
mod manager;
pub mod command;

pub use error::{CredentialError, CredentialResult, KeyPairError, KeyPairResult};
pub use traits::{CreatedKeyPair, KeyMaterial, KeyPairInfo, KeyPairProvider};
pub use memory::{MemoryKeyPairProvider, ProviderCall};
pub use ssh_keygen::SshKeygenProvider;
pub use manager::{KeyFile, KeyPairManager, StoreOutcome};
