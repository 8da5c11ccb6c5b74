//! Stax Core
//!
//! Stack registry, capability mixins and credential lifecycle for the `stax`
//! infrastructure CLI. Hosts declare named stacks, attach capabilities such as
//! key pair management, and expose every stack as a top-level command.
//!
//! ## Stacks and capabilities
//!
//! ```rust
//! use stax_core::registry::{StackOptions, StackRegistry};
//! use stax_core::capability::Capability;
//!
//! let mut registry = StackRegistry::default();
//! registry
//!     .add_stack("payments", &StackOptions::new().with_include(["Keypair"]))
//!     .unwrap();
//!
//! assert!(registry.stack("payments").unwrap().has(Capability::KeyPair));
//! ```
//!
//! ## Key pairs
//!
//! ```rust
//! use stax_core::keypair::{KeyPairManager, StoreOutcome};
//! use stax_core::registry::StackType;
//! use stax_core::services::Services;
//!
//! let services = Services::in_memory();
//! let manager = KeyPairManager::for_stack(&StackType::new("bastion"), &services);
//!
//! assert_eq!(manager.store().unwrap(), StoreOutcome::Stored);
//! let key = manager.retrieve().unwrap();
//! assert!(key.path().exists());
//! ```

pub mod logging;
pub mod params;
pub mod keypair;
pub mod capability;
pub mod registry;
pub mod router;
pub mod declaration;
pub mod config;
pub mod services;

// Re-export commonly used types
pub use logging::{ConsoleLogger, Logger, LogLevel, MemoryLogger, NoOpLogger};

pub use params::{
    KeychainParameterStore, MemoryParameterStore, Parameter, ParameterError, ParameterStore,
    PutOptions,
};

pub use keypair::{
    CredentialError, KeyFile, KeyMaterial, KeyPairError, KeyPairInfo, KeyPairManager,
    KeyPairProvider, MemoryKeyPairProvider, SshKeygenProvider, StoreOutcome,
};

pub use capability::Capability;

pub use registry::{RegistryError, StackOptions, StackRegistry, StackType};

pub use router::{CommandError, CommandGroup, CommandRouter, Invocation, Route, StackContext};

pub use declaration::{find_declaration, DeclarationError, DeclarationLoader, Project};

pub use config::{ConfigError, Settings, SettingsFile};

pub use services::Services;
