//! Stack type registry
//!
//! The registry turns "add a stack with these mixins" requests into stack type
//! descriptors and feeds each one to the command router.
//!
//! ```rust
//! use stax_core::registry::{StackOptions, StackRegistry};
//!
//! let mut registry = StackRegistry::default();
//! registry.add_stack("payments", &StackOptions::new().with_include(["Keypair"])).unwrap();
//! assert_eq!(registry.list_stacks(), ["payments"]);
//! ```

mod error;
mod stack;
mod stack_registry;

pub use error::{RegistryError, RegistryResult};
pub use stack::{StackOptions, StackType};
pub use stack_registry::StackRegistry;
