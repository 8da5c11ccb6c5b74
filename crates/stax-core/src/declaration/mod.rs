//! Project declarations
//!
//! A project declares its stacks in a `Staxfile` at its root:
//!
//! ```yaml
//! defaults:
//!   kms_id: alias/stax
//! stacks:
//!   - vpc
//!   - name: payments
//!     include: [Keypair]
//! ```
//!
//! Options for a single stack can also live in `lib/stack/<name>.yaml`
//! next to the `Staxfile`; those are merged over the declared options.

mod error;
mod file;
mod loader;

pub use error::{DeclarationError, DeclarationResult};
pub use file::{
    find_declaration, invalid_stack_name, Declaration, Defaults, StackDeclaration, StackEntry, DECLARATION_FILE,
    EXTENSION_DIR,
};
pub use loader::{DeclarationLoader, Project};
