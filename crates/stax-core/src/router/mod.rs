//! Command routing
//!
//! Every registered stack and every non-stack command group is one top-level
//! subcommand. `build` renders the routes as a `clap` tree; `dispatch` walks
//! parsed matches back to a capability or command group.
//!
//! ```text
//! stax payments key --create
//!      ^^^^^^^^ Route::Stack -> StackType "payments"
//!               ^^^ last attached capability with command "key"
//! ```

mod error;
mod traits;
mod table;
mod dispatch;

pub use error::{CommandError, CommandResult};
pub use traits::{CommandGroup, Invocation, StackContext};
pub use table::{CommandRouter, Route, RouteEntry};
pub use dispatch::{build, dispatch};
