//! Operator reporting
//!
//! Components take an `Arc<dyn Logger>` and report expected-absent and
//! expected-conflict conditions through `warn`. Command output never goes
//! through the logger; it is written to the sink handed to dispatch.

mod traits;
mod noop;
mod console;
mod memory;

pub use traits::{Logger, LogLevel};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;
pub use memory::{MemoryLogger, LogEntry};
