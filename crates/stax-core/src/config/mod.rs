//! User settings and backend selection
//!
//! Settings live in a YAML file (`~/.config/stax/config.yaml` by default) and
//! pick which key pair provider and parameter store commands talk to.

mod error;
mod settings;
mod backends;

pub use error::{ConfigError, ConfigResult};
pub use settings::{Settings, SettingsFile};
pub use backends::{create_key_pair_provider, create_parameter_store, create_services};
