//! Capability mixins
//!
//! A capability is a reusable bundle of behavior a stack opts into by name
//! (`include: [Keypair]`). Stacks hold capability tags; `Capability::run` is the
//! table from tag to behavior.

use std::collections::HashMap;
use std::fmt;
use std::io::Write;

use clap::{ArgMatches, Command};
use once_cell::sync::Lazy;

use crate::keypair;
use crate::router::{CommandResult, StackContext};

/// Built-in capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// SSH key pair provisioning: `<stack> key [--create|--delete]`
    KeyPair,
}

/// Accepted spellings, matched after lowercasing
static ALIASES: Lazy<HashMap<&'static str, Capability>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("keypair", Capability::KeyPair);
    m.insert("key_pair", Capability::KeyPair);
    m.insert("key-pair", Capability::KeyPair);
    m
});

impl Capability {
    /// Every built-in capability
    pub fn all() -> &'static [Capability] {
        &[Capability::KeyPair]
    }

    /// Resolve a symbolic identifier such as `Keypair`
    pub fn resolve(id: &str) -> Option<Capability> {
        ALIASES.get(id.trim().to_lowercase().as_str()).copied()
    }

    /// Canonical identifier, as written in declaration files
    pub fn id(&self) -> &'static str {
        match self {
            Capability::KeyPair => "Keypair",
        }
    }

    /// Name of the subcommand this capability adds to a stack
    pub fn command_name(&self) -> &'static str {
        match self {
            Capability::KeyPair => keypair::command::COMMAND_NAME,
        }
    }

    /// The subcommand this capability adds to a stack
    pub fn command(&self) -> Command {
        match self {
            Capability::KeyPair => keypair::command::command(),
        }
    }

    /// Run this capability's subcommand for a stack
    pub fn run(
        &self,
        ctx: &StackContext<'_>,
        matches: &ArgMatches,
        out: &mut dyn Write,
    ) -> CommandResult<()> {
        match self {
            Capability::KeyPair => keypair::command::run(ctx, matches, out),
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
