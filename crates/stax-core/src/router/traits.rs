//! Command group trait and the contexts commands run in

use std::io::Write;

use clap::{ArgMatches, Command};

use super::error::CommandResult;
use crate::registry::{StackRegistry, StackType};
use crate::services::Services;

/// What a stack capability sees when its subcommand runs
pub struct StackContext<'a> {
    pub stack: &'a StackType,
    pub services: &'a Services,
}

/// What a command group sees when it runs
pub struct Invocation<'a> {
    pub registry: &'a StackRegistry,
    pub services: &'a Services,
    pub out: &'a mut dyn Write,
}

/// A non-stack command group mounted at the top level
pub trait CommandGroup: Send + Sync {
    /// The group's subcommand tree, rooted at `name`
    fn command(&self, name: &str) -> Command;

    /// Run the group with the matches for its subcommand
    fn run(&self, invocation: &mut Invocation<'_>, matches: &ArgMatches) -> CommandResult<()>;
}
