//! Rendering routes as a clap tree and dispatching parsed matches

use std::io::Write;

use clap::{ArgMatches, Command};

use super::error::{CommandError, CommandResult};
use super::table::Route;
use super::traits::{Invocation, StackContext};
use crate::log_debug;
use crate::registry::StackRegistry;
use crate::services::Services;

/// Add one subcommand per route to `root`
pub fn build(registry: &StackRegistry, root: Command) -> Command {
    registry.router().entries().iter().fold(root, |root, entry| {
        let command = match &entry.route {
            Route::Stack => stack_command(registry, &entry.name),
            Route::Group(group) => group.command(&entry.name),
        };
        root.subcommand(command.about(entry.description.clone()))
    })
}

fn stack_command(registry: &StackRegistry, name: &str) -> Command {
    let command = Command::new(name.to_string());
    let capabilities = registry.stack(name).map(|s| s.commands()).unwrap_or_default();
    if capabilities.is_empty() {
        return command;
    }
    capabilities
        .iter()
        .fold(command, |command, capability| command.subcommand(capability.command()))
        .subcommand_required(true)
        .arg_required_else_help(true)
}

/// Run whatever `matches` selects, writing command output to `out`
pub fn dispatch(
    registry: &StackRegistry,
    services: &Services,
    matches: &ArgMatches,
    out: &mut dyn Write,
) -> CommandResult<()> {
    let (name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| CommandError::MissingCommand("stax".to_string()))?;
    let entry = registry
        .router()
        .entry(name)
        .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;

    match &entry.route {
        Route::Stack => {
            let stack = registry
                .stack(name)
                .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;
            let (command, command_matches) = sub_matches
                .subcommand()
                .ok_or_else(|| CommandError::MissingCommand(name.to_string()))?;
            let capability = stack
                .resolve_command(command)
                .ok_or_else(|| CommandError::UnknownCommand(format!("{} {}", name, command)))?;

            log_debug!(services.logger, "dispatching {} {} to {}", name, command, capability);
            capability.run(&StackContext { stack, services }, command_matches, out)
        }
        Route::Group(group) => {
            log_debug!(services.logger, "dispatching {} to command group", name);
            group.run(&mut Invocation { registry, services, out }, sub_matches)
        }
    }
}
