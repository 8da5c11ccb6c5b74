//! Built-in command groups

use clap::{Arg, ArgAction, ArgMatches, Command};
use stax_core::router::{CommandGroup, CommandResult, Invocation};

/// `stax stacks`: list declared stacks
#[derive(Debug, Default, Clone, Copy)]
pub struct StacksCommand;

impl CommandGroup for StacksCommand {
    fn command(&self, name: &str) -> Command {
        Command::new(name.to_string()).arg(
            Arg::new("long")
                .short('l')
                .long("long")
                .action(ArgAction::SetTrue)
                .help("Include descriptions and key pair settings"),
        )
    }

    fn run(&self, invocation: &mut Invocation<'_>, matches: &ArgMatches) -> CommandResult<()> {
        let long = matches.get_flag("long");
        for stack in invocation.registry.stacks() {
            let capabilities = stack
                .capabilities()
                .iter()
                .map(|c| c.id())
                .collect::<Vec<_>>();
            let capabilities = if capabilities.is_empty() {
                "-".to_string()
            } else {
                capabilities.join(",")
            };
            write!(invocation.out, "{}\t{}", stack.name(), capabilities)?;
            if long {
                write!(
                    invocation.out,
                    "\t{}\t{}",
                    stack.kms_id().unwrap_or("-"),
                    stack.description()
                )?;
            }
            writeln!(invocation.out)?;
        }
        Ok(())
    }
}
