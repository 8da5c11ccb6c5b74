//! `<stack> key` subcommand contributed by the key pair capability

use std::io::Write;

use clap::{Arg, ArgAction, ArgMatches, Command};

use super::manager::{KeyPairManager, StoreOutcome};
use crate::router::{CommandResult, StackContext};

pub const COMMAND_NAME: &str = "key";

/// `key [--create | --delete]`
pub fn command() -> Command {
    Command::new(COMMAND_NAME)
        .about("key pair tasks")
        .arg(
            Arg::new("create")
                .long("create")
                .action(ArgAction::SetTrue)
                .help("create a new key pair"),
        )
        .arg(
            Arg::new("delete")
                .long("delete")
                .action(ArgAction::SetTrue)
                .conflicts_with("create")
                .help("delete key pair"),
        )
}

/// What an invocation of `key` asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Describe,
    Create,
    Delete,
}

impl KeyAction {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        if matches.get_flag("create") {
            KeyAction::Create
        } else if matches.get_flag("delete") {
            KeyAction::Delete
        } else {
            KeyAction::Describe
        }
    }
}

pub fn run(ctx: &StackContext<'_>, matches: &ArgMatches, out: &mut dyn Write) -> CommandResult<()> {
    let manager = KeyPairManager::for_stack(ctx.stack, ctx.services);
    match KeyAction::from_matches(matches) {
        KeyAction::Create => {
            if manager.store()? == StoreOutcome::Stored {
                writeln!(
                    out,
                    "created key pair {} and stored it as {}",
                    manager.key_pair_name(),
                    manager.store_name()
                )?;
            }
        }
        KeyAction::Delete => manager.delete()?,
        KeyAction::Describe => {
            if let Some(info) = manager.describe()? {
                writeln!(out, "{}", info)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<ArgMatches, clap::Error> {
        command().try_get_matches_from(std::iter::once("key").chain(args.iter().copied()))
    }

    #[test]
    fn test_actions_from_flags() {
        assert_eq!(KeyAction::from_matches(&parse(&[]).unwrap()), KeyAction::Describe);
        assert_eq!(KeyAction::from_matches(&parse(&["--create"]).unwrap()), KeyAction::Create);
        assert_eq!(KeyAction::from_matches(&parse(&["--delete"]).unwrap()), KeyAction::Delete);
    }

    #[test]
    fn test_flags_are_mutually_exclusive() {
        let err = parse(&["--create", "--delete"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
