//! The `stax` command-line interface
//!
//! Loads the project's `Staxfile`, renders every declared stack as a
//! subcommand and dispatches to it with backends chosen by the user settings.

mod commands;

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, Command};
use stax_core::config::{self, SettingsFile};
use stax_core::declaration::DeclarationLoader;
use stax_core::logging::{ConsoleLogger, Logger};
use stax_core::registry::StackRegistry;
use stax_core::router;

pub use commands::StacksCommand;

/// Top-level command without any stacks mounted
pub fn root_command() -> Command {
    Command::new("stax")
        .about("Work with the stacks declared in a Staxfile")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        // stacks may be called `help`; `--help` still works
        .disable_help_subcommand(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .env("STAX_CONFIG")
                .value_parser(value_parser!(PathBuf))
                .help("Settings file [default: <config dir>/stax/config.yaml]"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Print debug output"),
        )
}

/// Registry with the built-in command groups
pub fn registry(logger: Arc<dyn Logger>) -> StackRegistry {
    let mut registry = StackRegistry::new(logger);
    registry.add_command("stacks", Box::new(StacksCommand));
    registry
}

/// Run `stax` with the given argv, writing command output to stdout
pub fn run<I, T>(args: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with(args, &mut out)
}

/// Same as [`run`], writing command output to `out`
pub fn run_with(args: Vec<OsString>, out: &mut dyn Write) -> anyhow::Result<()> {
    // the logger is needed before argv can be parsed, since parsing needs the stacks
    let verbose = ConsoleLogger::debug_from_env() || wants_verbose(&args);
    let logger: Arc<dyn Logger> = Arc::new(ConsoleLogger::new().verbose(verbose));

    let mut registry = registry(logger.clone());
    let cwd = std::env::current_dir().context("failed to determine the working directory")?;
    DeclarationLoader::new(logger.clone())
        .load(&cwd, &mut registry)
        .context("failed to load stack declarations")?;

    let matches = router::build(&registry, root_command())
        .try_get_matches_from(args)
        .unwrap_or_else(|e| e.exit());

    let settings_file = match matches.get_one::<PathBuf>("config") {
        Some(path) => SettingsFile::new(path),
        None => SettingsFile::user(),
    };
    let settings = settings_file
        .load()
        .with_context(|| format!("failed to load settings from {}", settings_file.path().display()))?;
    let services = config::create_services(&settings, logger)?;

    router::dispatch(&registry, &services, &matches, out)?;
    out.flush()?;
    Ok(())
}

fn wants_verbose(args: &[OsString]) -> bool {
    args.iter()
        .skip(1)
        .take_while(|arg| *arg != "--")
        .any(|arg| arg == "-v" || arg == "--verbose")
}
