//! Command dispatch: routes `Command` enum variants to their runners.
pub mod dump;
pub mod validate;

use crate::cli::args::Command;
use crate::errors::FrontendError;
use crate::input::resolve::{EnvironmentProvider, StdinSource};
use crate::parser::DslParser;

/// Dispatch a parsed `Command` to its runner.
///
/// # Errors
///
/// Returns `FrontendError` on any command failure.
pub fn dispatch<P: DslParser>(
    command: &Command,
    parser: &P,
    env: &dyn EnvironmentProvider,
    stdin: &mut dyn StdinSource,
) -> Result<(), FrontendError> {
    match command {
        Command::Validate(args) => validate::run_command(args, parser, env, stdin),
        Command::Dump(args) => dump::run_command(args, parser, env, stdin),
    }
}
