#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! manicli — a validate/dump CLI front end over a pluggable DSL parser.
//!
//! The crate owns input resolution, the per-source run loops, and the
//! console reporting contract; the grammar lives behind the [`DslParser`]
//! trait supplied by the embedding binary:
//!
//! ```no_run
//! use std::process::ExitCode;
//!
//! use manicli::{DslParser, ParseError};
//!
//! struct MyParser;
//!
//! impl DslParser for MyParser {
//!     type Ast = ();
//!     fn parse_and_validate(&self, _: &str, _: &str) -> Result<(), ParseError> {
//!         Ok(())
//!     }
//!     fn parse_only(&self, _: &str) -> Result<(), ParseError> {
//!         Ok(())
//!     }
//!     fn render(&self, _ast: &()) -> String {
//!         String::new()
//!     }
//! }
//!
//! fn main() -> ExitCode {
//!     manicli::run(&MyParser)
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod errors;
pub mod input;
pub mod parser;
pub mod types;

use std::ffi::OsString;
use std::process::ExitCode;

use clap::Parser as _;
use tracing_subscriber::EnvFilter;

pub use cli::args::{Cli, Command, DumpArgs, ValidateArgs};
pub use errors::FrontendError;
pub use input::resolve::{EnvironmentProvider, StdinSource, SystemEnvironment, SystemStdin};
pub use input::source::SourceRef;
pub use parser::{DslParser, ParseError};

/// Install the stderr tracing subscriber used for notices and errors.
///
/// Defaults to the `info` level so default-manifest notices show; override
/// with `RUST_LOG`. Safe to skip when the embedder installs its own.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Parse `std::env::args`, run the selected command, and return the exit code.
///
/// This is the whole front end for an embedding binary; see the crate docs.
#[must_use]
pub fn run<P: DslParser>(parser: &P) -> ExitCode {
    init_tracing();
    ExitCode::from(run_from(
        std::env::args_os(),
        parser,
        &SystemEnvironment,
        &mut SystemStdin,
    ))
}

/// Like [`run`], but with explicit arguments, environment, and stdin, and
/// returning the raw exit code.
///
/// Does not install a tracing subscriber, so tests and embedders keep
/// control of the logging setup.
pub fn run_from<P, I, T>(
    args: I,
    parser: &P,
    env: &dyn EnvironmentProvider,
    stdin: &mut dyn StdinSource,
) -> u8
where
    P: DslParser,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);
    let json = match &cli.command {
        Command::Validate(args) => args.json,
        Command::Dump(_) => false,
    };
    match commands::dispatch(&cli.command, parser, env, stdin) {
        Ok(()) => 0,
        Err(err) => {
            cli::output::write_error(&err, json);
            err.exit_code()
        }
    }
}
