//! CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// manicli — validate and dump DSL manifests through a pluggable parser.
#[derive(Debug, Parser)]
#[command(
    name = "manicli",
    about = "Validate and dump DSL manifests from the CLI",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check manifests for parse and validation errors.
    Validate(ValidateArgs),
    /// Print the parse tree of each source.
    Dump(DumpArgs),
}

/// Arguments for `manicli validate`.
#[derive(Debug, Parser)]
pub struct ValidateArgs {
    /// Manifest files to validate. With none given, reads standard input
    /// when piped, else validates the default manifest.
    #[arg(value_name = "MANIFEST")]
    pub manifests: Vec<PathBuf>,

    /// Report the result as a JSON object instead of plain text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `manicli dump`.
#[derive(Debug, Parser)]
pub struct DumpArgs {
    /// Parse the given string instead of any files.
    #[arg(short = 'e', value_name = "SOURCE")]
    pub execute: Option<String>,

    /// Run semantic validation on each parsed source.
    #[arg(long, overrides_with = "no_validate")]
    pub validate: bool,

    /// Only check syntax; skip semantic validation.
    #[arg(long = "no-validate", overrides_with = "validate")]
    pub no_validate: bool,

    /// Manifest files to dump. Ignored when -e is given.
    #[arg(value_name = "MANIFEST")]
    pub manifests: Vec<PathBuf>,
}

impl DumpArgs {
    /// The explicit `--validate`/`--no-validate` choice, if any.
    #[must_use]
    pub fn validate_flag(&self) -> Option<bool> {
        if self.validate {
            Some(true)
        } else if self.no_validate {
            Some(false)
        } else {
            None
        }
    }
}
