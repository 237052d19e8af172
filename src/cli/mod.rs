//! CLI layer: argument parsing and output formatting.
pub mod args;
pub mod output;

pub use args::{Cli, Command, DumpArgs, ValidateArgs};
pub use output::{Reporter, notice, write_error, write_validate_ok};
