//! Errors that terminate a run, and their exit codes.

use std::path::PathBuf;

use thiserror::Error;

use crate::parser::ParseError;

/// Errors surfaced at the top of a `validate` or `dump` run.
#[derive(Debug, Error)]
pub enum FrontendError {
    /// A structural parse failure that aborted the run (validate is fail-fast).
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// No source could be resolved from arguments, stdin, or the environment.
    #[error("no input to parse given")]
    NoInput,

    /// One or more named files did not exist; aggregated across the batch.
    #[error("one or more manifest file(s) did not exist:\n  {}", paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join("\n  "))]
    MissingFiles {
        /// Every missing path, in command-line order.
        paths: Vec<PathBuf>,
    },

    /// End-of-batch tally for dump's fail-soft loop.
    #[error("failed to parse {failed} source(s)")]
    DumpFailures {
        /// How many sources failed to parse.
        failed: usize,
    },

    /// Unexpected failure outside the parser (I/O on an existing file, etc.).
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl FrontendError {
    /// Return the process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Internal(_) => 1,
            Self::Parse(_) | Self::DumpFailures { .. } => 2,
            Self::MissingFiles { .. } => 3,
            Self::NoInput => 4,
        }
    }
}

impl From<std::io::Error> for FrontendError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(err.into())
    }
}

/// Accumulator for paths that failed their existence check.
///
/// Built incrementally while a runner iterates its sources and consumed once
/// at the end, so a batch reports every missing file in one diagnostic
/// instead of stopping at the first typo.
#[derive(Debug, Default)]
pub struct MissingFilesReport {
    paths: Vec<PathBuf>,
}

impl MissingFilesReport {
    /// Create an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one missing path.
    pub fn push(&mut self, path: PathBuf) {
        self.paths.push(path);
    }

    /// Whether any path was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Convert into the aggregated error, or `Ok` when nothing was missing.
    ///
    /// # Errors
    ///
    /// Returns `FrontendError::MissingFiles` listing every recorded path.
    pub fn into_result(self) -> Result<(), FrontendError> {
        if self.paths.is_empty() {
            Ok(())
        } else {
            Err(FrontendError::MissingFiles { paths: self.paths })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_files_message_lists_each_path() {
        let mut report = MissingFilesReport::new();
        report.push(PathBuf::from("a.pp"));
        report.push(PathBuf::from("dir/b.pp"));
        let err = report.into_result().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("\n  a.pp"));
        assert!(msg.contains("\n  dir/b.pp"));
        assert!(msg.starts_with("one or more manifest file(s) did not exist:"));
    }

    #[test]
    fn test_empty_report_is_ok() {
        assert!(MissingFilesReport::new().into_result().is_ok());
    }

    #[test]
    fn test_exit_codes() {
        let parse = FrontendError::Parse(ParseError::new("bad"));
        assert_eq!(parse.exit_code(), 2);
        assert_eq!(FrontendError::NoInput.exit_code(), 4);
        let missing = FrontendError::MissingFiles {
            paths: vec![PathBuf::from("x.pp")],
        };
        assert_eq!(missing.exit_code(), 3);
        assert_eq!(FrontendError::DumpFailures { failed: 2 }.exit_code(), 2);
        let internal = FrontendError::Internal(anyhow::anyhow!("boom"));
        assert_eq!(internal.exit_code(), 1);
    }
}
