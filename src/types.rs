//! Serializable output envelopes for `--json` mode.
//!
//! These types are what gets written when structured output is requested.
//! They are decoupled from the internal error enum so the JSON shape stays
//! stable even if the taxonomy grows.

use serde::{Deserialize, Serialize};

use crate::errors::FrontendError;

/// Success envelope for `validate --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    /// Always `true`.
    pub ok: bool,
    /// How many sources were parsed and validated.
    pub checked: usize,
}

impl ValidateOutput {
    /// Construct a success envelope.
    #[must_use]
    pub fn checked(count: usize) -> Self {
        Self {
            ok: true,
            checked: count,
        }
    }
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Missing paths (for `missing_files` errors only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<String>>,
}

impl ErrorOutput {
    /// Construct from a `FrontendError`.
    #[must_use]
    pub fn from_frontend_error(err: &FrontendError) -> Self {
        let (code, paths) = match err {
            FrontendError::Parse(_) => ("parse_error", None),
            FrontendError::NoInput => ("no_input", None),
            FrontendError::MissingFiles { paths } => (
                "missing_files",
                Some(paths.iter().map(|p| p.display().to_string()).collect()),
            ),
            FrontendError::DumpFailures { .. } => ("dump_failures", None),
            FrontendError::Internal(_) => ("internal", None),
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message: err.to_string(),
                paths,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_missing_files_envelope_carries_paths() {
        let err = FrontendError::MissingFiles {
            paths: vec![PathBuf::from("a.pp"), PathBuf::from("b.pp")],
        };
        let out = ErrorOutput::from_frontend_error(&err);
        assert!(!out.ok);
        assert_eq!(out.error.code, "missing_files");
        assert_eq!(
            out.error.paths,
            Some(vec!["a.pp".to_owned(), "b.pp".to_owned()])
        );
    }

    #[test]
    fn test_parse_error_envelope() {
        let err = FrontendError::Parse(crate::parser::ParseError::new("unexpected '}'"));
        let out = ErrorOutput::from_frontend_error(&err);
        assert_eq!(out.error.code, "parse_error");
        assert_eq!(out.error.message, "unexpected '}'");
        assert!(out.error.paths.is_none());
    }
}
