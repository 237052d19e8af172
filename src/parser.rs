//! The external parser seam.
//!
//! This crate contains no grammar or AST of its own: the embedding binary
//! supplies a [`DslParser`] implementation and the runners treat its `Ast`
//! as an opaque value that only exists to be handed back to [`DslParser::render`].

use thiserror::Error;

/// A structural (syntax or semantic) failure reported by the parser.
///
/// Carries only a human-readable message; position information, if any,
/// is the parser's to embed in the text.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ParseError {
    /// Human-readable description of the failure.
    pub message: String,
}

impl ParseError {
    /// Construct a `ParseError` from any message-like value.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The parse/validate capability this front end orchestrates.
///
/// `origin` is a diagnostic label (a file path, `"command-line-string"`, or
/// `"stdin"`); parsers typically thread it into their error messages.
pub trait DslParser {
    /// The parse tree type. Opaque to this crate.
    type Ast;

    /// Parse `source` and run semantic validation on the result.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` on the first structural or semantic failure.
    fn parse_and_validate(&self, source: &str, origin: &str) -> Result<Self::Ast, ParseError>;

    /// Parse `source` without semantic validation (syntax only).
    ///
    /// # Errors
    ///
    /// Returns `ParseError` on a structural failure.
    fn parse_only(&self, source: &str) -> Result<Self::Ast, ParseError>;

    /// Render a parse tree as text for display.
    fn render(&self, ast: &Self::Ast) -> String;
}
