//! Output formatting: per-source headers, rendered bodies, error channels.

use std::io;
use std::io::Write;

use crate::errors::FrontendError;
use crate::types::{ErrorOutput, ValidateOutput};

/// Writes the per-source portion of a run to one output stream.
///
/// Headers are only emitted for batches with more than one source, so the
/// common single-source case stays clean for piping.
pub struct Reporter<W: Write> {
    out: W,
    show_headers: bool,
}

impl<W: Write> Reporter<W> {
    /// Construct a reporter over `out`. `show_headers` should be true when
    /// the batch holds more than one source.
    pub fn new(out: W, show_headers: bool) -> Self {
        Self { out, show_headers }
    }

    /// Write the `--- <origin>` header for the next source, if headers are on.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    pub fn header(&mut self, origin: &str) -> io::Result<()> {
        if self.show_headers {
            writeln!(self.out, "--- {origin}")?;
        }
        Ok(())
    }

    /// Write a rendered parse tree, normalized to exactly one trailing newline.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    pub fn body(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text.trim_end_matches('\n'))
    }

    /// Unwrap the inner writer (used by tests to inspect output).
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Forward a per-source parser error to the error channel.
pub fn error(message: &str) {
    tracing::error!("{message}");
}

/// Emit an informational line (default-manifest fallback and the like).
pub fn notice(message: &str) {
    tracing::info!("{message}");
}

/// Write a terminal error to stderr, honoring `--json`.
///
/// Plain mode goes through the tracing facility; JSON mode writes the
/// structured envelope directly so it stays machine-parseable.
pub fn write_error(err: &FrontendError, json: bool) {
    if json {
        let envelope = ErrorOutput::from_frontend_error(err);
        let s = serde_json::to_string_pretty(&envelope).unwrap_or_default();
        let stderr = io::stderr();
        let mut out = stderr.lock();
        let _ = writeln!(out, "{s}");
    } else {
        tracing::error!("{err}");
    }
}

/// Write the `validate` success result to stdout.
///
/// Plain mode is silent — a clean validate produces no output, matching the
/// scriptable contract. JSON mode prints the success envelope.
pub fn write_validate_ok(checked: usize, json: bool) {
    if json {
        let envelope = ValidateOutput::checked(checked);
        match serde_json::to_string_pretty(&envelope) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("JSON serialization error: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_emitted_for_multi_source_batches() {
        let mut reporter = Reporter::new(Vec::new(), true);
        reporter.header("a.pp").unwrap();
        reporter.body("(tree a)").unwrap();
        reporter.header("b.pp").unwrap();
        reporter.body("(tree b)").unwrap();
        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(out, "--- a.pp\n(tree a)\n--- b.pp\n(tree b)\n");
    }

    #[test]
    fn test_header_suppressed_for_single_source() {
        let mut reporter = Reporter::new(Vec::new(), false);
        reporter.header("command-line-string").unwrap();
        reporter.body("(tree)").unwrap();
        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(out, "(tree)\n");
    }

    #[test]
    fn test_body_normalizes_trailing_newlines() {
        let mut reporter = Reporter::new(Vec::new(), false);
        reporter.body("(tree)\n\n").unwrap();
        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(out, "(tree)\n");
    }
}
