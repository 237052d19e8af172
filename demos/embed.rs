//! Embedding demo: wires a toy key/value parser into the front end.
//!
//! ```sh
//! echo 'name = demo' | cargo run --example embed -- dump --no-validate
//! cargo run --example embed -- validate demo.conf
//! ```

use std::process::ExitCode;

use manicli::{DslParser, ParseError};

/// A deliberately tiny parser: one `key = value` pair per line, `#` comments.
/// Validation additionally rejects duplicate keys.
struct KvParser;

impl DslParser for KvParser {
    type Ast = Vec<(String, String)>;

    fn parse_and_validate(&self, source: &str, origin: &str) -> Result<Self::Ast, ParseError> {
        let pairs = self.parse_only(source)?;
        let mut seen = std::collections::HashSet::new();
        for (key, _) in &pairs {
            if !seen.insert(key.clone()) {
                return Err(ParseError::new(format!(
                    "{origin}: duplicate key '{key}'"
                )));
            }
        }
        Ok(pairs)
    }

    fn parse_only(&self, source: &str) -> Result<Self::Ast, ParseError> {
        let mut pairs = Vec::new();
        for (idx, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(ParseError::new(format!(
                    "line {}: expected 'key = value', got '{line}'",
                    idx + 1
                )));
            };
            pairs.push((key.trim().to_owned(), value.trim().to_owned()));
        }
        Ok(pairs)
    }

    fn render(&self, ast: &Self::Ast) -> String {
        let mut out = String::from("(document");
        for (key, value) in ast {
            out.push_str(&format!("\n  (pair {key} {value:?})"));
        }
        out.push(')');
        out
    }
}

fn main() -> ExitCode {
    manicli::run(&KvParser)
}
