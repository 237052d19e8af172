//! Input resolution: turn raw CLI arguments into an ordered set of sources.
//!
//! Resolution strategy (in priority order):
//!
//! 1. **Inline source** (`-e`): it alone becomes the batch; positional file
//!    arguments are silently ignored.
//! 2. **Positional files**: one `SourceRef::File` each, in the given order.
//! 3. **Standard input**: when not attached to a terminal, the whole stream
//!    is buffered eagerly into a single source. Read at most once.
//! 4. **Fallback**: validate falls back to the environment's default manifest
//!    (with a notice naming it); dump fails with `NoInput`.

use std::io;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use anyhow::Context;

use super::source::SourceRef;
use crate::cli::output;
use crate::errors::FrontendError;

/// Which command the resolution is for. Only the empty-input fallback differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `validate`: falls back to the default manifest.
    Validate,
    /// `dump`: no fallback; empty input is fatal.
    Dump,
}

/// Environment lookups, injected so resolution is deterministic under test.
pub trait EnvironmentProvider {
    /// The manifest validated when no explicit input is given.
    fn default_manifest(&self) -> PathBuf;

    /// Whether `dump` runs semantic validation when neither `--validate`
    /// nor `--no-validate` is passed.
    fn dump_validates_by_default(&self) -> bool {
        true
    }
}

/// Environment provider backed by process environment variables.
///
/// `MANICLI_MANIFEST` overrides the default manifest path.
#[derive(Debug, Default)]
pub struct SystemEnvironment;

impl EnvironmentProvider for SystemEnvironment {
    fn default_manifest(&self) -> PathBuf {
        std::env::var_os("MANICLI_MANIFEST")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("manifests/site.pp"))
    }
}

/// Standard-input access, injected for the same reason as the environment.
pub trait StdinSource {
    /// Whether stdin is attached to an interactive terminal.
    fn is_interactive(&self) -> bool;

    /// Consume the entire stream into memory.
    ///
    /// Called at most once per invocation; the buffered text lives for the
    /// rest of the run, so memory use is proportional to input size.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn read_all(&mut self) -> io::Result<String>;
}

/// The process's real standard input.
#[derive(Debug, Default)]
pub struct SystemStdin;

impl StdinSource for SystemStdin {
    fn is_interactive(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn read_all(&mut self) -> io::Result<String> {
        let mut buf = String::new();
        io::stdin().lock().read_to_string(&mut buf)?;
        Ok(buf)
    }
}

/// Resolve the ordered, non-empty set of sources for one invocation.
///
/// # Errors
///
/// - `FrontendError::NoInput` — dump with nothing to read
/// - `FrontendError::Internal` — stdin could not be read
pub fn resolve(
    files: &[PathBuf],
    inline: Option<&str>,
    mode: Mode,
    env: &dyn EnvironmentProvider,
    stdin: &mut dyn StdinSource,
) -> Result<Vec<SourceRef>, FrontendError> {
    if let Some(text) = inline {
        return Ok(vec![SourceRef::Inline {
            text: text.to_owned(),
        }]);
    }

    if !files.is_empty() {
        return Ok(files
            .iter()
            .map(|path| SourceRef::File { path: path.clone() })
            .collect());
    }

    if !stdin.is_interactive() {
        let text = stdin
            .read_all()
            .context("failed to read standard input")
            .map_err(FrontendError::Internal)?;
        return Ok(vec![SourceRef::Stdin { text }]);
    }

    match mode {
        Mode::Validate => {
            let path = env.default_manifest();
            output::notice(&format!(
                "no manifest specified, validating the default manifest {}",
                path.display()
            ));
            Ok(vec![SourceRef::DefaultManifest { path }])
        }
        Mode::Dump => Err(FrontendError::NoInput),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fake stdin: `Some(text)` behaves like a pipe, `None` like a terminal.
    struct FakeStdin {
        text: Option<String>,
        reads: usize,
    }

    impl FakeStdin {
        fn piped(text: &str) -> Self {
            Self {
                text: Some(text.to_owned()),
                reads: 0,
            }
        }

        fn terminal() -> Self {
            Self {
                text: None,
                reads: 0,
            }
        }
    }

    impl StdinSource for FakeStdin {
        fn is_interactive(&self) -> bool {
            self.text.is_none()
        }

        fn read_all(&mut self) -> io::Result<String> {
            self.reads += 1;
            Ok(self.text.clone().unwrap_or_default())
        }
    }

    struct FixedEnv(PathBuf);

    impl EnvironmentProvider for FixedEnv {
        fn default_manifest(&self) -> PathBuf {
            self.0.clone()
        }
    }

    fn env() -> FixedEnv {
        FixedEnv(PathBuf::from("manifests/site.pp"))
    }

    #[test]
    fn test_inline_wins_over_positional_files() {
        let files = vec![PathBuf::from("a.pp"), PathBuf::from("b.pp")];
        let sources = resolve(
            &files,
            Some("1 + 1"),
            Mode::Dump,
            &env(),
            &mut FakeStdin::terminal(),
        )
        .unwrap();
        assert_eq!(
            sources,
            vec![SourceRef::Inline {
                text: "1 + 1".to_owned()
            }]
        );
    }

    #[test]
    fn test_positional_files_keep_order() {
        let files = vec![PathBuf::from("b.pp"), PathBuf::from("a.pp")];
        let sources = resolve(&files, None, Mode::Validate, &env(), &mut FakeStdin::terminal())
            .unwrap();
        let origins: Vec<String> = sources.iter().map(|s| s.origin().into_owned()).collect();
        assert_eq!(origins, vec!["b.pp", "a.pp"]);
    }

    #[test]
    fn test_piped_stdin_is_buffered_once() {
        let mut stdin = FakeStdin::piped("node default {}");
        let sources = resolve(&[], None, Mode::Dump, &env(), &mut stdin).unwrap();
        assert_eq!(
            sources,
            vec![SourceRef::Stdin {
                text: "node default {}".to_owned()
            }]
        );
        assert_eq!(stdin.reads, 1);
    }

    #[test]
    fn test_validate_falls_back_to_default_manifest() {
        let sources =
            resolve(&[], None, Mode::Validate, &env(), &mut FakeStdin::terminal()).unwrap();
        assert_eq!(
            sources,
            vec![SourceRef::DefaultManifest {
                path: PathBuf::from("manifests/site.pp")
            }]
        );
    }

    #[test]
    fn test_dump_with_no_input_is_fatal() {
        let result = resolve(&[], None, Mode::Dump, &env(), &mut FakeStdin::terminal());
        assert!(matches!(result, Err(FrontendError::NoInput)));
    }

    #[test]
    fn test_files_skip_stdin_entirely() {
        let mut stdin = FakeStdin::piped("ignored");
        let files = vec![PathBuf::from("a.pp")];
        let sources = resolve(&files, None, Mode::Validate, &env(), &mut stdin).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(stdin.reads, 0);
    }
}
