//! `SourceRef`: one unit of input with its diagnostic origin label.

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Origin label for `-e` inline sources.
pub const INLINE_ORIGIN: &str = "command-line-string";

/// Origin label for sources read from standard input.
pub const STDIN_ORIGIN: &str = "stdin";

/// One resolved unit of input for a `validate` or `dump` run.
///
/// Inline and stdin text is buffered at resolution time, so every variant
/// can be read exactly once without touching the outside world twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRef {
    /// A manifest file named on the command line.
    File {
        /// Path as given by the user.
        path: PathBuf,
    },
    /// Inline source text from `-e`.
    Inline {
        /// The source text.
        text: String,
    },
    /// The entire standard-input stream, already buffered.
    Stdin {
        /// The buffered stream contents.
        text: String,
    },
    /// The environment-configured fallback manifest.
    DefaultManifest {
        /// Path supplied by the environment provider.
        path: PathBuf,
    },
}

impl SourceRef {
    /// The label used in headers and diagnostics for this source.
    #[must_use]
    pub fn origin(&self) -> Cow<'_, str> {
        match self {
            Self::File { path } | Self::DefaultManifest { path } => path.to_string_lossy(),
            Self::Inline { .. } => Cow::Borrowed(INLINE_ORIGIN),
            Self::Stdin { .. } => Cow::Borrowed(STDIN_ORIGIN),
        }
    }

    /// The filesystem path behind this source, if it has one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File { path } | Self::DefaultManifest { path } => Some(path),
            Self::Inline { .. } | Self::Stdin { .. } => None,
        }
    }

    /// Whether this source passes its existence check.
    ///
    /// Buffered variants trivially exist; file variants hit the filesystem.
    #[must_use]
    pub fn exists(&self) -> bool {
        match self.path() {
            Some(path) => path.exists(),
            None => true,
        }
    }

    /// Read the source text.
    ///
    /// File variants read from disk; buffered variants hand back their text.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error for file variants.
    pub fn read(&self) -> io::Result<String> {
        match self {
            Self::File { path } | Self::DefaultManifest { path } => fs::read_to_string(path),
            Self::Inline { text } | Self::Stdin { text } => Ok(text.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_origin_labels() {
        let file = SourceRef::File {
            path: PathBuf::from("site.pp"),
        };
        assert_eq!(file.origin(), "site.pp");

        let inline = SourceRef::Inline {
            text: "x = 1".to_owned(),
        };
        assert_eq!(inline.origin(), INLINE_ORIGIN);

        let stdin = SourceRef::Stdin {
            text: String::new(),
        };
        assert_eq!(stdin.origin(), STDIN_ORIGIN);
    }

    #[test]
    fn test_buffered_variants_exist_and_read_back() {
        let inline = SourceRef::Inline {
            text: "1 + 1".to_owned(),
        };
        assert!(inline.exists());
        assert_eq!(inline.read().unwrap(), "1 + 1");
    }

    #[test]
    fn test_file_existence_and_read() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, "node default {{}}").unwrap();
        let file = SourceRef::File {
            path: tmp.path().to_path_buf(),
        };
        assert!(file.exists());
        assert_eq!(file.read().unwrap(), "node default {}");

        let gone = SourceRef::File {
            path: PathBuf::from("definitely/not/here.pp"),
        };
        assert!(!gone.exists());
    }
}
