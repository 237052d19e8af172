//! `dump` command: print each source's parse tree, best-effort across the batch.

use std::io::Write;

use crate::cli::args::DumpArgs;
use crate::cli::output::{self, Reporter};
use crate::errors::{FrontendError, MissingFilesReport};
use crate::input::resolve::{self, EnvironmentProvider, Mode, StdinSource};
use crate::input::source::SourceRef;
use crate::parser::DslParser;

/// Per-run options for the dump loop.
#[derive(Debug, Clone, Copy)]
pub struct DumpOptions {
    /// Run semantic validation, or only check syntax.
    pub validate: bool,
}

/// What happened across the batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpSummary {
    /// Sources rendered successfully.
    pub rendered: usize,
    /// Sources that failed to parse (or read).
    pub failed: usize,
}

/// Run `manicli dump`.
///
/// # Errors
///
/// Returns `FrontendError` when no input could be resolved, when named files
/// were missing, or when any source failed to parse.
pub fn run_command<P: DslParser>(
    args: &DumpArgs,
    parser: &P,
    env: &dyn EnvironmentProvider,
    stdin: &mut dyn StdinSource,
) -> Result<(), FrontendError> {
    let sources = resolve::resolve(
        &args.manifests,
        args.execute.as_deref(),
        Mode::Dump,
        env,
        stdin,
    )?;
    let opts = DumpOptions {
        validate: args
            .validate_flag()
            .unwrap_or_else(|| env.dump_validates_by_default()),
    };

    let stdout = std::io::stdout();
    let mut reporter = Reporter::new(stdout.lock(), sources.len() > 1);
    let summary = run(&sources, opts, parser, &mut reporter)?;
    if summary.failed > 0 {
        return Err(FrontendError::DumpFailures {
            failed: summary.failed,
        });
    }
    Ok(())
}

/// Dump each source in order, continuing past per-source failures.
///
/// A parse error in one source is reported under that source's header and
/// must not suppress output for the others; only the aggregated missing-file
/// check after the loop can fail the call itself.
///
/// # Errors
///
/// Returns `FrontendError::MissingFiles` after the loop when any named file
/// was absent, or an I/O error from the output writer.
pub fn run<P: DslParser, W: Write>(
    sources: &[SourceRef],
    opts: DumpOptions,
    parser: &P,
    reporter: &mut Reporter<W>,
) -> Result<DumpSummary, FrontendError> {
    let mut missing = MissingFilesReport::new();
    let mut summary = DumpSummary::default();

    for source in sources {
        if !source.exists() {
            if let Some(path) = source.path() {
                missing.push(path.to_path_buf());
            }
            continue;
        }
        let origin = source.origin();
        reporter.header(&origin)?;

        let text = match source.read() {
            Ok(text) => text,
            Err(e) => {
                output::error(&format!("could not read {origin}: {e}"));
                summary.failed += 1;
                continue;
            }
        };
        let outcome = if opts.validate {
            parser.parse_and_validate(&text, &origin)
        } else {
            parser.parse_only(&text)
        };
        match outcome {
            Ok(ast) => {
                reporter.body(&parser.render(&ast))?;
                summary.rendered += 1;
            }
            Err(e) => {
                output::error(&e.message);
                summary.failed += 1;
            }
        }
    }

    missing.into_result()?;
    Ok(summary)
}
