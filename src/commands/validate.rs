//! `validate` command: check each manifest, fail fast on the first parse error.

use anyhow::Context;

use crate::cli::args::ValidateArgs;
use crate::cli::output::write_validate_ok;
use crate::errors::{FrontendError, MissingFilesReport};
use crate::input::resolve::{self, EnvironmentProvider, Mode, StdinSource};
use crate::input::source::SourceRef;
use crate::parser::DslParser;

/// Run `manicli validate`.
///
/// # Errors
///
/// Returns `FrontendError` on the first structural failure, on aggregated
/// missing files, or on an internal failure.
pub fn run_command<P: DslParser>(
    args: &ValidateArgs,
    parser: &P,
    env: &dyn EnvironmentProvider,
    stdin: &mut dyn StdinSource,
) -> Result<(), FrontendError> {
    let sources = resolve::resolve(&args.manifests, None, Mode::Validate, env, stdin)?;
    let checked = run(&sources, parser)?;
    write_validate_ok(checked, args.json);
    Ok(())
}

/// Validate each source in order.
///
/// Missing files are skipped and reported together at the end; a structural
/// parse error stops the batch immediately, so sources after it are neither
/// existence-checked nor parsed. Returns how many sources were validated.
///
/// # Errors
///
/// - `FrontendError::Parse` — first structural failure (fail-fast)
/// - `FrontendError::MissingFiles` — aggregated after a clean loop
/// - `FrontendError::Internal` — reading an existing file failed
pub fn run<P: DslParser>(sources: &[SourceRef], parser: &P) -> Result<usize, FrontendError> {
    let mut missing = MissingFilesReport::new();
    let mut checked = 0;

    for source in sources {
        if !source.exists() {
            if let Some(path) = source.path() {
                missing.push(path.to_path_buf());
            }
            continue;
        }
        let origin = source.origin();
        let text = source
            .read()
            .with_context(|| format!("could not read {origin}"))?;
        parser.parse_and_validate(&text, &origin)?;
        checked += 1;
    }

    missing.into_result()?;
    Ok(checked)
}
