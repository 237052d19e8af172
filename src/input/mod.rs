//! Input domain: source references and resolution.
pub mod resolve;
pub mod source;

pub use resolve::{EnvironmentProvider, Mode, StdinSource, SystemEnvironment, SystemStdin, resolve};
pub use source::{INLINE_ORIGIN, STDIN_ORIGIN, SourceRef};
