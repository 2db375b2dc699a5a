//! Unified, `miette`-based error handling for the harness.
//!
//! Every failure mode in the crate is a variant of [`HarnessError`]. The
//! variants fall into two scopes:
//!
//! - **Discovery errors** (`RootNotFound`, `InvalidPattern`, `Enumeration`)
//!   are fatal: they abort the run before any check is registered.
//! - **Case errors** (everything else) fail exactly one check and must never
//!   affect sibling checks.

use std::path::PathBuf;
use std::time::Duration;

use miette::Diagnostic;
use thiserror::Error;

/// Boxed failure reported by the transpiler under test for a single line.
pub type TranspilerFault = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    /// The fixture root does not exist or is not a readable directory.
    #[error("fixture root `{}` is not a readable directory", path.display())]
    #[diagnostic(code(lockstep::discovery::root_not_found))]
    RootNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A command matcher pattern could not be compiled.
    #[error("invalid command pattern `{pattern}`")]
    #[diagnostic(
        code(lockstep::matcher::invalid_pattern),
        help("patterns support only the `*` and `?` wildcards")
    )]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Walking the fixture tree failed partway through.
    #[error("failed to enumerate fixtures under `{}`", path.display())]
    #[diagnostic(code(lockstep::discovery::enumeration))]
    Enumeration {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A fixture file is missing or unreadable.
    #[error("fixture `{}` could not be read", path.display())]
    #[diagnostic(code(lockstep::fixture::not_found))]
    FixtureNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A fixture file does not frame its payload between two sentinel lines.
    #[error(
        "fixture `{}` is malformed: expected two sentinel lines, found {found}",
        path.display()
    )]
    #[diagnostic(
        code(lockstep::fixture::malformed),
        help("the payload must sit between two lines whose entire content is `-`")
    )]
    MalformedFixture { path: PathBuf, found: usize },

    /// The transpiler under test rejected a source line.
    #[error("transpiler failed on line {line_number} of command `{command}`")]
    #[diagnostic(code(lockstep::runner::transpiler_fault))]
    Transpiler {
        command: String,
        /// 1-based index into the source payload.
        line_number: usize,
        #[source]
        source: TranspilerFault,
    },

    /// The transpiled output differs from the expected payload.
    ///
    /// Both sequences are carried verbatim so callers can report the true
    /// divergence point.
    #[error(
        "command `{command}`: output does not match expected payload \
         ({} actual lines vs {} expected)",
        actual.len(),
        expected.len()
    )]
    #[diagnostic(code(lockstep::runner::mismatch))]
    Mismatch {
        command: String,
        expected: Vec<String>,
        actual: Vec<String>,
    },

    /// A case exceeded the configured per-case time limit.
    #[error("command `{command}` timed out after {} ms", limit.as_millis())]
    #[diagnostic(
        code(lockstep::runner::timeout),
        help("the transpiler never resolved; check for a hung conversion")
    )]
    Timeout { command: String, limit: Duration },
}

impl HarnessError {
    /// True for errors that abort the whole run rather than a single case.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            HarnessError::RootNotFound { .. }
                | HarnessError::InvalidPattern { .. }
                | HarnessError::Enumeration { .. }
        )
    }
}
