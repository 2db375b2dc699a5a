//! Suite configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Where the fixtures live and how they are named.
///
/// The defaults reproduce the conventional layout: each command directory
/// holds a `source.txt` / `expected.gls` fixture pair, and any file carrying
/// the `.gls` marker contributes a test-case identifier.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Directory whose immediate children are command directories.
    pub root: PathBuf,
    /// Substring identifying case-identifier files; the identifier is the
    /// file name up to the first occurrence of this marker.
    pub marker_extension: String,
    /// File name of the source fixture inside each command directory.
    pub source_name: String,
    /// File name of the expected fixture inside each command directory.
    pub expected_name: String,
    /// Upper bound on one case's wall-clock time. `None` means unbounded,
    /// in which case a hung transpiler hangs its case.
    pub case_timeout: Option<Duration>,
}

impl SuiteConfig {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            marker_extension: ".gls".to_string(),
            source_name: "source.txt".to_string(),
            expected_name: "expected.gls".to_string(),
            case_timeout: None,
        }
    }

    /// Sets the per-case timeout used by the comparison runner.
    pub fn with_case_timeout(mut self, limit: Duration) -> Self {
        self.case_timeout = Some(limit);
        self
    }

    /// Directory holding one command's fixture pair.
    pub fn command_dir(&self, command: &str) -> PathBuf {
        self.root.join(command)
    }
}
