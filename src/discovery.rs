//! Fixture discovery.
//!
//! Maps the on-disk test layout to a [`TestRegistry`]: each immediate child
//! directory of the fixture root is a candidate command, filtered through a
//! [`MatcherSet`], and each file inside a retained command directory that
//! carries the marker extension contributes one test-case identifier.
//!
//! Enumeration order is whatever the filesystem reports; no sorting is
//! applied, so the registry preserves that order end to end.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::config::SuiteConfig;
use crate::errors::HarnessError;
use crate::matcher::MatcherSet;

/// One command directory and the case identifiers discovered inside it.
#[derive(Debug, Clone, Serialize)]
pub struct CommandEntry {
    pub command: String,
    /// Marker-file names with the marker suffix stripped, in enumeration
    /// order. May be empty; an empty entry is still a registered command.
    pub cases: Vec<String>,
}

/// Ordered mapping from command name to test-case identifiers.
///
/// Built once per run and read-only afterwards.
#[derive(Debug, Default, Serialize)]
pub struct TestRegistry {
    entries: Vec<CommandEntry>,
}

impl TestRegistry {
    pub fn iter(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.iter()
    }

    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.command.as_str())
    }

    /// Case identifiers for one command, if it was discovered.
    pub fn cases_for(&self, command: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|entry| entry.command == command)
            .map(|entry| entry.cases.as_slice())
    }

    pub fn contains(&self, command: &str) -> bool {
        self.entries.iter().any(|entry| entry.command == command)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Scans the configured fixture root and builds the registry.
///
/// Fails fast with a fatal error if the root is missing, a pattern is
/// invalid (callers hit that earlier, when building the [`MatcherSet`]), or
/// the tree cannot be enumerated. Discovery never prunes a matched command
/// for being empty.
pub fn discover(
    config: &SuiteConfig,
    matchers: &MatcherSet,
) -> Result<TestRegistry, HarnessError> {
    let root = config.root.as_path();
    match std::fs::metadata(root) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            return Err(HarnessError::RootNotFound {
                path: root.to_path_buf(),
                source: std::io::Error::other("exists but is not a directory"),
            })
        }
        Err(source) => {
            return Err(HarnessError::RootNotFound {
                path: root.to_path_buf(),
                source,
            })
        }
    }

    let mut entries = Vec::new();
    for child in WalkDir::new(root).min_depth(1).max_depth(1) {
        let child = child.map_err(|source| HarnessError::Enumeration {
            path: root.to_path_buf(),
            source,
        })?;
        if !child.file_type().is_dir() {
            continue;
        }
        let command = child.file_name().to_string_lossy().into_owned();
        if !matchers.matches(&command) {
            trace!(%command, "skipped by matcher set");
            continue;
        }

        let cases = list_cases(child.path(), &config.marker_extension)?;
        debug!(%command, cases = cases.len(), "discovered command");
        entries.push(CommandEntry { command, cases });
    }

    debug!(
        root = %root.display(),
        commands = entries.len(),
        "fixture discovery complete"
    );
    Ok(TestRegistry { entries })
}

/// Lists case identifiers directly inside one command directory: files whose
/// name contains `marker`, with everything from the marker onward stripped.
fn list_cases(dir: &Path, marker: &str) -> Result<Vec<String>, HarnessError> {
    let mut cases = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|source| HarnessError::Enumeration {
            path: dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if let Some(index) = name.find(marker) {
            cases.push(name[..index].to_string());
        }
    }
    Ok(cases)
}
