//! Framed fixture files.
//!
//! A fixture is a text file whose tested payload sits strictly between two
//! sentinel lines (lines whose entire content is a single `-`). Anything
//! before the first sentinel or after the last one is commentary and ignored:
//!
//! ```text
//! Any header text.
//! -
//! let x = [];
//! -
//! trailing notes
//! ```
//!
//! A file with fewer than two sentinel lines is malformed and rejected
//! outright rather than yielding a silently truncated slice.

use std::fs;
use std::path::Path;

use crate::errors::HarnessError;

/// A line consisting solely of this marks the start or end of the payload.
pub const SENTINEL: &str = "-";

/// Reads the payload framed between the first and last sentinel lines.
///
/// Line endings are normalized by stripping carriage returns before
/// splitting, so CRLF fixtures behave identically to LF ones. The payload may
/// be empty (adjacent sentinels).
pub fn read_framed(path: impl AsRef<Path>) -> Result<Vec<String>, HarnessError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| HarnessError::FixtureNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let text = text.replace('\r', "");
    let lines: Vec<&str> = text.split('\n').collect();

    let first = lines.iter().position(|line| *line == SENTINEL);
    let last = lines.iter().rposition(|line| *line == SENTINEL);

    match (first, last) {
        (Some(start), Some(end)) if start < end => Ok(lines[start + 1..end]
            .iter()
            .map(|line| line.to_string())
            .collect()),
        _ => Err(HarnessError::MalformedFixture {
            path: path.to_path_buf(),
            found: lines.iter().filter(|line| **line == SENTINEL).count(),
        }),
    }
}
