//! Glob-style command filtering.
//!
//! A [`MatcherSet`] is a set of glob patterns matched case-insensitively
//! against command names. It is a pure predicate over names, so discovery can
//! be tested without touching the filesystem.
//!
//! Only `*` (any run of characters) and `?` (any single character) are
//! special; everything else matches literally.

use regex::Regex;

use crate::errors::HarnessError;

/// A compiled set of case-insensitive glob patterns.
///
/// The default set holds the single `*` pattern and matches every name.
#[derive(Debug, Clone)]
pub struct MatcherSet {
    patterns: Vec<Matcher>,
}

#[derive(Debug, Clone)]
struct Matcher {
    pattern: String,
    regex: Regex,
}

impl MatcherSet {
    /// Compiles a set of glob patterns.
    ///
    /// Fails with [`HarnessError::InvalidPattern`] on the first pattern that
    /// cannot be compiled; nothing is retained from a partially built set.
    pub fn new<I, S>(patterns: I) -> Result<Self, HarnessError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let regex = compile_glob(pattern).map_err(|source| HarnessError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
            compiled.push(Matcher {
                pattern: pattern.to_string(),
                regex,
            });
        }
        Ok(Self { patterns: compiled })
    }

    /// The match-everything set: a single `*` pattern.
    pub fn match_all() -> Self {
        Self::new(["*"]).unwrap_or_else(|_| unreachable!("`*` always compiles"))
    }

    /// True if `name` matches at least one pattern in the set.
    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|m| m.regex.is_match(name))
    }

    /// The original pattern texts, in insertion order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|m| m.pattern.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for MatcherSet {
    fn default() -> Self {
        Self::match_all()
    }
}

/// Translates a glob pattern into an anchored, case-insensitive regex.
fn compile_glob(pattern: &str) -> Result<Regex, regex::Error> {
    let mut translated = String::with_capacity(pattern.len() + 8);
    translated.push_str("(?i)^");
    for ch in pattern.chars() {
        match ch {
            '*' => translated.push_str(".*"),
            '?' => translated.push('.'),
            other => translated.push_str(&regex::escape(other.encode_utf8(&mut [0u8; 4]))),
        }
    }
    translated.push('$');
    Regex::new(&translated)
}
