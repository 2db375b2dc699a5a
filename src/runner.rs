//! The comparison runner.
//!
//! For one command, reads its source and expected fixtures, drives the
//! transpiler under test over the source payload one line at a time, and
//! asserts that the flattened output equals the expected payload exactly.
//!
//! Lines are processed strictly sequentially: the next line is not submitted
//! until the previous conversion has resolved and its output has been
//! appended. The transpiler may carry cross-line state (indentation,
//! declared symbols), so source order is a correctness requirement, not an
//! optimization target.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::debug;

use crate::config::SuiteConfig;
use crate::errors::{HarnessError, TranspilerFault};
use crate::fixture;

/// Output of converting one source line.
///
/// `None` is the "no output" signal; the runner normalizes it to a single
/// empty string so one source line always maps to at least one element of
/// the actual sequence. `Some(lines)` may hold zero, one, or many lines: a
/// line may vanish, stay 1:1, or fan out.
pub type Conversion = Option<Vec<String>>;

/// Future returned by a single-line conversion.
pub type ConvertFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Conversion, TranspilerFault>> + Send + 'a>>;

/// The collaborator under test: converts one line of input into zero or more
/// output lines, asynchronously.
///
/// One instance is reused for every source line of every command in a
/// section, so implementations own any cross-line state behind `&self` and
/// document their own reset guarantees. The harness adds no locking; if the
/// host framework runs cases concurrently, concurrent invocation safety is
/// the implementation's contract to keep.
pub trait Transpiler: Send + Sync {
    fn convert(&self, line: &str) -> ConvertFuture<'_>;
}

/// Runs one command's fixture pair against the shared transpiler.
pub struct ComparisonRunner {
    config: SuiteConfig,
    transpiler: Arc<dyn Transpiler>,
}

impl ComparisonRunner {
    pub fn new(config: SuiteConfig, transpiler: Arc<dyn Transpiler>) -> Self {
        Self { config, transpiler }
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Runs the comparison for `command`, honoring the configured per-case
    /// timeout. `Ok(())` is a pass; every `Err` is scoped to this case.
    pub async fn run(&self, command: &str) -> Result<(), HarnessError> {
        match self.config.case_timeout {
            Some(limit) => match tokio::time::timeout(limit, self.compare(command)).await {
                Ok(outcome) => outcome,
                Err(_) => Err(HarnessError::Timeout {
                    command: command.to_string(),
                    limit,
                }),
            },
            None => self.compare(command).await,
        }
    }

    async fn compare(&self, command: &str) -> Result<(), HarnessError> {
        let dir = self.config.command_dir(command);
        let source = fixture::read_framed(dir.join(&self.config.source_name))?;
        let expected = fixture::read_framed(dir.join(&self.config.expected_name))?;
        debug!(
            command,
            source_lines = source.len(),
            expected_lines = expected.len(),
            "running comparison"
        );

        let mut actual: Vec<String> = Vec::with_capacity(expected.len());
        for (index, line) in source.iter().enumerate() {
            let converted = self.transpiler.convert(line).await.map_err(|source| {
                HarnessError::Transpiler {
                    command: command.to_string(),
                    line_number: index + 1,
                    source,
                }
            })?;
            match converted {
                None => actual.push(String::new()),
                Some(lines) => actual.extend(lines),
            }
        }

        if actual != expected {
            debug!(command, "output mismatch");
            return Err(HarnessError::Mismatch {
                command: command.to_string(),
                expected,
                actual,
            });
        }
        Ok(())
    }
}
