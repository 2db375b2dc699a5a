//! Suite registration.
//!
//! [`SuiteRegistrar`] is the only part of the harness that talks to the
//! surrounding test-reporting framework, and it does so through the
//! [`CheckScheduler`] seam: a registration primitive accepting a named
//! asynchronous check. Any framework that can await a future and record
//! pass/fail can sit behind it.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::debug;

use crate::discovery::TestRegistry;
use crate::errors::HarnessError;
use crate::runner::ComparisonRunner;

/// A registered check: resolves to `Ok(())` on pass, or the case's error.
pub type Check = Pin<Box<dyn Future<Output = Result<(), HarnessError>> + Send + 'static>>;

/// Registration primitive exposed by the host test-reporting framework.
pub trait CheckScheduler {
    fn register(&mut self, name: &str, check: Check);
}

/// Binds discovered commands into named checks under a section label.
pub struct SuiteRegistrar {
    section: String,
    runner: Arc<ComparisonRunner>,
}

impl SuiteRegistrar {
    pub fn new(section: impl Into<String>, runner: Arc<ComparisonRunner>) -> Self {
        Self {
            section: section.into(),
            runner,
        }
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    /// Registers one check per registry command. Every check shares this
    /// registrar's runner, and through it the one transpiler instance for
    /// the section.
    pub fn register_all<S: CheckScheduler>(&self, registry: &TestRegistry, scheduler: &mut S) {
        for entry in registry.iter() {
            let runner = Arc::clone(&self.runner);
            let command = entry.command.clone();
            debug!(section = %self.section, command = %entry.command, "registering check");
            scheduler.register(
                &entry.command,
                Box::pin(async move { runner.run(&command).await }),
            );
        }
    }
}

/// A minimal in-crate [`CheckScheduler`]: collects checks and runs them
/// serially. Useful for embedders without a host framework, and for tests.
#[derive(Default)]
pub struct CollectedChecks {
    checks: Vec<(String, Check)>,
}

impl CollectedChecks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.checks.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Awaits every collected check in registration order and pairs each
    /// name with its outcome.
    pub async fn run_serially(self) -> Vec<(String, Result<(), HarnessError>)> {
        let mut outcomes = Vec::with_capacity(self.checks.len());
        for (name, check) in self.checks {
            let outcome = check.await;
            outcomes.push((name, outcome));
        }
        outcomes
    }
}

impl CheckScheduler for CollectedChecks {
    fn register(&mut self, name: &str, check: Check) {
        self.checks.push((name.to_string(), check));
    }
}
