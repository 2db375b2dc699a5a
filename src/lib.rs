//! Lockstep: a fixture-driven comparison harness for line-oriented
//! transpilers.
//!
//! The harness validates a transpiler by replaying recorded source lines
//! through it and asserting that the output equals a recorded expected
//! sequence, command by command:
//!
//! - [`discovery`] maps the on-disk fixture layout to a registry of runnable
//!   commands, filtered by case-insensitive glob [`matcher`] patterns.
//! - [`fixture`] extracts the tested payload from sentinel-framed text files.
//! - [`runner`] drives the injected [`runner::Transpiler`] over each source
//!   line sequentially and asserts element-wise equality against the
//!   expected payload.
//! - [`suite`] binds discovered commands into named asynchronous checks
//!   behind the [`suite::CheckScheduler`] seam, so the host test framework
//!   stays swappable.
//! - [`reporting`] renders pass/fail outcomes with line diffs and a
//!   structural JSON payload.

pub use crate::config::SuiteConfig;
pub use crate::discovery::{discover, TestRegistry};
pub use crate::errors::{HarnessError, TranspilerFault};
pub use crate::matcher::MatcherSet;
pub use crate::runner::{ComparisonRunner, Conversion, ConvertFuture, Transpiler};
pub use crate::suite::{Check, CheckScheduler, CollectedChecks, SuiteRegistrar};

pub mod config;
pub mod discovery;
pub mod errors;
pub mod fixture;
pub mod matcher;
pub mod reporting;
pub mod runner;
pub mod suite;
