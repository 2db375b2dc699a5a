//! Shared helpers for the integration tests: temp-dir fixture trees and
//! transpiler doubles.

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, Once};
use std::time::Duration;

use lockstep::runner::{Conversion, ConvertFuture, Transpiler};
use tempfile::TempDir;

static LOGGING: Once = Once::new();

/// Installs an env-filtered subscriber so `RUST_LOG=lockstep=debug` surfaces
/// harness events during a test run. Idempotent; every fixture tree calls it.
pub fn init_logging() {
    LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A fixture root in a temp directory, populated one command at a time.
pub struct FixtureTree {
    dir: TempDir,
}

impl FixtureTree {
    pub fn new() -> Self {
        init_logging();
        Self {
            dir: TempDir::new().expect("create temp fixture root"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a command directory with a framed `source.txt` /
    /// `expected.gls` pair.
    pub fn add_command(&self, name: &str, source: &[&str], expected: &[&str]) -> PathBuf {
        let dir = self.dir.path().join(name);
        fs::create_dir_all(&dir).expect("create command dir");
        fs::write(dir.join("source.txt"), frame(source)).expect("write source fixture");
        fs::write(dir.join("expected.gls"), frame(expected)).expect("write expected fixture");
        dir
    }

    /// Creates a command directory with no fixture files at all.
    pub fn add_empty_command(&self, name: &str) -> PathBuf {
        let dir = self.dir.path().join(name);
        fs::create_dir_all(&dir).expect("create command dir");
        dir
    }

    /// Drops a zero-byte marker file into a command directory.
    pub fn add_marker(&self, command: &str, file_name: &str) {
        let dir = self.dir.path().join(command);
        fs::create_dir_all(&dir).expect("create command dir");
        fs::write(dir.join(file_name), b"").expect("write marker file");
    }
}

/// Frames payload lines between two sentinel lines.
pub fn frame(lines: &[&str]) -> String {
    let mut text = String::from("-\n");
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    text.push_str("-\n");
    text
}

/// Table-driven transpiler double. Lines without a rule fail the conversion;
/// every invocation is recorded so tests can assert call order and count.
#[derive(Default)]
pub struct ScriptedTranspiler {
    rules: HashMap<String, Conversion>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedTranspiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// `line` converts to exactly these output lines.
    pub fn maps(mut self, line: &str, output: &[&str]) -> Self {
        self.rules.insert(
            line.to_string(),
            Some(output.iter().map(|s| s.to_string()).collect()),
        );
        self
    }

    /// `line` produces the "no output" signal.
    pub fn swallows(mut self, line: &str) -> Self {
        self.rules.insert(line.to_string(), None);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Transpiler for ScriptedTranspiler {
    fn convert(&self, line: &str) -> ConvertFuture<'_> {
        self.calls.lock().unwrap().push(line.to_string());
        let result: Result<Conversion, lockstep::TranspilerFault> = match self.rules.get(line) {
            Some(conversion) => Ok(conversion.clone()),
            None => Err(format!("no conversion rule for line {line:?}").into()),
        };
        Box::pin(async move { result })
    }
}

/// Stateful double: emits `"<n>: <line>"` with a counter that advances on
/// every call and is never reset, making both in-case ordering and
/// cross-case state sharing observable.
#[derive(Default)]
pub struct NumberingTranspiler {
    counter: Mutex<usize>,
}

impl NumberingTranspiler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transpiler for NumberingTranspiler {
    fn convert(&self, line: &str) -> ConvertFuture<'_> {
        let mut counter = self.counter.lock().unwrap();
        *counter += 1;
        let output = format!("{}: {}", *counter, line);
        Box::pin(async move { Ok(Some(vec![output])) })
    }
}

/// Never resolves in any reasonable test window.
pub struct HungTranspiler;

impl Transpiler for HungTranspiler {
    fn convert(&self, _line: &str) -> ConvertFuture<'_> {
        Box::pin(async {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(Some(Vec::<String>::new()))
        })
    }
}
