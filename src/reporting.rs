//! Result reporting.
//!
//! Turns per-check outcomes into colored terminal output and a structural
//! JSON payload. The harness itself only distinguishes pass from fail; the
//! extra detail here (line diffs for mismatches, error chains otherwise) is
//! diagnostic output for humans and host frameworks.

use difference::{Changeset, Difference};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::discovery::TestRegistry;
use crate::errors::HarnessError;

/// Outcome of one registered check.
#[derive(Debug)]
pub enum CheckOutcome {
    Pass { name: String },
    Fail { name: String, error: HarnessError },
}

impl CheckOutcome {
    pub fn name(&self) -> &str {
        match self {
            CheckOutcome::Pass { name } | CheckOutcome::Fail { name, .. } => name,
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, CheckOutcome::Pass { .. })
    }
}

/// All outcomes for one section, in registration order.
#[derive(Debug)]
pub struct SuiteReport {
    pub section: String,
    pub outcomes: Vec<CheckOutcome>,
}

impl SuiteReport {
    pub fn from_outcomes(
        section: impl Into<String>,
        outcomes: Vec<(String, Result<(), HarnessError>)>,
    ) -> Self {
        let outcomes = outcomes
            .into_iter()
            .map(|(name, outcome)| match outcome {
                Ok(()) => CheckOutcome::Pass { name },
                Err(error) => CheckOutcome::Fail { name, error },
            })
            .collect();
        Self {
            section: section.into(),
            outcomes,
        }
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_pass()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// Prints colored PASS/FAIL lines and, for mismatches, a line diff of
    /// the two sequences.
    pub fn print(&self) {
        let choice = if atty::is(atty::Stream::Stdout) {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);

        println!("section {}:", self.section);
        for outcome in &self.outcomes {
            match outcome {
                CheckOutcome::Pass { name } => {
                    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
                    print!("PASS");
                    let _ = stdout.reset();
                    println!(" {}", name);
                }
                CheckOutcome::Fail { name, error } => {
                    let _ = stdout
                        .set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
                    print!("FAIL");
                    let _ = stdout.reset();
                    println!(" {}: {}", name, error);
                    if let HarnessError::Mismatch {
                        expected, actual, ..
                    } = error
                    {
                        print_sequence_diff(&mut stdout, expected, actual);
                    }
                }
            }
        }
        println!(
            "section {}: {} passed, {} failed",
            self.section,
            self.passed(),
            self.failed()
        );
    }

    /// Structural payload for host frameworks: section, counts, and per-check
    /// status, with verbatim expected/actual sequences on mismatch.
    pub fn to_json(&self) -> serde_json::Value {
        self.payload(None)
    }

    /// Same payload, with each check additionally carrying the case
    /// identifiers discovered for its command.
    pub fn to_json_with_cases(&self, registry: &TestRegistry) -> serde_json::Value {
        self.payload(Some(registry))
    }

    fn payload(&self, registry: Option<&TestRegistry>) -> serde_json::Value {
        let checks: Vec<serde_json::Value> = self
            .outcomes
            .iter()
            .map(|outcome| {
                let mut check = match outcome {
                    CheckOutcome::Pass { name } => serde_json::json!({
                        "name": name,
                        "status": "pass",
                    }),
                    CheckOutcome::Fail {
                        name,
                        error: HarnessError::Mismatch {
                            expected, actual, ..
                        },
                    } => serde_json::json!({
                        "name": name,
                        "status": "fail",
                        "expected": expected,
                        "actual": actual,
                    }),
                    CheckOutcome::Fail { name, error } => serde_json::json!({
                        "name": name,
                        "status": "fail",
                        "error": error.to_string(),
                    }),
                };
                if let Some(cases) = registry.and_then(|r| r.cases_for(outcome.name())) {
                    check["cases"] = serde_json::json!(cases);
                }
                check
            })
            .collect();

        serde_json::json!({
            "section": self.section,
            "total": self.outcomes.len(),
            "passed": self.passed(),
            "failed": self.failed(),
            "checks": checks,
        })
    }
}

fn print_sequence_diff(stdout: &mut StandardStream, expected: &[String], actual: &[String]) {
    let changeset = Changeset::new(&expected.join("\n"), &actual.join("\n"), "\n");
    for diff in &changeset.diffs {
        match diff {
            Difference::Same(text) => {
                let _ = stdout.reset();
                for line in text.lines() {
                    println!("   {}", line);
                }
            }
            Difference::Rem(text) => {
                let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
                for line in text.lines() {
                    println!("  -{}", line);
                }
            }
            Difference::Add(text) => {
                let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
                for line in text.lines() {
                    println!("  +{}", line);
                }
            }
        }
    }
    let _ = stdout.reset();
}
