//! Exercise Descriptors
//!
//! Static, immutable records identifying one exercise program and the
//! predetermined input it receives during an automated run.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Predetermined input supplied to an exercise for automated execution.
///
/// An empty `stdin` is equivalent to closing the child's standard input
/// immediately; an empty `args` list invokes the program with no arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    /// Text piped to the exercise's standard input.
    #[serde(default)]
    pub stdin: String,
    /// Command-line arguments appended to the invocation.
    #[serde(default)]
    pub args: Vec<String>,
}

impl Fixture {
    /// Fixture that feeds `text` on standard input.
    pub fn with_stdin(text: impl Into<String>) -> Self {
        Self {
            stdin: text.into(),
            ..Self::default()
        }
    }

    /// Fixture that passes `args` on the command line.
    pub fn with_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

/// Static metadata identifying and describing one exercise program.
///
/// Descriptors are built once at startup (discovery + catalog lookup) and
/// passed by reference to the coordinator and the report assembler; they are
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseDescriptor {
    /// File name of the exercise program (the catalog key).
    pub name: String,
    /// Full path to the executable.
    pub path: PathBuf,
    /// Display title used for the report section heading.
    pub title: String,
    /// Free-text overview of what the exercise demonstrates.
    pub description: String,
    /// Topic tag (e.g. "Recursion, functions").
    pub topic: String,
    /// Fixed conclusion text for the exercise's report section.
    pub conclusion: String,
    /// Input fixture for automated execution.
    #[serde(default)]
    pub fixture: Fixture,
}

/// Outcome of one coordinator invocation of an exercise.
///
/// Produced once per exercise per run; never retried, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    /// The exercise exited with status zero; holds its standard output with
    /// trailing whitespace trimmed.
    Captured(String),
    /// Timeout, non-zero exit status, or launch failure. Carries no detail by
    /// design: failures are isolated per exercise and surfaced to the report
    /// only as a placeholder.
    NoResult,
}

impl ExecutionResult {
    /// Whether this invocation produced usable output.
    pub fn is_captured(&self) -> bool {
        matches!(self, ExecutionResult::Captured(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_with_stdin_has_no_args() {
        let fixture = Fixture::with_stdin("5\n");
        assert_eq!(fixture.stdin, "5\n");
        assert!(fixture.args.is_empty());
    }

    #[test]
    fn fixture_with_args_closes_stdin() {
        let fixture = Fixture::with_args(["data.txt", "--fast"]);
        assert!(fixture.stdin.is_empty());
        assert_eq!(fixture.args, vec!["data.txt", "--fast"]);
    }
}
