//! Exercise Catalog
//!
//! Immutable configuration mapping an exercise file name to its display
//! metadata and input fixture. The catalog is loaded once at startup and
//! consulted during discovery; unknown exercises degrade to generic metadata
//! rather than failing the run.

use crate::descriptor::{ExerciseDescriptor, Fixture};
use std::collections::HashMap;
use std::path::Path;

/// Metadata for one catalogued exercise.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    /// Display title for the report section heading.
    pub title: String,
    /// Free-text overview of the exercise.
    pub description: String,
    /// Topic tag.
    pub topic: String,
    /// Fixed conclusion text, looked up by exercise name.
    pub conclusion: String,
    /// Input fixture for automated execution.
    pub fixture: Fixture,
}

/// Immutable name → metadata mapping for the known exercise set.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, CatalogEntry>,
}

/// Conclusion used for exercises the catalog does not recognize.
pub const GENERIC_CONCLUSION: &str = "Exercise completed successfully.";

impl Catalog {
    /// Empty catalog; every exercise gets generic metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog for the exercise set shipped in `demos/`.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.insert(
            "factorial",
            CatalogEntry {
                title: "Task 1: Recursive factorial".to_string(),
                description: "Computing the factorial of a number read from standard input, \
                              with an explicit recursive base case."
                    .to_string(),
                topic: "Recursion, functions".to_string(),
                conclusion: "Practised writing recursive functions with a clear base case \
                             and input validation."
                    .to_string(),
                fixture: Fixture::with_stdin("5\n"),
            },
        );
        catalog.insert(
            "fibonacci",
            CatalogEntry {
                title: "Task 2: Fibonacci sequence".to_string(),
                description: "Printing the first N Fibonacci numbers using iteration instead \
                              of naive recursion."
                    .to_string(),
                topic: "Iteration, integer overflow".to_string(),
                conclusion: "Compared iterative and recursive formulations of the same \
                             sequence."
                    .to_string(),
                fixture: Fixture::with_stdin("10\n"),
            },
        );
        catalog.insert(
            "rotate",
            CatalogEntry {
                title: "Task 3: List rotation".to_string(),
                description: "Rotating a list of integers left by k positions without \
                              built-in helpers."
                    .to_string(),
                topic: "Lists, index arithmetic".to_string(),
                conclusion: "Practised manual list manipulation and modular index \
                             arithmetic."
                    .to_string(),
                fixture: Fixture::with_stdin("1 2 3 4 5\n2\n"),
            },
        );
        catalog.insert(
            "filestats",
            CatalogEntry {
                title: "Task 4: File statistics".to_string(),
                description: "Counting lines, words and characters of a text file given on \
                              the command line."
                    .to_string(),
                topic: "Files, text processing".to_string(),
                conclusion: "Practised buffered file reading and whitespace tokenization."
                    .to_string(),
                fixture: Fixture::with_args(["sample.txt"]),
            },
        );
        catalog
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, name: impl Into<String>, entry: CatalogEntry) {
        self.entries.insert(name.into(), entry);
    }

    /// Look up an entry by exercise file name.
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(name)
    }

    /// Number of catalogued exercises.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a descriptor for the exercise at `path`, falling back to generic
    /// metadata when the name is not catalogued.
    pub fn describe(&self, name: &str, path: &Path) -> ExerciseDescriptor {
        match self.entries.get(name) {
            Some(entry) => ExerciseDescriptor {
                name: name.to_string(),
                path: path.to_path_buf(),
                title: entry.title.clone(),
                description: entry.description.clone(),
                topic: entry.topic.clone(),
                conclusion: entry.conclusion.clone(),
                fixture: entry.fixture.clone(),
            },
            None => ExerciseDescriptor {
                name: name.to_string(),
                path: path.to_path_buf(),
                title: name.to_string(),
                description: "Exercise program.".to_string(),
                topic: "General".to_string(),
                conclusion: GENERIC_CONCLUSION.to_string(),
                fixture: Fixture::default(),
            },
        }
    }
}
