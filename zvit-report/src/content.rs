//! Fixed Report Content
//!
//! The report embeds several fixed text blocks: the title-page fields, the
//! theory section, the general conclusions, and the answers to the control
//! questions. They are constants here so the document content stays
//! reproducible across runs.

/// Report title printed on the title block.
pub const REPORT_TITLE: &str = "LAB REPORT";

/// Lab identification line.
pub const LAB_TITLE: &str = "Laboratory work No. 3";

/// Lab theme line.
pub const LAB_THEME: &str = "Theme: Functions, external modules and files";

/// Course line for the title block.
pub const COURSE: &str = "Course: Machine learning and large-scale data processing";

/// Placeholder rendered when sanitized output is empty.
pub const NO_OUTPUT_PLACEHOLDER: &str = "(no output)";

/// Placeholder rendered when the coordinator obtained no result.
pub const NOT_EXECUTED_PLACEHOLDER: &str = "(not executed: no result was obtained)";

/// Placeholder embedded in the source listing when the file cannot be read.
pub const SOURCE_UNREADABLE_PLACEHOLDER: &str = "(could not read source)";

/// Fixed theory section.
pub const THEORY: &str = "\
This laboratory work covers the core concepts used by the exercise programs:

1.1 Functions
A function is a named block of code performing one task. Functions split a
program into reusable, testable parts.

1.2 Recursion
Recursion is a technique where a function calls itself. Every recursive
definition needs a base case and a recursive case; factorial and tree
traversal are classic examples.

1.3 External modules
Modules group related functions and types behind an explicit interface, so
programs can be composed from small, independently understood units.

1.4 Working with files
Files persist data between runs. The essential operations are open, read,
write and close; resource handles should be released deterministically.";

/// Fixed general-conclusions section.
pub const GENERAL_CONCLUSIONS: &str = "\
During this laboratory work the key program-construction concepts were
practised:

- functions as the basic unit of code reuse
- recursion with explicit base cases
- importing and using external modules
- reading and writing files in several formats
- input validation and error handling";

/// Fixed control questions with their answers, rendered after the general
/// conclusions.
pub const CONTROL_QUESTIONS: &[(&str, &str)] = &[
    (
        "Functions and recursion",
        "A function is a named, parameterized block of statements defined once \
         and called many times. Recursion means a function calls itself; it \
         requires a base case that terminates the call chain and a recursive \
         case that reduces the problem. Recursive solutions are often the most \
         natural formulation but cost stack depth and call overhead.",
    ),
    (
        "External modules and their use",
        "A module is a compilation unit exposing functions, types and \
         constants. Programs import modules to reuse tested functionality \
         instead of re-implementing it; a clear module boundary also limits \
         the blast radius of changes.",
    ),
    (
        "Files and operations on them",
        "Files store data on disk. Typical access modes are read, write and \
         append; typical operations are sequential reads, buffered writes and \
         seeking. Handles should be closed deterministically, preferably by \
         scoping them so cleanup is automatic.",
    ),
];
