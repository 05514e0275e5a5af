#![warn(missing_docs)]
//! Zvit Report - Report Assembly and Rendering
//!
//! Builds the lab-report document from exercise descriptors and sanitized
//! execution outcomes, and renders it in two formats:
//! - Markdown (human-readable, default)
//! - JSON (machine-readable)
//!
//! Only the structural content is normative: section order equals discovery
//! order, each exercise gets exactly one section, and missing output or
//! unreadable source is rendered as an explicit placeholder, never as an
//! empty section.

pub mod content;
mod json;
mod markdown;
mod report;

pub use json::generate_json_report;
pub use markdown::generate_markdown_report;
pub use report::{
    ExerciseSection, Report, ReportMeta, ReportSummary, SectionOutcome, SourceListing,
    build_report,
};

use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Markdown document (default)
    #[default]
    Markdown,
    /// JSON with the full report structure
    Json,
}

impl OutputFormat {
    /// File extension for the report artifact.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Errors from rendering or persisting the report artifact.
///
/// Unlike per-exercise failures, these are fatal: a run that cannot write its
/// artifact produces nothing.
#[derive(Debug, Error)]
pub enum ReportError {
    /// JSON serialization failed.
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The artifact could not be written to disk.
    #[error("failed to write report to {path}: {source}")]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Artifact file name for `date`: `<base>_<YYYYMMDD>.<ext>`.
pub fn artifact_file_name(base: &str, format: OutputFormat, date: NaiveDate) -> String {
    format!(
        "{}_{}.{}",
        base,
        date.format("%Y%m%d"),
        format.extension()
    )
}

/// Render `report` in `format` and write it to `path` in one pass.
///
/// Parent directories are created as needed. Any failure here aborts the run;
/// no partial artifact is considered valid.
pub fn save_report(report: &Report, format: OutputFormat, path: &Path) -> Result<(), ReportError> {
    let rendered = match format {
        OutputFormat::Markdown => generate_markdown_report(report),
        OutputFormat::Json => generate_json_report(report)?,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| ReportError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }

    std::fs::write(path, rendered).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
