//! Report Data Structures
//!
//! The report is an ordered sequence of per-exercise sections plus fixed
//! front and back matter. It is built once per run and serialized once;
//! prior runs are never read or merged.

use crate::content;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use zvit_core::ExerciseDescriptor;

/// Complete lab report document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report metadata (timestamp, version, exercise directory).
    pub meta: ReportMeta,
    /// One section per discovered exercise, in discovery order.
    pub sections: Vec<ExerciseSection>,
    /// Aggregate counts over the sections.
    pub summary: ReportSummary,
}

/// Report metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Schema version of the JSON representation.
    pub schema_version: u32,
    /// zvit version that produced the report.
    pub version: String,
    /// Time the report was assembled.
    pub timestamp: DateTime<Utc>,
    /// Directory the exercises were discovered in.
    pub exercise_dir: String,
}

impl ReportMeta {
    /// Metadata stamped with the current time.
    pub fn now(exercise_dir: &Path) -> Self {
        Self {
            schema_version: 1,
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            exercise_dir: exercise_dir.display().to_string(),
        }
    }
}

/// Sanitized outcome of one exercise, as embedded in its report section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum SectionOutcome {
    /// Sanitized execution output.
    Output(String),
    /// The exercise ran but every output line was filtered (or it printed
    /// nothing); rendered as an explicit placeholder.
    NoOutput,
    /// The coordinator obtained no result (timeout, non-zero exit, or launch
    /// failure).
    NotExecuted,
}

/// Source excerpt for one exercise, capped at a maximum line count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceListing {
    /// Retained source lines (at most the configured maximum).
    pub lines: Vec<String>,
    /// Number of lines beyond the cap, announced in the rendered listing.
    pub omitted: usize,
}

impl SourceListing {
    /// Cap `text` at `max_lines` lines.
    pub fn from_text(text: &str, max_lines: usize) -> Self {
        let all: Vec<&str> = text.lines().collect();
        let omitted = all.len().saturating_sub(max_lines);
        Self {
            lines: all
                .into_iter()
                .take(max_lines)
                .map(str::to_string)
                .collect(),
            omitted,
        }
    }

    /// Read and cap the source at `path`. An unreadable file yields a
    /// placeholder listing; the run continues.
    pub fn from_file(path: &Path, max_lines: usize) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_text(&text, max_lines),
            Err(_) => Self {
                lines: vec![content::SOURCE_UNREADABLE_PLACEHOLDER.to_string()],
                omitted: 0,
            },
        }
    }
}

/// One report section, keyed by exercise order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseSection {
    /// Exercise file name.
    pub name: String,
    /// Display title.
    pub title: String,
    /// Overview text.
    pub description: String,
    /// Topic tag.
    pub topic: String,
    /// Capped source excerpt.
    pub source: SourceListing,
    /// Sanitized execution outcome.
    pub outcome: SectionOutcome,
    /// Fixed conclusion text for this exercise.
    pub conclusion: String,
}

/// Aggregate counts over the report sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Total number of sections (= discovered exercises).
    pub total_exercises: usize,
    /// Sections with sanitized output.
    pub executed: usize,
    /// Sections where every output line was filtered away.
    pub no_output: usize,
    /// Sections where the coordinator obtained no result.
    pub not_executed: usize,
}

/// Assemble the report from descriptors and their sanitized outcomes.
///
/// `descriptors` and `outcomes` are parallel slices in discovery order; the
/// report contains exactly one section per descriptor, in the same order.
/// Source files are read here; an unreadable source becomes a placeholder
/// listing rather than an error.
pub fn build_report(
    descriptors: &[ExerciseDescriptor],
    outcomes: &[SectionOutcome],
    exercise_dir: &Path,
    max_source_lines: usize,
) -> Report {
    debug_assert_eq!(descriptors.len(), outcomes.len());

    let mut summary = ReportSummary {
        total_exercises: descriptors.len(),
        ..ReportSummary::default()
    };

    let sections: Vec<ExerciseSection> = descriptors
        .iter()
        .zip(outcomes.iter())
        .map(|(descriptor, outcome)| {
            match outcome {
                SectionOutcome::Output(_) => summary.executed += 1,
                SectionOutcome::NoOutput => summary.no_output += 1,
                SectionOutcome::NotExecuted => summary.not_executed += 1,
            }
            ExerciseSection {
                name: descriptor.name.clone(),
                title: descriptor.title.clone(),
                description: descriptor.description.clone(),
                topic: descriptor.topic.clone(),
                source: SourceListing::from_file(&descriptor.path, max_source_lines),
                outcome: outcome.clone(),
                conclusion: descriptor.conclusion.clone(),
            }
        })
        .collect();

    Report {
        meta: ReportMeta::now(exercise_dir),
        sections,
        summary,
    }
}
