//! Markdown Output
//!
//! Renders the report as a single Markdown document: title block, table of
//! contents, theory, one section per exercise, general conclusions and the
//! control questions. Presentation is deliberately plain; the structure is
//! the contract.

use crate::content;
use crate::report::{Report, SectionOutcome};

/// Render `report` as a Markdown document.
pub fn generate_markdown_report(report: &Report) -> String {
    let mut out = String::new();

    // Title block
    out.push_str(&format!("# {}\n\n", content::REPORT_TITLE));
    out.push_str(&format!("**{}**\n\n", content::LAB_TITLE));
    out.push_str(&format!("*{}*\n\n", content::LAB_THEME));
    out.push_str(&format!("{}\n\n", content::COURSE));
    out.push_str(&format!(
        "Date: {}\n\n",
        report.meta.timestamp.format("%d.%m.%Y")
    ));

    // Table of contents
    out.push_str("## Contents\n\n");
    for (i, section) in report.sections.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, section.title));
    }
    out.push('\n');

    // Theory
    out.push_str("## 1. Theory\n\n");
    out.push_str(content::THEORY);
    out.push_str("\n\n");

    // Per-exercise sections
    out.push_str("## 2. Exercise results\n\n");
    for (i, section) in report.sections.iter().enumerate() {
        out.push_str(&format!("### 2.{} {}\n\n", i + 1, section.title));
        out.push_str(&format!("{}\n\n", section.description));
        out.push_str(&format!("Topic: {}\n\n", section.topic));

        out.push_str("**Source:**\n\n```\n");
        for line in &section.source.lines {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("```\n");
        if section.source.omitted > 0 {
            out.push_str(&format!("... ({} lines omitted)\n", section.source.omitted));
        }
        out.push('\n');

        out.push_str("**Output:**\n\n");
        match &section.outcome {
            SectionOutcome::Output(text) => {
                out.push_str("```\n");
                out.push_str(text);
                out.push_str("\n```\n\n");
            }
            SectionOutcome::NoOutput => {
                out.push_str(&format!("*{}*\n\n", content::NO_OUTPUT_PLACEHOLDER));
            }
            SectionOutcome::NotExecuted => {
                out.push_str(&format!("*{}*\n\n", content::NOT_EXECUTED_PLACEHOLDER));
            }
        }

        out.push_str(&format!("**Conclusion:** {}\n\n", section.conclusion));
    }

    // Back matter
    out.push_str("## 3. General conclusions\n\n");
    out.push_str(content::GENERAL_CONCLUSIONS);
    out.push_str("\n\n");

    out.push_str("## 4. Control questions\n\n");
    for (i, (question, answer)) in content::CONTROL_QUESTIONS.iter().enumerate() {
        out.push_str(&format!("### 4.{} {}\n\n", i + 1, question));
        out.push_str(answer);
        out.push_str("\n\n");
    }

    out
}
