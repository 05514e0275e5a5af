//! Output Sanitizer
//!
//! Removes diagnostic/error lines from captured output before it is embedded
//! in the report. Sanitization is purely textual and stateless: it never
//! inspects exit status or timing, only the content of the captured text.

/// Marker substrings treated as diagnostic noise by default.
///
/// Any line containing one of these is dropped. Substring matching can
/// suppress legitimate lines that merely mention e.g. "Error"; deployments
/// that care can tighten the list via `[sanitizer] markers` in zvit.toml.
pub const DEFAULT_MARKERS: &[&str] = &["❌", "✗", "Error", "Traceback"];

/// Drop denylisted lines from `output` and trim surrounding blank lines.
///
/// Every line of the result is a line present verbatim in the input; lines
/// are only removed, never added or edited. Sanitizing already-clean text
/// returns it unchanged, so the operation is idempotent.
pub fn sanitize_output(output: &str, markers: &[String]) -> String {
    if output.is_empty() {
        return String::new();
    }

    let mut kept: Vec<&str> = output
        .lines()
        .filter(|line| !markers.iter().any(|marker| line.contains(marker.as_str())))
        .collect();

    // Trim leading/trailing blank lines, keep interior lines verbatim.
    while kept.first().is_some_and(|l| l.trim().is_empty()) {
        kept.remove(0);
    }
    while kept.last().is_some_and(|l| l.trim().is_empty()) {
        kept.pop();
    }

    kept.join("\n")
}

/// Owned copy of [`DEFAULT_MARKERS`], for configuration defaults.
pub fn default_markers() -> Vec<String> {
    DEFAULT_MARKERS.iter().map(|m| m.to_string()).collect()
}
