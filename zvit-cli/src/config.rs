//! Configuration loading from zvit.toml
//!
//! Configuration can be specified in a `zvit.toml` file in the project root.
//! The file is discovered by walking up from the current directory; CLI flags
//! override whatever it contains.

use crate::sanitize::default_markers;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// zvit configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ZvitConfig {
    /// Coordinator configuration
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Sanitizer configuration
    #[serde(default)]
    pub sanitizer: SanitizerConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Report assembly configuration
    #[serde(default)]
    pub report: ReportConfig,
}

/// Coordinator configuration for exercise execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Wall-clock timeout for a single exercise (e.g. "10s", "500ms")
    #[serde(default = "default_timeout")]
    pub timeout: String,
    /// Directory scanned for exercise programs
    #[serde(default = "default_exercise_dir")]
    pub directory: String,
    /// Number of exercises executed in parallel (1 = sequential)
    #[serde(default)]
    pub jobs: Option<usize>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            directory: default_exercise_dir(),
            jobs: None,
        }
    }
}

fn default_timeout() -> String {
    "10s".to_string()
}
fn default_exercise_dir() -> String {
    ".".to_string()
}

/// Sanitizer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SanitizerConfig {
    /// Lines containing any of these substrings are dropped from captured
    /// output before it is embedded in the report
    #[serde(default = "default_markers")]
    pub markers: Vec<String>,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            markers: default_markers(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "markdown" or "json"
    #[serde(default = "default_format")]
    pub format: String,
    /// Directory the report artifact is written to
    #[serde(default = "default_output_dir")]
    pub directory: String,
    /// Base name of the artifact; the current date (YYYYMMDD) is appended
    #[serde(default = "default_basename")]
    pub basename: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            directory: default_output_dir(),
            basename: default_basename(),
        }
    }
}

fn default_format() -> String {
    "markdown".to_string()
}
fn default_output_dir() -> String {
    ".".to_string()
}
fn default_basename() -> String {
    "lab_report".to_string()
}

/// Report assembly configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Maximum source lines embedded per section; the remainder is announced
    /// as an omitted-lines notice
    #[serde(default = "default_max_source_lines")]
    pub max_source_lines: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_source_lines: default_max_source_lines(),
        }
    }
}

fn default_max_source_lines() -> usize {
    80
}

impl ZvitConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from the current
    /// directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("zvit.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# zvit configuration

[runner]
# Wall-clock timeout for a single exercise
timeout = "10s"
# Directory scanned for exercise programs
directory = "."
# Number of exercises executed in parallel (uncomment to enable)
# jobs = 4

[sanitizer]
# Lines containing any of these substrings are dropped from captured output
markers = ["❌", "✗", "Error", "Traceback"]

[output]
# Output format: markdown or json
format = "markdown"
# Directory the report artifact is written to
directory = "."
# Base name; the current date (YYYYMMDD) is appended
basename = "lab_report"

[report]
# Maximum source lines embedded per section
max_source_lines = 80
"#
        .to_string()
    }

    /// Parse duration string (e.g. "10s", "500ms", "2m") to milliseconds
    pub fn parse_duration_ms(s: &str) -> anyhow::Result<u64> {
        let s = s.trim();
        if s.is_empty() {
            return Err(anyhow::anyhow!("Empty duration string"));
        }

        // Find where the number ends and unit begins
        let (num_part, unit_part) = s
            .char_indices()
            .find(|(_, c)| c.is_alphabetic())
            .map(|(i, _)| s.split_at(i))
            .unwrap_or((s, "s"));

        let value: f64 = num_part
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid duration number: {}", num_part))?;

        let multiplier: f64 = match unit_part.to_lowercase().as_str() {
            "ms" => 1.0,
            "s" | "" => 1_000.0,
            "m" | "min" => 60_000.0,
            _ => return Err(anyhow::anyhow!("Unknown duration unit: {}", unit_part)),
        };

        Ok((value * multiplier) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ZvitConfig::default();
        assert_eq!(config.runner.timeout, "10s");
        assert_eq!(config.runner.directory, ".");
        assert_eq!(config.output.basename, "lab_report");
        assert_eq!(config.report.max_source_lines, 80);
        assert!(config.sanitizer.markers.iter().any(|m| m == "Error"));
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(ZvitConfig::parse_duration_ms("10s").unwrap(), 10_000);
        assert_eq!(ZvitConfig::parse_duration_ms("500ms").unwrap(), 500);
        assert_eq!(ZvitConfig::parse_duration_ms("2m").unwrap(), 120_000);
        assert_eq!(ZvitConfig::parse_duration_ms("1.5s").unwrap(), 1_500);
        assert!(ZvitConfig::parse_duration_ms("").is_err());
        assert!(ZvitConfig::parse_duration_ms("10parsecs").is_err());
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [runner]
            timeout = "3s"
            directory = "tasks"

            [sanitizer]
            markers = ["FATAL"]
        "#;

        let config: ZvitConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.runner.timeout, "3s");
        assert_eq!(config.runner.directory, "tasks");
        assert_eq!(config.sanitizer.markers, vec!["FATAL"]);
        // Defaults should still apply
        assert_eq!(config.output.format, "markdown");
        assert_eq!(config.report.max_source_lines, 80);
    }

    #[test]
    fn test_default_toml_parses() {
        let default_toml = ZvitConfig::default_toml();
        let config: ZvitConfig = toml::from_str(&default_toml).unwrap();
        assert_eq!(config.runner.timeout, "10s");
        assert_eq!(config.sanitizer.markers.len(), 4);
    }
}
