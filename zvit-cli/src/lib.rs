#![warn(missing_docs)]
//! Zvit CLI Library
//!
//! Orchestrates a run of the lab-report generator: discover the exercise
//! programs, execute each one in an isolated child process with a bounded
//! deadline, sanitize the captured output, and assemble a single report
//! artifact. Per-exercise failures are recorded and the run continues; only
//! a failure to write the final artifact aborts with an error.

mod config;
mod coordinator;
mod sanitize;

pub use config::*;
pub use coordinator::Coordinator;
pub use sanitize::{DEFAULT_MARKERS, default_markers, sanitize_output};

use anyhow::Context;
use clap::{Parser, Subcommand};
use regex::Regex;
use std::path::PathBuf;
use std::time::Duration;
use zvit_core::{Catalog, ExecutionResult, ExerciseDescriptor, discover_exercises};
use zvit_report::{OutputFormat, SectionOutcome, artifact_file_name, build_report, save_report};

/// zvit CLI arguments
#[derive(Parser, Debug)]
#[command(name = "zvit")]
#[command(author, version, about = "zvit - lab exercise report generator")]
pub struct Cli {
    /// Optional subcommand (List, Run); defaults to Run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Filter exercises by regex pattern on their file name
    #[arg(default_value = ".*")]
    pub filter: String,

    /// Directory scanned for exercise programs (overrides zvit.toml)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Output format: markdown, json
    #[arg(long)]
    pub format: Option<String>,

    /// Output file (default: <directory>/<basename>_<YYYYMMDD>.<ext>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Per-exercise timeout (e.g. "10s", "500ms"; overrides zvit.toml)
    #[arg(long)]
    pub timeout: Option<String>,

    /// Number of exercises executed in parallel
    #[arg(long, default_value = "1")]
    pub jobs: usize,

    /// Dry run - list exercises without executing
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all discovered exercises
    List,
    /// Run exercises and generate the report (default)
    Run,
}

/// Run the zvit CLI with arguments from the environment.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the zvit CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("zvit_cli=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("zvit_cli=info")
            .init();
    }

    // Discover zvit.toml configuration (CLI flags override)
    let config = ZvitConfig::discover().unwrap_or_default();

    match cli.command {
        Some(Commands::List) => list_exercises(&cli, &config),
        Some(Commands::Run) => generate_report(&cli, &config),
        None => {
            if cli.dry_run {
                list_exercises(&cli, &config)
            } else {
                generate_report(&cli, &config)
            }
        }
    }
}

/// Resolve the exercise directory: CLI flag wins over zvit.toml.
fn resolve_dir(cli: &Cli, config: &ZvitConfig) -> PathBuf {
    cli.dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.runner.directory))
}

/// Discover the exercise set and apply the name filter.
fn discover_filtered(cli: &Cli, config: &ZvitConfig) -> anyhow::Result<Vec<ExerciseDescriptor>> {
    let dir = resolve_dir(cli, config);
    let catalog = Catalog::builtin();
    let mut exercises = discover_exercises(&dir, &catalog)?;

    let filter_re = Regex::new(&cli.filter)
        .with_context(|| format!("invalid filter pattern: {}", cli.filter))?;
    exercises.retain(|ex| filter_re.is_match(&ex.name));
    Ok(exercises)
}

fn list_exercises(cli: &Cli, config: &ZvitConfig) -> anyhow::Result<()> {
    let exercises = discover_filtered(cli, config)?;

    println!("Exercise plan:");

    let mut topics: std::collections::BTreeMap<&str, Vec<&ExerciseDescriptor>> =
        std::collections::BTreeMap::new();
    for exercise in &exercises {
        topics.entry(&exercise.topic).or_default().push(exercise);
    }

    let mut total = 0;
    for (topic, group) in &topics {
        println!("├── topic: {}", topic);
        for exercise in group {
            println!("│   ├── {} ({})", exercise.name, exercise.title);
            total += 1;
        }
    }

    println!("{} exercises found.", total);
    Ok(())
}

/// Resolve the per-exercise timeout: CLI flag wins over zvit.toml.
fn resolve_timeout(cli: &Cli, config: &ZvitConfig) -> anyhow::Result<Duration> {
    let raw = cli.timeout.as_deref().unwrap_or(&config.runner.timeout);
    let ms =
        ZvitConfig::parse_duration_ms(raw).with_context(|| format!("invalid timeout: {}", raw))?;
    Ok(Duration::from_millis(ms))
}

fn generate_report(cli: &Cli, config: &ZvitConfig) -> anyhow::Result<()> {
    let exercises = discover_filtered(cli, config)?;

    if exercises.is_empty() {
        println!("No exercises found.");
        return Ok(());
    }

    let timeout = resolve_timeout(cli, config)?;
    // Resolve jobs: CLI wins if explicitly set (not default 1), else zvit.toml
    let jobs = if cli.jobs != 1 {
        cli.jobs
    } else {
        config.runner.jobs.unwrap_or(1)
    };

    println!(
        "Running {} exercises ({} job(s), {:?} timeout each)...\n",
        exercises.len(),
        jobs.max(1),
        timeout
    );

    let coordinator = Coordinator::new(timeout, jobs);
    let results = coordinator.run_all(&exercises);

    // Sanitize per-exercise output and print the console trace. Failures are
    // visible but non-fatal; the run continues to the report.
    let mut outcomes = Vec::with_capacity(results.len());
    for (exercise, result) in exercises.iter().zip(&results) {
        let outcome = match result {
            ExecutionResult::Captured(text) => {
                let cleaned = sanitize_output(text, &config.sanitizer.markers);
                if cleaned.is_empty() {
                    SectionOutcome::NoOutput
                } else {
                    SectionOutcome::Output(cleaned)
                }
            }
            ExecutionResult::NoResult => SectionOutcome::NotExecuted,
        };
        match &outcome {
            SectionOutcome::Output(_) => println!("✓ {}: OK", exercise.name),
            SectionOutcome::NoOutput => println!("✓ {}: OK (no printable output)", exercise.name),
            SectionOutcome::NotExecuted => println!("⊘ {}: no output obtained", exercise.name),
        }
        outcomes.push(outcome);
    }

    let dir = resolve_dir(cli, config);
    let report = build_report(&exercises, &outcomes, &dir, config.report.max_source_lines);

    let format: OutputFormat = cli
        .format
        .as_deref()
        .unwrap_or(&config.output.format)
        .parse()
        .unwrap_or_default();

    let path = cli.output.clone().unwrap_or_else(|| {
        PathBuf::from(&config.output.directory).join(artifact_file_name(
            &config.output.basename,
            format,
            chrono::Local::now().date_naive(),
        ))
    });

    // Write failure is the one fatal error of the run: no partial artifact.
    save_report(&report, format, &path)
        .with_context(|| format!("could not persist report artifact {}", path.display()))?;

    println!("\n✓ Report written to: {}", path.display());
    println!("✓ Analyzed {} exercises", report.summary.total_exercises);
    if report.summary.not_executed > 0 {
        println!(
            "  ({} of them produced no result)",
            report.summary.not_executed
        );
    }

    Ok(())
}
