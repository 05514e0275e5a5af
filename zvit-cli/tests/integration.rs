//! Integration tests for the execution coordinator and report pipeline.
//!
//! Exercises are stand-ins written as small shell scripts in a scratch
//! directory; the coordinator treats them exactly like real exercise
//! programs (opaque text-in/text-out processes).

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use zvit_cli::{Coordinator, default_markers, sanitize_output};
use zvit_core::{Catalog, ExecutionResult, ExerciseDescriptor, Fixture, discover_exercises};
use zvit_report::{SectionOutcome, build_report, generate_markdown_report};

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

fn descriptor(path: &Path, fixture: Fixture) -> ExerciseDescriptor {
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    ExerciseDescriptor {
        name: name.clone(),
        path: path.to_path_buf(),
        title: format!("Task: {}", name),
        description: "test exercise".to_string(),
        topic: "testing".to_string(),
        conclusion: "done".to_string(),
        fixture,
    }
}

#[test]
fn captures_stdout_trimmed_on_zero_exit() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_script(dir.path(), "ok", r#"printf '5! = 120\n\n'"#);

    let coordinator = Coordinator::new(Duration::from_secs(5), 1);
    let result = coordinator.run_exercise(&descriptor(&path, Fixture::default()));

    assert_eq!(result, ExecutionResult::Captured("5! = 120".to_string()));
}

#[test]
fn fixture_stdin_is_fed_to_the_exercise() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_script(dir.path(), "echoer", r#"read n; echo "${n}! = 120""#);

    let coordinator = Coordinator::new(Duration::from_secs(5), 1);
    let result = coordinator.run_exercise(&descriptor(&path, Fixture::with_stdin("5\n")));

    assert_eq!(result, ExecutionResult::Captured("5! = 120".to_string()));
}

#[test]
fn fixture_args_are_passed_on_the_command_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_script(dir.path(), "argecho", r#"echo "arg:$1""#);

    let coordinator = Coordinator::new(Duration::from_secs(5), 1);
    let result = coordinator.run_exercise(&descriptor(&path, Fixture::with_args(["data.txt"])));

    assert_eq!(result, ExecutionResult::Captured("arg:data.txt".to_string()));
}

#[test]
fn empty_fixture_closes_stdin_immediately() {
    let dir = tempfile::tempdir().unwrap();
    // `cat` with closed stdin terminates at once instead of hanging.
    let path = write_script(dir.path(), "catter", "cat");

    let coordinator = Coordinator::new(Duration::from_secs(5), 1);
    let result = coordinator.run_exercise(&descriptor(&path, Fixture::default()));

    assert_eq!(result, ExecutionResult::Captured(String::new()));
}

#[test]
fn nonzero_exit_discards_partial_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_script(dir.path(), "failing", "echo partial\nexit 1");

    let coordinator = Coordinator::new(Duration::from_secs(5), 1);
    let result = coordinator.run_exercise(&descriptor(&path, Fixture::default()));

    assert_eq!(result, ExecutionResult::NoResult);
}

#[test]
fn launch_failure_yields_no_result() {
    let coordinator = Coordinator::new(Duration::from_secs(5), 1);
    let missing = PathBuf::from("/nonexistent/zvit-test-exercise");
    let result = coordinator.run_exercise(&descriptor(&missing, Fixture::default()));

    assert_eq!(result, ExecutionResult::NoResult);
}

#[test]
fn hung_exercise_is_terminated_at_the_deadline() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_script(dir.path(), "hang", "sleep 30");

    let coordinator = Coordinator::new(Duration::from_millis(300), 1);
    let start = Instant::now();
    let result = coordinator.run_exercise(&descriptor(&path, Fixture::default()));

    assert_eq!(result, ExecutionResult::NoResult);
    assert!(
        start.elapsed() < Duration::from_secs(10),
        "deadline enforcement took {:?}",
        start.elapsed()
    );
}

#[test]
fn oversized_fixture_does_not_stall_the_deadline() {
    let dir = tempfile::tempdir().unwrap();
    // Never reads stdin, so a fixture beyond the pipe capacity stays
    // unconsumed for the whole run.
    let path = write_script(dir.path(), "deaf", "sleep 30");
    let fixture = Fixture::with_stdin("x".repeat(1 << 20));

    let coordinator = Coordinator::new(Duration::from_millis(300), 1);
    let start = Instant::now();
    let result = coordinator.run_exercise(&descriptor(&path, fixture));

    assert_eq!(result, ExecutionResult::NoResult);
    assert!(
        start.elapsed() < Duration::from_secs(10),
        "deadline enforcement took {:?}",
        start.elapsed()
    );
}

#[test]
fn exercise_may_exit_without_consuming_its_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_script(dir.path(), "ignorer", "echo done");
    let fixture = Fixture::with_stdin("x".repeat(1 << 20));

    let coordinator = Coordinator::new(Duration::from_secs(5), 1);
    let result = coordinator.run_exercise(&descriptor(&path, fixture));

    assert_eq!(result, ExecutionResult::Captured("done".to_string()));
}

#[test]
fn one_failure_does_not_abort_the_rest() {
    let dir = tempfile::tempdir().unwrap();
    let failing = write_script(dir.path(), "a_failing", "exit 3");
    let hanging = write_script(dir.path(), "b_hanging", "sleep 30");
    let ok = write_script(dir.path(), "c_ok", "echo fine");

    let coordinator = Coordinator::new(Duration::from_millis(300), 1);
    let results = coordinator.run_all(&[
        descriptor(&failing, Fixture::default()),
        descriptor(&hanging, Fixture::default()),
        descriptor(&ok, Fixture::default()),
    ]);

    assert_eq!(results[0], ExecutionResult::NoResult);
    assert_eq!(results[1], ExecutionResult::NoResult);
    assert_eq!(results[2], ExecutionResult::Captured("fine".to_string()));
}

#[test]
fn parallel_results_keep_discovery_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut exercises = Vec::new();
    for i in 0..6 {
        let name = format!("ex{}", i);
        let path = write_script(dir.path(), &name, &format!("echo out{}", i));
        exercises.push(descriptor(&path, Fixture::default()));
    }

    let coordinator = Coordinator::new(Duration::from_secs(5), 4);
    let results = coordinator.run_all(&exercises);

    for (i, result) in results.iter().enumerate() {
        assert_eq!(*result, ExecutionResult::Captured(format!("out{}", i)));
    }
}

#[test]
fn child_runs_in_its_own_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("marker.txt"), "here").unwrap();
    let path = write_script(dir.path(), "whereami", "cat marker.txt");

    let coordinator = Coordinator::new(Duration::from_secs(5), 1);
    let result = coordinator.run_exercise(&descriptor(&path, Fixture::default()));

    assert_eq!(result, ExecutionResult::Captured("here".to_string()));
}

#[test]
fn rerun_with_identical_fixture_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_script(dir.path(), "det", r#"read n; echo "${n}! = 120""#);
    let exercise = descriptor(&path, Fixture::with_stdin("5\n"));

    let coordinator = Coordinator::new(Duration::from_secs(5), 1);
    let markers = default_markers();

    let first = match coordinator.run_exercise(&exercise) {
        ExecutionResult::Captured(text) => sanitize_output(&text, &markers),
        ExecutionResult::NoResult => panic!("first run failed"),
    };
    let second = match coordinator.run_exercise(&exercise) {
        ExecutionResult::Captured(text) => sanitize_output(&text, &markers),
        ExecutionResult::NoResult => panic!("second run failed"),
    };

    assert_eq!(first, second);
    assert_eq!(first, "5! = 120");
}

#[test]
fn builtin_filestats_fixture_file_ships_with_the_demos() {
    let catalog = Catalog::builtin();
    let exercise = catalog.describe("filestats", Path::new("/tasks/filestats"));
    let file = exercise
        .fixture
        .args
        .first()
        .expect("filestats takes a file argument");

    // The coordinator runs each exercise with cwd set to its own directory,
    // so the fixture path must resolve next to the installed demo binary.
    // The workspace ships the file alongside the demo sources.
    let shipped = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../demos")
        .join(file);
    assert!(
        shipped.is_file(),
        "{} is not shipped with the demos",
        file
    );
}

#[test]
fn end_to_end_report_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    write_script(
        dir.path(),
        "alpha",
        "echo 3\necho 'Error: bad input'\necho 7",
    );
    write_script(dir.path(), "bravo", "exit 1");
    write_script(dir.path(), "charlie", "echo '✗ everything filtered'");

    let exercises = discover_exercises(dir.path(), &Catalog::new()).unwrap();
    assert_eq!(exercises.len(), 3);

    let coordinator = Coordinator::new(Duration::from_secs(5), 1);
    let results = coordinator.run_all(&exercises);

    let markers = default_markers();
    let outcomes: Vec<SectionOutcome> = results
        .iter()
        .map(|result| match result {
            ExecutionResult::Captured(text) => {
                let cleaned = sanitize_output(text, &markers);
                if cleaned.is_empty() {
                    SectionOutcome::NoOutput
                } else {
                    SectionOutcome::Output(cleaned)
                }
            }
            ExecutionResult::NoResult => SectionOutcome::NotExecuted,
        })
        .collect();

    assert_eq!(outcomes[0], SectionOutcome::Output("3\n7".to_string()));
    assert_eq!(outcomes[1], SectionOutcome::NotExecuted);
    assert_eq!(outcomes[2], SectionOutcome::NoOutput);

    let report = build_report(&exercises, &outcomes, dir.path(), 80);
    assert_eq!(report.summary.total_exercises, 3);

    let md = generate_markdown_report(&report);
    let alpha = md.find("2.1").unwrap();
    let bravo = md.find("2.2").unwrap();
    let charlie = md.find("2.3").unwrap();
    assert!(alpha < bravo && bravo < charlie);
    assert!(md.contains("3\n7"));
    assert!(md.contains("(not executed: no result was obtained)"));
    assert!(md.contains("(no output)"));
}
