//! Execution Coordinator
//!
//! Runs each discovered exercise as an isolated child process with a bounded
//! wall-clock deadline and captures its standard output. One exercise per
//! process, no shared state between invocations; a single exercise's failure
//! never aborts the processing of the remaining exercises.

use indicatif::{ProgressBar, ProgressStyle};
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use std::io::{Read, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use zvit_core::{ExecutionResult, ExerciseDescriptor};

/// Grace period between SIGTERM and SIGKILL when a deadline expires.
const TERM_GRACE: Duration = Duration::from_millis(500);

/// Polling interval while waiting on a child.
const WAIT_POLL: Duration = Duration::from_millis(10);

/// Send SIGTERM to a process. Returns `Err` if the signal could not be delivered.
fn send_sigterm(pid: u32) -> Result<(), std::io::Error> {
    let ret = unsafe { libc::kill(pid as libc::pid_t, libc::SIGTERM) };
    if ret == -1 {
        Err(std::io::Error::last_os_error())
    } else {
        Ok(())
    }
}

/// Coordinator that executes the exercise set and collects per-exercise
/// results.
pub struct Coordinator {
    timeout: Duration,
    jobs: usize,
}

impl Coordinator {
    /// Create a coordinator with the given per-exercise timeout and degree of
    /// parallelism (`jobs = 1` runs strictly sequentially).
    pub fn new(timeout: Duration, jobs: usize) -> Self {
        Self {
            timeout,
            jobs: jobs.max(1),
        }
    }

    /// Execute every exercise and return one result per descriptor, in the
    /// same order as `exercises`.
    ///
    /// Exercises are mutually independent, so with `jobs > 1` they run on a
    /// thread pool; results are re-sorted by discovery index so the report
    /// order never depends on completion order.
    pub fn run_all(&self, exercises: &[ExerciseDescriptor]) -> Vec<ExecutionResult> {
        if exercises.is_empty() {
            return Vec::new();
        }

        if self.jobs == 1 || exercises.len() == 1 {
            let pb = ProgressBar::new(exercises.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                    )
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );

            let mut results = Vec::with_capacity(exercises.len());
            for exercise in exercises {
                pb.set_message(exercise.name.clone());
                results.push(self.run_exercise(exercise));
                pb.inc(1);
            }
            pb.finish_and_clear();
            return results;
        }

        let worker_count = self.jobs.min(exercises.len());
        let pool = match ThreadPoolBuilder::new().num_threads(worker_count).build() {
            Ok(pool) => pool,
            Err(e) => {
                warn!("failed to build worker pool, running sequentially: {}", e);
                return exercises.iter().map(|ex| self.run_exercise(ex)).collect();
            }
        };

        let mut indexed: Vec<(usize, ExecutionResult)> = pool.install(|| {
            exercises
                .par_iter()
                .enumerate()
                .map(|(index, exercise)| (index, self.run_exercise(exercise)))
                .collect()
        });
        indexed.sort_by_key(|(index, _)| *index);
        indexed.into_iter().map(|(_, result)| result).collect()
    }

    /// Run one exercise as an isolated child process with a bounded deadline.
    ///
    /// Zero exit status yields `Captured` with trailing whitespace trimmed;
    /// a non-zero exit, timeout expiry, or launch failure yields `NoResult`.
    /// This never returns an error and never retries.
    pub fn run_exercise(&self, exercise: &ExerciseDescriptor) -> ExecutionResult {
        let mut command = Command::new(&exercise.path);
        command
            .args(&exercise.fixture.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // Exercises run with UTF-8 I/O regardless of the host locale.
            .env("LC_ALL", "C.UTF-8")
            .env("LANG", "C.UTF-8");
        if let Some(dir) = exercise.path.parent() {
            command.current_dir(dir);
        }

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) => {
                warn!("failed to launch {}: {}", exercise.name, e);
                return ExecutionResult::NoResult;
            }
        };

        // Drain stdout/stderr on threads so a chatty child cannot deadlock on
        // pipe back-pressure while we wait for it.
        let stdout_pipe = child.stdout.take();
        let stdout_thread = std::thread::spawn(move || {
            let mut buf = Vec::new();
            if let Some(mut pipe) = stdout_pipe {
                let _ = pipe.read_to_end(&mut buf);
            }
            buf
        });
        let stderr_pipe = child.stderr.take();
        let stderr_thread = std::thread::spawn(move || {
            let mut sink = Vec::new();
            if let Some(mut pipe) = stderr_pipe {
                let _ = pipe.read_to_end(&mut sink);
            }
        });

        // Feed the fixture and close stdin on its own thread. A fixture
        // larger than the pipe capacity would otherwise block here against a
        // child that never reads stdin, stalling the deadline loop. A write
        // error means the child exited or closed its end; the exit status
        // decides the outcome either way.
        let stdin_pipe = child.stdin.take();
        let fixture_stdin = exercise.fixture.stdin.clone();
        let stdin_thread = std::thread::spawn(move || {
            if let Some(mut pipe) = stdin_pipe {
                if !fixture_stdin.is_empty() {
                    let _ = pipe.write_all(fixture_stdin.as_bytes());
                }
            }
        });

        let status = match wait_with_deadline(&mut child, self.timeout) {
            Some(status) => status,
            None => {
                debug!("{} exceeded {:?}, terminating", exercise.name, self.timeout);
                // Killing the child closes the pipes, unblocking all three
                // I/O threads.
                terminate(&mut child);
                let _ = stdin_thread.join();
                let _ = stdout_thread.join();
                let _ = stderr_thread.join();
                return ExecutionResult::NoResult;
            }
        };

        let _ = stdin_thread.join();
        let stdout_bytes = stdout_thread.join().unwrap_or_default();
        let _ = stderr_thread.join();

        if status.success() {
            let text = String::from_utf8_lossy(&stdout_bytes);
            ExecutionResult::Captured(text.trim_end().to_string())
        } else {
            debug!("{} exited with {}", exercise.name, status);
            ExecutionResult::NoResult
        }
    }
}

/// Poll the child until it exits or the deadline passes.
fn wait_with_deadline(child: &mut Child, timeout: Duration) -> Option<ExitStatus> {
    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Some(status),
            Ok(None) => {
                if Instant::now() >= deadline {
                    return None;
                }
                std::thread::sleep(WAIT_POLL);
            }
            Err(_) => return None,
        }
    }
}

/// Terminate an overdue child: SIGTERM, short grace, then SIGKILL. The child
/// is always reaped before returning.
fn terminate(child: &mut Child) {
    let _ = send_sigterm(child.id());

    let grace_deadline = Instant::now() + TERM_GRACE;
    loop {
        match child.try_wait() {
            Ok(Some(_)) => return,
            Ok(None) if Instant::now() < grace_deadline => std::thread::sleep(WAIT_POLL),
            _ => break,
        }
    }

    let _ = child.kill();
    let _ = child.wait();
}
