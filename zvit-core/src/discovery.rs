//! Exercise Discovery
//!
//! Turns a directory of executable files into an ordered list of
//! [`ExerciseDescriptor`]s. Discovery and catalog lookup are separate steps:
//! an executable with no catalog entry still becomes a descriptor with
//! generic metadata, so new exercises degrade gracefully instead of failing.

use crate::catalog::Catalog;
use crate::descriptor::ExerciseDescriptor;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from the discovery step.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The exercise directory could not be read at all.
    #[error("failed to read exercise directory {dir}: {source}")]
    ReadDir {
        /// Directory that was scanned.
        dir: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Discover the exercise set in `dir`.
///
/// Every executable regular file in `dir` becomes one descriptor, except the
/// orchestrator's own binary. The result is ordered lexicographically by file
/// name; report section order follows this order, not execution order.
pub fn discover_exercises(
    dir: &Path,
    catalog: &Catalog,
) -> Result<Vec<ExerciseDescriptor>, DiscoveryError> {
    let own_name = std::env::current_exe()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_os_string()));

    let entries = std::fs::read_dir(dir).map_err(|source| DiscoveryError::ReadDir {
        dir: dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if Some(entry.file_name()) == own_name {
            continue;
        }
        if is_executable_file(&path) {
            paths.push(path);
        }
    }

    paths.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));

    Ok(paths
        .iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            catalog.describe(&name, path)
        })
        .collect())
}

/// A regular file with any execute bit set.
fn is_executable_file(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}
