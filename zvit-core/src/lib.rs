#![warn(missing_docs)]
//! Zvit Core - Exercise Descriptors and Discovery
//!
//! An *exercise* is an independent, self-contained demonstration program that
//! reads optional command-line arguments and/or line-oriented standard input
//! and writes its result to standard output. This crate defines the static
//! metadata describing each exercise (title, topic, conclusion, input
//! fixture) and the discovery step that turns a directory of executable files
//! into an ordered list of descriptors.

mod catalog;
mod descriptor;
mod discovery;

pub use catalog::{Catalog, CatalogEntry};
pub use descriptor::{ExecutionResult, ExerciseDescriptor, Fixture};
pub use discovery::{DiscoveryError, discover_exercises};
