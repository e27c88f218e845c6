//! Defines the core `Config` struct and related types for application configuration.
//!
//! The CLI arguments are turned into a `Config` by [`ConfigBuilder`], which
//! also validates combinations that clap cannot express on its own.

use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;
mod validation;

/// Selects which report is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    /// Aggregated, indented tree report for a single root directory.
    #[default]
    Tree,
    /// Flat per-path probe report for any number of paths.
    Probe,
}

/// Represents the destination for the generated output.
#[derive(Debug, PartialEq, Eq, Clone)]
#[non_exhaustive]
pub enum OutputDestination {
    /// Write to standard output.
    Stdout,
    /// Write to the specified file path.
    File(PathBuf),
}

/// Validated settings for a single run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Paths given on the command line. Exactly one in tree mode.
    pub input_paths: Vec<PathBuf>,
    /// Which report to produce.
    pub mode: ReportMode,
    /// Where the report is written.
    pub output_destination: OutputDestination,
}

impl Config {
    /// The root directory of the tree report.
    pub fn root(&self) -> Option<&PathBuf> {
        self.input_paths.first()
    }

    /// Creates a default `Config` for testing purposes.
    #[doc(hidden)]
    pub fn new_for_test() -> Self {
        Self {
            input_paths: vec![PathBuf::from(".")],
            mode: ReportMode::Tree,
            output_destination: OutputDestination::Stdout,
        }
    }
}
