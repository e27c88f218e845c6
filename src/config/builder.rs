// src/config/builder.rs

use super::{validation::validate_options, Config, OutputDestination, ReportMode};
use crate::cli::Cli;
use anyhow::Result;
use std::path::PathBuf;

/// Builds a [`Config`] programmatically or from parsed CLI arguments.
///
/// # Examples
/// ```
/// use picstat::config::{ConfigBuilder, OutputDestination, ReportMode};
///
/// let config = ConfigBuilder::new()
///     .input_path("photos")
///     .output_file("report.txt")
///     .build()
///     .unwrap();
/// assert_eq!(config.mode, ReportMode::Tree);
/// assert_eq!(config.output_destination, OutputDestination::File("report.txt".into()));
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    input_paths: Vec<PathBuf>,
    output_file: Option<PathBuf>,
    probe: Option<bool>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a builder from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            input_paths: cli.paths.into_iter().map(PathBuf::from).collect(),
            output_file: cli.output_file.map(PathBuf::from),
            probe: Some(cli.probe),
        }
    }

    /// Adds a path to scan (tree mode) or probe (probe mode).
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_paths.push(path.into());
        self
    }

    /// Writes the report to `path` instead of stdout.
    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Switches to the per-path probe report.
    pub fn probe(mut self, probe: bool) -> Self {
        self.probe = Some(probe);
        self
    }

    /// Validates the settings and produces a [`Config`].
    ///
    /// # Errors
    /// Returns an error if no path was given, or if several paths were given
    /// for a tree report.
    pub fn build(self) -> Result<Config> {
        let mode = if self.probe.unwrap_or(false) {
            ReportMode::Probe
        } else {
            ReportMode::Tree
        };
        validate_options(&self.input_paths, mode)?;

        let output_destination = match self.output_file {
            Some(path) => OutputDestination::File(path),
            None => OutputDestination::Stdout,
        };
        log::debug!(
            "Config: mode={:?}, paths={:?}, output={:?}",
            mode,
            self.input_paths,
            output_destination
        );

        Ok(Config {
            input_paths: self.input_paths,
            mode,
            output_destination,
        })
    }
}

impl TryFrom<Cli> for Config {
    type Error = anyhow::Error;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        ConfigBuilder::from_cli(cli).build()
    }
}
