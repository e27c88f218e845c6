// src/config/validation.rs

use super::ReportMode;
use anyhow::{anyhow, Result};
use std::path::PathBuf;

/// Validates combinations of options that clap cannot easily express.
pub(super) fn validate_options(input_paths: &[PathBuf], mode: ReportMode) -> Result<()> {
    if input_paths.is_empty() {
        return Err(anyhow!("No path given."));
    }
    if mode == ReportMode::Tree && input_paths.len() > 1 {
        return Err(anyhow!(
            "The tree report takes exactly one root path ({} given); use --probe for several paths.",
            input_paths.len()
        ));
    }
    Ok(())
}
