//! `pipegen check` - Validate a pipeline config
//!
//! Loads the config and runs every validation rule: non-empty agent, stage
//! and parameter names, known parameter kinds, non-empty choices, valid
//! environment variable names and known post conditions.
//!
//! ## Usage
//!
//! ```bash
//! pipegen check pipeline.yaml
//! # Exit code 0: config is valid
//! # Exit code 1: config could not be loaded or is invalid
//! ```

use anyhow::{Context, Result};
use pipegen::pipeline::{PipelineConfig, Validate};
use std::path::Path;

/// Validate a pipeline config file, returning it on success
pub fn check_pipeline(file: &Path) -> Result<PipelineConfig> {
    let config = PipelineConfig::from_file(file)
        .with_context(|| format!("Failed to load pipeline config: {}", file.display()))?;

    config
        .validate()
        .with_context(|| format!("Pipeline validation failed for: {}", file.display()))?;

    tracing::info!("Pipeline validation successful: {}", file.display());
    Ok(config)
}
