//! `pipegen generate` - Render a pipeline config into a Jenkinsfile

use anyhow::{Context, Result};
use pipegen::pipeline::PipelineConfig;
use pipegen::render;
use std::path::Path;

/// Loads `file` and renders it.
///
/// With `strict`, the config is validated first and any problem is an error;
/// otherwise unknown parameter kinds are skipped with a warning.
pub fn generate(file: &Path, strict: bool) -> Result<String> {
    let config = PipelineConfig::from_file(file)
        .with_context(|| format!("Failed to load pipeline config: {}", file.display()))?;

    tracing::debug!("Loaded {}: {}", file.display(), config);

    if strict {
        render::build_strict(&config)
            .with_context(|| format!("Pipeline validation failed for: {}", file.display()))
    } else {
        Ok(render::build(&config))
    }
}
