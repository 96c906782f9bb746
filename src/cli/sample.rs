//! `pipegen sample` - Print the bundled Flask pipeline

use anyhow::Result;
use pipegen::samples::flask_pipeline;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    Jenkinsfile,
    Yaml,
    Json,
}

pub fn render_sample(format: SampleFormat) -> Result<String> {
    let config = flask_pipeline();
    let text = match format {
        SampleFormat::Jenkinsfile => config.to_jenkinsfile(),
        SampleFormat::Yaml => config.to_yaml()?,
        SampleFormat::Json => config.to_json()?,
    };
    Ok(text)
}
