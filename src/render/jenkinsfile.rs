//! Declarative Jenkinsfile rendering
//!
//! The document is assembled from top-level parts in a fixed order:
//! `pipeline {`, the agent line, then the optional `parameters`,
//! `environment`, `stages` and `post` blocks, then the closing brace.
//! Parts are separated by one blank line; absent sections leave no trace.

use super::block::{Block, INDENT};
use super::quote;
use crate::pipeline::{
    Environment, Parameter, Parameters, PipelineConfig, PipelineError, PostActions, Stage,
    Validate,
};

/// Renders a [`PipelineConfig`] into Jenkinsfile text
#[derive(Debug, Clone, Copy)]
pub struct JenkinsfileBuilder<'a> {
    config: &'a PipelineConfig,
}

impl<'a> JenkinsfileBuilder<'a> {
    /// Creates a builder over a configuration
    #[must_use]
    pub fn new(config: &'a PipelineConfig) -> Self {
        Self { config }
    }

    /// Renders the whole document. Never fails; parameters of unknown kind
    /// are skipped.
    #[must_use]
    pub fn build(&self) -> String {
        tracing::debug!("Rendering Jenkinsfile: {}", self.config);

        let sections = [
            self.parameters_block(),
            self.environment_block(),
            self.stages_block(),
            self.post_block(),
        ];

        let mut parts = vec![
            "pipeline {".to_string(),
            format!("{INDENT}agent {}", self.config.agent),
        ];
        parts.extend(sections.into_iter().flatten().map(|block| block.render(1)));
        parts.push("}".to_string());

        parts.join("\n\n")
    }

    /// The `parameters { ... }` block, if any parameter is configured
    #[must_use]
    pub fn parameters_block(&self) -> Option<Block> {
        render_parameters(&self.config.parameters)
    }

    /// The `environment { ... }` block, if any variable is configured
    #[must_use]
    pub fn environment_block(&self) -> Option<Block> {
        render_environment(&self.config.environment)
    }

    /// The `stages { ... }` block, if any stage is configured
    #[must_use]
    pub fn stages_block(&self) -> Option<Block> {
        if self.config.stages.is_empty() {
            return None;
        }
        Some(Block::braced("stages").children(self.config.stages.iter().map(render_stage)))
    }

    /// The `post { ... }` block, if any condition is configured
    #[must_use]
    pub fn post_block(&self) -> Option<Block> {
        render_post(&self.config.post_actions)
    }
}

/// Renders a configuration into Jenkinsfile text
#[must_use]
pub fn build(config: &PipelineConfig) -> String {
    JenkinsfileBuilder::new(config).build()
}

/// Validates a configuration, then renders it
///
/// # Errors
///
/// Returns [`PipelineError::Validation`] with the first problem found.
pub fn build_strict(config: &PipelineConfig) -> Result<String, PipelineError> {
    config.validate()?;
    Ok(build(config))
}

impl PipelineConfig {
    /// Renders this configuration into Jenkinsfile text
    #[must_use]
    pub fn to_jenkinsfile(&self) -> String {
        build(self)
    }
}

fn render_parameters(parameters: &Parameters) -> Option<Block> {
    if parameters.is_empty() {
        return None;
    }
    Some(Block::braced("parameters").children(parameters.iter().filter_map(render_parameter)))
}

fn render_parameter(parameter: &Parameter) -> Option<Block> {
    match parameter {
        Parameter::Choice {
            name,
            options,
            description,
        } => {
            let choices = options
                .iter()
                .map(|option| quote(option))
                .collect::<Vec<_>>()
                .join(", ");
            Some(
                Block::call("choice")
                    .line(format!("name: {}", quote(name)))
                    .line(format!("choices: [{choices}]"))
                    .line(format!(
                        "description: {}",
                        quote(description.as_deref().unwrap_or_default())
                    )),
            )
        }
        Parameter::String {
            name,
            default,
            description,
        } => Some(
            Block::call("string")
                .line(format!("name: {}", quote(name)))
                .line(format!(
                    "defaultValue: {}",
                    quote(default.as_deref().unwrap_or_default())
                ))
                .line(format!(
                    "description: {}",
                    quote(description.as_deref().unwrap_or_default())
                )),
        ),
        Parameter::Unknown { kind, name } => {
            tracing::warn!("Skipping parameter '{}' of unknown type '{}'", name, kind);
            None
        }
    }
}

fn render_environment(environment: &Environment) -> Option<Block> {
    if environment.is_empty() {
        return None;
    }
    Some(
        Block::braced("environment").lines(
            environment
                .iter()
                .map(|(key, value)| format!("{key} = \"{value}\"")),
        ),
    )
}

fn render_stage(stage: &Stage) -> Block {
    let mut block = Block::braced(format!("stage({})", quote(&stage.name)));
    if let Some(when) = &stage.when {
        block = block.child(Block::braced("when").line(when.as_str()));
    }
    block.child(Block::braced("steps").lines(&stage.steps))
}

fn render_post(post_actions: &PostActions) -> Option<Block> {
    if post_actions.is_empty() {
        return None;
    }
    Some(
        Block::braced("post").children(
            post_actions
                .iter()
                .map(|(condition, actions)| Block::braced(condition).lines(actions)),
        ),
    )
}
