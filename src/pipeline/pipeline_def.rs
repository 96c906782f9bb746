//! Pipeline definition and builder

#![allow(clippy::must_use_candidate, clippy::return_self_not_must_use)]

use crate::pipeline::errors::{PipelineError, ValidationError};
use crate::pipeline::parameters::{Parameter, Parameters};
use crate::pipeline::post::PostActions;
use crate::pipeline::stage::Stage;
use crate::pipeline::types::Validate;
use crate::pipeline::Environment;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::Path;

/// Agent used when none is configured
pub const DEFAULT_AGENT: &str = "any";

fn default_agent() -> String {
    DEFAULT_AGENT.to_string()
}

/// Treats an explicit `null` (e.g. `environment:` with no value in YAML) as empty.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// `agent:` with no value falls back to [`DEFAULT_AGENT`].
fn null_as_default_agent<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|agent| agent.unwrap_or_else(default_agent))
}

/// Structured description of a declarative Jenkins pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Agent token, inserted verbatim after `agent`
    #[serde(default = "default_agent", deserialize_with = "null_as_default_agent")]
    pub agent: String,

    /// Build parameters
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Parameters::is_empty"
    )]
    pub parameters: Parameters,

    /// Environment variables
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Environment::is_empty"
    )]
    pub environment: Environment,

    /// Stages in pipeline
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub stages: Vec<Stage>,

    /// Post actions keyed by condition
    #[serde(
        default,
        alias = "postActions",
        deserialize_with = "null_as_default",
        skip_serializing_if = "PostActions::is_empty"
    )]
    pub post_actions: PostActions,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            agent: default_agent(),
            parameters: Parameters::new(),
            environment: Environment::new(),
            stages: Vec::new(),
            post_actions: PostActions::new(),
        }
    }
}

impl Validate for PipelineConfig {
    type Error = ValidationError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.agent.trim().is_empty() {
            return Err(ValidationError::EmptyAgent);
        }

        self.parameters.validate()?;
        self.environment.validate()?;
        self.stages.validate()?;
        self.post_actions.validate()?;

        Ok(())
    }
}

impl PipelineConfig {
    /// Creates a new pipeline builder
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Returns number of stages
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Parses a configuration from YAML text
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Parse`] if the text is not a valid configuration.
    pub fn from_yaml_str(text: &str) -> Result<Self, PipelineError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Parses a configuration from JSON text
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Parse`] if the text is not a valid configuration.
    pub fn from_json_str(text: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Loads a configuration file, picking the decoder from the extension
    /// (`.yaml`, `.yml` or `.json`).
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Io`] if the file cannot be read,
    /// [`PipelineError::UnsupportedFormat`] for other extensions and
    /// [`PipelineError::Parse`] if decoding fails.
    pub fn from_file(path: &Path) -> Result<Self, PipelineError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        tracing::debug!("Loading pipeline config: {}", path.display());

        match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&std::fs::read_to_string(path)?),
            "json" => Self::from_json_str(&std::fs::read_to_string(path)?),
            _ => Err(PipelineError::UnsupportedFormat(extension)),
        }
    }

    /// Serializes the configuration to YAML
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Serialize`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String, PipelineError> {
        serde_yaml::to_string(self).map_err(|e| PipelineError::serialize("yaml", e))
    }

    /// Serializes the configuration to pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Serialize`] if serialization fails.
    pub fn to_json(&self) -> Result<String, PipelineError> {
        serde_json::to_string_pretty(self).map_err(|e| PipelineError::serialize("json", e))
    }
}

impl fmt::Display for PipelineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pipeline(agent {}): {} parameters, {} environment variables, {} stages, {} post conditions",
            self.agent,
            self.parameters.len(),
            self.environment.len(),
            self.stages.len(),
            self.post_actions.len()
        )
    }
}

/// Builder for creating pipeline configurations
#[derive(Debug, Clone, Default)]
pub struct PipelineBuilder {
    config: PipelineConfig,
}

impl PipelineBuilder {
    /// Creates a new pipeline builder with agent `any`
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets agent for pipeline
    pub fn agent(mut self, agent: impl Into<String>) -> Self {
        self.config.agent = agent.into();
        self
    }

    /// Adds a parameter
    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.config.parameters.push(parameter);
        self
    }

    /// Sets parameters directly
    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.config.parameters = parameters;
        self
    }

    /// Adds an environment variable
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.environment.insert(key, value.into());
        self
    }

    /// Sets environment directly
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.config.environment = environment;
        self
    }

    /// Adds a stage to pipeline
    pub fn stage(mut self, stage: Stage) -> Self {
        self.config.stages.push(stage);
        self
    }

    /// Adds multiple stages to pipeline
    pub fn stages(mut self, stages: impl IntoIterator<Item = Stage>) -> Self {
        self.config.stages.extend(stages);
        self
    }

    /// Appends actions to a post condition, creating it if needed
    pub fn post<I, S>(mut self, condition: impl Into<String>, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let condition = condition.into();
        let mut merged = self
            .config
            .post_actions
            .get(&condition)
            .cloned()
            .unwrap_or_default();
        merged.extend(actions.into_iter().map(Into::into));
        self.config.post_actions.insert(condition, merged);
        self
    }

    /// Builds the pipeline configuration
    pub fn build(self) -> PipelineConfig {
        self.config
    }

    /// Builds the pipeline configuration, validating it first
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn build_validated(self) -> Result<PipelineConfig, ValidationError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_agent_is_any() {
        assert_eq!(PipelineConfig::default().agent, "any");
        assert_eq!(PipelineConfig::builder().build().agent, "any");
    }

    #[test]
    fn test_builder_collects_everything() {
        let config = PipelineConfig::builder()
            .agent("docker { image 'rust:1.92' }")
            .parameter(Parameter::string("TAG"))
            .env("A", "1")
            .env("B", "2")
            .stage(Stage::new("Build", ["sh 'cargo build'"]))
            .post("always", ["cleanWs()"])
            .post("always", ["echo 'bye'"])
            .build();

        assert_eq!(config.agent, "docker { image 'rust:1.92' }");
        assert_eq!(config.parameters.len(), 1);
        assert_eq!(config.environment.keys().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(config.stage_count(), 1);
        assert_eq!(
            config.post_actions.get("always"),
            Some(&vec!["cleanWs()".to_string(), "echo 'bye'".to_string()])
        );
    }

    #[test]
    fn test_build_validated() {
        let result = PipelineConfig::builder()
            .stage(Stage::new("", ["make"]))
            .build_validated();
        assert_eq!(result, Err(ValidationError::EmptyStageName { index: 0 }));

        let result = PipelineConfig::builder().agent("  ").build_validated();
        assert_eq!(result, Err(ValidationError::EmptyAgent));
    }

    #[test]
    fn test_from_yaml_str_full() {
        let yaml = r#"
agent: any
parameters:
  - type: choice
    name: ENV
    options: [dev, prod]
    description: target env
environment:
  ZED: "last"
  ALPHA: "first"
stages:
  - name: Deploy
    steps:
      - sh 'make deploy'
    when: branch 'main'
post_actions:
  success: ["echo ok"]
  always: ["cleanWs()"]
"#;
        let config = PipelineConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.parameters.len(), 1);
        assert_eq!(config.environment.keys().collect::<Vec<_>>(), vec!["ZED", "ALPHA"]);
        assert_eq!(config.stages[0].when.as_deref(), Some("branch 'main'"));
        assert_eq!(
            config.post_actions.keys().collect::<Vec<_>>(),
            vec!["success", "always"]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_yaml_str_nulls_and_defaults() {
        let config = PipelineConfig::from_yaml_str("environment:\nstages:\n").unwrap();
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn test_from_yaml_str_null_agent_is_any() {
        let config = PipelineConfig::from_yaml_str("agent:\n").unwrap();
        assert_eq!(config.agent, DEFAULT_AGENT);
        assert!(config.to_jenkinsfile().contains("\n    agent any\n"));

        let config = PipelineConfig::from_json_str(r#"{"agent": null}"#).unwrap();
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn test_from_json_str_camel_case_post() {
        let json = r#"{"agent": "none", "postActions": {"failure": ["mail to: 'ops'"]}}"#;
        let config = PipelineConfig::from_json_str(json).unwrap();
        assert_eq!(config.agent, "none");
        assert!(config.post_actions.contains_key("failure"));
    }

    #[test]
    fn test_from_yaml_str_invalid() {
        let err = PipelineConfig::from_yaml_str("stages: 12").unwrap_err();
        assert!(matches!(err, PipelineError::Parse { format: "yaml", .. }));
    }

    #[test]
    fn test_from_file_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("pipeline.yml");
        std::fs::write(&yaml_path, "agent: any\n").unwrap();
        assert!(PipelineConfig::from_file(&yaml_path).is_ok());

        let json_path = dir.path().join("pipeline.JSON");
        std::fs::write(&json_path, r#"{"agent": "any"}"#).unwrap();
        assert!(PipelineConfig::from_file(&json_path).is_ok());

        let toml_path = dir.path().join("pipeline.toml");
        std::fs::write(&toml_path, "agent = 'any'").unwrap();
        assert_eq!(
            PipelineConfig::from_file(&toml_path),
            Err(PipelineError::UnsupportedFormat("toml".to_string()))
        );

        let missing = dir.path().join("missing.yaml");
        assert!(matches!(
            PipelineConfig::from_file(&missing),
            Err(PipelineError::Io(_))
        ));
    }

    #[test]
    fn test_yaml_round_trip_keeps_order() {
        let config = PipelineConfig::builder()
            .env("Z", "1")
            .env("A", "2")
            .parameter(Parameter::choice("ENV", ["dev", "prod"]))
            .build();
        let yaml = config.to_yaml().unwrap();
        assert_eq!(PipelineConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_display() {
        let config = PipelineConfig::builder()
            .stage(Stage::new("Build", ["make"]))
            .build();
        assert!(config.to_string().contains("1 stages"));
    }
}
