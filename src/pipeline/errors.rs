//! Error types for pipeline domain

use thiserror::Error;

/// Errors that can occur while loading or rendering a pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// Validation failed with specified reason
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration file could not be decoded
    #[error("Failed to parse {format} configuration: {message}")]
    Parse {
        /// Format that was being decoded (`yaml` or `json`).
        format: &'static str,
        /// Decoder error message.
        message: String,
    },

    /// Configuration could not be encoded
    #[error("Failed to serialize configuration as {format}: {message}")]
    Serialize {
        /// Format that was being written (`yaml` or `json`).
        format: &'static str,
        /// Encoder error message.
        message: String,
    },

    /// Configuration file has an extension we cannot decode
    #[error("Unsupported configuration file extension: '{0}'")]
    UnsupportedFormat(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(String),
}

impl PipelineError {
    /// Wraps an encoder error for `format`
    pub fn serialize(format: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Serialize {
            format,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for PipelineError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_yaml::Error> for PipelineError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse {
            format: "yaml",
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            format: "json",
            message: err.to_string(),
        }
    }
}

/// Validation errors for pipeline components
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Agent cannot be blank
    #[error("Agent cannot be empty")]
    EmptyAgent,

    /// Stage name cannot be empty
    #[error("Stage #{index} has an empty name")]
    EmptyStageName {
        /// Zero-based position of the stage.
        index: usize,
    },

    /// Parameter name cannot be empty
    #[error("Parameter #{index} has an empty name")]
    EmptyParameterName {
        /// Zero-based position of the parameter.
        index: usize,
    },

    /// Parameter kind is not one we know how to render
    #[error("Parameter '{name}' has unknown type '{kind}'")]
    UnknownParameterKind {
        /// Name of the parameter.
        name: String,
        /// The unrecognised type tag.
        kind: String,
    },

    /// Choice parameter without any option
    #[error("Choice parameter '{name}' must have at least one option")]
    EmptyChoices {
        /// Name of the parameter.
        name: String,
    },

    /// Environment key is not a valid variable name
    #[error("Invalid environment variable name: '{key}'")]
    InvalidEnvironmentKey {
        /// The invalid key.
        key: String,
    },

    /// Post condition is not recognised by Jenkins
    #[error("Unknown post condition: '{condition}'")]
    UnknownPostCondition {
        /// The unrecognised condition.
        condition: String,
    },
}
