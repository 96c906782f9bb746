//! Pipeline parameters for runtime configuration.
//!
//! This module provides types for the `parameters { ... }` section of a
//! Jenkinsfile. Only choice and string parameters are rendered; any other
//! `type` read from a configuration file is kept as [`Parameter::Unknown`]
//! so that rendering can skip it and validation can reject it.

#![allow(clippy::must_use_candidate, clippy::return_self_not_must_use)]

use super::Validate;
use super::errors::ValidationError;
use serde::{Deserialize, Serialize};

/// Collection of pipeline parameters, in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Parameters(pub Vec<Parameter>);

impl Parameters {
    /// Creates a new empty parameters collection
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates parameters from a list
    pub fn from_vec(params: Vec<Parameter>) -> Self {
        Self(params)
    }

    /// Adds a parameter
    pub fn push(&mut self, param: Parameter) {
        self.0.push(param);
    }

    /// Gets a parameter by name
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.0.iter().find(|p| p.name() == name)
    }

    /// Returns an iterator over all parameters
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.0.iter()
    }

    /// Returns the number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no parameters
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Parameter> for Parameters {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Individual parameter definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawParameter", into = "RawParameter")]
pub enum Parameter {
    /// Choice parameter, rendered as `choice(...)`
    Choice {
        /// Parameter name
        name: String,
        /// Available options, first one is Jenkins' default
        options: Vec<String>,
        /// Description
        description: Option<String>,
    },

    /// String parameter, rendered as `string(...)`
    String {
        /// Parameter name
        name: String,
        /// Default value
        default: Option<String>,
        /// Description
        description: Option<String>,
    },

    /// Parameter whose `type` tag was not recognised
    Unknown {
        /// The type tag as written in the configuration
        kind: String,
        /// Parameter name
        name: String,
    },
}

impl Parameter {
    /// Creates a choice parameter
    pub fn choice<I, S>(name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Choice {
            name: name.into(),
            options: options.into_iter().map(Into::into).collect(),
            description: None,
        }
    }

    /// Creates a string parameter without default value
    pub fn string(name: impl Into<String>) -> Self {
        Self::String {
            name: name.into(),
            default: None,
            description: None,
        }
    }

    /// Sets the description (ignored for unknown parameters)
    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        match &mut self {
            Self::Choice { description, .. } | Self::String { description, .. } => {
                *description = Some(text.into());
            }
            Self::Unknown { .. } => {}
        }
        self
    }

    /// Sets the default value (string parameters only)
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        if let Self::String { default, .. } = &mut self {
            *default = Some(value.into());
        }
        self
    }

    /// Returns the parameter name
    pub fn name(&self) -> &str {
        match self {
            Self::Choice { name, .. } | Self::String { name, .. } | Self::Unknown { name, .. } => {
                name
            }
        }
    }

    /// Returns the parameter description, if any
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Choice { description, .. } | Self::String { description, .. } => {
                description.as_deref()
            }
            Self::Unknown { .. } => None,
        }
    }

    /// Returns the `type` tag of this parameter
    pub fn kind(&self) -> &str {
        match self {
            Self::Choice { .. } => CHOICE,
            Self::String { .. } => STRING,
            Self::Unknown { kind, .. } => kind.as_str(),
        }
    }

    /// Returns true if this parameter has a recognised kind
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown { .. })
    }
}

impl Validate for Parameters {
    type Error = ValidationError;

    fn validate(&self) -> Result<(), Self::Error> {
        for (index, param) in self.0.iter().enumerate() {
            if param.name().trim().is_empty() {
                return Err(ValidationError::EmptyParameterName { index });
            }
            match param {
                Parameter::Unknown { kind, name } => {
                    return Err(ValidationError::UnknownParameterKind {
                        name: name.clone(),
                        kind: kind.clone(),
                    });
                }
                Parameter::Choice { name, options, .. } if options.is_empty() => {
                    return Err(ValidationError::EmptyChoices { name: name.clone() });
                }
                _ => {}
            }
        }
        Ok(())
    }
}

const CHOICE: &str = "choice";
const STRING: &str = "string";

/// Wire shape of a parameter: a flat map tagged by `type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawParameter {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    name: String,
    #[serde(default, alias = "choices", skip_serializing_if = "Vec::is_empty")]
    options: Vec<String>,
    #[serde(default, alias = "defaultValue", skip_serializing_if = "Option::is_none")]
    default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl From<RawParameter> for Parameter {
    fn from(raw: RawParameter) -> Self {
        if raw.kind == CHOICE {
            Self::Choice {
                name: raw.name,
                options: raw.options,
                description: raw.description,
            }
        } else if raw.kind == STRING {
            Self::String {
                name: raw.name,
                default: raw.default,
                description: raw.description,
            }
        } else {
            Self::Unknown {
                kind: raw.kind,
                name: raw.name,
            }
        }
    }
}

impl From<Parameter> for RawParameter {
    fn from(param: Parameter) -> Self {
        match param {
            Parameter::Choice {
                name,
                options,
                description,
            } => Self {
                kind: CHOICE.to_string(),
                name,
                options,
                default: None,
                description,
            },
            Parameter::String {
                name,
                default,
                description,
            } => Self {
                kind: STRING.to_string(),
                name,
                options: Vec::new(),
                default,
                description,
            },
            Parameter::Unknown { kind, name } => Self {
                kind,
                name,
                options: Vec::new(),
                default: None,
                description: None,
            },
        }
    }
}
