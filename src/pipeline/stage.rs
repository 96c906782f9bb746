//! Stage types for pipeline definition
//!
//! This module defines stage types and their builder pattern.

#![allow(clippy::must_use_candidate, clippy::return_self_not_must_use)]

use super::Validate;
use super::errors::ValidationError;
use crate::render::quote;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A stage in a pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    /// Stage name
    pub name: String,

    /// Step fragments, already valid Jenkins DSL, emitted verbatim
    #[serde(default)]
    pub steps: Vec<String>,

    /// Optional guard condition, e.g. `branch 'main'`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,

    /// Reserved; does not affect rendering
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub parallel: bool,
}

impl Stage {
    /// Creates a new stage
    pub fn new<I, S>(name: impl Into<String>, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            steps: steps.into_iter().map(Into::into).collect(),
            when: None,
            parallel: false,
        }
    }

    /// Creates a stage builder
    pub fn builder(name: impl Into<String>) -> StageBuilder {
        StageBuilder::new(name)
    }

    /// Sets when condition for this stage
    pub fn with_when(mut self, when: impl Into<String>) -> Self {
        self.when = Some(when.into());
        self
    }

    /// Sets the reserved parallel flag
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Returns true if the stage has a guard condition
    pub fn has_when(&self) -> bool {
        self.when.is_some()
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stage({}): {} steps", self.name, self.steps.len())
    }
}

/// Validates a list of stages; names are checked, steps are opaque.
impl Validate for [Stage] {
    type Error = ValidationError;

    fn validate(&self) -> Result<(), Self::Error> {
        for (index, stage) in self.iter().enumerate() {
            if stage.name.trim().is_empty() {
                return Err(ValidationError::EmptyStageName { index });
            }
        }
        Ok(())
    }
}

/// Builder for creating stages
#[derive(Debug, Clone)]
pub struct StageBuilder {
    stage: Stage,
}

impl StageBuilder {
    /// Creates a new stage builder
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            stage: Stage::new(name, Vec::<String>::new()),
        }
    }

    /// Adds a step fragment
    pub fn step(mut self, step: impl Into<String>) -> Self {
        self.stage.steps.push(step.into());
        self
    }

    /// Adds a `sh '<command>'` step
    pub fn sh(self, command: &str) -> Self {
        self.step(format!("sh {}", quote(command)))
    }

    /// Adds an `echo '<message>'` step
    pub fn echo(self, message: &str) -> Self {
        self.step(format!("echo {}", quote(message)))
    }

    /// Sets when condition
    pub fn when(mut self, when: impl Into<String>) -> Self {
        self.stage.when = Some(when.into());
        self
    }

    /// Sets the reserved parallel flag
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.stage.parallel = parallel;
        self
    }

    /// Builds the stage
    pub fn build(self) -> Stage {
        self.stage
    }
}
