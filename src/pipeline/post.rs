//! Post-condition types for pipeline definition
//!
//! The `post { ... }` section maps a condition name to the actions Jenkins
//! runs after all stages. Conditions are kept as free-form strings in
//! [`PostActions`] so rendering never fails; [`PostCondition`] lists the
//! names Jenkins accepts and is used by validation.

#![allow(clippy::must_use_candidate)]

use super::Validate;
use super::errors::ValidationError;
use super::ordered::OrderedMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Post actions keyed by condition name, in insertion order
pub type PostActions = OrderedMap<Vec<String>>;

/// Conditions Jenkins accepts inside a `post` block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostCondition {
    /// Always execute regardless of result
    Always,
    /// Execute when result differs from previous run
    Changed,
    /// Execute when a failed or unstable build becomes successful
    Fixed,
    /// Execute when a successful build becomes failed or unstable
    Regression,
    /// Execute when the build was aborted
    Aborted,
    /// Execute only on failure
    Failure,
    /// Execute only on success
    Success,
    /// Execute when the build is unstable
    Unstable,
    /// Execute when the build is not successful
    Unsuccessful,
    /// Execute after every other condition
    Cleanup,
}

impl PostCondition {
    /// All conditions, in the order Jenkins evaluates them
    pub const ALL: [Self; 10] = [
        Self::Always,
        Self::Changed,
        Self::Fixed,
        Self::Regression,
        Self::Aborted,
        Self::Failure,
        Self::Success,
        Self::Unstable,
        Self::Unsuccessful,
        Self::Cleanup,
    ];

    /// Returns the keyword used in the Jenkinsfile
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Changed => "changed",
            Self::Fixed => "fixed",
            Self::Regression => "regression",
            Self::Aborted => "aborted",
            Self::Failure => "failure",
            Self::Success => "success",
            Self::Unstable => "unstable",
            Self::Unsuccessful => "unsuccessful",
            Self::Cleanup => "cleanup",
        }
    }
}

impl FromStr for PostCondition {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownPostCondition {
                condition: s.to_string(),
            })
    }
}

impl fmt::Display for PostCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Validate for PostActions {
    type Error = ValidationError;

    fn validate(&self) -> Result<(), Self::Error> {
        for condition in self.keys() {
            condition.parse::<PostCondition>()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_condition_parse() {
        assert_eq!("always".parse::<PostCondition>(), Ok(PostCondition::Always));
        assert_eq!("cleanup".parse::<PostCondition>(), Ok(PostCondition::Cleanup));
        assert!("Always".parse::<PostCondition>().is_err());
    }

    #[test]
    fn test_post_condition_display_round_trips() {
        for condition in PostCondition::ALL {
            assert_eq!(condition.to_string().parse::<PostCondition>(), Ok(condition));
        }
    }

    #[test]
    fn test_post_actions_validate() {
        let post = PostActions::new()
            .with("always", vec!["cleanWs()".to_string()])
            .with("success", vec!["echo 'ok'".to_string()]);
        assert!(post.validate().is_ok());

        let post = post.with("sometimes", Vec::<String>::new());
        assert_eq!(
            post.validate(),
            Err(ValidationError::UnknownPostCondition {
                condition: "sometimes".to_string()
            })
        );
    }
}
