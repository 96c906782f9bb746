//! Pipeline domain types and logic

// Make submodules public
pub mod errors;
pub mod ordered;
pub mod parameters;
pub mod pipeline_def;
pub mod post;
pub mod stage;
pub mod types;

use once_cell::sync::Lazy;
use regex::Regex;

// Re-export public types from submodules
pub use errors::{PipelineError, ValidationError};
pub use ordered::OrderedMap;
pub use parameters::{Parameter, Parameters};
pub use pipeline_def::{PipelineBuilder, PipelineConfig};
pub use post::{PostActions, PostCondition};
pub use stage::{Stage, StageBuilder};
pub use types::Validate;

/// Environment variables of the `environment { ... }` section.
///
/// Entries render in insertion order, one `KEY = "value"` line each.
pub type Environment = OrderedMap<String>;

static ENV_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid environment key pattern"));

impl Validate for Environment {
    type Error = ValidationError;

    fn validate(&self) -> Result<(), Self::Error> {
        match self.keys().find(|key| !ENV_KEY.is_match(key)) {
            Some(key) => Err(ValidationError::InvalidEnvironmentKey {
                key: key.to_string(),
            }),
            None => Ok(()),
        }
    }
}
