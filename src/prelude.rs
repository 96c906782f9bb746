//! Prelude module for common imports

pub use crate::pipeline::errors::{PipelineError, ValidationError};
pub use crate::pipeline::parameters::{Parameter, Parameters};
pub use crate::pipeline::pipeline_def::{PipelineBuilder, PipelineConfig};
pub use crate::pipeline::post::{PostActions, PostCondition};
pub use crate::pipeline::stage::{Stage, StageBuilder};
pub use crate::pipeline::types::Validate;
pub use crate::pipeline::Environment;

pub use crate::render::{JenkinsfileBuilder, build, build_strict};
