//! # Pipegen - declarative Jenkins pipelines from structured configuration
//!
//! Pipegen renders a [`PipelineConfig`] (agent, parameters, environment,
//! stages and post actions) into the text of a declarative `Jenkinsfile`.
//! Configurations can be built with the typed builders or loaded from YAML
//! and JSON files.
//!
//! ## Quick Start
//!
//! ```
//! use pipegen::prelude::*;
//!
//! let config = PipelineConfig::builder()
//!     .parameter(Parameter::choice("ENV", ["dev", "prod"]).with_description("target env"))
//!     .env("DOCKER_IMAGE", "flask-app")
//!     .stage(Stage::new("Checkout", ["checkout scm"]))
//!     .stage(Stage::new("Deploy", ["sh 'make deploy'"]).with_when("branch 'main'"))
//!     .post("always", ["cleanWs()"])
//!     .build();
//!
//! let jenkinsfile = pipegen::build(&config);
//! assert!(jenkinsfile.starts_with("pipeline {"));
//! assert!(jenkinsfile.contains("stage('Deploy')"));
//! ```
//!
//! ## Features
//!
//! - **Pure rendering**: [`build`] is a total function of the configuration
//! - **Deterministic output**: environment and post sections keep insertion order
//! - **Strict mode**: [`build_strict`] validates names, parameter kinds and
//!   post conditions before rendering
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <https://www.apache.org/licenses/LICENSE-2.0>)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or <https://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod infrastructure;
pub mod pipeline;
pub mod render;
pub mod samples;

// Prelude module for common imports
pub mod prelude;

// Re-export commonly used types
pub use infrastructure::{Config, init_logging};
pub use pipeline::{
    Environment, OrderedMap, Parameter, Parameters, PipelineBuilder, PipelineConfig,
    PipelineError, PostActions, PostCondition, Stage, StageBuilder, Validate, ValidationError,
};
pub use render::{Block, JenkinsfileBuilder, build, build_strict};

/// Version of the pipegen crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
