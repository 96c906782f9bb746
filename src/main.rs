//! pipegen - generate declarative Jenkinsfiles
//!
//! ## Commands
//!
//! - `pipegen generate` - Render a YAML/JSON pipeline config into a Jenkinsfile
//! - `pipegen check` - Validate a pipeline config
//! - `pipegen sample` - Print the bundled Flask pipeline
//! - `pipegen completions` - Generate shell completions
//!
//! ## Quick Start
//!
//! ```bash
//! # Print a Jenkinsfile
//! pipegen generate pipeline.yaml
//!
//! # Validate first, then write the file
//! pipegen generate pipeline.yaml --strict -o Jenkinsfile
//!
//! # Start from the sample
//! pipegen sample --format yaml > pipeline.yaml
//! ```
//!
//! ## Environment
//!
//! - `PIPEGEN_LOG_LEVEL` - log level (default `info`), `RUST_LOG` wins
//! - `PIPEGEN_OUTPUT` - default output file for `generate`
//! - `PIPEGEN_STRICT` - validate before generating (`1`, `true`, `yes`)

use pipegen::infrastructure::{Config, init_logging};
use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    let config = Config::from_env();
    init_logging(&config.log_level);

    match cli::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            tracing::debug!("{:?}", e);
            ExitCode::FAILURE
        }
    }
}
