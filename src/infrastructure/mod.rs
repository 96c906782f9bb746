//! Infrastructure layer
//!
//! Application settings and logging setup.

mod config;
mod logging;

pub use config::{Config, ENV_LOG_LEVEL, ENV_OUTPUT, ENV_STRICT};
pub use logging::init_logging;
