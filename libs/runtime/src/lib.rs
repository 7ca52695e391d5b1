//! Process-level plumbing shared by the user search binaries:
//! layered configuration loading and `tracing` subscriber setup.

pub mod config;
pub mod logging;

pub use config::{default_logging_config, AppConfig, CliArgs, LoggingConfig, Section};
