// Infrastructure module: command line configuration and logging setup

pub mod config;
pub mod logger;

pub use config::{CliConfig, ConfigError};
