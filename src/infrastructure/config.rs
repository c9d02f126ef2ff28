use clap::Parser;

use crate::application::{SessionOptions, DEFAULT_DELIMITER};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Delimiter must not be empty")]
    EmptyDelimiter,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "denomfind")]
#[command(about = "Make an amount from a set of denominations, largest first")]
pub struct CliConfig {
    /// Denominations to use instead of prompting (e.g. "1,5,10,20")
    #[arg(short, long)]
    pub denominations: Option<String>,

    /// Amount to make instead of prompting
    #[arg(short, long)]
    pub amount: Option<String>,

    #[arg(long, default_value = DEFAULT_DELIMITER)]
    pub delimiter: String,

    #[arg(long, help = "Only print denominations with a non-zero count")]
    pub used_only: bool,

    #[arg(long, help = "Print search statistics after the result")]
    pub stats: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.delimiter.is_empty() {
            return Err(ConfigError::EmptyDelimiter);
        }
        Ok(())
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            delimiter: self.delimiter.clone(),
            used_only: self.used_only,
            show_stats: self.stats,
        }
    }
}
