pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::adapters::presenter::{OutputFormat, DEFAULT_PRICE_PREFIX};
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_SOURCE: &str = "./restaurant_menu.csv";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "menu-etl")]
#[command(about = "Load a restaurant menu CSV and show it grouped by category")]
pub struct CliConfig {
    /// Local path or http(s) URL of the menu CSV
    #[arg(long, default_value = DEFAULT_SOURCE)]
    pub source: String,

    /// Output format: text, json or csv
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Write output to this file instead of stdout
    #[arg(long)]
    pub output: Option<String>,

    /// Show only category summaries
    #[arg(long)]
    pub collapsed: bool,

    /// Text shown before each price in text output
    #[arg(long, default_value = DEFAULT_PRICE_PREFIX)]
    pub price_prefix: String,

    /// Request timeout for remote sources
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    /// Single-line JSON output
    #[arg(long)]
    pub compact: bool,

    /// Path to a TOML configuration file; replaces the options above
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn source(&self) -> &str {
        &self.source
    }

    fn format(&self) -> &str {
        &self.format
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn collapsed(&self) -> bool {
        self.collapsed
    }

    fn price_prefix(&self) -> &str {
        &self.price_prefix
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn pretty(&self) -> bool {
        !self.compact
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_source("source", &self.source)?;
        self.format.parse::<OutputFormat>()?;
        if let Some(output) = &self.output {
            validation::validate_path("output", output)?;
        }
        validation::validate_range(
            "timeout_seconds",
            self.timeout_seconds,
            1,
            MAX_TIMEOUT_SECONDS,
        )?;
        Ok(())
    }
}
