pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{loader_for, presenter_for, OutputFormat, PresenterSettings};
pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use core::{build_menu, engine::MenuEngine};
pub use domain::model::{CategoryGroup, MenuItem, MenuModel, MenuSummary, Record};
pub use utils::error::{MenuError, Result};
