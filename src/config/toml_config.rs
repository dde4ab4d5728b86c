use crate::adapters::presenter::{OutputFormat, DEFAULT_PRICE_PREFIX};
use crate::config::{DEFAULT_SOURCE, DEFAULT_TIMEOUT_SECONDS, MAX_TIMEOUT_SECONDS};
use crate::core::ConfigProvider;
use crate::utils::error::{MenuError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_location")]
    pub location: String,
    pub timeout_seconds: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
            timeout_seconds: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub path: Option<String>,
    pub collapsed: Option<bool>,
    pub price_prefix: Option<String>,
    pub pretty: Option<bool>,
}

fn default_location() -> String {
    DEFAULT_SOURCE.to_string()
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| MenuError::ConfigError {
            message: format!(
                "Cannot read config file {}: {}",
                path.as_ref().display(),
                e
            ),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MenuError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MENU_URL})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MenuError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn source(&self) -> &str {
        &self.source.location
    }

    fn format(&self) -> &str {
        self.output.format.as_deref().unwrap_or("text")
    }

    fn output_path(&self) -> Option<&str> {
        self.output.path.as_deref()
    }

    fn collapsed(&self) -> bool {
        self.output.collapsed.unwrap_or(false)
    }

    fn price_prefix(&self) -> &str {
        self.output
            .price_prefix
            .as_deref()
            .unwrap_or(DEFAULT_PRICE_PREFIX)
    }

    fn timeout_seconds(&self) -> u64 {
        self.source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    fn pretty(&self) -> bool {
        self.output.pretty.unwrap_or(true)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_source("source.location", &self.source.location)?;

        if let Some(format) = &self.output.format {
            format.parse::<OutputFormat>()?;
        }

        if let Some(path) = &self.output.path {
            validation::validate_path("output.path", path)?;
        }

        validation::validate_range(
            "source.timeout_seconds",
            self.timeout_seconds(),
            1,
            MAX_TIMEOUT_SECONDS,
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
[source]
location = "https://example.com/restaurant_menu.csv"
timeout_seconds = 10

[output]
format = "json"
path = "out/menu.json"
collapsed = true
price_prefix = "$"
pretty = false
"#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.source(), "https://example.com/restaurant_menu.csv");
        assert_eq!(config.timeout_seconds(), 10);
        assert_eq!(config.format(), "json");
        assert_eq!(config.output_path(), Some("out/menu.json"));
        assert!(config.collapsed());
        assert_eq!(config.price_prefix(), "$");
        assert!(!config.pretty());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.source(), DEFAULT_SOURCE);
        assert_eq!(config.format(), "text");
        assert_eq!(config.price_prefix(), "Rs ");
        assert_eq!(config.timeout_seconds(), DEFAULT_TIMEOUT_SECONDS);
        assert!(config.pretty());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("MENU_ETL_TEST_HOST", "menu.example.com");
        let config = TomlConfig::from_toml_str(
            r#"
[source]
location = "https://${MENU_ETL_TEST_HOST}/menu.csv"
"#,
        )
        .unwrap();

        assert_eq!(config.source(), "https://menu.example.com/menu.csv");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let config = TomlConfig::from_toml_str(
            r#"
[source]
location = "${MENU_ETL_TEST_UNSET_VAR}/menu.csv"
"#,
        )
        .unwrap();

        assert_eq!(config.source(), "${MENU_ETL_TEST_UNSET_VAR}/menu.csv");
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let config = TomlConfig::from_toml_str("[output]\nformat = \"pdf\"\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[source]\ntimeout_seconds = 0\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[source]\nlocation = \"https://\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_config_file_is_config_error() {
        let err = TomlConfig::from_file("/nonexistent/menu.toml").unwrap_err();

        assert!(matches!(err, MenuError::ConfigError { .. }));
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("/nonexistent/menu.toml"));
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[source\nlocation = 1").unwrap_err();
        assert!(matches!(err, MenuError::ConfigError { .. }));
    }
}
