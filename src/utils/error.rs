use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Failed to load menu CSV: {message}")]
    LoadFailure { source_name: String, message: String },

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Load,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl MenuError {
    pub fn load_failure(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::LoadFailure {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            MenuError::LoadFailure { .. } | MenuError::HttpError(_) => ErrorCategory::Load,
            MenuError::ConfigError { .. } | MenuError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            MenuError::CsvError(_) | MenuError::IoError(_) | MenuError::SerializationError(_) => {
                ErrorCategory::Output
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 來源可能只是暫時無法取得
            ErrorCategory::Load => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的狀態訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            MenuError::LoadFailure { message, .. } => format!("Failed to load menu CSV: {}", message),
            MenuError::HttpError(e) => format!("Failed to load menu CSV: {}", e),
            MenuError::ConfigError { message } => format!("Invalid configuration: {}", message),
            MenuError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration for {}: {}", field, reason)
            }
            MenuError::CsvError(e) => format!("Could not write CSV output: {}", e),
            MenuError::IoError(e) => format!("Could not write output: {}", e),
            MenuError::SerializationError(e) => format!("Could not write JSON output: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            MenuError::LoadFailure { source_name, .. } => format!(
                "Check that '{}' exists and is reachable, then try again",
                source_name
            ),
            MenuError::HttpError(_) => "Check the network connection and the source URL".to_string(),
            MenuError::ConfigError { .. } | MenuError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again; see --help for accepted values"
                    .to_string()
            }
            MenuError::CsvError(_) | MenuError::IoError(_) | MenuError::SerializationError(_) => {
                "Check that the output path is writable".to_string()
            }
        }
    }

    /// 程式結束碼：設定錯誤 1、載入失敗 2、輸出失敗 3
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Load => 2,
            ErrorCategory::Output => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_failure_message_includes_cause() {
        let err = MenuError::load_failure("./restaurant_menu.csv", "HTTP 404 - Not Found");
        assert_eq!(err.to_string(), "Failed to load menu CSV: HTTP 404 - Not Found");
        assert_eq!(err.category(), ErrorCategory::Load);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.exit_code(), 2);
        assert!(err.recovery_suggestion().contains("./restaurant_menu.csv"));
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = MenuError::InvalidConfigValueError {
            field: "output.format".to_string(),
            value: "xml".to_string(),
            reason: "Unsupported format".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
        assert!(err.user_friendly_message().contains("output.format"));
    }

    #[test]
    fn test_io_error_is_output_category() {
        let err: MenuError = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.category(), ErrorCategory::Output);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
    }
}
