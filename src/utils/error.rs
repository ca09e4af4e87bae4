use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyllableError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    #[error("Invalid input format: {message}")]
    InvalidInputFormat { message: String },

    #[error("Invalid record at index {index}: {message}")]
    InvalidRecordFormat { index: usize, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl SyllableError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SyllableError::IoError(_) | SyllableError::InputNotFound { .. } => ErrorCategory::Io,
            SyllableError::SerializationError(_)
            | SyllableError::InvalidInputFormat { .. }
            | SyllableError::InvalidRecordFormat { .. } => ErrorCategory::Data,
            SyllableError::ConfigError { .. }
            | SyllableError::ConfigValidationError { .. }
            | SyllableError::InvalidConfigValueError { .. }
            | SyllableError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 寫入中途失敗可能留下不完整的檔案
            SyllableError::IoError(_) => ErrorSeverity::Critical,
            SyllableError::InputNotFound { .. }
            | SyllableError::SerializationError(_)
            | SyllableError::InvalidInputFormat { .. }
            | SyllableError::InvalidRecordFormat { .. }
            | SyllableError::ConfigError { .. }
            | SyllableError::ConfigValidationError { .. }
            | SyllableError::InvalidConfigValueError { .. }
            | SyllableError::MissingConfigError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SyllableError::IoError(_) => {
                "Check file permissions and free disk space; restore from the .backup file if the input was modified"
            }
            SyllableError::InputNotFound { .. } => {
                "Make sure the input path points to an existing names JSON file"
            }
            SyllableError::SerializationError(_) => {
                "Make sure the input is valid JSON (an array of objects with a \"name\" field)"
            }
            SyllableError::InvalidInputFormat { .. } => {
                "The names file must contain a top-level JSON array"
            }
            SyllableError::InvalidRecordFormat { .. } => {
                "Every entry of the top-level array must be a JSON object whose \"name\" is a string or null"
            }
            SyllableError::ConfigError { .. }
            | SyllableError::ConfigValidationError { .. }
            | SyllableError::InvalidConfigValueError { .. }
            | SyllableError::MissingConfigError { .. } => {
                "Review the command line flags or the TOML job file"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SyllableError::InputNotFound { path } => format!("File '{}' not found.", path),
            SyllableError::SerializationError(e) => format!("Invalid JSON: {}", e),
            SyllableError::InvalidRecordFormat { index, message } => {
                format!("Entry #{} in the names file is invalid: {}.", index, message)
            }
            other => other.to_string(),
        }
    }

    /// 依嚴重程度決定程式結束代碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SyllableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_not_found_message() {
        let error = SyllableError::InputNotFound {
            path: "names.json".to_string(),
        };
        assert_eq!(error.to_string(), "Input file not found: names.json");
        assert_eq!(error.user_friendly_message(), "File 'names.json' not found.");
        assert_eq!(error.category(), ErrorCategory::Io);
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_json_error_is_data_category() {
        let json_err = serde_json::from_str::<serde_json::Value>("[{").unwrap_err();
        let error = SyllableError::from(json_err);
        assert_eq!(error.category(), ErrorCategory::Data);
        assert_eq!(error.severity(), ErrorSeverity::High);
        assert!(error.user_friendly_message().starts_with("Invalid JSON:"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let error = SyllableError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(error.severity(), ErrorSeverity::Critical);
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn test_config_value_error_display() {
        let error = SyllableError::InvalidConfigValueError {
            field: "progress_interval".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value '0' for 'progress_interval': Value must be at least 1"
        );
        assert_eq!(error.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_record_format_message_names_the_problem() {
        let error = SyllableError::InvalidRecordFormat {
            index: 3,
            message: "\"name\" must be a string, found a number".to_string(),
        };
        assert_eq!(
            error.user_friendly_message(),
            "Entry #3 in the names file is invalid: \"name\" must be a string, found a number."
        );
        assert_eq!(error.category(), ErrorCategory::Data);
    }

    #[test]
    fn test_every_error_exits_non_zero() {
        let errors = vec![
            SyllableError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk")),
            SyllableError::from(serde_json::from_str::<serde_json::Value>("{").unwrap_err()),
            SyllableError::InputNotFound {
                path: "names.json".to_string(),
            },
            SyllableError::InvalidInputFormat {
                message: "not an array".to_string(),
            },
            SyllableError::InvalidRecordFormat {
                index: 0,
                message: "not an object".to_string(),
            },
            SyllableError::ConfigError {
                message: "bad".to_string(),
            },
            SyllableError::ConfigValidationError {
                field: "input_file".to_string(),
                message: "empty".to_string(),
            },
            SyllableError::InvalidConfigValueError {
                field: "min_accuracy".to_string(),
                value: "2".to_string(),
                reason: "out of range".to_string(),
            },
            SyllableError::MissingConfigError {
                field: "input".to_string(),
            },
        ];

        for error in &errors {
            assert!(error.exit_code() > 0, "{} exited with 0", error);
        }
    }
}
