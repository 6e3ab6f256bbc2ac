use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowmailError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigParseError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Sheet error: {message}")]
    SheetError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Config,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ShowmailError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ShowmailError::IoError(_) | ShowmailError::SerializationError(_) => ErrorCategory::Io,
            ShowmailError::ConfigParseError { .. }
            | ShowmailError::InvalidConfigValueError { .. }
            | ShowmailError::MissingConfigError { .. } => ErrorCategory::Config,
            ShowmailError::SheetError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ShowmailError::IoError(_) => ErrorSeverity::Critical,
            ShowmailError::SerializationError(_) => ErrorSeverity::High,
            ShowmailError::ConfigParseError { .. } => ErrorSeverity::High,
            ShowmailError::InvalidConfigValueError { .. }
            | ShowmailError::MissingConfigError { .. } => ErrorSeverity::Medium,
            ShowmailError::SheetError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ShowmailError::IoError(e) => format!("Could not read or write a file: {}", e),
            ShowmailError::SerializationError(e) => format!("Could not serialize output: {}", e),
            ShowmailError::ConfigParseError { field, message } => {
                format!("The configuration file is not valid ({}): {}", field, message)
            }
            ShowmailError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => {
                format!("'{}' is not a usable value for {}: {}", value, field, reason)
            }
            ShowmailError::MissingConfigError { field } => {
                format!("Required setting '{}' was not provided", field)
            }
            ShowmailError::SheetError { message } => {
                format!("The episode sheet could not be used: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Io => "Check file paths and permissions".to_string(),
            ErrorCategory::Config => {
                "Check the profile TOML against the documented fields".to_string()
            }
            ErrorCategory::Input => {
                "Run sheet_check against the sheet file to see which fields are missing".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ShowmailError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_mapping() {
        let err = ShowmailError::MissingConfigError {
            field: "show.name".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.category(), ErrorCategory::Config);
    }

    #[test]
    fn test_user_friendly_message_names_field() {
        let err = ShowmailError::InvalidConfigValueError {
            field: "site.base_url".to_string(),
            value: "not-a-url".to_string(),
            reason: "Invalid URL format".to_string(),
        };
        assert!(err.user_friendly_message().contains("site.base_url"));
    }
}
