use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsightError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    ApiStatusError { status: String, body: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config file error: {0}")]
    ConfigFileError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Workspace error: {message}")]
    WorkspaceError { message: String },

    #[error("Processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Workspace,
    Network,
    Output,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl InsightError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            InsightError::ApiError(_) | InsightError::ApiStatusError { .. } => {
                ErrorCategory::Network
            }
            InsightError::IoError(_) => ErrorCategory::Output,
            InsightError::ConfigFileError(_)
            | InsightError::ConfigError { .. }
            | InsightError::MissingConfigError { .. }
            | InsightError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            InsightError::WorkspaceError { .. } => ErrorCategory::Workspace,
            InsightError::SerializationError(_) | InsightError::ProcessingError { .. } => {
                ErrorCategory::Processing
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Config => ErrorSeverity::Medium,
            ErrorCategory::Workspace => ErrorSeverity::High,
            ErrorCategory::Network => ErrorSeverity::High,
            ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            InsightError::ApiError(_) => {
                "Check network connectivity and the API endpoint URL".to_string()
            }
            InsightError::ApiStatusError { status, .. } => format!(
                "The analysis service rejected the request ({}); verify the API key and model name",
                status
            ),
            InsightError::IoError(_) => {
                "Check that the output path exists and is writable".to_string()
            }
            InsightError::SerializationError(_) => {
                "The service reply was not valid JSON; retry the run".to_string()
            }
            InsightError::ConfigFileError(_) => {
                "Fix the TOML syntax in the config file".to_string()
            }
            InsightError::ConfigError { .. } => "Review the configuration values".to_string(),
            InsightError::MissingConfigError { field } => {
                format!("Provide a value for '{}' (flag, config file, or environment)", field)
            }
            InsightError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value passed for '{}'", field)
            }
            InsightError::WorkspaceError { .. } => {
                "Point the tool at an existing workspace directory".to_string()
            }
            InsightError::ProcessingError { .. } => {
                "The model reply could not be processed; retry the run".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Config => format!("Configuration problem: {}", self),
            ErrorCategory::Workspace => format!("Workspace problem: {}", self),
            ErrorCategory::Network => format!("Analysis request failed: {}", self),
            ErrorCategory::Output => format!("Could not write the report: {}", self),
            ErrorCategory::Processing => format!("Could not process the reply: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, InsightError>;
