use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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

    #[error("Unexpected response from {endpoint}: {message}")]
    ResponseError { endpoint: String, message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code: 1 for bad input, 2 for a failed analysis or
    /// unreachable backend, 3 for local I/O.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::ApiError(_) | AppError::ResponseError { .. } => ErrorCategory::Network,
            AppError::ConfigError { .. }
            | AppError::ConfigValidationError { .. }
            | AppError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            AppError::SerializationError(_) | AppError::ValidationError { .. } => {
                ErrorCategory::Data
            }
            AppError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.severity().exit_code()
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::ApiError(e) if e.is_connect() => {
                "Could not reach the analysis server".to_string()
            }
            AppError::ApiError(e) if e.is_timeout() => {
                "The analysis server did not answer in time".to_string()
            }
            AppError::ApiError(_) => "The request to the analysis server failed".to_string(),
            AppError::ResponseError { endpoint, .. } => {
                format!("The server at {} sent an unexpected response", endpoint)
            }
            AppError::IoError(e) => format!("File system error: {}", e),
            AppError::SerializationError(_) => "Could not read the server response".to_string(),
            AppError::InvalidConfigValueError { field, reason, .. } => {
                format!("'{}' is invalid: {}", field, reason)
            }
            AppError::ConfigValidationError { field, message } => {
                format!("'{}' is invalid: {}", field, message)
            }
            AppError::ConfigError { message } | AppError::ValidationError { message } => {
                message.clone()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check that the server is running and that --page points at it"
            }
            ErrorCategory::Configuration => "Check the CLI flags and the profile TOML file",
            ErrorCategory::Data => "Check the birth details and try again",
            ErrorCategory::System => "Check file permissions and the output path",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
