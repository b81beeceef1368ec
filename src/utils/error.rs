use thiserror::Error;

#[derive(Error, Debug)]
pub enum SalaryError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("HTTP status {status} returned by {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("Malformed response from {provider}: {message}")]
    MalformedResponse { provider: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SalaryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SalaryError::ApiError(_) | SalaryError::HttpStatusError { .. } => {
                ErrorCategory::Network
            }
            SalaryError::MalformedResponse { .. } | SalaryError::SerializationError(_) => {
                ErrorCategory::Data
            }
            SalaryError::ConfigError { .. }
            | SalaryError::MissingConfigError { .. }
            | SalaryError::InvalidConfigValueError { .. }
            | SalaryError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            SalaryError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 程序結束碼：網路 2、資料或設定 1、系統 3
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SalaryError::ApiError(_) => "Check your network connection and the API endpoint",
            SalaryError::HttpStatusError { status, .. } if *status == 401 || *status == 403 => {
                "Check that SECRET_KEY holds a valid SuperJob application key"
            }
            SalaryError::HttpStatusError { .. } => {
                "The job-listing API rejected the request; try again later"
            }
            SalaryError::MalformedResponse { .. } => {
                "The API response format may have changed; verify the endpoint"
            }
            SalaryError::SerializationError(_) => "Report could not be serialized",
            SalaryError::MissingConfigError { .. } => {
                "Provide the missing value in the config file, the CLI or .env"
            }
            SalaryError::ConfigError { .. }
            | SalaryError::InvalidConfigValueError { .. }
            | SalaryError::ConfigValidationError { .. } => "Fix the configuration and rerun",
            SalaryError::IoError(_) => "Check file paths and permissions",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Failed to fetch vacancies: {}", self),
            ErrorCategory::Data => format!("Unexpected data from job-listing API: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SalaryError>;
