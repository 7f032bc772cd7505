use thiserror::Error;

#[derive(Error, Debug)]
pub enum SurveyError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("{platform} returned {status} for {url}")]
    HttpStatusError {
        platform: String,
        status: u16,
        url: String,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

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

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Remote,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SurveyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SurveyError::ApiError(_) | SurveyError::HttpStatusError { .. } => ErrorCategory::Remote,
            SurveyError::CsvError(_)
            | SurveyError::SerializationError(_)
            | SurveyError::ProcessingError { .. } => ErrorCategory::Data,
            SurveyError::IoError(_) => ErrorCategory::System,
            SurveyError::ConfigError { .. }
            | SurveyError::ConfigValidationError { .. }
            | SurveyError::InvalidConfigValueError { .. }
            | SurveyError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Remote => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Data | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SurveyError::ApiError(e) if e.is_timeout() => {
                "The job board did not answer in time".to_string()
            }
            SurveyError::ApiError(e) if e.is_decode() => {
                "The job board answered with an unexpected payload".to_string()
            }
            SurveyError::ApiError(_) => "Could not reach the job board".to_string(),
            SurveyError::HttpStatusError {
                platform, status, ..
            } => format!("{platform} rejected the request (HTTP {status})"),
            SurveyError::MissingConfigError { field } => {
                format!("Required setting '{field}' is not set")
            }
            SurveyError::ConfigError { .. }
            | SurveyError::ConfigValidationError { .. }
            | SurveyError::InvalidConfigValueError { .. } => format!("Bad configuration: {self}"),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SurveyError::ApiError(_) => "Check the network connection and try again",
            SurveyError::HttpStatusError { status: 401 | 403, .. } => {
                "Check the application key (SJ_SECRET_KEY) and the user agent"
            }
            SurveyError::HttpStatusError { status: 429, .. } => {
                "The job board is rate limiting requests, wait a bit before retrying"
            }
            SurveyError::HttpStatusError { .. } => {
                "Check the endpoint and query parameters in the configuration"
            }
            SurveyError::MissingConfigError { .. } => {
                "Set the value in the config file, on the command line or in the environment"
            }
            SurveyError::ConfigError { .. }
            | SurveyError::ConfigValidationError { .. }
            | SurveyError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and run again"
            }
            SurveyError::IoError(_) => "Check file paths and permissions",
            SurveyError::CsvError(_)
            | SurveyError::SerializationError(_)
            | SurveyError::ProcessingError { .. } => "Run with --verbose and report the output",
        }
    }
}

pub type Result<T> = std::result::Result<T, SurveyError>;
