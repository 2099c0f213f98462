use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid query parameter '{parameter}': {reason}")]
    InvalidQueryError { parameter: String, reason: String },

    #[error("{resource} not found: {id}")]
    NotFoundError { resource: String, id: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Upstream returned HTTP {status}: {body}")]
    UpstreamStatusError { status: u16, body: String },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ShopError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ShopError::ConfigValidationError { .. }
            | ShopError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ShopError::HttpError(_) | ShopError::UpstreamStatusError { .. } => {
                ErrorCategory::Network
            }
            ShopError::SerializationError(_)
            | ShopError::CsvError(_)
            | ShopError::InvalidQueryError { .. }
            | ShopError::NotFoundError { .. }
            | ShopError::ValidationError { .. } => ErrorCategory::Data,
            ShopError::IoError(_) | ShopError::ServerError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ShopError::NotFoundError { .. } | ShopError::InvalidQueryError { .. } => {
                ErrorSeverity::Low
            }
            ShopError::HttpError(_) | ShopError::UpstreamStatusError { .. } => {
                ErrorSeverity::Medium
            }
            ShopError::ConfigValidationError { .. }
            | ShopError::InvalidConfigValueError { .. }
            | ShopError::SerializationError(_)
            | ShopError::CsvError(_)
            | ShopError::ValidationError { .. } => ErrorSeverity::High,
            ShopError::IoError(_) | ShopError::ServerError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ShopError::ConfigValidationError { field, .. }
            | ShopError::InvalidConfigValueError { field, .. } => {
                format!("Check the '{}' setting in your flags or config file", field)
            }
            ShopError::InvalidQueryError { parameter, .. } => {
                format!("Fix the '{}' query parameter and retry", parameter)
            }
            ShopError::NotFoundError { .. } => "Check the identifier and retry".to_string(),
            ShopError::HttpError(_) | ShopError::UpstreamStatusError { .. } => {
                "Make sure the server is running and reachable, then retry".to_string()
            }
            ShopError::SerializationError(_)
            | ShopError::CsvError(_)
            | ShopError::ValidationError { .. } => {
                "Fix the product data in the seed file".to_string()
            }
            ShopError::IoError(_) => "Check file paths and permissions".to_string(),
            ShopError::ServerError { .. } => {
                "Check that the port is free and the host address is valid".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Network => format!("Could not talk to the shop API: {}", self),
            ErrorCategory::Data => format!("Bad catalog data: {}", self),
            ErrorCategory::System => format!("System failure: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShopError>;
