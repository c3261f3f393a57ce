use thiserror::Error;

#[derive(Error, Debug)]
pub enum CellBaseError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("CellBase returned HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String, body: String },

    #[error("Unknown endpoint: {group}/{resource}")]
    UnknownEndpoint { group: String, resource: String },

    #[error("Unexpected response: {message}")]
    UnexpectedResponse { message: String },
}

impl CellBaseError {
    /// Process exit code used by the command line binary.
    pub fn exit_code(&self) -> i32 {
        match self {
            CellBaseError::ConfigError { .. }
            | CellBaseError::InvalidConfigValueError { .. }
            | CellBaseError::UnknownEndpoint { .. } => 1,
            CellBaseError::HttpStatus { .. } | CellBaseError::ApiError(_) => 2,
            CellBaseError::UnexpectedResponse { .. } | CellBaseError::SerializationError(_) => 3,
            CellBaseError::IoError(_) => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, CellBaseError>;
