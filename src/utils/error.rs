use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankerError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Position {position} is out of range for a list of {len} entries")]
    OutOfRangeError { position: usize, len: usize },

    #[error("Poster lookup failed: {message}")]
    LookupError { message: String },

    #[error("Store operation failed: {message}")]
    StoreError { message: String },
}

pub type Result<T> = std::result::Result<T, RankerError>;
