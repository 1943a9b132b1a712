use thiserror::Error;

#[derive(Debug, Error)]
pub enum LadderError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Data error: {0}")]
    DataError(String),
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Config error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, LadderError>;

impl From<reqwest::Error> for LadderError {
    fn from(err: reqwest::Error) -> Self {
        LadderError::ApiError(err.to_string())
    }
}

impl From<serde_json::Error> for LadderError {
    fn from(err: serde_json::Error) -> Self {
        LadderError::DataError(err.to_string())
    }
}

impl From<std::io::Error> for LadderError {
    fn from(err: std::io::Error) -> Self {
        LadderError::StorageError(err.to_string())
    }
}
