use thiserror::Error;

/// Application-wide error types for Janus.
#[derive(Error, Debug)]
pub enum AppError {
    /// Vendor API returned a non-success status or an undecodable body.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Network/connection error.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Request timed out.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// Required environment variable is absent.
    #[error("Missing credential: {0} is not set")]
    MissingCredential(&'static str),

    /// JSON serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Invalid runtime configuration.
    #[error("Config error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Returns true if this error came from talking to a vendor API
    /// (as opposed to local I/O or configuration).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AppError::HttpError(_) | AppError::NetworkError(_) | AppError::Timeout(_)
        )
    }
}
