// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    // Transport errors
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    // Target responded, but not with a success code
    #[error("Unexpected status code: {0}")]
    Status(u16),

    // Configuration errors
    #[error("Invalid target URL: {0}")]
    InvalidTarget(String),

    #[error("Invalid profile configuration: {0}")]
    InvalidConfiguration(String),
}

impl SimError {
    /// Get error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            SimError::Connection(_) => "connection",
            SimError::Timeout(_) => "timeout",
            SimError::Status(_) => "status",
            SimError::InvalidTarget(_) | SimError::InvalidConfiguration(_) => "configuration",
        }
    }

    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            SimError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SimError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SimError::Timeout(err.to_string())
        } else if err.is_connect() {
            SimError::Connection(err.to_string())
        } else if let Some(status) = err.status() {
            SimError::Status(status.as_u16())
        } else {
            SimError::Connection(err.to_string())
        }
    }
}

// Result type alias for convenience
pub type SimResult<T> = Result<T, SimError>;
