//! Error types for the FinancialAI client

use thiserror::Error;

/// Result type alias for finai operations
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for client operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Message used for every connection-level failure, including request timeouts.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error or API unreachable";

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

impl Error {
    /// The API error behind this error, if any.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// Discriminant for [`ApiError`] so callers can match on the cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Non-2xx HTTP status
    Transport,
    /// Well-formed response with `success: false`
    Api,
    /// Connection failure, request timeout, or unreadable response
    Network,
    /// A polled job did not finish in time
    Timeout,
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API Error ({status}): {message}")]
    Transport { status: u16, message: String },

    #[error("{0}")]
    Api(String),

    #[error("{0}")]
    Network(String),

    #[error("Timeout waiting for job {job_id}")]
    JobTimeout { job_id: String },
}

impl ApiError {
    /// Which of the four failure causes this error represents.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Transport { .. } => ErrorKind::Transport,
            ApiError::Api(_) => ErrorKind::Api,
            ApiError::Network(_) => ErrorKind::Network,
            ApiError::JobTimeout { .. } => ErrorKind::Timeout,
        }
    }

    /// HTTP status code, present only for transport errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Network(format!("Invalid API response: {}", err))
        } else if let Some(status) = err.status() {
            ApiError::Transport {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("Unknown status")
                    .to_string(),
            }
        } else {
            ApiError::Network(NETWORK_ERROR_MESSAGE.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `finai init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("API URL not configured. Run `finai init` or pass --api-url.")]
    MissingBaseUrl,

    #[error("API token not configured. Run `finai init` or pass --token.")]
    MissingToken,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
