/******************************************************************************
   Author: River Monitoring Authority
   Date: 16/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Error type for every fallible operation of the client
#[derive(Debug)]
pub enum AppError {
    /// Login or token refresh was rejected, or no refresh token is available
    Auth(String),
    /// Non-2xx response other than the single handled 401
    Http(StatusCode),
    /// Transport failure reported by the HTTP stack
    Network(reqwest::Error),
    /// JSON encoding or decoding failure
    Json(serde_json::Error),
    /// File system failure, e.g. while persisting tokens
    Io(std::io::Error),
    /// Response body did not match the expected model
    Deserialization(String),
    /// Invalid argument supplied by the caller
    InvalidInput(String),
}

impl AppError {
    /// HTTP status carried by the error, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Http(status) => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Whether the error means the user has to log in again
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, AppError::Auth(_))
            || matches!(self, AppError::Http(status) if *status == StatusCode::UNAUTHORIZED)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Auth(msg) => write!(f, "authentication error: {msg}"),
            AppError::Http(status) => write!(f, "http error: status {}", status.as_u16()),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            return AppError::Deserialization(error.to_string());
        }
        AppError::Network(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Json(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        AppError::Io(error)
    }
}
