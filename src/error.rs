/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Errors returned by the RadiusDesk client
#[derive(Debug)]
pub enum AppError {
    /// The backend could not be reached (DNS, refused connection, timeout)
    Connectivity(String),
    /// Credentials were rejected or the session is no longer valid
    Authentication(String),
    /// Caller input was rejected before any request was sent
    Validation(String),
    /// The referenced resource does not exist
    NotFound(String),
    /// Any other non-success response from the backend
    Backend {
        /// HTTP status of the response
        status: StatusCode,
        /// Message extracted from the response body
        message: String,
    },
    /// The response body did not have the expected shape
    Protocol(String),
    /// The client could not be configured (bad base URL, transport setup)
    Config(String),
}

/// Result alias used across the crate
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Returns true if this error means the session must be re-established
    #[must_use]
    pub fn is_authentication(&self) -> bool {
        matches!(self, AppError::Authentication(_))
    }

    /// Returns true if this error was raised without contacting the backend
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Connectivity(msg) => write!(f, "connectivity error: {msg}"),
            AppError::Authentication(msg) => write!(f, "authentication error: {msg}"),
            AppError::Validation(msg) => write!(f, "validation error: {msg}"),
            AppError::NotFound(msg) => write!(f, "not found: {msg}"),
            AppError::Backend { status, message } => {
                write!(f, "backend error ({status}): {message}")
            }
            AppError::Protocol(msg) => write!(f, "protocol error: {msg}"),
            AppError::Config(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            AppError::Config(e.to_string())
        } else if e.is_decode() {
            AppError::Protocol(e.to_string())
        } else {
            // connect, timeout, request and body errors all mean the exchange never completed
            AppError::Connectivity(e.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Protocol(e.to_string())
    }
}
