use std::path::PathBuf;

use thiserror::Error;

/// Failure of a request against the storefront API.
///
/// Cloneable so it can live inside `QueryState` and component props.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },

    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, FetchError::Status { status: 401, .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please enter your {0}")]
    MissingField(&'static str),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Errors raised by the native static host.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid path: {0}")]
    InvalidPath(PathBuf),

    #[error("Missing index.html in {0}")]
    MissingIndex(PathBuf),
}

pub type Result<T> = std::result::Result<T, AppError>;
