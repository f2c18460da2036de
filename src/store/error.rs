//! Error types for worksheet store operations.

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for worksheet store operations.
///
/// Store failures are fatal to a session: there is no retry and no rollback
/// of rows already appended, so an error here may leave the spreadsheet
/// partially updated for the day. That is an accepted limitation of the
/// append-only design.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Transport-level failure reaching the spreadsheet service.
    #[error("connection error: {message}")]
    ConnectionError { message: String },

    /// The spreadsheet service answered, but rejected the call.
    #[error("worksheet API error: {message}")]
    ApiError { message: String },

    /// Configuration or initialization error.
    #[error("configuration error: {message}")]
    ConfigurationError { message: String },

    /// Internal/unexpected errors.
    #[error("internal error: {message}")]
    InternalError { message: String },
}

impl StoreError {
    /// Create a connection error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::ConnectionError {
            message: message.into(),
        }
    }

    /// Create an API error.
    pub fn api(message: impl Into<String>) -> Self {
        Self::ApiError {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }
}

#[cfg(feature = "sheets-store")]
impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            StoreError::connection(err.to_string())
        } else {
            StoreError::api(err.to_string())
        }
    }
}
