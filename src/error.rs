//! Error types for the EasyBroker client
//!
//! Every public API returns `Result<T, Error>`. The HTTP and pagination
//! layers never swallow errors; the binary decides how to report them.

use thiserror::Error;

/// The main error type for the client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request failed due to status {status}")]
    HttpStatus { status: u16 },

    #[error("Retries exceeded")]
    RetriesExceeded { max_retries: u32 },

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("Failed to parse response: {message}")]
    Parse { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Transport,
    HttpStatus,
    RetriesExceeded,
    Parse,
    Io,
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16) -> Self {
        Self::HttpStatus { status }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config { .. }
            | Error::MissingConfigField { .. }
            | Error::InvalidUrl(_)
            | Error::Yaml(_) => ErrorKind::Config,
            Error::Transport(_) => ErrorKind::Transport,
            Error::HttpStatus { .. } => ErrorKind::HttpStatus,
            Error::RetriesExceeded { .. } => ErrorKind::RetriesExceeded,
            Error::Parse { .. } => ErrorKind::Parse,
            Error::Io(_) => ErrorKind::Io,
        }
    }

    /// Status code carried by an `HttpStatus` error
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string())
    }
}

/// Result type alias for the client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_field("api_key");
        assert_eq!(err.to_string(), "Missing required config field: api_key");

        let err = Error::http_status(400);
        assert_eq!(err.to_string(), "Request failed due to status 400");

        let err = Error::RetriesExceeded { max_retries: 3 };
        assert_eq!(err.to_string(), "Retries exceeded");
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(Error::http_status(404).kind(), ErrorKind::HttpStatus);
        assert_eq!(
            Error::RetriesExceeded { max_retries: 3 }.kind(),
            ErrorKind::RetriesExceeded
        );
        assert_eq!(Error::parse("bad").kind(), ErrorKind::Parse);
        assert_eq!(Error::missing_field("api_key").kind(), ErrorKind::Config);
    }

    #[test]
    fn test_status_only_on_http_status() {
        assert_eq!(Error::http_status(401).status(), Some(401));
        assert_eq!(Error::RetriesExceeded { max_retries: 3 }.status(), None);
        assert_eq!(Error::parse("bad").status(), None);
    }

    #[test]
    fn test_json_error_becomes_parse() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().starts_with("Failed to parse response"));
    }
}
