//! Custom error types for translator operations

use thiserror::Error;

/// Translator-related errors
#[derive(Error, Debug)]
pub enum TranslatorError {
    /// Service answered with an error envelope
    #[error("{code}: {message}")]
    Service {
        code: i64,
        message: String,
    },

    /// Success response did not hold exactly one result
    #[error("unknown number of responses: {count}")]
    ResponseShape {
        count: usize,
    },

    /// The single result carried an empty translation list
    #[error("response held no translations")]
    EmptyTranslations,

    /// Body matched neither the success shape nor the error envelope
    #[error("unknown answer")]
    UnknownAnswer,

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
    },

    /// Network error raised by a non-reqwest transport
    #[error("Network error: {message}")]
    NetworkError {
        message: String,
    },

    /// Base URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl TranslatorError {
    /// Whether the error came from the remote service rather than the transport
    pub fn is_service(&self) -> bool {
        matches!(self, TranslatorError::Service { .. })
    }
}

/// Result type for translator operations
pub type Result<T> = std::result::Result<T, TranslatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_display() {
        let err = TranslatorError::Service {
            code: 400,
            message: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "400: bad");
        assert!(err.is_service());
    }

    #[test]
    fn test_unknown_answer_display() {
        assert_eq!(TranslatorError::UnknownAnswer.to_string(), "unknown answer");
        assert!(!TranslatorError::UnknownAnswer.is_service());
    }
}
