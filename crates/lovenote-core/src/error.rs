//! Error types for Lovenote

use thiserror::Error;

/// Main error type for Lovenote operations
#[derive(Error, Debug)]
pub enum CardError {
    /// Reading a content file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Content file is not valid JSON for a card
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Content parsed but breaks a card rule (empty gallery, duplicate ids, ...)
    #[error("Invalid content: {0}")]
    InvalidContent(String),

    /// A flip was requested for a card id the gallery does not contain
    #[error("Unknown card: {0}")]
    UnknownCard(u32),

    /// The system clipboard rejected the write
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Timing scale factor is not a positive finite number
    #[error("Invalid timing factor: {0}")]
    InvalidTiming(f64),
}

/// Result type alias for Lovenote operations
pub type CardResult<T> = Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CardError::UnknownCard(7);
        assert_eq!(err.to_string(), "Unknown card: 7");

        let err = CardError::InvalidContent("gallery has no cards".to_string());
        assert_eq!(err.to_string(), "Invalid content: gallery has no cards");
    }

    #[test]
    fn test_parse_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: CardError = json_err.into();
        assert!(matches!(err, CardError::Parse(_)));
    }
}
