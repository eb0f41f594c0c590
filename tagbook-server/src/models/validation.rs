//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required part of the request is absent
    Missing { field: &'static str },

    /// Payload exceeds the accepted size
    TooLarge { field: &'static str, max_bytes: usize },

    /// Value doesn't parse as the expected type
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Value parses but falls outside the representable range
    OutOfRange { field: &'static str },

    /// Request body or query string could not be decoded
    Malformed { what: &'static str, detail: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} missing", field),
            Self::TooLarge { field, max_bytes } => {
                write!(f, "{} exceed {}MByte", field, max_bytes / 1_000_000)
            }
            Self::InvalidFormat { field, reason } => write!(f, "invalid {}: {}", field, reason),
            Self::OutOfRange { field } => write!(f, "{} out of range", field),
            Self::Malformed { what, detail } => write!(f, "malformed {}: {}", what, detail),
        }
    }
}

impl std::error::Error for ValidationError {}
