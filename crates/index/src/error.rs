//! Index Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction. Every failure of [`load`](crate::load)
//! surfaces as [`ErrorKind::Parse`], with the actual cause as a child.

use derive_more::{Display, Error};

/// An index error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for index operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The index could not be loaded. Always the outermost error of a load.
    #[display("failed to parse repository index")]
    Parse,
    /// The XML itself is broken (unbalanced tags, bad attributes, unknown entities).
    #[display("malformed XML: {_0}")]
    MalformedXml(#[error(not(source))] String),
    /// The document ended before a root element was found.
    #[display("missing root element")]
    MissingRoot,
    /// Reading the underlying byte stream failed.
    #[display("I/O error")]
    Io,
    /// A field was found but could not be decoded.
    #[display("failed to parse field '{field}', found value: {value}")]
    InvalidField {
        /// The element or attribute that failed to decode.
        field: &'static str,
        /// The raw value found in the document.
        value: String,
    },
    /// A scalar value does not match its text encoding.
    #[display("invalid {codec} value: {value}")]
    Format {
        /// The codec that rejected the value.
        codec: &'static str,
        /// The rejected input.
        value: String,
    },
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // The document is either valid or it's not; only reading can flake.
        matches!(self, ErrorKind::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kind_display() {
        assert_eq!(ErrorKind::Parse.to_string(), "failed to parse repository index");
        assert_eq!(
            ErrorKind::Format { codec: "hex", value: "zz".to_string() }.to_string(),
            "invalid hex value: zz"
        );
        assert_eq!(
            ErrorKind::InvalidField { field: "versioncode", value: "abc".to_string() }.to_string(),
            "failed to parse field 'versioncode', found value: abc"
        );
    }

    #[test]
    fn error_kind_retryable() {
        assert!(ErrorKind::Io.is_retryable());
        assert!(!ErrorKind::Parse.is_retryable());
        assert!(!ErrorKind::MissingRoot.is_retryable());
    }
}
