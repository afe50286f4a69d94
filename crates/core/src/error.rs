//! Error types for accessors that require an `Ok` value.
//!
//! Failures inside a caller's `Result` stay the caller's own `E`; this type
//! only describes the act of demanding a success that was not there.

use thiserror::Error;

/// Failure raised when an `Ok` value was required but an error was found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Caller-described failure. Displays the message verbatim.
    #[error("{message}")]
    ExpectedOk { message: String },

    #[error("expected an Ok value, found an Error")]
    NotOk,
}

impl Error {
    /// Create an expected-ok error carrying the caller's description.
    #[inline]
    pub fn expected_ok(message: impl Into<String>) -> Self {
        Self::ExpectedOk {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;

    #[test]
    fn test_expected_ok_displays_message_verbatim() {
        let err = Error::expected_ok("config must be loaded first");
        assert_eq!(err.to_string(), "config must be loaded first");
    }

    #[test]
    fn test_expected_ok_accepts_empty_message() {
        assert_eq!(Error::expected_ok("").to_string(), "");
    }

    #[test]
    fn test_not_ok_display() {
        assert_eq!(
            Error::NotOk.to_string(),
            "expected an Ok value, found an Error"
        );
    }
}
