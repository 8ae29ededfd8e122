//! Error types for the 2048 board engine.

use std::fmt;

/// A violated engine invariant.
///
/// The core has no recoverable runtime errors (no I/O, no external
/// resources); the only failures are precondition violations, which are
/// programming errors and must fail fast rather than silently continue.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl InvariantViolation {
    /// Create a new invariant violation with the given description.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Result type for fallible board operations.
pub type BoardResult<T> = Result<T, InvariantViolation>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_message() {
        let err = InvariantViolation::new("spawn requested on a full board");
        let text = err.to_string();
        assert!(text.contains("Invariant violation"));
        assert!(text.contains("full board"));
    }
}
