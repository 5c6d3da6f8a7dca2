//! Error codes for translator diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the translator phase.

use std::fmt;

/// Error codes for all translator diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E1xxx: Configuration errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Configuration Errors (E1xxx)
    /// Header mapping value is not a header file name
    E1001,
    /// Malformed header mapping line
    E1002,
    /// Header mapping file could not be read
    E1003,
}

impl ErrorCode {
    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
