//! Error codes for floorplan diagnostics.
//!
//! Codes are grouped by phase:
//! - `E0xx` - Lexer errors
//! - `E1xx` - Parser errors
//! - `E2xx` - Validation errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Lexer Errors (E0xx)
    // =========================================================================
    /// Unterminated string literal.
    ///
    /// A label string was opened with a quote but never closed on the same line.
    E001,

    /// Unexpected character.
    E002,

    /// Invalid escape sequence.
    ///
    /// Valid escapes are: `\"`, `\\`, `\n`, `\t`.
    E003,

    /// Unterminated block comment.
    ///
    /// A `/*` comment has no closing `*/`.
    E004,

    // =========================================================================
    // Parser Errors (E1xx)
    // =========================================================================
    /// Unexpected token.
    E100,

    /// Incomplete input.
    ///
    /// The input ended before a complete construct was parsed.
    E101,

    // =========================================================================
    // Validation Errors (E2xx)
    // =========================================================================
    /// Unknown wall direction.
    ///
    /// Wall directions are `top`, `right`, `bottom` and `left`, both in wall
    /// lists and in connection endpoints.
    E200,

    /// Duplicate wall direction.
    ///
    /// A room's wall list names the same direction twice.
    E201,

    /// Duplicate room name.
    ///
    /// Room names are unique across the whole document, sub-rooms included.
    E202,

    /// Door position out of range.
    ///
    /// `at N%` requires `0 <= N <= 100`.
    E203,

    /// Unknown door swing.
    ///
    /// `swing:` accepts `left` or `right`.
    E204,

    /// Non-positive room size.
    ///
    /// Both width and height must be greater than zero.
    E205,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E004 => "E004",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
            ErrorCode::E204 => "E204",
            ErrorCode::E205 => "E205",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "unterminated string literal",
            ErrorCode::E002 => "unexpected character",
            ErrorCode::E003 => "invalid escape sequence",
            ErrorCode::E004 => "unterminated block comment",
            ErrorCode::E100 => "unexpected token",
            ErrorCode::E101 => "incomplete input",
            ErrorCode::E200 => "unknown wall direction",
            ErrorCode::E201 => "duplicate wall direction",
            ErrorCode::E202 => "duplicate room name",
            ErrorCode::E203 => "door position out of range",
            ErrorCode::E204 => "unknown door swing",
            ErrorCode::E205 => "non-positive room size",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
