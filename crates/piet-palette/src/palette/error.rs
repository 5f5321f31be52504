//! Error type for hex color parsing.

use thiserror::Error;

/// Error returned when parsing a hex color string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Something other than a hex digit follows the optional '#'
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}
