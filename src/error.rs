//! Validation errors for colors and channel values.

use std::fmt;

/// An RGB color channel, used to report which channel failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Red => f.write_str("red"),
            Channel::Green => f.write_str("green"),
            Channel::Blue => f.write_str("blue"),
        }
    }
}

/// Errors that can occur while building or parsing colors.
///
/// All failures are immediate and final; there is no partial result and
/// nothing to retry. Channels are checked red, then green, then blue, so
/// when several are out of range the red error is reported first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// A string does not match the `ESC[<digits-and-semicolons>m` pattern.
    #[error("invalid color")]
    InvalidColor,

    /// A color channel is outside `[0, 255]`.
    #[error("invalid {0} value")]
    InvalidChannel(Channel),

    /// An alpha value is outside `[0, 1]` (or is NaN).
    #[error("invalid alpha value")]
    InvalidAlpha,

    /// A hex color string is missing its leading `#`, has a length other
    /// than 3 or 6 after the `#`, or contains non-hex digits.
    #[error("invalid hex color")]
    InvalidHexColor,
}
