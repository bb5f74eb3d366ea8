//! 24-bit RGB and RGBA color codes, and hex color decoding.
//!
//! RGB codes use the `38;2;r;g;b` (foreground) and `48;2;r;g;b`
//! (background) SGR forms. RGBA codes append the alpha as an extra
//! semicolon-separated field; that field is not part of any ANSI standard
//! and most terminals will ignore or mishandle it.

use crate::color::Color;
use crate::error::{Channel, ColorError};

/// Start of a 24-bit foreground color sequence.
pub const RGB_FOREGROUND_PREFIX: &str = "\x1b[38;2;";
/// Start of a 24-bit background color sequence.
pub const RGB_BACKGROUND_PREFIX: &str = "\x1b[48;2;";

/// Checks one channel, reporting which one was out of range.
fn channel(value: i32, which: Channel) -> Result<u8, ColorError> {
    u8::try_from(value).map_err(|_| ColorError::InvalidChannel(which))
}

/// Checks all three channels, red first, then green, then blue.
fn channels(red: i32, green: i32, blue: i32) -> Result<[u8; 3], ColorError> {
    Ok([
        channel(red, Channel::Red)?,
        channel(green, Channel::Green)?,
        channel(blue, Channel::Blue)?,
    ])
}

fn alpha_field(alpha: f64) -> Result<f64, ColorError> {
    // The range check also rejects NaN, which would otherwise end up
    // formatted into the escape sequence.
    if (0.0..=1.0).contains(&alpha) {
        Ok(alpha)
    } else {
        Err(ColorError::InvalidAlpha)
    }
}

/// Builds a 24-bit foreground color: `ESC[38;2;<r>;<g>;<b>m`.
///
/// # Errors
/// Returns [`ColorError::InvalidChannel`] naming the first channel outside
/// `[0, 255]`.
pub fn rgb(red: i32, green: i32, blue: i32) -> Result<Color, ColorError> {
    let [r, g, b] = channels(red, green, blue)?;
    Ok(Color::from_string_unchecked(format!(
        "{RGB_FOREGROUND_PREFIX}{r};{g};{b}m"
    )))
}

/// Builds a 24-bit background color: `ESC[48;2;<r>;<g>;<b>m`.
///
/// # Errors
/// Returns [`ColorError::InvalidChannel`] naming the first channel outside
/// `[0, 255]`.
pub fn rgb_background(red: i32, green: i32, blue: i32) -> Result<Color, ColorError> {
    let [r, g, b] = channels(red, green, blue)?;
    Ok(Color::from_string_unchecked(format!(
        "{RGB_BACKGROUND_PREFIX}{r};{g};{b}m"
    )))
}

/// [`rgb`] taking the channels as one triple, e.g. straight from
/// [`hex_to_rgb`].
///
/// # Errors
/// Same as [`rgb`].
pub fn rgb_from_triple(channels: [i32; 3]) -> Result<Color, ColorError> {
    let [red, green, blue] = channels;
    rgb(red, green, blue)
}

/// Builds a foreground color with a non-standard alpha field:
/// `ESC[38;2;<r>;<g>;<b>;<alpha>m`.
///
/// Alpha must lie in `[0, 1]` inclusive and is formatted with its shortest
/// decimal form (`0`, `1`, `0.5`). A fractional alpha puts a `.` in the
/// parameter list, so the result does not satisfy [`crate::is_color`].
///
/// # Errors
/// Returns [`ColorError::InvalidChannel`] for an out-of-range channel or
/// [`ColorError::InvalidAlpha`] for an out-of-range alpha.
pub fn rgba(red: i32, green: i32, blue: i32, alpha: f64) -> Result<Color, ColorError> {
    let [r, g, b] = channels(red, green, blue)?;
    let a = alpha_field(alpha)?;
    Ok(Color::from_string_unchecked(format!(
        "{RGB_FOREGROUND_PREFIX}{r};{g};{b};{a}m"
    )))
}

/// [`rgba`] for the background: `ESC[48;2;<r>;<g>;<b>;<alpha>m`.
///
/// # Errors
/// Same as [`rgba`].
pub fn rgba_background(red: i32, green: i32, blue: i32, alpha: f64) -> Result<Color, ColorError> {
    let [r, g, b] = channels(red, green, blue)?;
    let a = alpha_field(alpha)?;
    Ok(Color::from_string_unchecked(format!(
        "{RGB_BACKGROUND_PREFIX}{r};{g};{b};{a}m"
    )))
}

/// Decodes `#rgb` or `#rrggbb` into its three channels.
///
/// Three-digit shorthand doubles each digit (`#f0a` is `#ff00aa`). Unlike
/// the length check, digit validity is checked strictly: a correctly sized
/// string with non-hex characters is rejected rather than producing junk
/// channels.
///
/// # Errors
/// Returns [`ColorError::InvalidHexColor`] when the leading `#` is
/// missing, the digit count is not 3 or 6, or a character is not a hex
/// digit.
pub fn hex_to_rgb(hex: &str) -> Result<[u8; 3], ColorError> {
    let digits = hex.strip_prefix('#').ok_or(ColorError::InvalidHexColor)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHexColor);
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return Err(ColorError::InvalidHexColor),
    };

    let parse = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&expanded[range], 16).map_err(|_| ColorError::InvalidHexColor)
    };
    Ok([parse(0..2)?, parse(2..4)?, parse(4..6)?])
}
