//! ANSI terminal color and style escape sequences.
//!
//! Produces and manipulates SGR (Select Graphic Rendition) escape
//! sequences: named text styles, the 16 named foreground/background
//! colors, 24-bit RGB and RGBA codes, hex decoding, safe composition of
//! several codes into one, colorize-with-reset text wrapping, and
//! stripping of styling from text. The crate only builds and parses
//! strings; it never writes to a terminal and does no capability
//! detection.
//!
//! ```
//! use ansi_tint::{clear, colorize, join_colors, rgb, BOLD, FOREGROUND};
//!
//! let red = &FOREGROUND["RED"];
//! let styled = colorize("error", red);
//! assert_eq!(styled, "\x1b[31merror\x1b[0m");
//! assert_eq!(clear(&styled), "error");
//!
//! let loud = join_colors([&BOLD, red]);
//! assert_eq!(loud.as_str(), "\x1b[0m\x1b[1m\x1b[31m");
//!
//! let orange = rgb(255, 128, 0).unwrap();
//! assert_eq!(orange.as_str(), "\x1b[38;2;255;128;0m");
//! ```

mod color;
mod compose;
mod error;
mod palette;
mod rgb;

pub use color::{is_color, Color};
pub use compose::{clear, colorize, colorize_with, join_colors};
pub use error::{Channel, ColorError};
pub use palette::{
    background, foreground, BACKGROUND, BASE_NAMES, BLINK, BOLD, DIM, FOREGROUND, HIDDEN, ITALIC,
    RESET, REVERSE, STRIKETHROUGH, UNDERLINED,
};
pub use rgb::{
    hex_to_rgb, rgb, rgb_background, rgb_from_triple, rgba, rgba_background,
    RGB_BACKGROUND_PREFIX, RGB_FOREGROUND_PREFIX,
};
