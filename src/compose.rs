//! Composing colors and applying them to text.
//!
//! `join_colors` folds a sequence of codes into one, collapsing resets and
//! dropping duplicate or conflicting 24-bit codes. `colorize` wraps text so
//! it always ends in a reset, and `clear` strips all SGR sequences back
//! out.

use crate::color::Color;
use crate::palette::RESET;
use crate::rgb::{RGB_BACKGROUND_PREFIX, RGB_FOREGROUND_PREFIX};
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// Matches any SGR escape sequence anywhere in a string, zero-parameter
/// `ESC[m` included.
static SGR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"\x1b\[[0-9;]*m").expect("SGR regex pattern is invalid")
});

/// Combines color codes left to right into one sequence.
///
/// Rules, applied per element:
/// - [`RESET`] throws away everything accumulated so far and starts over
///   from a bare reset;
/// - a code already present in the accumulator is skipped;
/// - only the first 24-bit foreground code and the first 24-bit background
///   code are kept; later ones are dropped, even after a reset.
///
/// The result always begins with [`RESET`]; an empty input yields exactly
/// [`RESET`]. The returned value is a run of sequences, so the strict
/// single-sequence predicate [`crate::is_color`] does not accept it.
pub fn join_colors<'a, I>(colors: I) -> Color
where
    I: IntoIterator<Item = &'a Color>,
{
    let mut foreground = false;
    let mut background = false;
    let mut result = String::from(RESET.as_str());

    for color in colors {
        let code = color.as_str();
        if code == RESET.as_str() {
            trace!("reset encountered, discarding accumulated codes");
            result.truncate(RESET.as_str().len());
            continue;
        }
        if result.contains(code) {
            continue;
        }
        if code.starts_with(RGB_FOREGROUND_PREFIX) {
            if foreground {
                trace!(code, "dropping conflicting RGB foreground code");
                continue;
            }
            foreground = true;
        }
        if code.starts_with(RGB_BACKGROUND_PREFIX) {
            if background {
                trace!(code, "dropping conflicting RGB background code");
                continue;
            }
            background = true;
        }
        result.push_str(code);
    }

    Color::from_string_unchecked(result)
}

/// Wraps `text` in `color`, ending with [`RESET`].
pub fn colorize(text: &str, color: &Color) -> String {
    colorize_with(text, color, &RESET)
}

/// Wraps `text` in `color`, ending with an explicit `end` code.
///
/// When `text` already contains reset sequences, each segment between them
/// is wrapped independently and the resets are kept as separators, so an
/// embedded reset cannot cancel `color` for the rest of the string.
pub fn colorize_with(text: &str, color: &Color, end: &Color) -> String {
    let reset_color = RESET;
    let reset = reset_color.as_str();
    if text.contains(reset) {
        return text
            .split(reset)
            .map(|segment| colorize_with(segment, color, end))
            .collect::<Vec<_>>()
            .join(reset);
    }
    format!("{color}{text}{end}")
}

/// Removes every SGR escape sequence from `text`, including the
/// zero-parameter `ESC[m`. Non-SGR escape sequences are left alone.
pub fn clear(text: &str) -> String {
    SGR_REGEX.replace_all(text, "").into_owned()
}
