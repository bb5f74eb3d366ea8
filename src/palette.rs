//! Named style and color escape sequences.
//!
//! The nine text styles are plain constants. The foreground and background
//! tables are derived once from the fixed base-color order: a base name at
//! index `i` gets foreground code `30 + i` and background code `40 + i`,
//! and its bright variant gets `90 + i` / `100 + i`. The bright variant of
//! BLACK is named GRAY. The tables are built on first access and never
//! mutated afterwards, so they are safe to read from any thread.

use crate::color::Color;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Resets all styling.
pub const RESET: Color = Color::from_static("\x1b[0m");
/// Bold or increased intensity.
pub const BOLD: Color = Color::from_static("\x1b[1m");
/// Faint or decreased intensity.
pub const DIM: Color = Color::from_static("\x1b[2m");
pub const ITALIC: Color = Color::from_static("\x1b[3m");
pub const UNDERLINED: Color = Color::from_static("\x1b[4m");
pub const BLINK: Color = Color::from_static("\x1b[5m");
/// Swaps foreground and background.
pub const REVERSE: Color = Color::from_static("\x1b[7m");
pub const HIDDEN: Color = Color::from_static("\x1b[8m");
pub const STRIKETHROUGH: Color = Color::from_static("\x1b[9m");

/// The eight base color names, in code order. BLACK is code offset 0,
/// WHITE is 7.
pub const BASE_NAMES: [&str; 8] = [
    "BLACK", "RED", "GREEN", "YELLOW", "BLUE", "MAGENTA", "CYAN", "WHITE",
];

/// Bright variant names, parallel to [`BASE_NAMES`].
const BRIGHT_NAMES: [&str; 8] = [
    "GRAY",
    "BRIGHT_RED",
    "BRIGHT_GREEN",
    "BRIGHT_YELLOW",
    "BRIGHT_BLUE",
    "BRIGHT_MAGENTA",
    "BRIGHT_CYAN",
    "BRIGHT_WHITE",
];

/// Builds one 16-entry table from a base offset and a bright offset.
fn build_table(base: u8, bright: u8) -> HashMap<&'static str, Color> {
    let mut table = HashMap::with_capacity(BASE_NAMES.len() * 2);
    for (i, name) in BASE_NAMES.iter().enumerate() {
        table.insert(*name, Color::from_code(base + i as u8));
        table.insert(BRIGHT_NAMES[i], Color::from_code(bright + i as u8));
    }
    table
}

/// Foreground colors by name: the eight base names plus GRAY and the
/// `BRIGHT_*` variants.
pub static FOREGROUND: LazyLock<HashMap<&'static str, Color>> =
    LazyLock::new(|| build_table(30, 90));

/// Background colors by name, same keys as [`FOREGROUND`].
pub static BACKGROUND: LazyLock<HashMap<&'static str, Color>> =
    LazyLock::new(|| build_table(40, 100));

/// Looks up a foreground color by its table name, e.g. `"RED"` or
/// `"BRIGHT_CYAN"`.
pub fn foreground(name: &str) -> Option<&'static Color> {
    FOREGROUND.get(name)
}

/// Looks up a background color by its table name.
pub fn background(name: &str) -> Option<&'static Color> {
    BACKGROUND.get(name)
}
