//! Tests for joining colors and wrapping/stripping text.

use ansi_tint::{clear, colorize, colorize_with, join_colors, rgb, BOLD, FOREGROUND, RESET};

// ============================================================================
// Join Tests
// ============================================================================

#[test]
fn join_duplicate_named_color_collapses() {
    let red = &FOREGROUND["RED"];
    let joined = join_colors([red, red]);
    assert_eq!(joined.as_str(), "\x1b[0m\x1b[31m");
}

#[test]
fn join_reset_discards_bold() {
    let red = &FOREGROUND["RED"];
    let joined = join_colors([&BOLD, &RESET, red]);
    assert_eq!(joined.as_str(), "\x1b[0m\x1b[31m");
}

#[test]
fn join_second_rgb_foreground_is_dropped() {
    let first = rgb(1, 2, 3).unwrap();
    let second = rgb(4, 5, 6).unwrap();
    let joined = join_colors([&first, &second]);
    assert!(joined.as_str().contains("\x1b[38;2;1;2;3m"));
    assert!(!joined.as_str().contains("\x1b[38;2;4;5;6m"));
}

#[test]
fn join_accepts_any_iterator_of_colors() {
    let colors = vec![BOLD, FOREGROUND["GREEN"].clone()];
    let joined = join_colors(&colors);
    assert_eq!(joined.as_str(), "\x1b[0m\x1b[1m\x1b[32m");
}

// ============================================================================
// Colorize Tests
// ============================================================================

#[test]
fn colorize_wraps_and_clear_recovers_the_text() {
    let red = &FOREGROUND["RED"];
    let styled = colorize("hello", red);
    assert_eq!(styled, "\x1b[31mhello\x1b[0m");
    assert_eq!(clear(&styled), "hello");
}

#[test]
fn colorize_reapplies_color_after_embedded_resets() {
    let red = &FOREGROUND["RED"];
    let styled = colorize("a\x1b[0mb", red);
    let expected = format!("{}\x1b[0m{}", colorize("a", red), colorize("b", red));
    assert_eq!(styled, expected);
}

#[test]
fn colorize_with_joined_color_applies_every_code() {
    let loud_red = join_colors([&BOLD, &FOREGROUND["RED"]]);
    let styled = colorize("hi", &loud_red);
    assert_eq!(styled, "\x1b[0m\x1b[1m\x1b[31mhi\x1b[0m");
}

#[test]
fn colorize_with_custom_end_chains_colors() {
    let red = &FOREGROUND["RED"];
    let blue = &FOREGROUND["BLUE"];
    assert_eq!(colorize_with("r", red, blue), "\x1b[31mr\x1b[34m");
}

// ============================================================================
// Clear Tests
// ============================================================================

#[test]
fn clear_strips_every_styling_sequence() {
    let input = "\x1b[1mbold\x1b[0m and \x1b[38;2;1;2;3mrgb\x1b[0m";
    assert_eq!(clear(input), "bold and rgb");
}

#[test]
fn clear_strips_bare_escape() {
    assert_eq!(clear("x\x1b[my"), "xy");
}

#[test]
fn clear_of_plain_text_is_identity() {
    assert_eq!(clear("no styling here"), "no styling here");
}
