//! Tests for 24-bit color construction and hex decoding.

use ansi_tint::{
    hex_to_rgb, is_color, rgb, rgb_background, rgb_from_triple, rgba, rgba_background, Channel,
    ColorError,
};

// ============================================================================
// RGB Tests
// ============================================================================

#[test]
fn rgb_round_trips_through_validation() {
    for (r, g, b) in [(0, 0, 0), (255, 255, 255), (17, 0, 200), (1, 2, 3)] {
        assert!(is_color(rgb(r, g, b).unwrap().as_str()));
        assert!(is_color(rgb_background(r, g, b).unwrap().as_str()));
    }
}

#[test]
fn rgb_errors_name_the_first_bad_channel() {
    assert_eq!(rgb(300, 0, 0), Err(ColorError::InvalidChannel(Channel::Red)));
    assert_eq!(rgb(-1, 0, 0), Err(ColorError::InvalidChannel(Channel::Red)));
    assert_eq!(
        rgb(0, 300, 300),
        Err(ColorError::InvalidChannel(Channel::Green))
    );
    assert_eq!(
        rgb_background(0, 0, 256),
        Err(ColorError::InvalidChannel(Channel::Blue))
    );
}

#[test]
fn rgb_error_messages_match_the_documented_wording() {
    let err = rgb(300, 0, 0).unwrap_err();
    assert_eq!(err.to_string(), "invalid red value");
}

// ============================================================================
// RGBA Tests
// ============================================================================

#[test]
fn rgba_embeds_alpha_as_a_fourth_field() {
    assert_eq!(rgba(10, 20, 30, 0.5).unwrap().as_str(), "\x1b[38;2;10;20;30;0.5m");
    assert_eq!(
        rgba_background(10, 20, 30, 1.0).unwrap().as_str(),
        "\x1b[48;2;10;20;30;1m"
    );
}

#[test]
fn rgba_alpha_boundaries_are_inclusive() {
    assert!(rgba(0, 0, 0, 0.0).is_ok());
    assert!(rgba(0, 0, 0, 1.0).is_ok());
    assert_eq!(rgba(0, 0, 0, 1.5), Err(ColorError::InvalidAlpha));
    assert_eq!(rgba(0, 0, 0, -0.5), Err(ColorError::InvalidAlpha));
}

// ============================================================================
// Hex Tests
// ============================================================================

#[test]
fn hex_shorthand_and_full_forms_decode() {
    assert_eq!(hex_to_rgb("#fff").unwrap(), [255, 255, 255]);
    assert_eq!(hex_to_rgb("#0f0f0f").unwrap(), [15, 15, 15]);
}

#[test]
fn hex_rejects_missing_hash_and_bad_lengths() {
    assert_eq!(hex_to_rgb("fff"), Err(ColorError::InvalidHexColor));
    assert_eq!(hex_to_rgb("#ff"), Err(ColorError::InvalidHexColor));
}

#[test]
fn hex_decodes_into_a_usable_triple() {
    let triple = hex_to_rgb("#336699").unwrap().map(i32::from);
    let color = rgb_from_triple(triple).unwrap();
    assert_eq!(color.as_str(), "\x1b[38;2;51;102;153m");
}
