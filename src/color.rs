//! The `Color` string type and its validation gate.
//!
//! A `Color` wraps an ANSI SGR escape sequence (`ESC [ params m`). Values
//! built by this crate are well formed by construction; strings coming from
//! anywhere else go through [`Color::new`], which applies the same pattern
//! check as [`is_color`].

use crate::error::ColorError;
use regex::Regex;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Matches exactly one SGR escape sequence, anchored. Zero parameters
/// (`ESC[m`) is a valid sequence.
static COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^\x1b\[[0-9;]*m$").expect("color regex pattern is invalid")
});

/// Matches a non-empty run of SGR escape sequences, anchored. This is what
/// [`crate::compose::join_colors`] produces.
#[cfg(feature = "serde")]
static COLOR_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^(?:\x1b\[[0-9;]*m)+$").expect("color run regex pattern is invalid")
});

/// Returns true iff `value` is exactly one SGR escape sequence:
/// `ESC [` followed by digits and semicolons (possibly none), ending in `m`.
///
/// This is the trust boundary for strings of unknown origin. Note that the
/// check is strict: a concatenation of several sequences (as produced by
/// [`crate::compose::join_colors`]) and an RGBA code with a fractional
/// alpha field do not match.
pub fn is_color(value: &str) -> bool {
    COLOR_REGEX.is_match(value)
}

/// An ANSI SGR escape sequence, held as an immutable string.
///
/// Palette constants borrow `'static` literals; everything else owns its
/// buffer. Colors are plain values: cheap to clone, safe to share across
/// threads, and compared byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(Cow<'static, str>);

impl Color {
    /// Validates `code` and wraps it as a `Color`.
    ///
    /// # Errors
    /// Returns [`ColorError::InvalidColor`] if `code` does not match the
    /// `ESC[<digits-and-semicolons>m` pattern.
    pub fn new(code: impl Into<String>) -> Result<Self, ColorError> {
        let code = code.into();
        if is_color(&code) {
            Ok(Color(Cow::Owned(code)))
        } else {
            Err(ColorError::InvalidColor)
        }
    }

    /// Wraps a literal sequence without checking it. Only for the palette
    /// constants, which are spelled out in full in the source.
    pub(crate) const fn from_static(code: &'static str) -> Self {
        Color(Cow::Borrowed(code))
    }

    /// Builds the single-code sequence `ESC[<code>m`.
    pub(crate) fn from_code(code: u8) -> Self {
        Color(Cow::Owned(format!("\x1b[{code}m")))
    }

    /// Wraps a string the crate formatted itself.
    pub(crate) fn from_string_unchecked(code: String) -> Self {
        Color(Cow::Owned(code))
    }

    /// The raw escape sequence.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the color, returning the raw escape sequence.
    pub fn into_string(self) -> String {
        self.0.into_owned()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Color {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for Color {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::new(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::new(value)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::new(value)
    }
}

/// Serializes as the raw escape sequence string.
#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Deserializes from a string, re-validating on the way in. Accepts a run
/// of sequences so that joined colors round-trip; an RGBA code with a
/// fractional alpha field does not (its alpha parameter falls outside the
/// digits-and-semicolons grammar).
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        if COLOR_RUN_REGEX.is_match(&value) {
            Ok(Color(Cow::Owned(value)))
        } else {
            Err(serde::de::Error::custom(ColorError::InvalidColor))
        }
    }
}
