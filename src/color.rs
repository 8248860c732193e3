//! RGB colors parsed from six-digit hex codes.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::ParseColorError;

/// An opaque 8-bit RGB color.
///
/// Serializes as a lowercase six-digit hex string without the leading `#`,
/// the same form the color catalog uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(Srgb<u8>);

impl Color {
    /// Pure black, the implicit second color in solid mode.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a color from its channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(Srgb::new(red, green, blue))
    }

    /// Parses a six-digit hex code such as `e6130b` or `#e6130b`.
    pub fn from_hex(code: &str) -> Result<Self, ParseColorError> {
        let digits = code.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return Err(ParseColorError::InvalidLength(code.to_string()));
        }
        // palette slices by byte offset and accepts a leading '+' per pair.
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(code.to_string()));
        }
        let rgb = Srgb::<u8>::from_str(digits)
            .map_err(|_| ParseColorError::InvalidDigit(code.to_string()))?;
        Ok(Self(rgb))
    }

    /// Formats the color as a lowercase six-digit hex code.
    pub fn to_hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.red(), self.green(), self.blue())
    }

    pub const fn red(&self) -> u8 {
        self.0.red
    }

    pub const fn green(&self) -> u8 {
        self.0.green
    }

    pub const fn blue(&self) -> u8 {
        self.0.blue
    }

    /// Returns the channels as an `[r, g, b]` array.
    pub const fn channels(&self) -> [u8; 3] {
        [self.0.red, self.0.green, self.0.blue]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// A named entry in the color catalog offered to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    /// The color itself, serialized as its hex code.
    pub code: Color,
    /// Display name shown next to the code.
    pub name: String,
}

impl ColorEntry {
    pub fn new(code: Color, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
        }
    }

    /// Label in the `name (#code)` form used by selection menus.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_codes() {
        let color = Color::from_hex("e6130b").unwrap();
        assert_eq!(color.channels(), [230, 19, 11]);

        let hashed: Color = "#262626".parse().unwrap();
        assert_eq!(hashed, Color::new(38, 38, 38));
    }

    #[test]
    fn accepts_uppercase_digits() {
        assert_eq!(Color::from_hex("FFFFFF").unwrap(), Color::WHITE);
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            Color::from_hex("fff"),
            Err(ParseColorError::InvalidLength("fff".into()))
        );
        assert!(matches!(
            Color::from_hex("1234567"),
            Err(ParseColorError::InvalidLength(_))
        ));
    }

    #[test]
    fn rejects_non_hex_digits() {
        assert_eq!(
            Color::from_hex("zz0000"),
            Err(ParseColorError::InvalidDigit("zz0000".into()))
        );
    }

    #[test]
    fn rejects_multibyte_characters() {
        // Six bytes, five chars.
        let code = "a\u{e9}bcd";
        assert_eq!(code.len(), 6);
        assert_eq!(
            Color::from_hex(code),
            Err(ParseColorError::InvalidDigit(code.into()))
        );

        let json = format!(r#"{{"code":"{code}","name":"x"}}"#);
        assert!(serde_json::from_str::<ColorEntry>(&json).is_err());
    }

    #[test]
    fn rejects_sign_prefixed_pairs() {
        assert_eq!(
            Color::from_hex("+f+f+f"),
            Err(ParseColorError::InvalidDigit("+f+f+f".into()))
        );
    }

    #[test]
    fn hex_formatting() {
        let color = Color::new(10, 128, 255);
        assert_eq!(color.to_hex(), "0a80ff");
        assert_eq!(color.to_string(), "#0a80ff");
    }

    #[test]
    fn serializes_as_hex_string() {
        let entry = ColorEntry::new(Color::new(230, 19, 11), "red");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"code":"e6130b","name":"red"}"#);

        let bad = serde_json::from_str::<ColorEntry>(r#"{"code":"nope","name":"x"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn entry_label() {
        let entry = ColorEntry::new(Color::new(38, 38, 38), "black");
        assert_eq!(entry.label(), "black (#262626)");
    }
}
