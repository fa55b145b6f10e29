//! `#RRGGBB` color parsing.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when parsing a hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color '{input}' needs six hex digits")]
    TooShort { input: String },
    #[error("color '{input}' contains a non-hex digit")]
    InvalidDigit { input: String },
}

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the `#` is optional).
    ///
    /// Only the first six digits are read; anything after them, such as an
    /// alpha pair, is ignored.
    ///
    /// # Examples
    /// ```
    /// use cs2_menu_text::color::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#FF8000").unwrap(), Rgb::new(255, 128, 0));
    /// assert_eq!(Rgb::from_hex("ff8000").unwrap(), Rgb::new(255, 128, 0));
    /// assert!(Rgb::from_hex("#FF80").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.trim_start_matches('#');
        let prefix: Vec<char> = digits.chars().take(6).collect();

        if prefix.len() < 6 {
            return Err(ColorError::TooShort {
                input: hex.to_string(),
            });
        }
        if !prefix.iter().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit {
                input: hex.to_string(),
            });
        }

        // The first six chars are ASCII, so byte offsets match char offsets.
        let channel = |at: usize| {
            u8::from_str_radix(&digits[at..at + 2], 16).map_err(|_| ColorError::InvalidDigit {
                input: hex.to_string(),
            })
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_lowercase_and_prefix() {
        assert_eq!(Rgb::from_hex("#ffa500").unwrap(), Rgb::new(255, 165, 0));
        assert_eq!(Rgb::from_hex("##000000").unwrap(), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_from_hex_ignores_alpha_suffix() {
        assert_eq!(Rgb::from_hex("#0A0B0CFF").unwrap(), Rgb::new(10, 11, 12));
    }

    #[test]
    fn test_from_hex_too_short() {
        assert_eq!(
            Rgb::from_hex("#FFF"),
            Err(ColorError::TooShort {
                input: "#FFF".to_string()
            })
        );
        assert!(Rgb::from_hex("").is_err());
    }

    #[test]
    fn test_from_hex_invalid_digit() {
        assert!(matches!(
            Rgb::from_hex("#GG0000"),
            Err(ColorError::InvalidDigit { .. })
        ));
        // `from_str_radix` alone would accept a sign.
        assert!(Rgb::from_hex("+F0000").is_err());
    }

    #[test]
    fn test_from_hex_multibyte_input() {
        assert!(Rgb::from_hex("#ÿÿÿÿÿÿ").is_err());
    }

    #[test]
    fn test_display_round_trips_uppercase() {
        let color: Rgb = "#ffa500".parse().unwrap();
        assert_eq!(color.to_string(), "#FFA500");
    }

    #[test]
    fn test_deserialize_from_toml_string() {
        #[derive(Deserialize)]
        struct Theme {
            accent: Rgb,
        }

        let theme: Theme = toml::from_str("accent = \"#336699\"").unwrap();
        assert_eq!(theme.accent, Rgb::new(0x33, 0x66, 0x99));
        assert!(toml::from_str::<Theme>("accent = \"blue\"").is_err());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ColorError::TooShort {
                input: "#FF".to_string()
            }
            .to_string(),
            "color '#FF' needs six hex digits"
        );
    }
}
