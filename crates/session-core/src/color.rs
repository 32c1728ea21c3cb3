//! 24-bit RGB colors and the `#RRGGBB` literal form used in the session file.
//!
//! Style-slot lines store colors as `#` followed by six hexadecimal digits,
//! for example `00=#2e3436`. Parsing is strict about shape (exactly six hex
//! digits, case-insensitive) and rendering is always lowercase:
//!
//! ```rust
//! use session_core::Color;
//!
//! let color: Color = "#2E3436".parse().unwrap();
//! assert_eq!(color, Color::rgb(0x2e, 0x34, 0x36));
//! assert_eq!(color.to_string(), "#2e3436");
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error produced when a `#RRGGBB` color literal cannot be decoded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The value is not `#` followed by exactly six characters.
    #[error("color value '{0}' is not of the form #RRGGBB")]
    Format(String),
    /// The six-character run contains a non-hexadecimal digit.
    #[error("color value '{0}' contains a non-hexadecimal digit")]
    Digit(String),
}

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Creates a color from its three channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(hex) = s.strip_prefix('#') else {
            return Err(ColorParseError::Format(s.to_string()));
        };
        if hex.len() != 6 {
            return Err(ColorParseError::Format(s.to_string()));
        }
        let mut value: u32 = 0;
        for byte in hex.bytes() {
            let digit = match byte {
                b'0'..=b'9' => byte - b'0',
                b'a'..=b'f' => byte - b'a' + 10,
                b'A'..=b'F' => byte - b'A' + 10,
                _ => return Err(ColorParseError::Digit(s.to_string())),
            };
            value = (value << 4) | u32::from(digit);
        }
        Ok(Self::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8))
    }
}
