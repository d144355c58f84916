//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SwatchError};

/// A 32-bit ARGB colour value.
///
/// Serialized as its hex string so saved picker data stays readable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from ARGB components.
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 255, r, g, b }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::argb(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Unpack a `0xAARRGGBB` integer.
    pub const fn from_u32(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Pack into a `0xAARRGGBB` integer.
    pub const fn to_u32(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#ARGB` (4 digits, expanded to 8)
    /// - `#RRGGBB` (6 digits)
    /// - `#AARRGGBB` (8 digits, same order as the packed integer)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        // from_str_radix alone would accept a leading sign
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid_hex(s));
        }

        match hex.len() {
            3 | 4 => {
                let digits = hex
                    .chars()
                    .map(parse_hex_digit)
                    .collect::<Result<Vec<u8>>>()?;
                let wide: Vec<u8> = digits.iter().map(|d| d << 4 | d).collect();
                if let [r, g, b] = wide[..] {
                    Ok(Self::rgb(r, g, b))
                } else {
                    Ok(Self::argb(wide[0], wide[1], wide[2], wide[3]))
                }
            }
            6 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            8 => {
                let a = parse_hex_byte(&hex[0..2])?;
                let r = parse_hex_byte(&hex[2..4])?;
                let g = parse_hex_byte(&hex[4..6])?;
                let b = parse_hex_byte(&hex[6..8])?;
                Ok(Self::argb(a, r, g, b))
            }
            _ => Err(invalid_hex(s)),
        }
    }

    /// Convert to the RGBA byte order used by image buffers.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Build from an RGBA image pixel.
    pub fn from_rgba(rgba: [u8; 4]) -> Self {
        Self::argb(rgba[3], rgba[0], rgba[1], rgba[2])
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

impl FromStr for Colour {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Colour {
    type Error = SwatchError;

    fn try_from(s: String) -> Result<Self> {
        Self::from_hex(&s)
    }
}

impl From<Colour> for String {
    fn from(colour: Colour) -> Self {
        colour.to_string()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:08X}", self.to_u32())
        }
    }
}

fn invalid_hex(s: &str) -> SwatchError {
    SwatchError::Parse {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB, #ARGB, #RRGGBB, or #AARRGGBB format".to_string()),
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| SwatchError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| SwatchError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
