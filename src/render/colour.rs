//! Ink and paper colours for canvases.

use std::fmt;
use std::str::FromStr;

use image::Rgba;
use serde::Serialize;

use crate::error::{Result, ShapeError};

/// An RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`; the `#` is optional.
    pub fn from_hex(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let bytes: Vec<u8> = match hex.len() {
            // Short forms repeat each digit: #F80 is #FF8800.
            3 | 4 if hex.is_ascii() => hex
                .chars()
                .map(|c| parse_hex_digit(c).map(|d| d << 4 | d))
                .collect::<Result<_>>()?,
            6 | 8 if hex.is_ascii() => (0..hex.len())
                .step_by(2)
                .map(|i| parse_hex_byte(&hex[i..i + 2]))
                .collect::<Result<_>>()?,
            _ => {
                return Err(ShapeError::Parse {
                    message: format!("Invalid hex colour: {}", trimmed),
                    help: Some("Use #RGB, #RGBA, #RRGGBB or #RRGGBBAA".to_string()),
                })
            }
        };
        Ok(match bytes.as_slice() {
            [r, g, b] => Self::rgb(*r, *g, *b),
            [r, g, b, a] => Self::new(*r, *g, *b, *a),
            _ => unreachable!("hex colours have three or four channels"),
        })
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

impl From<Colour> for Rgba<u8> {
    fn from(colour: Colour) -> Self {
        Rgba(colour.to_rgba())
    }
}

impl FromStr for Colour {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| ShapeError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| ShapeError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
