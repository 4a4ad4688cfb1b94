use std::fmt;
use std::str::FromStr;

/// Straight (non-premultiplied) RGB color, components in [0, 1].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Packs `0xRRGGBB`.
    #[inline]
    pub fn from_hex_u32(value: u32) -> Self {
        Self::from_u8((value >> 16 & 0xFF) as u8, (value >> 8 & 0xFF) as u8, (value & 0xFF) as u8)
    }

    /// Parses `#RRGGBB` or `RRGGBB`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return Err(ColorParseError::Length(digits.len()));
        }
        // from_str_radix alone would accept a leading `+`.
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::Digits(digits.to_string()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::Digits(digits.to_string()))?;
        Ok(Self::from_hex_u32(value))
    }

    /// True when every component lies in [0, 1].
    #[inline]
    pub fn is_normalized(self) -> bool {
        [self.r, self.g, self.b].iter().all(|c| (0.0..=1.0).contains(c))
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Rejected hex color string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Number of hex digits after the optional `#` was not 6.
    Length(usize),
    /// Six characters, but not all hex digits.
    Digits(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorParseError::Length(n) => {
                write!(f, "hex color must have 6 digits, found {n}")
            }
            ColorParseError::Digits(s) => write!(f, "invalid hex color digits `{s}`"),
        }
    }
}

impl std::error::Error for ColorParseError {}
