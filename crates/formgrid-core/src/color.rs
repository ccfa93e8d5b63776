#![forbid(unsafe_code)]

//! RGB color values for cell backgrounds and the color picker.

use std::fmt;

use rand::Rng;

/// RGB color (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into a `u32` key (`0x00RRGGBB`).
    #[must_use]
    pub const fn as_key(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Unpack a `0x00RRGGBB` key. The top byte is ignored.
    #[must_use]
    pub const fn from_key(key: u32) -> Self {
        Self::new(
            ((key >> 16) & 0xFF) as u8,
            ((key >> 8) & 0xFF) as u8,
            (key & 0xFF) as u8,
        )
    }

    /// Draw a color uniformly from the full 24-bit RGB space.
    #[must_use]
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::from_key(rng.gen_range(0..=0xFF_FFFFu32))
    }

    /// Render as a lowercase `#rrggbb` string, always zero-padded.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse a `#rrggbb` string (either case). Returns `None` for anything
    /// that is not exactly a hash followed by six hex digits.
    #[must_use]
    pub fn parse_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let key = u32::from_str_radix(hex, 16).ok()?;
        Some(Self::from_key(key))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
