//! Color - packed RGB with the `#RRGGBB` wire form
//!
//! Pixels travel as 7-character hex strings (the color-input format); in
//! memory we keep them packed so the grid stays one `u32` per cell.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid color {0:?} (expected #RRGGBB)")]
pub struct ColorParseError(pub String);

/// An RGB color, stored as `0x00RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub const WHITE: Color = Color(0xFF_FF_FF);
    pub const BLACK: Color = Color(0x00_00_00);

    #[inline]
    pub fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub fn b(self) -> u8 {
        self.0 as u8
    }

    /// Pack as ABGR with opaque alpha (little-endian bytes [R, G, B, A]),
    /// the layout canvas `ImageData` consumes directly.
    #[inline]
    pub fn to_abgr(self) -> u32 {
        0xFF00_0000 | ((self.b() as u32) << 16) | ((self.g() as u32) << 8) | self.r() as u32
    }

    /// Canonical CSS form, e.g. `#FF0000`.
    pub fn css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parse `#RRGGBB` (either hex case). Shorthand and named colors are not
    /// accepted; the color input only ever produces the long form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError(s.to_string()))?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError(s.to_string()));
        }
        let packed =
            u32::from_str_radix(hex, 16).map_err(|_| ColorParseError(s.to_string()))?;
        Ok(Color(packed))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_hex_cases() {
        assert_eq!("#FF0000".parse::<Color>().unwrap(), Color(0xFF0000));
        assert_eq!("#ff0000".parse::<Color>().unwrap(), Color(0xFF0000));
        assert_eq!("#FFFFFF".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("#000000".parse::<Color>().unwrap(), Color::BLACK);
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!("FF0000".parse::<Color>().is_err());
        assert!("#F00".parse::<Color>().is_err());
        assert!("#GGGGGG".parse::<Color>().is_err());
        assert!("#FF00000".parse::<Color>().is_err());
        assert!("".parse::<Color>().is_err());
    }

    #[test]
    fn displays_canonical_uppercase() {
        let c: Color = "#ab00ff".parse().unwrap();
        assert_eq!(c.to_string(), "#AB00FF");
        assert_eq!(Color::WHITE.css(), "#FFFFFF");
    }

    #[test]
    fn channel_accessors_and_abgr_packing() {
        let c: Color = "#102030".parse().unwrap();
        assert_eq!((c.r(), c.g(), c.b()), (0x10, 0x20, 0x30));
        assert_eq!(c.to_abgr(), 0xFF30_2010);
    }

    #[test]
    fn serde_round_trips_as_hex_string() {
        let c: Color = "#FF8800".parse().unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#FF8800\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
