// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::hex_color_parser::parse_hex_color;

/// An 8 bit per channel color, the decoded form of an RGB hex string.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Default)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl RgbValue {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Parses `#rrggbb` (and the lenient forms accepted by [`parse_hex_color`]).
    #[must_use]
    pub fn try_from_hex_color(input: &str) -> Option<RgbValue> {
        parse_hex_color(input).ok().map(|(_, rgb)| rgb)
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Channels scaled to `0.0..=1.0`.
    #[must_use]
    pub fn to_unit_f64(&self) -> (f64, f64, f64) {
        (
            f64::from(self.red) / 255.0,
            f64::from(self.green) / 255.0,
            f64::from(self.blue) / 255.0,
        )
    }
}
