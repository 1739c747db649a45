// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The [`Color`] sum type: a color at one of four fidelities.
//!
//! Indices are stored as `u32` and never validated. An out of range [`AnsiColor`] still
//! produces a deterministic (if meaningless) SGR code, and displays as the empty string
//! since it has no palette entry.

use std::{fmt::{Display, Formatter, Result},
          str::FromStr};

use super::{RgbValue, ansi_hex, ansi_rgb};
use crate::{BACKGROUND, FOREGROUND, TermenvError};

/// One of the 16 standard and bright ANSI colors (`0..16`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnsiColor {
    pub index: u32,
}

/// An index into the 256 color palette (`0..256`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ansi256Color {
    pub index: u32,
}

/// A hex encoded 24 bit color such as `"#abcdef"`. Equality is by the hex string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RgbColor {
    pub hex: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Emit no color escape at all.
    #[default]
    NoColor,
    Ansi(AnsiColor),
    Ansi256(Ansi256Color),
    Rgb(RgbColor),
}

pub const ANSI_BLACK: Color = Color::ansi(0);
pub const ANSI_RED: Color = Color::ansi(1);
pub const ANSI_GREEN: Color = Color::ansi(2);
pub const ANSI_YELLOW: Color = Color::ansi(3);
pub const ANSI_BLUE: Color = Color::ansi(4);
pub const ANSI_MAGENTA: Color = Color::ansi(5);
pub const ANSI_CYAN: Color = Color::ansi(6);
pub const ANSI_WHITE: Color = Color::ansi(7);
pub const ANSI_BRIGHT_BLACK: Color = Color::ansi(8);
pub const ANSI_BRIGHT_RED: Color = Color::ansi(9);
pub const ANSI_BRIGHT_GREEN: Color = Color::ansi(10);
pub const ANSI_BRIGHT_YELLOW: Color = Color::ansi(11);
pub const ANSI_BRIGHT_BLUE: Color = Color::ansi(12);
pub const ANSI_BRIGHT_MAGENTA: Color = Color::ansi(13);
pub const ANSI_BRIGHT_CYAN: Color = Color::ansi(14);
pub const ANSI_BRIGHT_WHITE: Color = Color::ansi(15);

impl From<AnsiColor> for Color {
    fn from(it: AnsiColor) -> Self { Color::Ansi(it) }
}

impl From<Ansi256Color> for Color {
    fn from(it: Ansi256Color) -> Self { Color::Ansi256(it) }
}

impl From<RgbColor> for Color {
    fn from(it: RgbColor) -> Self { Color::Rgb(it) }
}

impl From<RgbValue> for Color {
    fn from(it: RgbValue) -> Self { Color::rgb(it.to_hex()) }
}

mod color_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Color {
        #[must_use]
        pub const fn ansi(index: u32) -> Self { Color::Ansi(AnsiColor { index }) }

        #[must_use]
        pub const fn ansi256(index: u32) -> Self { Color::Ansi256(Ansi256Color { index }) }

        #[must_use]
        pub fn rgb(hex: impl Into<String>) -> Self { Color::Rgb(RgbColor { hex: hex.into() }) }

        /// The SGR parameters for this color, without the leading `ESC[` or the
        /// trailing `m`.
        ///
        /// | Variant     | Foreground       | Background       |
        /// |-------------|------------------|------------------|
        /// | `NoColor`   | `""`             | `""`             |
        /// | `Ansi(n<8)` | `30+n`           | `40+n`           |
        /// | `Ansi(n)`   | `90+(n-8)`       | `100+(n-8)`      |
        /// | `Ansi256`   | `38;5;n`         | `48;5;n`         |
        /// | `Rgb`       | `38;2;r;g;b`     | `48;2;r;g;b`     |
        ///
        /// An unparseable RGB hex yields `""`.
        #[must_use]
        pub fn sequence(&self, is_background: bool) -> String {
            let prefix = if is_background { BACKGROUND } else { FOREGROUND };
            match self {
                Color::NoColor => String::new(),
                Color::Ansi(it) => it.sequence(is_background),
                Color::Ansi256(Ansi256Color { index }) => format!("{prefix};5;{index}"),
                Color::Rgb(it) => match it.to_rgb() {
                    Some(RgbValue { red, green, blue }) => {
                        format!("{prefix};2;{red};{green};{blue}")
                    }
                    None => String::new(),
                },
            }
        }

        /// Decodes this color to 8 bit RGB. `None` for [`Color::NoColor`], for
        /// indices outside the palette, and for unparseable hex.
        #[must_use]
        pub fn to_rgb(&self) -> Option<RgbValue> {
            match self {
                Color::NoColor => None,
                Color::Ansi(AnsiColor { index }) | Color::Ansi256(Ansi256Color { index }) => {
                    ansi_rgb(*index)
                }
                Color::Rgb(it) => it.to_rgb(),
            }
        }

        #[must_use]
        pub fn is_no_color(&self) -> bool { matches!(self, Color::NoColor) }
    }

    impl AnsiColor {
        #[must_use]
        pub fn sequence(&self, is_background: bool) -> String {
            let index = u64::from(self.index);
            let bg_offset = if is_background { 10 } else { 0 };
            let code = if index < 8 {
                30 + bg_offset + index
            } else {
                90 + bg_offset + (index - 8)
            };
            code.to_string()
        }
    }

    impl RgbColor {
        #[must_use]
        pub fn to_rgb(&self) -> Option<RgbValue> { RgbValue::try_from_hex_color(&self.hex) }
    }

    /// Hex string for RGB, the reference palette hex for palette colors, empty for
    /// [`Color::NoColor`] and out of range indices.
    impl Display for Color {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match self {
                Color::NoColor => Ok(()),
                Color::Ansi(AnsiColor { index }) | Color::Ansi256(Ansi256Color { index }) => {
                    f.write_str(ansi_hex(*index).unwrap_or_default())
                }
                Color::Rgb(RgbColor { hex }) => f.write_str(hex),
            }
        }
    }

    /// `"#…"` becomes [`Color::Rgb`] (validated later, at render or conversion time). A
    /// non negative integer below 16 becomes [`Color::Ansi`], any other becomes
    /// [`Color::Ansi256`].
    impl FromStr for Color {
        type Err = TermenvError;

        fn from_str(input: &str) -> std::result::Result<Self, Self::Err> {
            if input.starts_with('#') {
                return Ok(Color::rgb(input));
            }
            match input.parse::<u32>() {
                Ok(index) if index < 16 => Ok(Color::ansi(index)),
                Ok(index) => Ok(Color::ansi256(index)),
                Err(_) => Err(TermenvError::InvalidColor {
                    input: input.to_string(),
                }),
            }
        }
    }
}
