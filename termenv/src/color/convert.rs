// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Degrade a [`Color`] to the closest color a [`Profile`] can display.
//!
//! ```text
//! Rgb ──rgb_to_ansi256──▶ Ansi256 ──ansi256_to_ansi──▶ Ansi ──(Ascii)──▶ NoColor
//!      Euclidean RGB               HSLuv perceptual
//! ```
//!
//! The xterm cube and gray ramp sit on an RGB grid, so the first step measures in RGB.
//! The 16 ANSI colors don't, so the second step measures in HSLuv.

use std::sync::LazyLock;

use super::{Ansi256Color, AnsiColor, CUBE_LEVELS, Color, RgbValue, ansi_rgb,
            distance_hsluv, distance_rgb};
use crate::Profile;

/// Converts `color` so that it is displayable with `profile`. Total, never fails.
///
/// | Input      | `TrueColor` | `Ansi256`        | `Ansi`                  | `Ascii`   |
/// |------------|-------------|------------------|-------------------------|-----------|
/// | `NoColor`  | `NoColor`   | `NoColor`        | `NoColor`               | `NoColor` |
/// | `Ansi`     | unchanged   | unchanged        | unchanged               | `NoColor` |
/// | `Ansi256`  | unchanged   | unchanged        | 256 to 16               | `NoColor` |
/// | `Rgb`      | unchanged   | RGB to 256       | RGB to 256, 256 to 16   | `NoColor` |
///
/// An `Rgb` whose hex can't be parsed becomes `NoColor` for every profile.
#[must_use]
pub fn convert(profile: Profile, color: &Color) -> Color {
    if profile == Profile::Ascii {
        return Color::NoColor;
    }

    match color {
        Color::NoColor => Color::NoColor,
        Color::Ansi(_) => color.clone(),
        Color::Ansi256(it) => match profile {
            Profile::Ansi => Color::Ansi(ansi256_to_ansi(*it)),
            _ => color.clone(),
        },
        Color::Rgb(rgb_color) => {
            let Some(rgb) = rgb_color.to_rgb() else {
                return Color::NoColor;
            };
            match profile {
                Profile::TrueColor => color.clone(),
                Profile::Ansi256 => Color::Ansi256(rgb_to_ansi256(rgb)),
                _ => Color::Ansi(ansi256_to_ansi(rgb_to_ansi256(rgb))),
            }
        }
    }
}

/// Maps a channel value to one of the 6 cube levels.
fn quantize_to_cube_level(value: u8) -> u8 {
    match value {
        0..48 => 0,
        48..115 => 1,
        _ => (value - 35) / 40,
    }
}

/// Nearest entry of the 256 color palette, picked from two candidates: the closest
/// cube color (`16..232`) and the closest gray (`232..256`). Ties go to the cube.
#[must_use]
pub fn rgb_to_ansi256(rgb: RgbValue) -> Ansi256Color {
    let RgbValue { red, green, blue } = rgb;

    let (q_red, q_green, q_blue) = (
        quantize_to_cube_level(red),
        quantize_to_cube_level(green),
        quantize_to_cube_level(blue),
    );
    let cube_index = 36 * u32::from(q_red) + 6 * u32::from(q_green) + u32::from(q_blue);
    let cube_rgb = RgbValue::from_u8(
        CUBE_LEVELS[usize::from(q_red)],
        CUBE_LEVELS[usize::from(q_green)],
        CUBE_LEVELS[usize::from(q_blue)],
    );

    let average = (u32::from(red) + u32::from(green) + u32::from(blue)) / 3;
    let gray_index: u8 = if average > 238 {
        23
    } else {
        // average <= 238, so this is at most 23.
        u8::try_from(average.saturating_sub(3) / 10).unwrap_or(23)
    };
    let gray = 8 + 10 * gray_index;
    let gray_rgb = RgbValue::from_u8(gray, gray, gray);

    let index = if distance_rgb(rgb, cube_rgb) <= distance_rgb(rgb, gray_rgb) {
        16 + cube_index
    } else {
        232 + u32::from(gray_index)
    };
    Ansi256Color { index }
}

/// Nearest of the 16 ANSI colors for every 256 palette entry.
static ANSI256_TO_ANSI: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut table = [0_u8; 256];
    for (index, slot) in (0_u32..).zip(table.iter_mut()) {
        if let Some(rgb) = ansi_rgb(index) {
            *slot = nearest_ansi(rgb);
        }
    }
    table
});

/// Linear scan over ANSI `0..16`. Strict `<`, so the first minimum wins.
fn nearest_ansi(rgb: RgbValue) -> u8 {
    let mut best_index = 0_u8;
    let mut best_distance = f64::INFINITY;
    for index in 0..16_u8 {
        let Some(candidate) = ansi_rgb(u32::from(index)) else {
            continue;
        };
        let distance = distance_hsluv(rgb, candidate);
        if distance < best_distance {
            best_index = index;
            best_distance = distance;
        }
    }
    best_index
}

/// Perceptually closest ANSI color. Indices outside the palette map to black (`0`).
#[must_use]
pub fn ansi256_to_ansi(color: Ansi256Color) -> AnsiColor {
    let index = usize::try_from(color.index)
        .ok()
        .and_then(|index| ANSI256_TO_ANSI.get(index))
        .map_or(0, |it| u32::from(*it));
    AnsiColor { index }
}
