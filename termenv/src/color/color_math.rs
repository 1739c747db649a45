// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color distance and lightness, backed by the [`palette`] crate.
//!
//! - [`distance_rgb`] is plain Euclidean distance with each channel scaled to `0..=1`.
//! - [`distance_hsluv`] measures in HSLuv, which is close to how people perceive
//!   differences. Hue is in degrees, saturation and lightness in `0..=100`; each axis is
//!   divided by 100 before summing so the three contribute on a similar scale.
//! - [`hsl_lightness`] is the HSL `L` channel in `0..=1`.

use palette::{Hsl, Hsluv, IntoColor, Srgb, white_point::D65};

use super::RgbValue;

fn to_srgb(rgb: RgbValue) -> Srgb<f64> {
    let (red, green, blue) = rgb.to_unit_f64();
    Srgb::new(red, green, blue)
}

/// Euclidean distance in normalized RGB space.
#[must_use]
pub fn distance_rgb(lhs: RgbValue, rhs: RgbValue) -> f64 {
    let (r1, g1, b1) = lhs.to_unit_f64();
    let (r2, g2, b2) = rhs.to_unit_f64();
    ((r1 - r2).powi(2) + (g1 - g2).powi(2) + (b1 - b2).powi(2)).sqrt()
}

/// Perceptual distance in HSLuv space. Identical inputs are exactly `0.0`.
#[must_use]
pub fn distance_hsluv(lhs: RgbValue, rhs: RgbValue) -> f64 {
    if lhs == rhs {
        return 0.0;
    }

    let lhs: Hsluv<D65, f64> = to_srgb(lhs).into_color();
    let rhs: Hsluv<D65, f64> = to_srgb(rhs).into_color();

    let hue = (lhs.hue.into_positive_degrees() - rhs.hue.into_positive_degrees()) / 100.0;
    let saturation = (lhs.saturation - rhs.saturation) / 100.0;
    let lightness = (lhs.l - rhs.l) / 100.0;

    (hue.powi(2) + saturation.powi(2) + lightness.powi(2)).sqrt()
}

/// HSL lightness in `0.0..=1.0`.
#[must_use]
pub fn hsl_lightness(rgb: RgbValue) -> f64 {
    let hsl: Hsl<palette::encoding::Srgb, f64> = to_srgb(rgb).into_color();
    hsl.lightness
}
