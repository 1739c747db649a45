// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color values and the conversions between their fidelities.
//!
//! - **Value model**: [`Color`] with its [`AnsiColor`], [`Ansi256Color`] and [`RgbColor`]
//!   payloads, plus the decoded [`RgbValue`] triple
//! - **Reference data**: the 256 entry [`ANSI_HEX`] palette
//! - **Conversion**: [`convert()`], [`rgb_to_ansi256()`], [`ansi256_to_ansi()`]
//! - **Color math**: distances and lightness, via the `palette` crate

// Attach.
mod ansi_palette;
mod color_math;
mod color_value;
mod convert;
mod hex_color_parser;
mod rgb_value;

// Re-export.
pub use ansi_palette::*;
pub use color_math::*;
pub use color_value::*;
pub use convert::*;
pub use hex_color_parser::*;
pub use rgb_value::*;
