// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A [nom] parser that turns a hex color string into an [`RgbValue`].
//!
//! Accepted forms, all case insensitive:
//!
//! | Input       | Result             | Notes                                        |
//! |-------------|--------------------|----------------------------------------------|
//! | `#rrggbb`   | `(rr, gg, bb)`     | standard                                     |
//! | `#rgb`      | `(rr, gg, bb)`     | each nibble doubled, must be the whole input |
//! | `#rrggb`    | `(rr, gg, b)`      | lenient: a lone final blue digit, as is      |
//! | `#rrggbbXX…`| `(rr, gg, bb)`     | lenient: extra characters are ignored        |

use nom::{IResult,
          Parser,
          branch::alt,
          bytes::complete::{tag, take_while_m_n},
          combinator::{eof, map_res},
          sequence::terminated};

use super::RgbValue;

/// Parse function that generates an [`RgbValue`] from a hex color string. The
/// remainder of the input is returned alongside the color.
///
/// # Errors
///
/// Returns a [`nom::Err`] when there is no leading `#` or too few hex digits follow it.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbValue> {
    let (input, _) = tag("#").parse(input)?;
    alt((parse_long_form, parse_short_form)).parse(input)
}

/// `rrggbb`, or the lenient `rrggb` / `rrggbb…` variants. The single blue digit of
/// `rrggb` must be the last character.
fn parse_long_form(input: &str) -> IResult<&str, RgbValue> {
    let (input, (red, green, blue)) = (
        helper_fns::parse_hex_seg,
        helper_fns::parse_hex_seg,
        alt((helper_fns::parse_lone_hex_digit_at_end, helper_fns::parse_hex_seg)),
    )
        .parse(input)?;
    Ok((input, RgbValue { red, green, blue }))
}

/// `rgb`, which must be followed by end of input.
fn parse_short_form(input: &str) -> IResult<&str, RgbValue> {
    let (input, (red, green, blue)) = terminated(
        (
            helper_fns::parse_hex_nibble,
            helper_fns::parse_hex_nibble,
            helper_fns::parse_hex_nibble,
        ),
        eof,
    )
    .parse(input)?;
    Ok((input, RgbValue { red, green, blue }))
}

/// Helper functions to match and parse hex digits. These are not [Parser]
/// implementations.
mod helper_fns {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    /// Used by [`map_res`], returns a [Result], not an [`IResult`].
    pub fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    /// A single hex digit that ends the input, taken as is (`5` is `0x05`).
    pub fn parse_lone_hex_digit_at_end(input: &str) -> IResult<&str, u8> {
        map_res(
            terminated(take_while_m_n(1, 1, match_is_hex_digit), eof),
            parse_str_to_hex_num,
        )
        .parse(input)
    }

    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(2, 2, match_is_hex_digit), parse_str_to_hex_num)
            .parse(input)
    }

    /// One hex digit, scaled so that `f` becomes `ff`.
    pub fn parse_hex_nibble(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(1, 1, match_is_hex_digit), |it: &str| {
            parse_str_to_hex_num(it).map(|nibble| nibble * 17)
        })
        .parse(input)
    }
}
