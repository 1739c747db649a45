// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The four terminal color capability tiers.

use strum_macros::{Display, EnumIter, EnumString};

use crate::{Color, RgbValue, Style, convert};

/// A terminal's color capability. Variants are ordered from most to least capable, so
/// `Profile::TrueColor < Profile::Ascii`, and a lower discriminant means more colors.
///
/// [`Display`] and [`FromStr`] use the names `TrueColor`, `ANSI256`, `ANSI` and `Ascii`
/// (parsing ignores case).
///
/// [`Display`]: std::fmt::Display
/// [`FromStr`]: std::str::FromStr
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Profile {
    /// 24 bit color.
    #[strum(serialize = "TrueColor")]
    TrueColor = 0,
    /// 256 color palette.
    #[strum(serialize = "ANSI256")]
    Ansi256 = 1,
    /// 16 standard and bright colors.
    #[strum(serialize = "ANSI")]
    Ansi = 2,
    /// No colors or styles at all.
    #[strum(serialize = "Ascii")]
    Ascii = 3,
}

impl Profile {
    /// Human readable name, same as the [`Display`](std::fmt::Display) form.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Profile::TrueColor => "TrueColor",
            Profile::Ansi256 => "ANSI256",
            Profile::Ansi => "ANSI",
            Profile::Ascii => "Ascii",
        }
    }

    /// Degrades `color` to fit this profile. See [`convert()`].
    #[must_use]
    pub fn convert(self, color: &Color) -> Color { convert(self, color) }

    /// Parses `input` (see [`Color`]'s `FromStr`) and converts it to fit this profile.
    /// `None` if the string is empty or not a color.
    #[must_use]
    pub fn color(self, input: &str) -> Option<Color> {
        input.parse::<Color>().ok().map(|it| self.convert(&it))
    }

    /// Builds an RGB color from an 8 bit triple and converts it to fit this profile.
    #[must_use]
    #[allow(clippy::wrong_self_convention)]
    pub fn from_rgb(self, rgb: impl Into<RgbValue>) -> Color {
        self.convert(&Color::from(rgb.into()))
    }

    /// A [`Style`] for `text` that renders with this profile.
    #[must_use]
    pub fn string(self, text: impl Into<String>) -> Style { Style::new(self, text) }

    /// Like [`Self::string()`] for several pieces of text, joined with a space.
    #[must_use]
    pub fn strings<I>(self, parts: I) -> Style
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let text = parts
            .into_iter()
            .map(|it| it.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join(" ");
        Style::new(self, text)
    }

    /// `true` when this profile can show at least the colors of `other`.
    #[must_use]
    pub fn supports(self, other: Profile) -> bool { self <= other }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    #[test]
    fn test_ordering_matches_discriminants() {
        let profiles: Vec<Profile> = Profile::iter().collect();
        assert_eq!(
            profiles,
            vec![Profile::TrueColor, Profile::Ansi256, Profile::Ansi, Profile::Ascii]
        );
        for pair in profiles.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!((pair[0] as u8) < (pair[1] as u8));
        }
        assert!(Profile::TrueColor.supports(Profile::Ansi));
        assert!(!Profile::Ascii.supports(Profile::Ansi));
    }

    #[test_case(Profile::TrueColor, "TrueColor")]
    #[test_case(Profile::Ansi256, "ANSI256")]
    #[test_case(Profile::Ansi, "ANSI")]
    #[test_case(Profile::Ascii, "Ascii")]
    fn test_name_and_display(profile: Profile, expected: &str) {
        assert_eq!(profile.name(), expected);
        assert_eq!(profile.to_string(), expected);
        assert_eq!(expected.to_lowercase().parse::<Profile>().ok(), Some(profile));
    }

    #[test_case(Profile::TrueColor, "#ff0000", Some(Color::rgb("#ff0000")))]
    #[test_case(Profile::Ansi256, "#ff0000", Some(Color::ansi256(196)))]
    #[test_case(Profile::Ansi, "#ff0000", Some(Color::ansi(9)))]
    #[test_case(Profile::Ascii, "#ff0000", Some(Color::NoColor))]
    #[test_case(Profile::Ansi, "196", Some(Color::ansi(9)))]
    #[test_case(Profile::Ansi256, "9", Some(Color::ansi(9)))]
    #[test_case(Profile::TrueColor, "", None)]
    #[test_case(Profile::TrueColor, "bogus", None)]
    fn test_color(profile: Profile, input: &str, expected: Option<Color>) {
        assert_eq!(profile.color(input), expected);
    }

    #[test]
    fn test_from_rgb() {
        assert_eq!(Profile::TrueColor.from_rgb((255, 0, 0)), Color::rgb("#ff0000"));
        assert_eq!(Profile::Ansi256.from_rgb((255, 0, 0)), Color::ansi256(196));
        assert_eq!(Profile::Ascii.from_rgb((255, 0, 0)), Color::NoColor);
    }

    #[test]
    fn test_strings_joins_with_space() {
        let style = Profile::Ansi.strings(["hello", "there", "world"]).bold();
        assert_eq!(style.text(), "hello there world");
        assert_eq!(style.to_string(), "\x1b[1mhello there world\x1b[0m");
        assert_eq!(Profile::Ansi.strings(Vec::<String>::new()).text(), "");
    }

    #[test]
    fn test_string_binds_profile() {
        let style = Profile::Ascii.string("plain").bold();
        assert_eq!(style.to_string(), "plain");
        assert_eq!(style.profile(), Profile::Ascii);
    }
}
