// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use smallstr::SmallString;
use smallvec::SmallVec;

use crate::{CSI, Color, Profile, SGR_END, SGR_RESET, SgrCode};

/// A piece of text plus the SGR codes to wrap it in, bound to a [`Profile`].
///
/// `Style` is a persistent value: every method such as [`Self::bold()`] returns a new
/// `Style` with one more code appended, and leaves `self` untouched. So a base style can
/// be used as a template for many derived ones.
///
/// Rendering joins the codes with `;` into a single `ESC[…m`, followed by the text and
/// `ESC[0m`. When the profile is [`Profile::Ascii`], or there is nothing to apply, the
/// text is returned as is.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_termenv::{Color, Profile, Style};
///
/// let base = Style::new(Profile::TrueColor, "text").bold();
/// let red = base.foreground(&Color::rgb("#FF0000"));
///
/// assert_eq!(base.to_string(), "\x1b[1mtext\x1b[0m");
/// assert_eq!(red.to_string(), "\x1b[1;38;2;255;0;0mtext\x1b[0m");
///
/// let plain = Style::new(Profile::Ascii, "text").bold().italic();
/// assert_eq!(plain.to_string(), "text");
/// ```
///
/// A color that yields an empty sequence (such as [`Color::NoColor`]) still occupies a
/// slot, which shows up as an empty field in the joined sequence:
///
/// ```rust
/// use r3bl_termenv::{Color, Profile};
///
/// let style = Profile::Ansi.string("x").foreground(&Color::NoColor).bold();
/// assert_eq!(style.to_string(), "\x1b[;1mx\x1b[0m");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Style {
    profile: Profile,
    text: String,
    codes: sizing::InlineVecStyleCodes,
}

pub mod sizing {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    /// Most styles carry a handful of attributes plus a foreground and a background.
    pub const MAX_STYLE_CODES: usize = 8;

    /// Longest single code is `48;2;255;255;255`.
    pub const STYLE_CODE_STRING_SIZE: usize = 16;

    pub type StyleCode = SmallString<[u8; STYLE_CODE_STRING_SIZE]>;
    pub type InlineVecStyleCodes = SmallVec<[StyleCode; MAX_STYLE_CODES]>;
}

mod style_impl_block {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Style {
        #[must_use]
        pub fn new(profile: Profile, text: impl Into<String>) -> Self {
            Self {
                profile,
                text: text.into(),
                codes: SmallVec::new(),
            }
        }

        /// Copy of `self` with `code` appended.
        fn with_code(&self, code: &str) -> Self {
            let mut it = self.clone();
            it.codes.push(code.into());
            it
        }

        #[must_use]
        pub fn bold(&self) -> Self { self.with_code(SgrCode::Bold.param()) }

        #[must_use]
        pub fn faint(&self) -> Self { self.with_code(SgrCode::Faint.param()) }

        #[must_use]
        pub fn italic(&self) -> Self { self.with_code(SgrCode::Italic.param()) }

        #[must_use]
        pub fn underline(&self) -> Self { self.with_code(SgrCode::Underline.param()) }

        #[must_use]
        pub fn overline(&self) -> Self { self.with_code(SgrCode::Overline.param()) }

        #[must_use]
        pub fn blink(&self) -> Self { self.with_code(SgrCode::Blink.param()) }

        #[must_use]
        pub fn reverse(&self) -> Self { self.with_code(SgrCode::Reverse.param()) }

        #[must_use]
        pub fn cross_out(&self) -> Self { self.with_code(SgrCode::CrossOut.param()) }

        /// The color is used as given, convert it with [`Profile::convert()`] first if
        /// it may exceed this style's profile.
        #[must_use]
        pub fn foreground(&self, color: &Color) -> Self {
            self.with_code(&color.sequence(false))
        }

        #[must_use]
        pub fn background(&self, color: &Color) -> Self {
            self.with_code(&color.sequence(true))
        }

        /// Renders [`Self::text()`] with the accumulated codes.
        #[must_use]
        pub fn render(&self) -> String { self.styled(&self.text) }

        /// Renders an arbitrary string with the accumulated codes.
        #[must_use]
        pub fn styled(&self, input: &str) -> String {
            if self.profile == Profile::Ascii || self.codes.is_empty() {
                return input.to_string();
            }

            let joined = self
                .codes
                .iter()
                .map(sizing::StyleCode::as_str)
                .collect::<Vec<_>>()
                .join(";");
            if joined.is_empty() {
                return input.to_string();
            }

            format!("{CSI}{joined}{SGR_END}{input}{SGR_RESET}")
        }

        /// Display width of the text in terminal columns. Escape sequences embedded in
        /// the text don't count, and wide characters count as 2.
        #[must_use]
        pub fn width(&self) -> usize {
            let stripped = strip_ansi_escapes::strip_str(&self.text);
            unicode_width::UnicodeWidthStr::width(stripped.as_str())
        }

        #[must_use]
        pub fn text(&self) -> &str { &self.text }

        #[must_use]
        pub fn profile(&self) -> Profile { self.profile }

        #[must_use]
        pub fn codes(&self) -> &[sizing::StyleCode] { &self.codes }
    }

    impl Display for Style {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result { f.write_str(&self.render()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_bold_red_true_color() {
        let style = Style::new(Profile::TrueColor, "text")
            .bold()
            .foreground(&Color::rgb("#FF0000"));
        assert_eq!(style.to_string(), "\x1b[1;38;2;255;0;0mtext\x1b[0m");
    }

    #[test]
    fn test_no_codes_is_plain_text() {
        let style = Style::new(Profile::TrueColor, "text");
        assert_eq!(style.render(), "text");
    }

    #[test_case(Style::bold, "1")]
    #[test_case(Style::faint, "2")]
    #[test_case(Style::italic, "3")]
    #[test_case(Style::underline, "4")]
    #[test_case(Style::blink, "5")]
    #[test_case(Style::reverse, "7")]
    #[test_case(Style::cross_out, "9")]
    #[test_case(Style::overline, "53")]
    fn test_attribute_codes(apply: fn(&Style) -> Style, code: &str) {
        let style = apply(&Style::new(Profile::Ansi, "x"));
        assert_eq!(style.render(), format!("\x1b[{code}mx\x1b[0m"));
    }

    #[test]
    fn test_derived_styles_do_not_alter_base() {
        let base = Style::new(Profile::Ansi256, "hi").underline();
        let before = base.to_string();

        let bold = base.bold();
        let bold_italic = bold.italic();

        assert_eq!(base.to_string(), before);
        assert_eq!(base.codes().len(), 1);
        assert_eq!(bold.codes().len(), 2);
        assert_eq!(bold_italic.codes().len(), 3);
        assert_eq!(bold.to_string(), "\x1b[4;1mhi\x1b[0m");
        assert_eq!(bold_italic.to_string(), "\x1b[4;1;3mhi\x1b[0m");
    }

    #[test]
    fn test_ascii_suppresses_everything() {
        let style = Style::new(Profile::Ascii, "plain")
            .bold()
            .foreground(&Color::ansi(1))
            .background(&Color::rgb("#ffffff"));
        assert_eq!(style.to_string(), "plain");
        assert_eq!(style.styled("other"), "other");
    }

    #[test]
    fn test_empty_color_codes_keep_their_slot() {
        let only_empty = Style::new(Profile::TrueColor, "x").foreground(&Color::NoColor);
        assert_eq!(only_empty.codes().len(), 1);
        assert_eq!(only_empty.render(), "x");

        let trailing = Style::new(Profile::TrueColor, "x")
            .bold()
            .background(&Color::rgb("#nothex"));
        assert_eq!(trailing.render(), "\x1b[1;mx\x1b[0m");
    }

    #[test]
    fn test_background_ansi() {
        let style = Style::new(Profile::Ansi, "x").background(&Color::ansi(1));
        assert_eq!(style.render(), "\x1b[41mx\x1b[0m");
    }

    #[test]
    fn test_styled_uses_codes_with_other_text() {
        let style = Style::new(Profile::Ansi, "ignored").italic();
        assert_eq!(style.styled("other"), "\x1b[3mother\x1b[0m");
    }

    #[test_case("hello", 5)]
    #[test_case("", 0)]
    #[test_case("日本", 4)]
    #[test_case("\x1b[1mbold\x1b[0m", 4)]
    fn test_width(text: &str, expected: usize) {
        assert_eq!(Style::new(Profile::TrueColor, text).bold().width(), expected);
    }
}
