// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result};

use crate::{CSI, SGR_END};

/// The text attribute codes that a [`crate::Style`] can accumulate. Color codes are not
/// listed here since they come from [`crate::Color::sequence()`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SgrCode {
    Reset,
    Bold,
    Faint,
    Italic,
    Underline,
    Blink,
    Reverse,
    CrossOut,
    Overline,
}

pub mod sgr_code_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl SgrCode {
        /// The bare parameter, eg `"1"` for [`SgrCode::Bold`].
        #[rustfmt::skip]
        #[must_use]
        pub fn param(self) -> &'static str {
            match self {
                SgrCode::Reset     => "0",
                SgrCode::Bold      => "1",
                SgrCode::Faint     => "2",
                SgrCode::Italic    => "3",
                SgrCode::Underline => "4",
                SgrCode::Blink     => "5",
                SgrCode::Reverse   => "7",
                SgrCode::CrossOut  => "9",
                SgrCode::Overline  => "53",
            }
        }
    }

    impl Display for SgrCode {
        /// SGR: set graphics mode command.
        /// More info:
        /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
        /// - <https://en.wikipedia.org/wiki/ANSI_escape_code>
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write!(f, "{CSI}{}{SGR_END}", self.param())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(SgrCode::Reset, "0")]
    #[test_case(SgrCode::Bold, "1")]
    #[test_case(SgrCode::Faint, "2")]
    #[test_case(SgrCode::Italic, "3")]
    #[test_case(SgrCode::Underline, "4")]
    #[test_case(SgrCode::Blink, "5")]
    #[test_case(SgrCode::Reverse, "7")]
    #[test_case(SgrCode::CrossOut, "9")]
    #[test_case(SgrCode::Overline, "53")]
    fn test_param(code: SgrCode, expected: &str) {
        assert_eq!(code.param(), expected);
    }

    #[test]
    fn test_display() {
        assert_eq!(SgrCode::Reset.to_string(), "\x1b[0m");
        assert_eq!(SgrCode::Overline.to_string(), "\x1b[53m");
    }
}
