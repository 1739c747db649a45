// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Escape sequence building blocks shared by [`crate::style`] and [`crate::sequences`].
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code>
//! - <https://invisible-island.net/xterm/ctlseqs/ctlseqs.html>

use const_format::concatcp;

/// Escape character.
pub const ESC: &str = "\x1b";

/// Bell character, terminates OSC sequences in the xterm style.
pub const BEL: &str = "\x07";

/// Control Sequence Introducer.
pub const CSI: &str = concatcp!(ESC, "[");

/// Operating System Command.
pub const OSC: &str = concatcp!(ESC, "]");

/// String Terminator.
pub const ST: &str = concatcp!(ESC, "\\");

/// Final byte of an SGR sequence.
pub const SGR_END: &str = "m";

/// SGR parameter that selects an extended foreground color.
pub const FOREGROUND: &str = "38";

/// SGR parameter that selects an extended background color.
pub const BACKGROUND: &str = "48";

/// Full SGR reset, appended after every styled run.
pub const SGR_RESET: &str = concatcp!(CSI, "0", SGR_END);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_composed_constants() {
        assert_eq!(CSI, "\x1b[");
        assert_eq!(OSC, "\x1b]");
        assert_eq!(ST, "\x1b\\");
        assert_eq!(SGR_RESET, "\x1b[0m");
    }
}
