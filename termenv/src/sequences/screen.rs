// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cursor, screen, mouse, paste and scrolling control sequences.
//!
//! Each sequence is available as a pure value (a `const` or a `*_seq` function returning
//! a [`String`]) and as a method on [`Output`] that writes it.
//!
//! More info:
//! - <https://invisible-island.net/xterm/ctlseqs/ctlseqs.html>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#CSI_(Control_Sequence_Introducer)_sequences>

use const_format::concatcp;

use crate::{BEL, CSI, Color, ESC, OSC, Output, TermenvResult};

// Cursor save/restore/visibility.

/// ESC 7 (DECSC).
pub const SAVE_CURSOR_POSITION: &str = concatcp!(ESC, "7");
/// ESC 8 (DECRC).
pub const RESTORE_CURSOR_POSITION: &str = concatcp!(ESC, "8");
pub const HIDE_CURSOR: &str = concatcp!(CSI, "?25l");
pub const SHOW_CURSOR: &str = concatcp!(CSI, "?25h");

// Screen buffers.

pub const ALT_SCREEN: &str = concatcp!(CSI, "?1049h");
pub const EXIT_ALT_SCREEN: &str = concatcp!(CSI, "?1049l");
pub const SAVE_SCREEN: &str = concatcp!(CSI, "?47h");
pub const RESTORE_SCREEN: &str = concatcp!(CSI, "?47l");

/// ESC c (RIS): full reset to the initial state.
pub const RESET_TERMINAL: &str = concatcp!(ESC, "c");

// Mouse reporting. "Press" is the same mode as plain mouse (X10 compatible).

pub const ENABLE_MOUSE: &str = concatcp!(CSI, "?1000h");
pub const DISABLE_MOUSE: &str = concatcp!(CSI, "?1000l");
pub const ENABLE_MOUSE_PRESS: &str = ENABLE_MOUSE;
pub const DISABLE_MOUSE_PRESS: &str = DISABLE_MOUSE;
pub const ENABLE_MOUSE_HILITE: &str = concatcp!(CSI, "?1001h");
pub const DISABLE_MOUSE_HILITE: &str = concatcp!(CSI, "?1001l");
pub const ENABLE_MOUSE_CELL_MOTION: &str = concatcp!(CSI, "?1002h");
pub const DISABLE_MOUSE_CELL_MOTION: &str = concatcp!(CSI, "?1002l");
pub const ENABLE_MOUSE_ALL_MOTION: &str = concatcp!(CSI, "?1003h");
pub const DISABLE_MOUSE_ALL_MOTION: &str = concatcp!(CSI, "?1003l");
pub const ENABLE_MOUSE_EXTENDED_MODE: &str = concatcp!(CSI, "?1006h");
pub const DISABLE_MOUSE_EXTENDED_MODE: &str = concatcp!(CSI, "?1006l");
pub const ENABLE_MOUSE_PIXELS_MODE: &str = concatcp!(CSI, "?1016h");
pub const DISABLE_MOUSE_PIXELS_MODE: &str = concatcp!(CSI, "?1016l");

// Bracketed paste.

pub const ENABLE_BRACKETED_PASTE: &str = concatcp!(CSI, "?2004h");
pub const DISABLE_BRACKETED_PASTE: &str = concatcp!(CSI, "?2004l");

/// Parameter of ED (erase in display).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EraseMode {
    ToEnd = 0,
    ToBeginning = 1,
    EntireDisplay = 2,
    /// Scrollback buffer, an xterm extension.
    SavedLines = 3,
}

/// Parameter of EL (erase in line).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EraseLineMode {
    ToEnd = 0,
    ToBeginning = 1,
    EntireLine = 2,
}

#[must_use]
pub fn cursor_up_seq(n: u32) -> String { format!("{CSI}{n}A") }

#[must_use]
pub fn cursor_down_seq(n: u32) -> String { format!("{CSI}{n}B") }

#[must_use]
pub fn cursor_forward_seq(n: u32) -> String { format!("{CSI}{n}C") }

#[must_use]
pub fn cursor_back_seq(n: u32) -> String { format!("{CSI}{n}D") }

#[must_use]
pub fn cursor_next_line_seq(n: u32) -> String { format!("{CSI}{n}E") }

#[must_use]
pub fn cursor_previous_line_seq(n: u32) -> String { format!("{CSI}{n}F") }

/// Moves to `column` (1 based) on the current row.
#[must_use]
pub fn cursor_horizontal_absolute_seq(column: u32) -> String { format!("{CSI}{column}G") }

/// Moves to `row`, `column` (both 1 based).
#[must_use]
pub fn cursor_position_seq(row: u32, column: u32) -> String {
    format!("{CSI}{row};{column}H")
}

#[must_use]
pub fn erase_display_seq(mode: EraseMode) -> String { format!("{CSI}{}J", mode as u8) }

#[must_use]
pub fn erase_line_seq(mode: EraseLineMode) -> String { format!("{CSI}{}K", mode as u8) }

#[must_use]
pub fn clear_screen_seq() -> String { erase_display_seq(EraseMode::EntireDisplay) }

#[must_use]
pub fn clear_line_seq() -> String { erase_line_seq(EraseLineMode::EntireLine) }

/// Clears `n` lines, from the current one upwards. The cursor ends up on the topmost
/// cleared line. `n == 0` is the empty string.
#[must_use]
pub fn clear_lines_seq(n: u32) -> String {
    let clear_line = clear_line_seq();
    let up = cursor_up_seq(1);
    (0..n)
        .map(|it| if it + 1 < n { format!("{clear_line}{up}") } else { clear_line.clone() })
        .collect()
}

/// DECSTBM: restrict scrolling to rows `top..=bottom`.
#[must_use]
pub fn change_scrolling_region_seq(top: u32, bottom: u32) -> String {
    format!("{CSI}{top};{bottom}r")
}

#[must_use]
pub fn insert_lines_seq(n: u32) -> String { format!("{CSI}{n}L") }

#[must_use]
pub fn delete_lines_seq(n: u32) -> String { format!("{CSI}{n}M") }

/// OSC 10: set the terminal's default foreground to `color`'s hex form.
#[must_use]
pub fn set_foreground_color_seq(color: &Color) -> String { format!("{OSC}10;{color}{BEL}") }

/// OSC 11: set the terminal's default background.
#[must_use]
pub fn set_background_color_seq(color: &Color) -> String { format!("{OSC}11;{color}{BEL}") }

/// OSC 12: set the cursor color.
#[must_use]
pub fn set_cursor_color_seq(color: &Color) -> String { format!("{OSC}12;{color}{BEL}") }

/// OSC 2: set the window title.
#[must_use]
pub fn set_window_title_seq(title: &str) -> String { format!("{OSC}2;{title}{BEL}") }

/// Writers for the sequences above. A failing writer surfaces as
/// [`crate::TermenvError::Io`]; callers that treat terminal control as best effort can
/// ignore it.
#[allow(clippy::missing_errors_doc)]
mod output_screen_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Output {
        pub fn cursor_up(&mut self, n: u32) -> TermenvResult<()> {
            self.write_str(&cursor_up_seq(n))
        }

        pub fn cursor_down(&mut self, n: u32) -> TermenvResult<()> {
            self.write_str(&cursor_down_seq(n))
        }

        pub fn cursor_forward(&mut self, n: u32) -> TermenvResult<()> {
            self.write_str(&cursor_forward_seq(n))
        }

        pub fn cursor_back(&mut self, n: u32) -> TermenvResult<()> {
            self.write_str(&cursor_back_seq(n))
        }

        pub fn cursor_next_line(&mut self, n: u32) -> TermenvResult<()> {
            self.write_str(&cursor_next_line_seq(n))
        }

        pub fn cursor_previous_line(&mut self, n: u32) -> TermenvResult<()> {
            self.write_str(&cursor_previous_line_seq(n))
        }

        pub fn cursor_horizontal_absolute(&mut self, column: u32) -> TermenvResult<()> {
            self.write_str(&cursor_horizontal_absolute_seq(column))
        }

        pub fn move_cursor(&mut self, row: u32, column: u32) -> TermenvResult<()> {
            self.write_str(&cursor_position_seq(row, column))
        }

        pub fn save_cursor_position(&mut self) -> TermenvResult<()> {
            self.write_str(SAVE_CURSOR_POSITION)
        }

        pub fn restore_cursor_position(&mut self) -> TermenvResult<()> {
            self.write_str(RESTORE_CURSOR_POSITION)
        }

        pub fn hide_cursor(&mut self) -> TermenvResult<()> { self.write_str(HIDE_CURSOR) }

        pub fn show_cursor(&mut self) -> TermenvResult<()> { self.write_str(SHOW_CURSOR) }

        pub fn erase_display(&mut self, mode: EraseMode) -> TermenvResult<()> {
            self.write_str(&erase_display_seq(mode))
        }

        pub fn erase_line(&mut self, mode: EraseLineMode) -> TermenvResult<()> {
            self.write_str(&erase_line_seq(mode))
        }

        pub fn clear_screen(&mut self) -> TermenvResult<()> {
            self.write_str(&clear_screen_seq())
        }

        pub fn clear_line(&mut self) -> TermenvResult<()> { self.write_str(&clear_line_seq()) }

        pub fn clear_lines(&mut self, n: u32) -> TermenvResult<()> {
            self.write_str(&clear_lines_seq(n))
        }

        pub fn alt_screen(&mut self) -> TermenvResult<()> { self.write_str(ALT_SCREEN) }

        pub fn exit_alt_screen(&mut self) -> TermenvResult<()> {
            self.write_str(EXIT_ALT_SCREEN)
        }

        pub fn save_screen(&mut self) -> TermenvResult<()> { self.write_str(SAVE_SCREEN) }

        pub fn restore_screen(&mut self) -> TermenvResult<()> {
            self.write_str(RESTORE_SCREEN)
        }

        pub fn reset_terminal(&mut self) -> TermenvResult<()> {
            self.write_str(RESET_TERMINAL)
        }

        pub fn set_foreground_color(&mut self, color: &Color) -> TermenvResult<()> {
            self.write_str(&set_foreground_color_seq(color))
        }

        pub fn set_background_color(&mut self, color: &Color) -> TermenvResult<()> {
            self.write_str(&set_background_color_seq(color))
        }

        pub fn set_cursor_color(&mut self, color: &Color) -> TermenvResult<()> {
            self.write_str(&set_cursor_color_seq(color))
        }

        pub fn set_window_title(&mut self, title: &str) -> TermenvResult<()> {
            self.write_str(&set_window_title_seq(title))
        }

        pub fn enable_mouse(&mut self) -> TermenvResult<()> { self.write_str(ENABLE_MOUSE) }

        pub fn disable_mouse(&mut self) -> TermenvResult<()> { self.write_str(DISABLE_MOUSE) }

        pub fn enable_mouse_press(&mut self) -> TermenvResult<()> {
            self.write_str(ENABLE_MOUSE_PRESS)
        }

        pub fn disable_mouse_press(&mut self) -> TermenvResult<()> {
            self.write_str(DISABLE_MOUSE_PRESS)
        }

        pub fn enable_mouse_hilite(&mut self) -> TermenvResult<()> {
            self.write_str(ENABLE_MOUSE_HILITE)
        }

        pub fn disable_mouse_hilite(&mut self) -> TermenvResult<()> {
            self.write_str(DISABLE_MOUSE_HILITE)
        }

        pub fn enable_mouse_cell_motion(&mut self) -> TermenvResult<()> {
            self.write_str(ENABLE_MOUSE_CELL_MOTION)
        }

        pub fn disable_mouse_cell_motion(&mut self) -> TermenvResult<()> {
            self.write_str(DISABLE_MOUSE_CELL_MOTION)
        }

        pub fn enable_mouse_all_motion(&mut self) -> TermenvResult<()> {
            self.write_str(ENABLE_MOUSE_ALL_MOTION)
        }

        pub fn disable_mouse_all_motion(&mut self) -> TermenvResult<()> {
            self.write_str(DISABLE_MOUSE_ALL_MOTION)
        }

        pub fn enable_mouse_extended_mode(&mut self) -> TermenvResult<()> {
            self.write_str(ENABLE_MOUSE_EXTENDED_MODE)
        }

        pub fn disable_mouse_extended_mode(&mut self) -> TermenvResult<()> {
            self.write_str(DISABLE_MOUSE_EXTENDED_MODE)
        }

        pub fn enable_mouse_pixels_mode(&mut self) -> TermenvResult<()> {
            self.write_str(ENABLE_MOUSE_PIXELS_MODE)
        }

        pub fn disable_mouse_pixels_mode(&mut self) -> TermenvResult<()> {
            self.write_str(DISABLE_MOUSE_PIXELS_MODE)
        }

        pub fn enable_bracketed_paste(&mut self) -> TermenvResult<()> {
            self.write_str(ENABLE_BRACKETED_PASTE)
        }

        pub fn disable_bracketed_paste(&mut self) -> TermenvResult<()> {
            self.write_str(DISABLE_BRACKETED_PASTE)
        }

        pub fn change_scrolling_region(&mut self, top: u32, bottom: u32) -> TermenvResult<()> {
            self.write_str(&change_scrolling_region_seq(top, bottom))
        }

        pub fn insert_lines(&mut self, n: u32) -> TermenvResult<()> {
            self.write_str(&insert_lines_seq(n))
        }

        pub fn delete_lines(&mut self, n: u32) -> TermenvResult<()> {
            self.write_str(&delete_lines_seq(n))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(cursor_up_seq(3), "\x1b[3A")]
    #[test_case(cursor_down_seq(1), "\x1b[1B")]
    #[test_case(cursor_forward_seq(10), "\x1b[10C")]
    #[test_case(cursor_back_seq(2), "\x1b[2D")]
    #[test_case(cursor_next_line_seq(4), "\x1b[4E")]
    #[test_case(cursor_previous_line_seq(5), "\x1b[5F")]
    #[test_case(cursor_horizontal_absolute_seq(7), "\x1b[7G")]
    #[test_case(cursor_position_seq(2, 8), "\x1b[2;8H")]
    #[test_case(erase_display_seq(EraseMode::SavedLines), "\x1b[3J")]
    #[test_case(erase_line_seq(EraseLineMode::ToBeginning), "\x1b[1K")]
    #[test_case(clear_screen_seq(), "\x1b[2J")]
    #[test_case(clear_line_seq(), "\x1b[2K")]
    #[test_case(change_scrolling_region_seq(1, 20), "\x1b[1;20r")]
    #[test_case(insert_lines_seq(2), "\x1b[2L")]
    #[test_case(delete_lines_seq(2), "\x1b[2M")]
    #[test_case(set_window_title_seq("hi"), "\x1b]2;hi\x07")]
    #[test_case(set_foreground_color_seq(&Color::rgb("#ff0000")), "\x1b]10;#ff0000\x07")]
    #[test_case(set_background_color_seq(&Color::ansi(0)), "\x1b]11;#000000\x07")]
    #[test_case(set_cursor_color_seq(&Color::ansi256(231)), "\x1b]12;#ffffff\x07")]
    fn test_parameterized_sequences(actual: String, expected: &str) {
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_fixed_sequences() {
        assert_eq!(SAVE_CURSOR_POSITION, "\x1b7");
        assert_eq!(RESTORE_CURSOR_POSITION, "\x1b8");
        assert_eq!(HIDE_CURSOR, "\x1b[?25l");
        assert_eq!(SHOW_CURSOR, "\x1b[?25h");
        assert_eq!(ALT_SCREEN, "\x1b[?1049h");
        assert_eq!(EXIT_ALT_SCREEN, "\x1b[?1049l");
        assert_eq!(SAVE_SCREEN, "\x1b[?47h");
        assert_eq!(RESTORE_SCREEN, "\x1b[?47l");
        assert_eq!(RESET_TERMINAL, "\x1bc");
        assert_eq!(ENABLE_MOUSE_PRESS, "\x1b[?1000h");
        assert_eq!(DISABLE_MOUSE, "\x1b[?1000l");
        assert_eq!(ENABLE_MOUSE_HILITE, "\x1b[?1001h");
        assert_eq!(ENABLE_MOUSE_CELL_MOTION, "\x1b[?1002h");
        assert_eq!(ENABLE_MOUSE_ALL_MOTION, "\x1b[?1003h");
        assert_eq!(DISABLE_MOUSE_EXTENDED_MODE, "\x1b[?1006l");
        assert_eq!(ENABLE_MOUSE_PIXELS_MODE, "\x1b[?1016h");
        assert_eq!(ENABLE_BRACKETED_PASTE, "\x1b[?2004h");
        assert_eq!(DISABLE_BRACKETED_PASTE, "\x1b[?2004l");
    }

    #[test_case(0, "")]
    #[test_case(1, "\x1b[2K")]
    #[test_case(3, "\x1b[2K\x1b[1A\x1b[2K\x1b[1A\x1b[2K")]
    fn test_clear_lines_seq(n: u32, expected: &str) {
        assert_eq!(clear_lines_seq(n), expected);
    }
}
