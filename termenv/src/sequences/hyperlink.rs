// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! OSC 8 hyperlinks.
//!
//! More info: <https://gist.github.com/egmontkob/eb114294efbcd5adb1944c9f3cb5feda>

use crate::{OSC, Output, ST, TermenvResult};

/// `name`, clickable and pointing to `link`. An empty `link` returns `name` unchanged.
///
/// ```rust
/// use r3bl_termenv::hyperlink;
///
/// assert_eq!(
///     hyperlink("https://r3bl.com", "R3BL"),
///     "\x1b]8;;https://r3bl.com\x1b\\R3BL\x1b]8;;\x1b\\"
/// );
/// assert_eq!(hyperlink("", "R3BL"), "R3BL");
/// ```
#[must_use]
pub fn hyperlink(link: &str, name: &str) -> String {
    if link.is_empty() {
        return name.to_string();
    }
    format!("{OSC}8;;{link}{ST}{name}{OSC}8;;{ST}")
}

impl Output {
    /// Writes [`hyperlink()`].
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn hyperlink(&mut self, link: &str, name: &str) -> TermenvResult<()> {
        self.write_str(&hyperlink(link, name))
    }
}
