// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! OSC 777 desktop notifications (rxvt, foot, and others).

use crate::{OSC, Output, ST, TermenvResult};

#[must_use]
pub fn notify(title: &str, body: &str) -> String {
    format!("{OSC}777;notify;{title};{body}{ST}")
}

impl Output {
    /// Writes [`notify()`].
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn notify(&mut self, title: &str, body: &str) -> TermenvResult<()> {
        self.write_str(&notify(title, body))
    }
}
