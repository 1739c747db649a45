// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The process wide default [`Output`], bound to stdout.
//!
//! It is created lazily by the first call that needs it and then lives for the rest of
//! the process. Tests (or applications with a preference) can replace it with
//! [`set_override()`] and go back to lazy detection with [`reset()`].
//!
//! ```rust
//! use r3bl_termenv::{Output, Profile, global_output};
//!
//! global_output::set_override(Output::builder(std::io::sink()).profile(Profile::Ansi).build());
//! assert_eq!(global_output::string("x").bold().to_string(), "\x1b[1mx\x1b[0m");
//! global_output::reset();
//! ```
//!
//! # Testing support
//!
//! The [serial_test](https://crates.io/crates/serial_test) crate is used to test this
//! module. In any test that touches the default output, please use the `#[serial]`
//! attribute. Otherwise tests running in parallel will see each other's overrides.

use std::sync::{Mutex, PoisonError};

use crate::{Color, DEBUG_TERMENV_OUTPUT, Output, Profile, Style, TermenvResult};

static DEFAULT_OUTPUT: Mutex<Option<Output>> = Mutex::new(None);

/// Runs `f` with the default output, creating it first if needed.
///
/// The default output stays locked while `f` runs. Use the `&mut Output` that `f`
/// receives; calling any other function of this module from inside `f` deadlocks.
///
/// A panic in an earlier `f` leaves the output usable, so lock poisoning is ignored.
pub fn with<R>(f: impl FnOnce(&mut Output) -> R) -> R {
    let mut guard = DEFAULT_OUTPUT
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    let output = guard.get_or_insert_with(|| {
        let it = Output::stdout();
        DEBUG_TERMENV_OUTPUT.then(|| {
            tracing::debug!(message = "Default output initialized", profile = %it.profile());
        });
        it
    });
    f(output)
}

/// Replaces the default output.
pub fn set_override(output: Output) {
    DEBUG_TERMENV_OUTPUT.then(|| {
        tracing::debug!(message = "Default output overridden", profile = %output.profile());
    });
    let mut guard = DEFAULT_OUTPUT
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = Some(output);
}

/// Drops the default output. The next call re-detects from the environment.
pub fn reset() {
    let mut guard = DEFAULT_OUTPUT
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}

/// The profile that the default output renders with.
#[must_use]
pub fn profile() -> Profile { with(|it| it.profile()) }

#[must_use]
pub fn color_profile() -> Profile { with(|it| it.color_profile()) }

#[must_use]
pub fn env_color_profile() -> Profile { with(|it| it.env_color_profile()) }

#[must_use]
pub fn env_no_color() -> bool { with(|it| it.env_no_color()) }

#[must_use]
pub fn has_dark_background() -> bool { with(|it| it.has_dark_background()) }

#[must_use]
pub fn foreground_color() -> Color { with(|it| it.foreground_color()) }

#[must_use]
pub fn background_color() -> Color { with(|it| it.background_color()) }

#[must_use]
pub fn string(text: impl Into<String>) -> Style { with(|it| it.string(text)) }

#[must_use]
pub fn color(input: &str) -> Option<Color> { with(|it| it.color(input)) }

/// Several pieces of text joined with a space, see [`Output::strings()`].
#[must_use]
pub fn strings<I>(parts: I) -> Style
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    with(|it| it.strings(parts))
}

// Writers. Each one writes a single sequence to the default output.

/// # Errors
///
/// Returns an error if the underlying writer fails.
pub fn write_str(input: &str) -> TermenvResult<()> { with(|it| it.write_str(input)) }

/// # Errors
///
/// Returns an error if the underlying writer fails.
pub fn move_cursor(row: u32, column: u32) -> TermenvResult<()> {
    with(|it| it.move_cursor(row, column))
}

/// # Errors
///
/// Returns an error if the underlying writer fails.
pub fn clear_screen() -> TermenvResult<()> { with(Output::clear_screen) }

/// # Errors
///
/// Returns an error if the underlying writer fails.
pub fn hyperlink(link: &str, name: &str) -> TermenvResult<()> {
    with(|it| it.hyperlink(link, name))
}

/// # Errors
///
/// Returns an error if the underlying writer fails.
pub fn notify(title: &str, body: &str) -> TermenvResult<()> {
    with(|it| it.notify(title, body))
}
