// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error types for the few fallible edges of the crate.
//!
//! Detection, conversion and rendering never fail: they degrade to [`Color::NoColor`] or
//! plain text. Errors only surface when parsing a user supplied color string via
//! [`str::parse`] and when writing to an [`Output`] sink.
//!
//! [`Color::NoColor`]: crate::Color::NoColor
//! [`Output`]: crate::Output

/// Errors that can occur when parsing colors or writing sequences.
///
/// Each variant carries a [diagnostic code] so that binaries which render errors with
/// [`miette`] get actionable help text.
///
/// [diagnostic code]: miette::Diagnostic::code
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum TermenvError {
    /// The string is neither a `#` prefixed hex color nor an unsigned integer.
    #[error("Invalid color: {input:?}")]
    #[diagnostic(
        code(r3bl_termenv::color::invalid),
        help(
            "Use a hex color like \"#ff8800\" or \"#f80\", or a palette index like \
             \"9\" (ANSI) or \"196\" (ANSI 256)."
        )
    )]
    InvalidColor {
        /// The rejected input.
        input: String,
    },

    /// Writing to the output sink failed.
    #[error("Failed to write to output")]
    #[diagnostic(code(r3bl_termenv::output::io))]
    Io(#[from] std::io::Error),
}

pub type TermenvResult<T> = Result<T, TermenvError>;
