// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_termenv
//!
//! Figure out what a terminal can display, then produce the bytes that display it.
//!
//! The crate has three layers:
//!
//! 1. **Detection** ([`detect_color_profile()`], [`env_color_profile()`]) reads `TERM`,
//!    `COLORTERM`, `NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE`, `CI` and friends through an
//!    injectable [`Environ`] and picks a [`Profile`]: [`Profile::TrueColor`],
//!    [`Profile::Ansi256`], [`Profile::Ansi`] or [`Profile::Ascii`].
//! 2. **Conversion** ([`convert()`], [`Profile::convert()`]) degrades any [`Color`] to the
//!    nearest color that the profile can show. RGB to 256 uses Euclidean distance in the
//!    xterm cube and gray ramp, 256 to 16 uses HSLuv perceptual distance.
//! 3. **Rendering** ([`Style`], [`Output`], [`sequences`]) wraps text in SGR codes, and
//!    writes cursor, screen, hyperlink and notification sequences to a sink.
//!
//! ```rust
//! use r3bl_termenv::{Color, MapEnviron, Output, Profile};
//!
//! let env = MapEnviron::default().with("TERM", "xterm-256color");
//! let output = Output::builder(std::io::sink())
//!     .environ(env)
//!     .assume_tty(true)
//!     .build();
//! assert_eq!(output.color_profile(), Profile::Ansi256);
//!
//! let red = output.color("#ff0000").unwrap();
//! assert_eq!(red, Color::ansi256(196));
//!
//! let text = output.string("hello").bold().foreground(&red);
//! assert_eq!(text.to_string(), "\x1b[1;38;5;196mhello\x1b[0m");
//! ```
//!
//! The process-wide default output lives in [`global_output`]; it writes to stdout and is
//! created on first use.

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Debug flags. Events are only visible when the binary installs a `tracing` subscriber.
pub const DEBUG_TERMENV_DETECT: bool = true;
pub const DEBUG_TERMENV_OUTPUT: bool = true;

// Attach.
pub mod color;
pub mod constants;
pub mod detect_color_profile;
pub mod environ;
pub mod error;
pub mod output;
pub mod profile;
pub mod sequences;
pub mod style;

// Re-export.
pub use color::*;
pub use constants::*;
pub use detect_color_profile::*;
pub use environ::*;
pub use error::*;
pub use output::*;
pub use profile::*;
pub use sequences::*;
pub use style::*;
