// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixed template escape sequences that don't depend on the color profile.

// Attach.
mod hyperlink;
mod notification;
mod screen;

// Re-export.
pub use hyperlink::*;
pub use notification::*;
pub use screen::*;
