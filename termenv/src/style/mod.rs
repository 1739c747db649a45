// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
mod sgr_code;
mod style_impl;

// Re-export.
pub use sgr_code::*;
pub use style_impl::*;
