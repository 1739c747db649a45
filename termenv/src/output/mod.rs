// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod global_output;
mod output_impl;

// Re-export.
pub use output_impl::*;
