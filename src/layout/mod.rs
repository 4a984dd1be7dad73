//! Utilities for positioning content on pages.
//!
//! This module provides the paragraph wrapper, text measurement helpers,
//! page [`Margins`], and the vertical [`Cursor`] that drives top-to-bottom
//! placement. Wrapping is recomputed on every call; nothing here holds
//! state beyond the cursor's running offset.

mod margins;
mod text;

pub use margins::*;
pub use text::*;
