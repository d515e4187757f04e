//! Data layer - Static mappings
//!
//! This module contains the static character table used to turn plain text
//! into LaTeX-safe text.

pub mod escapes;

// Re-export commonly used items
pub use escapes::{escape_latex, needs_escape, UNICODE_TO_LATEX};
