//! Utility modules
//!
//! This module contains the error and result types shared by the document
//! model and the build layer.

pub mod error;

// Re-export commonly used items
pub use error::{Error, ErrorKind, Result};
