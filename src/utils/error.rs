//! Error handling for texweave
//!
//! This module provides a unified error type and result type for document
//! construction, persistence and PDF builds.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Broad classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid construction input (unknown document class, wrong child type)
    Validation,
    /// The external LaTeX compiler reported a failure
    Build,
    /// An output file already exists and overwriting was not requested
    Conflict,
    /// Underlying filesystem or process error
    Io,
}

/// texweave error type
#[derive(Error, Debug)]
pub enum Error {
    /// Requested document class is not one of the supported classes
    #[error("Requested document class '{name}' not in list of supported types: {supported}")]
    UnsupportedClass { name: String, supported: String },

    /// An item of the wrong kind was added to a container
    #[error("Type mismatch: cannot add {found} to {container}")]
    TypeMismatch {
        container: &'static str,
        found: &'static str,
    },

    /// The LaTeX compiler exited with a non-zero status
    #[error("PDF build failed: {} Return Code: {} Error Message: {output}", .tex.display(), fmt_code(.code))]
    Build {
        tex: PathBuf,
        code: Option<i32>,
        output: String,
    },

    /// Destination exists and `force` was not set
    #[error("File already exists: {}", .0.display())]
    Conflict(PathBuf),

    /// IO error (file writes, process spawning)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedClass { .. } | Error::TypeMismatch { .. } => ErrorKind::Validation,
            Error::Build { .. } => ErrorKind::Build,
            Error::Conflict(_) => ErrorKind::Conflict,
            Error::Io(_) => ErrorKind::Io,
        }
    }

    pub fn mismatch(container: &'static str, found: &'static str) -> Self {
        Error::TypeMismatch { container, found }
    }

    pub fn build(tex: impl Into<PathBuf>, code: Option<i32>, output: impl Into<String>) -> Self {
        Error::Build {
            tex: tex.into(),
            code,
            output: output.into(),
        }
    }

    pub fn conflict(path: impl Into<PathBuf>) -> Self {
        Error::Conflict(path.into())
    }
}

fn fmt_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => c.to_string(),
        None => "none".to_string(),
    }
}

/// Result type for texweave operations
pub type Result<T> = std::result::Result<T, Error>;
