//! Feature modules - everything beyond rendering
//!
//! - PDF builds through an external compiler
//! - Writing `.tex` files and opening results
//! - The sample document gallery

pub mod build;
pub mod gallery;
pub mod output;

// Re-export commonly used types
pub use build::{BuildOptions, BuildReport, CompileOutput, LatexCompiler, Pdflatex};
pub use gallery::{Sample, SAMPLES};
pub use output::{open_with_viewer, save_latex, OutputOptions, TexOutput};
