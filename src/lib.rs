//! # texweave
//!
//! Build LaTeX documents as a typed tree and serialize them to source,
//! optionally compiling to PDF with `pdflatex`.
//!
//! ## Features
//!
//! - **Typed nodes**: content, commands, environments, lists, headings,
//!   tables, figures, sub-figures and pictures
//! - **Exact output**: every node emits a fixed, documented LaTeX layout
//! - **Escaping**: plain text is converted to LaTeX-safe text once, on construction
//! - **PDF builds**: scoped build directory, multi-pass compile, overwrite protection
//!
//! ## Usage Examples
//!
//! ### Building a document
//!
//! ```rust
//! use texweave::{Content, Document, Heading, List, Package, Render};
//!
//! let mut doc = Document::new("article", ["11pt"]).unwrap();
//! doc.add(Package::new("tabularx"));
//!
//! let intro = doc.add(Heading::section("Introduction").numbered(true));
//! intro.add(Content::new("Costs rose 5% & more.").post_newlines(2));
//!
//! let list = intro.add(List::itemize().tight(true));
//! list.add("first");
//! list.add("second");
//!
//! let latex = doc.to_latex();
//! assert!(latex.starts_with("\\documentclass[11pt]{article}\n"));
//! assert!(latex.contains("\\section{Introduction}Costs rose 5% \\& more."));
//! assert!(latex.contains("\\item first\n"));
//! ```
//!
//! ### Writing and compiling
//!
//! ```rust,no_run
//! use texweave::{BuildOptions, Document, OutputOptions};
//!
//! let mut doc = Document::new("report", ["twoside"]).unwrap();
//! doc.add("Hello, World!");
//!
//! doc.tex_with(&OutputOptions::to_file("hello.tex").force(true));
//! let report = doc.pdf(&BuildOptions::to_path("hello.pdf")).unwrap();
//! for issue in &report.issues {
//!     eprintln!("{}", issue);
//! }
//! ```

/// Document object model
pub mod core;

/// Data layer - static escaping table
pub mod data;

/// Feature modules - builds, output files and sample documents
pub mod features;

/// Utility modules
pub mod utils;

// Re-export the document model
pub use core::{
    expand_column_spec, ClassDeclaration, Command, Content, Document, DocumentClass, DocumentItem,
    DocumentOptions, Element, Environment, Figure, Heading, HeadingKind, List, ListKind, Node,
    Package, Picture, Render, Row, SubFigure, Table, TableElement, Tag,
};

// Re-export data helpers
pub use data::{escape_latex, needs_escape};

// Re-export feature modules
pub use features::build::{BuildOptions, BuildReport, CompileOutput, LatexCompiler, Pdflatex};
pub use features::gallery;
pub use features::output::{open_with_viewer, save_latex, OutputOptions, TexOutput};

// Re-export utilities
pub use utils::error::{Error, ErrorKind, Result};
