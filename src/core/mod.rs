//! Document object model
//!
//! This module contains the node types and their LaTeX serialization:
//! - `node`: the shared `Render` / `Element` capability and the `Node` sum
//! - `content`, `environment`, `heading`, `table`, `figure`: body nodes
//! - `preamble`: document class, packages and commands
//! - `document`: the root aggregator

pub mod content;
pub mod document;
pub mod environment;
pub mod figure;
pub mod heading;
pub mod node;
pub mod preamble;
pub mod table;

pub use content::{Content, Tag};
pub use document::{Document, DocumentItem, DocumentOptions};
pub use environment::{Environment, List, ListKind};
pub use figure::{Figure, Picture, SubFigure};
pub use heading::{Heading, HeadingKind};
pub use node::{Element, Node, Render};
pub use preamble::{ClassDeclaration, Command, DocumentClass, Package};
pub use table::{expand_column_spec, Row, Table, TableElement};
