//! The root document: class declaration, preamble and body

use log::debug;

use super::content::{Content, Tag};
use super::environment::{Environment, List};
use super::figure::{Figure, Picture, SubFigure};
use super::heading::Heading;
use super::node::{Element, Node, Render};
use super::preamble::{ClassDeclaration, Command, DocumentClass, Package};
use super::table::{Row, Table};
use crate::utils::error::Result;

/// Document construction options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    /// Register `\usepackage[normalem]{ulem}` up front so that underlined
    /// [`Content`] can break across lines
    pub include_underline_support: bool,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            include_underline_support: true,
        }
    }
}

impl DocumentOptions {
    /// No implicit packages
    pub fn bare() -> Self {
        Self {
            include_underline_support: false,
        }
    }
}

/// A complete LaTeX document.
///
/// Items added with [`Document::add`] are routed by type: packages and
/// commands go to the preamble in insertion order, everything else to the
/// body.
///
/// ```rust
/// use texweave::{Document, Render};
///
/// let mut doc = Document::new("report", ["9pt", "twoside"]).unwrap();
/// doc.add("Hello, World!");
/// assert_eq!(
///     doc.to_latex(),
///     "\\documentclass[9pt,twoside]{report}\n\\usepackage[normalem]{ulem}\n\\begin{document}\nHello, World!\n\\end{document}"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    class: ClassDeclaration,
    packages: Vec<Package>,
    commands: Vec<Command>,
    body: Vec<Node>,
}

impl Document {
    /// Create a document from a class name, failing for unsupported classes
    pub fn new<I, S>(class: &str, options: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let class: DocumentClass = class.parse()?;
        Ok(Self::with_options(class, options, DocumentOptions::default()))
    }

    pub fn with_options<I, S>(class: DocumentClass, options: I, opts: DocumentOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut doc = Document {
            class: ClassDeclaration::new(class, options),
            packages: Vec::new(),
            commands: Vec::new(),
            body: Vec::new(),
        };
        if opts.include_underline_support {
            doc.add(Package::with_options("ulem", ["normalem"]));
        }
        doc
    }

    /// Add a package, a command, a body node or plain text
    pub fn add<I: DocumentItem>(&mut self, item: I) -> &mut I::Target {
        item.insert(self)
    }

    /// Append an already type-erased body node
    pub fn add_node(&mut self, node: Node) -> &mut Node {
        self.body.push(node);
        let last = self.body.len() - 1;
        &mut self.body[last]
    }

    pub fn class(&self) -> DocumentClass {
        self.class.class
    }

    pub fn class_options(&self) -> &[String] {
        &self.class.options
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn body(&self) -> &[Node] {
        &self.body
    }
}

impl Render for Document {
    fn render(&self, out: &mut Vec<String>) {
        self.class.render(out);
        for package in &self.packages {
            package.render(out);
        }
        for command in &self.commands {
            command.render(out);
        }

        out.push("\\begin{document}\n".to_string());
        for node in &self.body {
            node.render(out);
        }
        out.push("\n\\end{document}".to_string());

        debug!(
            "rendered {} document: {} packages, {} commands, {} body nodes",
            self.class.class,
            self.packages.len(),
            self.commands.len(),
            self.body.iter().map(Node::node_count).sum::<usize>()
        );
    }
}

/// Anything a [`Document`] accepts.
pub trait DocumentItem {
    /// Type handed back after insertion
    type Target;

    /// Store `self` in the right section of `doc`
    fn insert(self, doc: &mut Document) -> &mut Self::Target;
}

impl DocumentItem for Package {
    type Target = Package;

    fn insert(self, doc: &mut Document) -> &mut Package {
        doc.packages.push(self);
        let last = doc.packages.len() - 1;
        &mut doc.packages[last]
    }
}

impl DocumentItem for Command {
    type Target = Command;

    fn insert(self, doc: &mut Document) -> &mut Command {
        doc.commands.push(self);
        let last = doc.commands.len() - 1;
        &mut doc.commands[last]
    }
}

macro_rules! impl_body_item {
    ($($ty:ty),* $(,)?) => {
        $(
            impl DocumentItem for $ty {
                type Target = <Self as Element>::Target;

                fn insert(self, doc: &mut Document) -> &mut Self::Target {
                    Element::attach(self, &mut doc.body)
                }
            }
        )*
    };
}

impl_body_item!(
    Content, Tag, Environment, List, Heading, Table, Row, Figure, SubFigure, Picture, &str, String,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorKind;

    #[test]
    fn test_empty_document() {
        let doc = Document::new("article", Vec::<String>::new()).unwrap();
        assert_eq!(
            doc.to_latex(),
            "\\documentclass[]{article}\n\\usepackage[normalem]{ulem}\n\\begin{document}\n\n\\end{document}"
        );
    }

    #[test]
    fn test_bare_document_has_no_packages() {
        let doc = Document::with_options(DocumentClass::Book, ["a4paper"], DocumentOptions::bare());
        assert!(doc.packages().is_empty());
        assert_eq!(
            doc.to_latex(),
            "\\documentclass[a4paper]{book}\n\\begin{document}\n\n\\end{document}"
        );
    }

    #[test]
    fn test_unsupported_class_is_rejected() {
        let err = Document::new("memoir", Vec::<String>::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_items_are_routed_by_type() {
        let mut doc = Document::new("article", Vec::<String>::new()).unwrap();
        doc.add(Command::new("title", ["T"]));
        doc.add(Package::new("graphicx"));
        doc.add(Heading::section("One"));
        doc.add("text");

        assert_eq!(doc.packages().len(), 2);
        assert_eq!(doc.packages()[1].name(), "graphicx");
        assert_eq!(doc.commands().len(), 1);
        assert_eq!(doc.body().len(), 2);
        assert!(matches!(doc.body()[1], Node::Content(_)));
    }

    #[test]
    fn test_preamble_order_is_fixed() {
        let mut doc = Document::new("article", Vec::<String>::new()).unwrap();
        doc.add(Command::new("author", ["A"]));
        doc.add("body");
        doc.add(Package::new("float"));
        let latex = doc.to_latex();

        let pkg = latex.find("\\usepackage{float}").unwrap();
        let cmd = latex.find("\\author{A}").unwrap();
        let begin = latex.find("\\begin{document}").unwrap();
        assert!(pkg < cmd && cmd < begin);
        assert!(latex.ends_with("body\n\\end{document}"));
    }

    #[test]
    fn test_duplicate_packages_are_kept() {
        let mut doc = Document::new("article", Vec::<String>::new()).unwrap();
        doc.add(Package::new("ulem"));
        assert_eq!(doc.to_latex().matches("{ulem}").count(), 2);
    }

    #[test]
    fn test_add_returns_body_child() {
        let mut doc = Document::new("report", Vec::<String>::new()).unwrap();
        let chapter = doc.add(Heading::chapter("C").numbered(true));
        chapter.add(Heading::section("S").numbered(true));
        assert_eq!(doc.body()[0].children().len(), 1);
    }
}
