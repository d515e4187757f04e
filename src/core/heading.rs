//! Chapter / section headings

use super::node::{impl_container, render_children, Node, Render};
use crate::data::escape_latex;

/// Sectioning level of a [`Heading`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeadingKind {
    /// `\chapter` (report and book classes only)
    Chapter,
    Section,
    SubSection,
    SubSubSection,
}

impl HeadingKind {
    /// LaTeX command name without the backslash
    pub fn keyword(&self) -> &'static str {
        match self {
            HeadingKind::Chapter => "chapter",
            HeadingKind::Section => "section",
            HeadingKind::SubSection => "subsection",
            HeadingKind::SubSubSection => "subsubsection",
        }
    }
}

/// A sectioning command followed by the content that belongs to it.
///
/// Headings are unnumbered (`\section*`) unless [`Heading::numbered`] is
/// set. `clear_double_page` wins over `clear_page` when both are set.
///
/// ```rust
/// use texweave::{Heading, Render};
///
/// let mut chapter = Heading::chapter("ChapterName").numbered(true).label("1");
/// chapter.add("This text is part of the Chapter");
/// assert_eq!(
///     chapter.to_latex(),
///     "\n\\chapter{ChapterName}\\label{1}\nThis text is part of the Chapter"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    kind: HeadingKind,
    title: String,
    numbered: bool,
    label: Option<String>,
    clear_page: bool,
    clear_double_page: bool,
    children: Vec<Node>,
}

impl Heading {
    /// Create a heading; the title is escaped
    pub fn new(kind: HeadingKind, title: impl Into<String>) -> Self {
        Heading {
            kind,
            title: escape_latex(&title.into()),
            numbered: false,
            label: None,
            clear_page: false,
            clear_double_page: false,
            children: Vec::new(),
        }
    }

    pub fn chapter(title: impl Into<String>) -> Self {
        Self::new(HeadingKind::Chapter, title)
    }

    pub fn section(title: impl Into<String>) -> Self {
        Self::new(HeadingKind::Section, title)
    }

    pub fn subsection(title: impl Into<String>) -> Self {
        Self::new(HeadingKind::SubSection, title)
    }

    pub fn subsubsection(title: impl Into<String>) -> Self {
        Self::new(HeadingKind::SubSubSection, title)
    }

    pub fn numbered(mut self, numbered: bool) -> Self {
        self.numbered = numbered;
        self
    }

    /// Attach a `\label` for cross references
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Emit `\clearpage` before the heading
    pub fn clear_page(mut self, clear: bool) -> Self {
        self.clear_page = clear;
        self
    }

    /// Emit `\cleardoublepage` before the heading
    pub fn clear_double_page(mut self, clear: bool) -> Self {
        self.clear_double_page = clear;
        self
    }

    pub fn kind(&self) -> HeadingKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl_container!(Heading);

impl Render for Heading {
    fn render(&self, out: &mut Vec<String>) {
        out.push("\n".to_string());

        if self.clear_double_page {
            out.push("\\cleardoublepage\n".to_string());
        } else if self.clear_page {
            out.push("\\clearpage\n".to_string());
        }

        out.push(format!("\\{}", self.kind.keyword()));
        if !self.numbered {
            out.push("*".to_string());
        }
        out.push(format!("{{{}}}", self.title));

        if let Some(label) = self.label.as_deref().filter(|l| !l.is_empty()) {
            out.push(format!("\\label{{{}}}\n", label));
        }

        render_children(&self.children, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_section_with_label() {
        let s = Heading::section("SectionName").numbered(true).label("1.1");
        assert_eq!(s.to_latex(), "\n\\section{SectionName}\\label{1.1}\n");
    }

    #[test]
    fn test_unnumbered_is_starred() {
        let s = Heading::subsubsection("Notes");
        assert_eq!(s.fragments(), vec!["\n", "\\subsubsection", "*", "{Notes}"]);
    }

    #[test]
    fn test_clear_double_page_wins() {
        let h = Heading::chapter("Intro")
            .clear_page(true)
            .clear_double_page(true);
        let latex = h.to_latex();
        assert!(latex.contains("\\cleardoublepage\n"));
        assert!(!latex.contains("\\clearpage"));
    }

    #[test]
    fn test_clear_page_alone() {
        let h = Heading::section("Next").clear_page(true).numbered(true);
        assert_eq!(h.to_latex(), "\n\\clearpage\n\\section{Next}");
    }

    #[test]
    fn test_title_is_escaped() {
        let h = Heading::subsection("Q&A \u{2014} #1");
        assert_eq!(h.title(), "Q\\&A {\\textemdash} \\#1");
    }

    #[test]
    fn test_empty_label_is_skipped() {
        let h = Heading::section("X").numbered(true).label("");
        assert_eq!(h.to_latex(), "\n\\section{X}");
    }

    #[test]
    fn test_keywords() {
        assert_eq!(HeadingKind::Chapter.keyword(), "chapter");
        assert_eq!(HeadingKind::SubSection.keyword(), "subsection");
    }
}
