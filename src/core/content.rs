//! Text content and single LaTeX commands

use super::node::{impl_container, render_children, Node, Render};
use crate::data::escape_latex;

/// A run of text with optional formatting.
///
/// Text is escaped once, when the node is built with [`Content::new`].
/// [`Content::raw`] keeps the text verbatim for native LaTeX such as math:
///
/// ```rust
/// use texweave::{Content, Render};
///
/// let math = Content::raw(r"$\int_{a}^{b} x^2 dx$").post_newlines(2);
/// assert_eq!(math.to_latex(), "$\\int_{a}^{b} x^2 dx$\n\n");
///
/// let bold = Content::new("50% off & more").bold();
/// assert_eq!(bold.to_latex(), "\\begin{bf}50% off \\& more\\end{bf}");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Content {
    text: String,
    convert: bool,
    bold: bool,
    italic: bool,
    underline: bool,
    pre_newlines: usize,
    post_newlines: usize,
    no_indent: bool,
    flatten: bool,
    children: Vec<Node>,
}

impl Content {
    /// Create content from plain text, escaping LaTeX special characters
    pub fn new(text: impl Into<String>) -> Self {
        Content {
            text: escape_latex(&text.into()),
            convert: true,
            ..Default::default()
        }
    }

    /// Create content from LaTeX source that is emitted verbatim
    pub fn raw(text: impl Into<String>) -> Self {
        Content {
            text: text.into(),
            convert: false,
            ..Default::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Underline with `\uline`, which needs the `ulem` package
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Number of newlines emitted before the content
    pub fn pre_newlines(mut self, count: usize) -> Self {
        self.pre_newlines = count;
        self
    }

    /// Number of newlines emitted after the content
    pub fn post_newlines(mut self, count: usize) -> Self {
        self.post_newlines = count;
        self
    }

    /// Prefix with `\noindent`
    pub fn no_indent(mut self) -> Self {
        self.no_indent = true;
        self
    }

    /// Join all descendant output into the same fragment as this text
    pub fn flatten(mut self) -> Self {
        self.flatten = true;
        self
    }

    /// The stored (already escaped, if converted) text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the text was escaped on construction
    pub fn is_converted(&self) -> bool {
        self.convert
    }
}

impl_container!(Content);

impl Render for Content {
    fn render(&self, out: &mut Vec<String>) {
        push_newlines(out, self.pre_newlines);

        if self.no_indent {
            out.push("\\noindent ".to_string());
        }
        if self.underline {
            out.push("\\uline{".to_string());
        }
        if self.bold {
            out.push("\\begin{bf}".to_string());
        }
        if self.italic {
            out.push("\\begin{em}".to_string());
        }

        if self.flatten {
            let mut nested = Vec::new();
            render_children(&self.children, &mut nested);
            out.push(format!("{}{}", self.text, nested.concat()));
        } else {
            out.push(self.text.clone());
            render_children(&self.children, out);
        }

        // closing order mirrors opening order
        if self.italic {
            out.push("\\end{em}".to_string());
        }
        if self.bold {
            out.push("\\end{bf}".to_string());
        }
        if self.underline {
            out.push("}".to_string());
        }

        push_newlines(out, self.post_newlines);
    }
}

/// A single LaTeX command such as `\hline` or `\maketitle`.
///
/// Renders as `\name{arg1}{arg2}…`, surrounded by the requested newlines and
/// followed by any children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tag {
    name: String,
    arguments: Vec<String>,
    pre_newlines: usize,
    post_newlines: usize,
    children: Vec<Node>,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Tag {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Tag with brace-delimited arguments
    pub fn with_args<I, S>(name: impl Into<String>, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Tag {
            name: name.into(),
            arguments: arguments.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn pre_newlines(mut self, count: usize) -> Self {
        self.pre_newlines = count;
        self
    }

    pub fn post_newlines(mut self, count: usize) -> Self {
        self.post_newlines = count;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl_container!(Tag);

impl Render for Tag {
    fn render(&self, out: &mut Vec<String>) {
        push_newlines(out, self.pre_newlines);
        out.push(command_with_args(&self.name, &self.arguments));
        push_newlines(out, self.post_newlines);
        render_children(&self.children, out);
    }
}

/// `\name{a}{b}…`
pub(crate) fn command_with_args(name: &str, arguments: &[String]) -> String {
    let mut tag = format!("\\{}", name);
    for arg in arguments {
        tag.push('{');
        tag.push_str(arg);
        tag.push('}');
    }
    tag
}

fn push_newlines(out: &mut Vec<String>, count: usize) {
    out.extend(std::iter::repeat("\n".to_string()).take(count));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_content() {
        assert_eq!(Content::new("Hello, World!").to_latex(), "Hello, World!");
    }

    #[test]
    fn test_content_escapes_on_construction() {
        let c = Content::new("#1 & $2");
        assert_eq!(c.text(), "\\#1 \\& \\$2");
        assert!(c.is_converted());
        assert!(!Content::raw("$x$").is_converted());
        assert_eq!(Content::raw("$x$").text(), "$x$");
    }

    #[test]
    fn test_wrapper_nesting_order() {
        let c = Content::new("x").bold().italic().underline();
        assert_eq!(
            c.fragments(),
            vec![
                "\\uline{",
                "\\begin{bf}",
                "\\begin{em}",
                "x",
                "\\end{em}",
                "\\end{bf}",
                "}",
            ]
        );
    }

    #[test]
    fn test_newline_counts() {
        for (pre, post) in [(0, 0), (1, 0), (0, 3), (2, 2)] {
            let c = Content::new("body")
                .pre_newlines(pre)
                .post_newlines(post)
                .bold()
                .no_indent();
            let frags = c.fragments();
            let leading = frags.iter().take_while(|f| *f == "\n").count();
            let trailing = frags.iter().rev().take_while(|f| *f == "\n").count();
            assert_eq!(leading, pre);
            assert_eq!(trailing, post);
        }
    }

    #[test]
    fn test_no_indent_marker() {
        let c = Content::new("Example").no_indent().post_newlines(1);
        assert_eq!(c.to_latex(), "\\noindent Example\n");
    }

    #[test]
    fn test_children_render_after_text() {
        let mut c = Content::new("Parent ");
        c.add(Content::new("child").italic());
        assert_eq!(
            c.fragments(),
            vec!["Parent ", "\\begin{em}", "child", "\\end{em}"]
        );
    }

    #[test]
    fn test_flatten_joins_descendants() {
        let mut c = Content::new("Parent ").flatten().bold();
        c.add(Content::new("child").italic());
        assert_eq!(
            c.fragments(),
            vec![
                "\\begin{bf}",
                "Parent \\begin{em}child\\end{em}",
                "\\end{bf}"
            ]
        );
    }

    #[test]
    fn test_tag_rendering() {
        assert_eq!(Tag::new("maketitle").to_latex(), "\\maketitle");
        let tag = Tag::with_args("setcounter", ["page", "1"])
            .pre_newlines(1)
            .post_newlines(2);
        assert_eq!(tag.to_latex(), "\n\\setcounter{page}{1}\n\n");
    }

    #[test]
    fn test_tag_children_follow_newlines() {
        let mut tag = Tag::new("newpage").post_newlines(1);
        tag.add("after");
        assert_eq!(tag.fragments(), vec!["\\newpage", "\n", "after"]);
    }
}
