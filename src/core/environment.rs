//! Generic `\begin{…}…\end{…}` environments and list environments

use super::node::{impl_container, render_children, Node, Render};

/// A named LaTeX environment such as `quote`, `center` or `multicols`.
///
/// Each option is emitted as its own brace group right after the
/// `\begin{name}`:
///
/// ```rust
/// use texweave::{Content, Environment, Render};
///
/// let mut cols = Environment::new("multicols").option("2");
/// cols.add(Content::new("left").no_indent());
/// assert_eq!(
///     cols.to_latex(),
///     "\n\\begin{multicols}{2}\n\\noindent left\n\\end{multicols}\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Environment {
    name: String,
    options: Vec<String>,
    tight: bool,
    children: Vec<Node>,
}

impl Environment {
    pub fn new(name: impl Into<String>) -> Self {
        Environment {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Append one `{option}` group
    pub fn option(mut self, option: impl Into<String>) -> Self {
        self.options.push(option.into());
        self
    }

    /// Replace all option groups
    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Remove paragraph spacing inside the environment
    pub fn tight(mut self, tight: bool) -> Self {
        self.tight = tight;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl_container!(Environment);

impl Render for Environment {
    fn render(&self, out: &mut Vec<String>) {
        let mut header = format!("\n\\begin{{{}}}", self.name);
        for option in &self.options {
            header.push('{');
            header.push_str(option);
            header.push('}');
        }
        if self.tight {
            header.push_str("\\setlength{\\parskip}{0cm} ");
        }
        header.push('\n');
        out.push(header);

        render_children(&self.children, out);

        out.push(format!("\n\\end{{{}}}\n", self.name));
    }
}

/// Which list environment to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListKind {
    /// Bulleted list
    #[default]
    Itemize,
    /// Numbered list
    Enumerate,
}

impl ListKind {
    /// Environment name
    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Itemize => "itemize",
            ListKind::Enumerate => "enumerate",
        }
    }
}

/// A bulleted or numbered list; every direct child becomes one `\item`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct List {
    kind: ListKind,
    tight: bool,
    children: Vec<Node>,
}

impl List {
    pub fn new(kind: ListKind) -> Self {
        List {
            kind,
            ..Default::default()
        }
    }

    pub fn itemize() -> Self {
        Self::new(ListKind::Itemize)
    }

    pub fn enumerate() -> Self {
        Self::new(ListKind::Enumerate)
    }

    /// Zero the item and paragraph spacing
    pub fn tight(mut self, tight: bool) -> Self {
        self.tight = tight;
        self
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }
}

impl_container!(List);

impl Render for List {
    fn render(&self, out: &mut Vec<String>) {
        let mut header = format!("\n\\begin{{{}}}", self.kind.as_str());
        if self.tight {
            header.push_str(" \\setlength{\\itemsep}{0cm} \\setlength{\\parskip}{0cm}");
        }
        header.push('\n');
        out.push(header);

        for item in &self.children {
            out.push(format!("\\item {}\n", item.to_latex()));
        }

        out.push(format!("\\end{{{}}}\n", self.kind.as_str()));
    }
}
