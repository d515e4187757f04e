//! `tabularx` tables
//!
//! Column specs use the usual tabular letters plus three stretchable
//! shorthands:
//!
//! | Letter | Expands to                           |
//! |--------|--------------------------------------|
//! | `L`    | `>{\raggedright\arraybackslash}X`    |
//! | `C`    | `>{\centering\arraybackslash}X`      |
//! | `R`    | `>{\raggedleft\arraybackslash}X`     |
//!
//! Everything else (`l`, `c`, `r`, `|`, `@{}` …) is passed through.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::content::Tag;
use super::node::{impl_container, Element, Node, Render};
use crate::utils::error::{Error, Result};

lazy_static! {
    static ref STRETCH_COLUMN: Regex = Regex::new(r"[LCR]").unwrap();
}

/// Expand the `L`/`C`/`R` shorthands of a column spec in one pass
pub fn expand_column_spec(spec: &str) -> String {
    STRETCH_COLUMN
        .replace_all(spec, |caps: &Captures| match &caps[0] {
            "L" => r">{\raggedright\arraybackslash}X",
            "C" => r">{\centering\arraybackslash}X",
            _ => r">{\raggedleft\arraybackslash}X",
        })
        .into_owned()
}

/// Items a [`Table`] accepts as direct children: rows and rule lines
/// such as `\hline`.
pub trait TableElement: Element {}

impl TableElement for Row {}
impl TableElement for Tag {}

/// A full-width `tabularx` table.
///
/// ```rust
/// use texweave::{Render, Row, Table, Tag};
///
/// let mut table = Table::new("| l | C |");
/// table.add(Tag::new("hline"));
/// let row = table.add(Row::new());
/// row.add("Name");
/// row.add("Value");
///
/// let latex = table.to_latex();
/// assert!(latex.contains(r"{| l | >{\centering\arraybackslash}X |}"));
/// assert!(latex.contains("\\hline\nName & Value \\\\"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    column_spec: String,
    children: Vec<Node>,
}

impl Table {
    pub fn new(column_spec: impl Into<String>) -> Self {
        Table {
            column_spec: column_spec.into(),
            children: Vec::new(),
        }
    }

    /// Append a row or rule line and return it
    pub fn add<E: TableElement>(&mut self, item: E) -> &mut E::Target {
        item.attach(&mut self.children)
    }

    /// Append an already type-erased node.
    ///
    /// Only `Row` and `Tag` nodes are accepted.
    pub fn add_node(&mut self, node: Node) -> Result<&mut Node> {
        match node {
            Node::Row(_) | Node::Tag(_) => {
                self.children.push(node);
                let last = self.children.len() - 1;
                Ok(&mut self.children[last])
            }
            other => Err(Error::mismatch("Table", other.kind_name())),
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// The column spec as given, before shorthand expansion
    pub fn column_spec(&self) -> &str {
        &self.column_spec
    }
}

impl Render for Table {
    fn render(&self, out: &mut Vec<String>) {
        out.push(format!(
            "\n\n\\noindent \\begin{{tabularx}} {{\\columnwidth}}{{{}}}\n",
            expand_column_spec(&self.column_spec)
        ));

        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                out.push("\n".to_string());
            }
            child.render(out);
        }

        out.push("\n \\end{tabularx} \n".to_string());
    }
}

/// One table row; each child is a cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    children: Vec<Node>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row of plain-text cells
    pub fn from_cells<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Element,
    {
        let mut row = Row::new();
        for cell in cells {
            row.add(cell);
        }
        row
    }
}

impl_container!(Row);

impl Render for Row {
    fn render(&self, out: &mut Vec<String>) {
        let last = self.children.len().saturating_sub(1);
        for (i, cell) in self.children.iter().enumerate() {
            cell.render(out);
            out.push(if i < last { " & " } else { " \\\\" }.to_string());
        }
    }
}
