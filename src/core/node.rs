//! Node capability shared by every body element
//!
//! Body content is a tree of [`Node`]s. Each node kind is its own struct;
//! [`Node`] is the closed sum over them. Containers own their children in
//! insertion order and expose the same `add` operation:
//!
//! ```rust
//! use texweave::{Heading, Render};
//!
//! let mut section = Heading::section("Results").numbered(true);
//! let sub = section.add(Heading::subsection("Details"));
//! sub.add("Plain text is wrapped into a Content node");
//!
//! assert!(section.to_latex().contains("\\subsection*{Details}"));
//! ```

use super::content::{Content, Tag};
use super::environment::{Environment, List};
use super::figure::{Figure, Picture, SubFigure};
use super::heading::Heading;
use super::table::{Row, Table};

/// Produces the LaTeX text fragments for a node and its descendants
pub trait Render {
    /// Append this node's fragments to `out`, depth-first, in child order
    fn render(&self, out: &mut Vec<String>);

    /// Collect this node's fragments
    fn fragments(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.render(&mut out);
        out
    }

    /// Render to a single LaTeX string
    fn to_latex(&self) -> String {
        self.fragments().concat()
    }
}

/// Any element of the document body
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Content(Content),
    Tag(Tag),
    Environment(Environment),
    List(List),
    Heading(Heading),
    Table(Table),
    Row(Row),
    Figure(Figure),
    SubFigure(SubFigure),
    Picture(Picture),
}

impl Node {
    /// Human readable name of the node kind
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Content(_) => "Content",
            Node::Tag(_) => "Tag",
            Node::Environment(_) => "Environment",
            Node::List(_) => "List",
            Node::Heading(_) => "Heading",
            Node::Table(_) => "Table",
            Node::Row(_) => "Row",
            Node::Figure(_) => "Figure",
            Node::SubFigure(_) => "SubFigure",
            Node::Picture(_) => "Picture",
        }
    }

    /// Direct children of this node
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Content(n) => n.children(),
            Node::Tag(n) => n.children(),
            Node::Environment(n) => n.children(),
            Node::List(n) => n.children(),
            Node::Heading(n) => n.children(),
            Node::Table(n) => n.children(),
            Node::Row(n) => n.children(),
            Node::Figure(n) => n.children(),
            Node::SubFigure(n) => n.children(),
            Node::Picture(n) => n.children(),
        }
    }

    /// Total number of nodes in this subtree, including `self`
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Node::node_count).sum::<usize>()
    }
}

impl Render for Node {
    fn render(&self, out: &mut Vec<String>) {
        match self {
            Node::Content(n) => n.render(out),
            Node::Tag(n) => n.render(out),
            Node::Environment(n) => n.render(out),
            Node::List(n) => n.render(out),
            Node::Heading(n) => n.render(out),
            Node::Table(n) => n.render(out),
            Node::Row(n) => n.render(out),
            Node::Figure(n) => n.render(out),
            Node::SubFigure(n) => n.render(out),
            Node::Picture(n) => n.render(out),
        }
    }
}

/// Something that can be added as a child of a body node.
///
/// Implemented by every node struct and by plain strings, which are wrapped
/// into a default [`Content`]. `attach` stores the item and hands back the
/// stored value so callers can keep building inside it.
pub trait Element {
    /// Type handed back after insertion
    type Target;

    /// Convert into a type-erased node
    fn into_node(self) -> Node;

    /// Push onto `children` and return the stored child
    fn attach(self, children: &mut Vec<Node>) -> &mut Self::Target;
}

macro_rules! impl_element {
    ($($ty:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                type Target = $ty;

                fn into_node(self) -> Node {
                    Node::$ty(self)
                }

                fn attach(self, children: &mut Vec<Node>) -> &mut $ty {
                    children.push(Node::$ty(self));
                    match children.last_mut() {
                        Some(Node::$ty(child)) => child,
                        _ => unreachable!(),
                    }
                }
            }

            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::$ty(value)
                }
            }
        )*
    };
}

impl_element!(Content, Tag, Environment, List, Heading, Table, Row, Figure, SubFigure, Picture);

impl Element for &str {
    type Target = Content;

    fn into_node(self) -> Node {
        Node::Content(Content::new(self))
    }

    fn attach(self, children: &mut Vec<Node>) -> &mut Content {
        Content::new(self).attach(children)
    }
}

impl Element for String {
    type Target = Content;

    fn into_node(self) -> Node {
        Node::Content(Content::new(self))
    }

    fn attach(self, children: &mut Vec<Node>) -> &mut Content {
        Content::new(self).attach(children)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        value.into_node()
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        value.into_node()
    }
}

/// Render every child in order
pub(crate) fn render_children(children: &[Node], out: &mut Vec<String>) {
    for child in children {
        child.render(out);
    }
}

/// Give a node struct the shared composition API: `add`, `add_node`,
/// `children`.
macro_rules! impl_container {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $ty {
                /// Append a child (a node or plain text) and return it for
                /// further composition
                pub fn add<E: $crate::core::node::Element>(&mut self, item: E) -> &mut E::Target {
                    $crate::core::node::Element::attach(item, &mut self.children)
                }

                /// Append an already type-erased node
                pub fn add_node(&mut self, node: $crate::core::node::Node) -> &mut $crate::core::node::Node {
                    self.children.push(node);
                    let last = self.children.len() - 1;
                    &mut self.children[last]
                }

                /// Direct children in insertion order
                pub fn children(&self) -> &[$crate::core::node::Node] {
                    &self.children
                }
            }
        )*
    };
}

pub(crate) use impl_container;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_items_become_content() {
        let mut env = Environment::new("quote");
        let content = env.add("a & b");
        assert_eq!(content.text(), "a \\& b");
        env.add(String::from("second"));
        assert_eq!(env.children().len(), 2);
        assert!(matches!(env.children()[1], Node::Content(_)));
    }

    #[test]
    fn test_add_returns_stored_child() {
        let mut section = Heading::section("Outer");
        {
            let inner = section.add(Heading::subsection("Inner"));
            inner.add("deep");
        }
        assert_eq!(section.children().len(), 1);
        assert_eq!(section.children()[0].children().len(), 1);
    }

    #[test]
    fn test_node_count() {
        let mut list = List::itemize();
        list.add("one");
        list.add("two");
        let node: Node = list.into();
        assert_eq!(node.node_count(), 3);
        assert_eq!(node.kind_name(), "List");
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut env = Environment::new("center");
        env.add(Content::new("x").bold());
        let node = Node::from(env);
        assert_eq!(node.to_latex(), node.to_latex());
        assert_eq!(node.fragments().concat(), node.to_latex());
    }
}
