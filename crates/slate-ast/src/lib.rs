//! Syntax tree for slot-aware markup.
//!
//! The parser in `slate-markup` produces a [`Root`] holding an ordered forest
//! of [`Node`]s. Dynamic parts of the markup are never evaluated; they are
//! referenced by *slot index*, the zero-based position of the interpolated
//! value in the input, so a consumer can substitute real values later.
//!
//! # Design
//!
//! Every node is plain data: no parent pointers, no behavior beyond small
//! accessors. The whole tree derives `serde` traits so it can be dumped,
//! diffed, or shipped to a renderer as-is.

mod print;
mod prop;

pub use print::{print_tree, write_tree};
pub use prop::{Prop, ValuePart};

use serde::{Deserialize, Serialize};

/// The result of a parse: the top-level children in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Root {
    /// Top-level nodes, in source order.
    pub children: Vec<Node>,
}

impl Root {
    /// Create a root holding the given children.
    #[must_use]
    pub const fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Every slot index referenced anywhere in the tree, in source order.
    ///
    /// For a well-formed parse this is exactly `0..slot_count`.
    #[must_use]
    pub fn slot_references(&self) -> Vec<usize> {
        let mut slots = Vec::new();
        collect_slots(&self.children, &mut slots);
        slots
    }

    /// Iterate over the top-level elements, skipping text and expressions.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Render the tree as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails, which only happens if a
    /// custom serializer rejects the data.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// A child position in a [`Root`] or [`Element`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// A tag with props and children.
    Element(Element),
    /// Literal text between tags.
    Text(Text),
    /// Child content supplied by a slot.
    Expression(Expression),
}

impl Node {
    /// Returns the element if this node is one.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Returns the text if this node is a text node.
    #[must_use]
    pub const fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the slot index if this node is an expression.
    #[must_use]
    pub const fn as_slot(&self) -> Option<usize> {
        match self {
            Self::Expression(expression) => Some(expression.slot),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl From<Expression> for Node {
    fn from(expression: Expression) -> Self {
        Self::Expression(expression)
    }
}

/// An element such as `<div id="app">...</div>` or `<input />`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// The tag name exactly as written.
    pub name: String,
    /// Props in source order.
    pub props: Vec<Prop>,
    /// Children in source order. Always empty when `self_closing` is set.
    pub children: Vec<Node>,
    /// True if the element was closed with `/>`.
    pub self_closing: bool,
}

impl Element {
    /// Create an element closed by an explicit closing tag (or a void
    /// element with no body).
    #[must_use]
    pub fn new(name: impl Into<String>, props: Vec<Prop>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            props,
            children,
            self_closing: false,
        }
    }

    /// Create an element closed with `/>`.
    #[must_use]
    pub fn self_closed(name: impl Into<String>, props: Vec<Prop>) -> Self {
        Self {
            name: name.into(),
            props,
            children: Vec::new(),
            self_closing: true,
        }
    }

    /// Look up the first prop with the given name. Spread props have no name
    /// and never match.
    #[must_use]
    pub fn prop(&self, name: &str) -> Option<&Prop> {
        self.props.iter().find(|prop| prop.name() == Some(name))
    }

    /// Slot indices referenced by this element's props and descendants, in
    /// source order.
    #[must_use]
    pub fn slot_references(&self) -> Vec<usize> {
        let mut slots: Vec<usize> = self.props.iter().flat_map(Prop::slots).collect();
        collect_slots(&self.children, &mut slots);
        slots
    }
}

/// Children are detached level by level, so dropping a deeply nested tree
/// never recurses once per level.
impl Drop for Element {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Node::Element(mut element) = node {
                pending.append(&mut element.children);
            }
        }
    }
}

/// Appends the slot indices under `nodes` in source order, walking the tree
/// with an explicit stack instead of recursion.
fn collect_slots<'a>(nodes: &'a [Node], slots: &mut Vec<usize>) {
    let mut pending: Vec<&'a Node> = nodes.iter().rev().collect();
    while let Some(node) = pending.pop() {
        match node {
            Node::Element(element) => {
                slots.extend(element.props.iter().flat_map(Prop::slots));
                pending.extend(element.children.iter().rev());
            }
            Node::Text(_) => {}
            Node::Expression(expression) => slots.push(expression.slot),
        }
    }
}

/// Literal text, kept verbatim (whitespace policy is applied by the parser).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    /// The raw text.
    pub value: String,
}

impl Text {
    /// Create a text node.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// True if the text is made only of whitespace.
    #[must_use]
    pub fn is_whitespace_only(&self) -> bool {
        self.value.chars().all(char::is_whitespace)
    }
}

/// A child position filled by a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Expression {
    /// Zero-based slot index.
    pub slot: usize,
}

impl Expression {
    /// Create an expression node for the given slot.
    #[must_use]
    pub const fn new(slot: usize) -> Self {
        Self { slot }
    }
}
