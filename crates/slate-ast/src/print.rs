//! Indented debug rendering of a parsed tree.

use core::fmt;

use crate::{Element, Node, Root};

/// Print the tree to stdout, one node per line.
///
/// ```text
/// Root
///   <div id="app">
///     "Hello·"
///     ${0}
/// ```
pub fn print_tree(root: &Root) {
    let mut out = String::new();
    // Writing into a String cannot fail.
    if write_tree(root, &mut out).is_ok() {
        print!("{out}");
    }
}

/// Write the same rendering as [`print_tree`] into any [`fmt::Write`] sink.
///
/// # Errors
///
/// Propagates errors from the sink.
pub fn write_tree(root: &Root, out: &mut impl fmt::Write) -> fmt::Result {
    writeln!(out, "Root")?;

    // (node, indent) pairs, next node to print last
    let mut pending: Vec<(&Node, usize)> =
        root.children.iter().rev().map(|child| (child, 1)).collect();
    while let Some((node, indent)) = pending.pop() {
        write_node(node, indent, out)?;
        if let Node::Element(element) = node {
            pending.extend(element.children.iter().rev().map(|child| (child, indent + 1)));
        }
    }
    Ok(())
}

/// Writes one line for `node`; children are handled by the caller.
fn write_node(node: &Node, indent: usize, out: &mut impl fmt::Write) -> fmt::Result {
    let prefix = "  ".repeat(indent);
    match node {
        Node::Element(element) => writeln!(out, "{prefix}{}", open_tag(element)),
        Node::Text(text) => {
            let display = text.value.replace('\n', "\\n").replace(' ', "\u{00B7}");
            writeln!(out, "{prefix}\"{display}\"")
        }
        Node::Expression(expression) => writeln!(out, "{prefix}${{{}}}", expression.slot),
    }
}

fn open_tag(element: &Element) -> String {
    let mut tag = format!("<{}", element.name);
    for prop in &element.props {
        tag.push(' ');
        tag.push_str(&prop.to_string());
    }
    if element.self_closing {
        tag.push_str(" />");
    } else {
        tag.push('>');
    }
    tag
}
