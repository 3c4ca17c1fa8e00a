//! Full node listing, without tag filtering.
//!
//! Useful to find out which tag names a parser actually reports before
//! choosing a tag set.

use super::traversal::{walk, TraversalLimits};
use crate::dom::{Document, NodeKind};
use crate::error::Result;

/// List the root element name, then every element and text node in
/// document order. Comments and other nodes are skipped.
///
/// A document without a root element yields an empty listing.
pub fn dump(doc: &Document, limits: TraversalLimits) -> Result<String> {
    let mut output = String::new();
    let root = doc.root_element();
    if let Some(name) = root.and_then(|id| doc.get(id)).and_then(|n| n.name()) {
        output.push_str("Root Node is ");
        output.push_str(name);
        output.push('\n');
    }

    walk(doc, root, limits, |_, node| match node.kind() {
        NodeKind::Element { name } => {
            output.push_str("Node type: Element, name: ");
            output.push_str(name);
            output.push('\n');
        }
        NodeKind::Text { content } => {
            output.push_str("Node type: Text, node content: ");
            output.push_str(content);
            output.push('\n');
        }
        NodeKind::Other => {}
    })?;

    Ok(output)
}
