//! Arena-backed document tree and its builder.

use super::node::{Node, NodeId, NodeKind};

/// A parsed document.
///
/// All nodes live in one `Vec`, so dropping a document is flat no matter
/// how deeply the markup nested. Index 0 is the document node.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// A document holding only the document node.
    #[must_use]
    pub fn empty() -> Self {
        DocumentBuilder::new().finish()
    }

    /// Look up a node.
    ///
    /// Ids are only handed out by this document's builder, so an unknown
    /// id is a caller bug and yields `None`.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// First element child of the document node.
    #[must_use]
    pub fn root_element(&self) -> Option<NodeId> {
        self.children(NodeId::DOCUMENT)
            .find(|id| self.get(*id).is_some_and(Node::is_element))
    }

    /// Children of `id` in document order.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            doc: self,
            next: self.get(id).and_then(Node::first_child),
        }
    }

    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(Node::next_sibling)
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(Node::parent)
    }

    /// Number of nodes, the document node included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the document holds nothing besides the document node.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }
}

/// Iterator over the children of one node.
pub struct Children<'a> {
    doc: &'a Document,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.doc.next_sibling(current);
        Some(current)
    }
}

/// Appends nodes to a document while keeping all links consistent.
///
/// Children of one parent must be appended in document order.
#[derive(Debug)]
pub struct DocumentBuilder {
    nodes: Vec<Node>,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Other, None)],
        }
    }

    /// The document node, parent of all top-level nodes.
    #[must_use]
    pub fn document(&self) -> NodeId {
        NodeId::DOCUMENT
    }

    /// Append `kind` as the last child of `parent`.
    ///
    /// An unknown `parent` leaves the new node detached; it is still
    /// stored but unreachable from the document node.
    pub fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        let known_parent = parent.0 < self.nodes.len();
        self.nodes
            .push(Node::new(kind, known_parent.then_some(parent)));

        if known_parent {
            let previous = self.nodes[parent.0].last_child.replace(id);
            match previous {
                Some(prev) => self.nodes[prev.0].next_sibling = Some(id),
                None => self.nodes[parent.0].first_child = Some(id),
            }
        }
        id
    }

    pub fn element(&mut self, parent: NodeId, name: impl Into<String>) -> NodeId {
        self.append(parent, NodeKind::Element { name: name.into() })
    }

    pub fn text(&mut self, parent: NodeId, content: impl Into<String>) -> NodeId {
        self.append(
            parent,
            NodeKind::Text {
                content: content.into(),
            },
        )
    }

    pub fn other(&mut self, parent: NodeId) -> NodeId {
        self.append(parent, NodeKind::Other)
    }

    #[must_use]
    pub fn finish(self) -> Document {
        Document { nodes: self.nodes }
    }
}
