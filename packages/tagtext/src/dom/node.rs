//! Node types stored in a [`Document`](super::Document) arena.

/// Index of a node inside its document's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The document node itself. Every document has one, at index 0.
    pub const DOCUMENT: NodeId = NodeId(0);
}

/// What a node is, together with the payload that only that kind carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// An element, with its tag name as the parser reported it.
    Element { name: String },

    /// A text node with its decoded content.
    Text { content: String },

    /// Anything else: the document node, comments, doctypes,
    /// processing instructions.
    Other,
}

/// A node with its tree links.
///
/// Links are arena indices. The parent link is a plain lookup and never
/// owns anything.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) first_child: Option<NodeId>,
    pub(crate) last_child: Option<NodeId>,
    pub(crate) next_sibling: Option<NodeId>,
}

impl Node {
    pub(crate) fn new(kind: NodeKind, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            parent,
            first_child: None,
            last_child: None,
            next_sibling: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    #[must_use]
    pub fn is_element(&self) -> bool {
        matches!(self.kind, NodeKind::Element { .. })
    }

    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self.kind, NodeKind::Text { .. })
    }

    /// Tag name, present only for elements.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element { name } => Some(name),
            _ => None,
        }
    }

    /// Text content, present only for text nodes. May be empty.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text { content } => Some(content),
            _ => None,
        }
    }

    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[must_use]
    pub fn first_child(&self) -> Option<NodeId> {
        self.first_child
    }

    #[must_use]
    pub fn next_sibling(&self) -> Option<NodeId> {
        self.next_sibling
    }
}
