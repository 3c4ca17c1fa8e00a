//! Tag set and the parent-name predicate.

use std::collections::HashSet;

use crate::dom::{Document, NodeId};

/// How tag names are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    /// Exact string equality.
    #[default]
    Sensitive,

    /// Compare lowercase forms.
    Insensitive,
}

/// The element names whose direct text children are extracted.
#[derive(Debug, Clone, Default)]
pub struct TagSet {
    names: HashSet<String>,
    case: CaseSensitivity,
}

impl TagSet {
    pub fn new<I, S>(names: I, case: CaseSensitivity) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names
            .into_iter()
            .map(|name| normalize(name.into(), case))
            .collect();
        Self { names, case }
    }

    /// Membership test under this set's case sensitivity.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        match self.case {
            CaseSensitivity::Sensitive => self.names.contains(name),
            CaseSensitivity::Insensitive => self.names.contains(&name.to_lowercase()),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn normalize(name: String, case: CaseSensitivity) -> String {
    match case {
        CaseSensitivity::Sensitive => name,
        CaseSensitivity::Insensitive => name.to_lowercase(),
    }
}

/// Whether `node`'s direct parent is an element named in `tags`.
///
/// Ancestors above the parent never count. A node without a parent, or
/// whose parent is not an element, is never selected.
#[must_use]
pub fn is_selected(doc: &Document, node: NodeId, tags: &TagSet) -> bool {
    doc.parent(node)
        .and_then(|parent| doc.get(parent))
        .and_then(|parent| parent.name())
        .is_some_and(|name| tags.contains(name))
}
