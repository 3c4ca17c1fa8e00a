//! Document-order traversal and matched-text collection.
//!
//! The walk keeps its own stack on the heap: one pending sibling per open
//! nesting level plus the node being visited. Deeply nested markup costs
//! memory, never native stack, and can be capped with [`TraversalLimits`].

use super::matcher::{is_selected, TagSet};
use crate::config::DEFAULT_MAX_DEPTH;
use crate::dom::{Document, Node, NodeId};
use crate::error::{ExtractError, Result};

/// Bounds applied while walking a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalLimits {
    /// Deepest nesting level allowed below the start of the walk, where
    /// the start node and its siblings are level 1. `None` disables the cap.
    pub max_depth: Option<usize>,
}

impl Default for TraversalLimits {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl TraversalLimits {
    #[must_use]
    pub fn unlimited() -> Self {
        Self { max_depth: None }
    }
}

/// Visit `start`, its following siblings and all their descendants in
/// document order: parent before children, siblings left to right.
///
/// An absent `start` visits nothing.
pub(crate) fn walk<F>(
    doc: &Document,
    start: Option<NodeId>,
    limits: TraversalLimits,
    mut visit: F,
) -> Result<()>
where
    F: FnMut(NodeId, &Node),
{
    let Some(start) = start else {
        return Ok(());
    };

    let mut stack = vec![(start, 1usize)];
    while let Some((id, depth)) = stack.pop() {
        let Some(node) = doc.get(id) else {
            continue;
        };
        if let Some(limit) = limits.max_depth {
            if depth > limit {
                return Err(ExtractError::DepthExceeded { limit });
            }
        }

        visit(id, node);

        // Sibling goes below the child so the whole subtree comes first.
        if let Some(next) = node.next_sibling() {
            stack.push((next, depth));
        }
        if let Some(child) = node.first_child() {
            stack.push((child, depth + 1));
        }
    }
    Ok(())
}

/// Collect the content of every text node under an element named in
/// `tags`, each followed by a newline.
///
/// Empty text nodes still contribute their newline.
pub fn collect(
    doc: &Document,
    start: Option<NodeId>,
    tags: &TagSet,
    limits: TraversalLimits,
) -> Result<String> {
    let mut output = String::new();
    collect_into(&mut output, doc, start, tags, limits)?;
    Ok(output)
}

/// Like [`collect`], appending to a caller-owned buffer.
pub fn collect_into(
    output: &mut String,
    doc: &Document,
    start: Option<NodeId>,
    tags: &TagSet,
    limits: TraversalLimits,
) -> Result<()> {
    walk(doc, start, limits, |id, node| {
        if let Some(content) = node.content() {
            if is_selected(doc, id, tags) {
                output.push_str(content);
                output.push('\n');
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::DocumentBuilder;
    use crate::extract::matcher::CaseSensitivity;
    use pretty_assertions::assert_eq;

    fn tags(names: &[&str]) -> TagSet {
        TagSet::new(names.iter().copied(), CaseSensitivity::Sensitive)
    }

    /// `<p><b>one</b><i>two</i><u>three</u></p>`
    fn mixed_paragraph() -> Document {
        let mut builder = DocumentBuilder::new();
        let p = builder.element(builder.document(), "p");
        for (tag, text) in [("b", "one"), ("i", "two"), ("u", "three")] {
            let el = builder.element(p, tag);
            builder.text(el, text);
        }
        builder.finish()
    }

    #[test]
    fn test_mixed_tags_in_document_order() {
        let doc = mixed_paragraph();
        let out = collect(&doc, doc.root_element(), &tags(&["i", "b"]), TraversalLimits::default())
            .unwrap();
        assert_eq!(out, "one\ntwo\n");
    }

    #[test]
    fn test_empty_tag_set_yields_nothing() {
        let doc = mixed_paragraph();
        let out = collect(&doc, doc.root_element(), &tags(&[]), TraversalLimits::default()).unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn test_absent_start_is_noop() {
        let doc = mixed_paragraph();
        let out = collect(&doc, None, &tags(&["b"]), TraversalLimits::default()).unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn test_nested_wrapper_not_matched() {
        let mut builder = DocumentBuilder::new();
        let li = builder.element(builder.document(), "li");
        let span = builder.element(li, "span");
        builder.text(span, "X");
        let doc = builder.finish();

        let out = collect(&doc, doc.root_element(), &tags(&["li"]), TraversalLimits::default())
            .unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn test_descends_through_unmatched_elements() {
        let mut builder = DocumentBuilder::new();
        let div = builder.element(builder.document(), "div");
        let section = builder.element(div, "section");
        let li = builder.element(section, "li");
        builder.text(li, "deep");
        let doc = builder.finish();

        let out = collect(&doc, doc.root_element(), &tags(&["li"]), TraversalLimits::default())
            .unwrap();
        assert_eq!(out, "deep\n");
    }

    #[test]
    fn test_parent_text_before_child_text() {
        let mut builder = DocumentBuilder::new();
        let li = builder.element(builder.document(), "li");
        builder.text(li, "head ");
        let inner = builder.element(li, "li");
        builder.text(inner, "inner");
        builder.text(li, " tail");
        let doc = builder.finish();

        let out = collect(&doc, doc.root_element(), &tags(&["li"]), TraversalLimits::default())
            .unwrap();
        assert_eq!(out, "head \ninner\n tail\n");
    }

    #[test]
    fn test_empty_content_keeps_newline() {
        let mut builder = DocumentBuilder::new();
        let li = builder.element(builder.document(), "li");
        builder.text(li, "");
        let doc = builder.finish();

        let out = collect(&doc, doc.root_element(), &tags(&["li"]), TraversalLimits::default())
            .unwrap();
        assert_eq!(out, "\n");
    }

    #[test]
    fn test_start_siblings_are_visited() {
        let mut builder = DocumentBuilder::new();
        let doc_node = builder.document();
        let first = builder.element(doc_node, "b");
        builder.text(first, "1");
        let second = builder.element(doc_node, "b");
        builder.text(second, "2");
        let doc = builder.finish();

        let out = collect(&doc, Some(first), &tags(&["b"]), TraversalLimits::default()).unwrap();
        assert_eq!(out, "1\n2\n");
    }

    #[test]
    fn test_collect_into_appends() {
        let doc = mixed_paragraph();
        let mut buffer = String::from("prefix\n");
        collect_into(
            &mut buffer,
            &doc,
            doc.root_element(),
            &tags(&["u"]),
            TraversalLimits::default(),
        )
        .unwrap();
        assert_eq!(buffer, "prefix\nthree\n");
    }

    fn nested(depth: usize) -> Document {
        let mut builder = DocumentBuilder::new();
        let mut parent = builder.document();
        for _ in 0..depth {
            parent = builder.element(parent, "div");
        }
        builder.text(parent, "bottom");
        builder.finish()
    }

    #[test]
    fn test_very_deep_nesting_without_cap() {
        let doc = nested(500_000);
        let out = collect(&doc, doc.root_element(), &tags(&["div"]), TraversalLimits::unlimited())
            .unwrap();
        assert_eq!(out, "bottom\n");
    }

    #[test]
    fn test_depth_cap_exceeded() {
        let doc = nested(20);
        let limits = TraversalLimits {
            max_depth: Some(10),
        };
        let err = collect(&doc, doc.root_element(), &tags(&["div"]), limits).unwrap_err();
        assert!(matches!(err, ExtractError::DepthExceeded { limit: 10 }));
    }

    #[test]
    fn test_depth_cap_counts_text_level() {
        // 3 nested divs plus the text node is 4 levels.
        let doc = nested(3);
        let exact = TraversalLimits { max_depth: Some(4) };
        assert!(collect(&doc, doc.root_element(), &tags(&["div"]), exact).is_ok());

        let short = TraversalLimits { max_depth: Some(3) };
        assert!(collect(&doc, doc.root_element(), &tags(&["div"]), short).is_err());
    }
}
