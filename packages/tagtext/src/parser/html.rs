//! Lenient HTML parsing through `scraper`.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Node as HtmlNode};

use super::{is_blank, MarkupParser, ParseOptions};
use crate::dom::{Document, DocumentBuilder};
use crate::error::ParseError;

/// Elements html5ever inserts on its own when the markup lacks them.
const IMPLIED_ELEMENTS: [&str; 3] = ["html", "head", "body"];

/// Explicit start tag of an implied element.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static EXPLICIT_IMPLIED_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(html|head|body)[\s/>]").expect("valid regex"));

/// HTML parser backed by html5ever.
///
/// html5ever recovers from any malformed markup and lowercases tag
/// names, so parsing never fails once the input is text.
#[derive(Debug, Clone, Default)]
pub struct HtmlParser {
    options: ParseOptions,
}

impl HtmlParser {
    #[must_use]
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }
}

impl MarkupParser for HtmlParser {
    fn parse(&self, input: &str) -> Result<Document, ParseError> {
        // html5ever synthesizes <html> even for blank input; blank input
        // has no root element of its own.
        if is_blank(input) {
            return Ok(Document::empty());
        }

        let html = Html::parse_document(input);
        for error in &html.errors {
            tracing::debug!(error = %error, "Recovered from malformed HTML");
        }

        let mut builder = DocumentBuilder::new();
        let document = builder.document();
        let mut stack: Vec<_> = html
            .tree
            .root()
            .children()
            .rev()
            .map(|child| (child, document))
            .collect();

        let mut has_content = false;
        while let Some((node, parent)) = stack.pop() {
            let id = match node.value() {
                HtmlNode::Element(element) => {
                    has_content |= !IMPLIED_ELEMENTS.contains(&element.name());
                    builder.element(parent, element.name())
                }
                HtmlNode::Text(text) => {
                    if is_blank(text) {
                        if self.options.drop_blank_text {
                            continue;
                        }
                    } else {
                        has_content = true;
                    }
                    builder.text(parent, &**text)
                }
                _ => builder.other(parent),
            };
            stack.extend(node.children().rev().map(|child| (child, id)));
        }

        // Only comments, a doctype or whitespace: the elements in the tree
        // are all implied, so the source itself has no root element.
        if !has_content && !EXPLICIT_IMPLIED_TAG.is_match(input) {
            return Ok(Document::empty());
        }

        Ok(builder.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::NodeId;

    fn element_names(doc: &Document) -> Vec<String> {
        (0..doc.len())
            .filter_map(|i| doc.get(NodeId(i)))
            .filter_map(|n| n.name().map(str::to_string))
            .collect()
    }

    #[test]
    fn test_parse_synthesizes_html_structure() {
        let doc = HtmlParser::default().parse("<li>Y</li>").unwrap();
        let root = doc.root_element().unwrap();
        assert_eq!(doc.get(root).unwrap().name(), Some("html"));
        assert_eq!(element_names(&doc), vec!["html", "head", "body", "li"]);
    }

    #[test]
    fn test_parse_preserves_document_order() {
        let doc = HtmlParser::default()
            .parse("<p><b>one</b><i>two</i></p>")
            .unwrap();
        assert_eq!(element_names(&doc), vec!["html", "head", "body", "p", "b", "i"]);
    }

    #[test]
    fn test_parse_lowercases_tag_names() {
        let doc = HtmlParser::default().parse("<DIV>x</DIV>").unwrap();
        assert!(element_names(&doc).contains(&"div".to_string()));
    }

    #[test]
    fn test_parse_decodes_entities() {
        let doc = HtmlParser::default().parse("<p>a &amp; b</p>").unwrap();
        let text = (0..doc.len())
            .filter_map(|i| doc.get(NodeId(i)))
            .find_map(|n| n.content().map(str::to_string));
        assert_eq!(text.as_deref(), Some("a & b"));
    }

    #[test]
    fn test_blank_input_has_no_root() {
        let doc = HtmlParser::default().parse("  \n ").unwrap();
        assert!(doc.root_element().is_none());

        let doc = HtmlParser::default().parse("").unwrap();
        assert!(doc.root_element().is_none());
    }

    #[test]
    fn test_comment_or_doctype_only_has_no_root() {
        for input in ["<!-- only a comment -->", "<!DOCTYPE html>", "<!DOCTYPE html>\n<!-- x -->\n"] {
            let doc = HtmlParser::default().parse(input).unwrap();
            assert!(doc.root_element().is_none(), "{input:?} should be rootless");
        }
    }

    #[test]
    fn test_explicit_empty_html_keeps_root() {
        for input in ["<html></html>", "<!DOCTYPE html><HTML><body></body></HTML>", "<p></p>", "plain text"] {
            let doc = HtmlParser::default().parse(input).unwrap();
            assert!(doc.root_element().is_some(), "{input:?} should have a root");
        }
    }

    #[test]
    fn test_drop_blank_text() {
        let input = "<ul>\n  <li>a</li>\n</ul>";
        let keep = HtmlParser::default().parse(input).unwrap();
        let drop = HtmlParser::new(ParseOptions {
            drop_blank_text: true,
        })
        .parse(input)
        .unwrap();

        let count_text = |doc: &Document| {
            (0..doc.len())
                .filter_map(|i| doc.get(NodeId(i)))
                .filter(|n| n.is_text())
                .count()
        };
        assert!(count_text(&keep) > count_text(&drop));
        assert_eq!(count_text(&drop), 1);
    }
}
