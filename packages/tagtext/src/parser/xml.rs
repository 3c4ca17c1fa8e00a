//! Strict XML/XHTML parsing through `roxmltree`.

use roxmltree::ParsingOptions;

use super::{is_blank, MarkupParser, ParseOptions};
use crate::dom::{Document, DocumentBuilder};
use crate::error::ParseError;

/// XML parser for well-formed markup.
///
/// Tag names are reported without namespace prefix and keep their case.
#[derive(Debug, Clone, Default)]
pub struct XmlParser {
    options: ParseOptions,
}

impl XmlParser {
    #[must_use]
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }
}

impl MarkupParser for XmlParser {
    fn parse(&self, input: &str) -> Result<Document, ParseError> {
        // XHTML files usually carry a DOCTYPE.
        let mut parsing = ParsingOptions::default();
        parsing.allow_dtd = true;
        let xml = match roxmltree::Document::parse_with_options(input, parsing) {
            Ok(xml) => xml,
            // Well-formed but without any element: a tree with no root.
            Err(roxmltree::Error::NoRootNode) => return Ok(Document::empty()),
            Err(e) => return Err(e.into()),
        };

        let mut builder = DocumentBuilder::new();
        let document = builder.document();
        let mut stack: Vec<_> = xml
            .root()
            .children()
            .rev()
            .map(|child| (child, document))
            .collect();

        while let Some((node, parent)) = stack.pop() {
            let id = if node.is_element() {
                builder.element(parent, node.tag_name().name())
            } else if node.is_text() {
                let text = node.text().unwrap_or_default();
                if self.options.drop_blank_text && is_blank(text) {
                    continue;
                }
                builder.text(parent, text)
            } else {
                builder.other(parent)
            };
            stack.extend(node.children().rev().map(|child| (child, id)));
        }

        Ok(builder.finish())
    }
}
