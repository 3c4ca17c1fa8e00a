//! Markup parsers that turn raw input into a [`Document`].
//!
//! Parsing is delegated to `scraper` (html5ever) for HTML and to
//! `roxmltree` for XML/XHTML. Both are wrapped behind [`MarkupParser`] so
//! the extractor only ever sees the arena model from [`crate::dom`].

mod html;
mod xml;

use std::path::Path;

use crate::dom::Document;
use crate::error::ParseError;

pub use html::HtmlParser;
pub use xml::XmlParser;

/// Which parser handles the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Markup {
    /// Lenient HTML parsing with error recovery.
    #[default]
    Html,

    /// Strict XML parsing, for XHTML and other well-formed markup.
    Xml,
}

/// Options shared by all parsers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Leave whitespace-only text nodes out of the tree.
    pub drop_blank_text: bool,
}

/// Turns markup text into a document tree.
pub trait MarkupParser {
    /// Parse `input`.
    ///
    /// A document without any root element is a successful parse that
    /// returns a tree whose [`Document::root_element`] is `None`.
    fn parse(&self, input: &str) -> Result<Document, ParseError>;
}

/// Build the parser for `markup`.
#[must_use]
pub fn create_parser(markup: Markup, options: ParseOptions) -> Box<dyn MarkupParser> {
    match markup {
        Markup::Html => Box::new(HtmlParser::new(options)),
        Markup::Xml => Box::new(XmlParser::new(options)),
    }
}

/// Read a source file as text.
///
/// Invalid UTF-8 is replaced rather than rejected, matching what a
/// lenient parser does with undeclared encodings.
pub fn read_source(path: &Path) -> Result<String, ParseError> {
    let bytes = std::fs::read(path).map_err(ParseError::Read)?;
    Ok(decode_input(bytes, &path.display().to_string()))
}

/// Decode raw bytes as UTF-8, replacing invalid sequences.
pub fn decode_input(bytes: Vec<u8>, source_name: &str) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(
                source = %source_name,
                valid_up_to = e.utf8_error().valid_up_to(),
                "Input is not valid UTF-8, replacing invalid sequences"
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}
