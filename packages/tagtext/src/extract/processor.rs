//! Per-document pipeline: parse, check for a root, traverse.

use std::path::Path;

use super::dump::dump;
use super::matcher::TagSet;
use super::traversal::{collect, TraversalLimits};
use crate::error::{ExtractError, Result};
use crate::parser::{read_source, MarkupParser};

/// What gets written for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Text of nodes whose parent is in the tag set, one per line.
    #[default]
    Matched,

    /// Listing of every element and text node.
    Dump,
}

/// Runs one document at a time through parser and traversal.
///
/// Holds no per-document state: every call builds its own tree and
/// buffer and drops the tree before returning.
pub struct DocumentProcessor {
    parser: Box<dyn MarkupParser>,
    tags: TagSet,
    limits: TraversalLimits,
    mode: OutputMode,
}

impl DocumentProcessor {
    #[must_use]
    pub fn new(parser: Box<dyn MarkupParser>, tags: TagSet) -> Self {
        Self {
            parser,
            tags,
            limits: TraversalLimits::default(),
            mode: OutputMode::default(),
        }
    }

    #[must_use]
    pub fn with_limits(mut self, limits: TraversalLimits) -> Self {
        self.limits = limits;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Extract from an in-memory document. `source_name` only labels errors.
    pub fn process_str(&self, source_name: &str, input: &str) -> Result<String> {
        let doc = self
            .parser
            .parse(input)
            .map_err(|source| ExtractError::Parse {
                source_name: source_name.to_string(),
                source,
            })?;

        let Some(root) = doc.root_element() else {
            return Err(ExtractError::EmptyDocument {
                source_name: source_name.to_string(),
            });
        };

        let output = match self.mode {
            OutputMode::Matched => collect(&doc, Some(root), &self.tags, self.limits)?,
            OutputMode::Dump => dump(&doc, self.limits)?,
        };

        tracing::debug!(
            source = %source_name,
            nodes = doc.len(),
            bytes = output.len(),
            "Processed document"
        );
        Ok(output)
    }

    /// Extract from a file on disk.
    ///
    /// A file that cannot be read is reported as a parse failure of that
    /// document.
    pub fn process_file(&self, path: &Path) -> Result<String> {
        let source_name = path.display().to_string();
        let input = read_source(path).map_err(|source| ExtractError::Parse {
            source_name: source_name.clone(),
            source,
        })?;
        self.process_str(&source_name, &input)
    }
}
