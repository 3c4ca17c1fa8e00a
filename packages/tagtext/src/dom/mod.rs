//! Read-only document model consumed by the extractor.
//!
//! Parsers build a [`Document`] through a [`DocumentBuilder`]; everything
//! downstream only reads it.

mod document;
mod node;

pub use document::{Children, Document, DocumentBuilder};
pub use node::{Node, NodeId, NodeKind};
