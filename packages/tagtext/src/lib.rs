//! tagtext - Extract the text of selected HTML elements.
//!
//! For every text node of a document, in document order, the extractor
//! checks whether its direct parent element is named in a user-supplied
//! tag set. Matching text is written one node per line. Files can be
//! processed one at a time or a whole directory at once.
//!
//! # Example
//!
//! ```
//! use tagtext::config::ExtractConfig;
//!
//! let processor = ExtractConfig::default()
//!     .build_processor(vec!["b".to_string(), "i".to_string()])
//!     .unwrap();
//! let text = processor
//!     .process_str("inline", "<p><b>one</b><i>two</i><u>three</u></p>")
//!     .unwrap();
//! assert_eq!(text, "one\ntwo\n");
//! ```
//!
//! # Architecture
//!
//! - [`dom`]: arena document model
//! - [`parser`]: HTML (`scraper`) and XML (`roxmltree`) front ends
//! - [`extract`]: tag matching, traversal and the document processor
//! - [`batch`]: directory mode with derived output names
//! - [`config`]: constants, validation and per-run settings
//! - [`input`]: interactive tag list
//! - [`output`]: output file writing
//! - [`error`]: error types and Result alias
//! - [`cli`]: command-line interface

pub mod batch;
pub mod cli;
pub mod config;
pub mod dom;
pub mod error;
pub mod extract;
pub mod input;
pub mod output;
pub mod parser;

// Re-export commonly used items
pub use config::ExtractConfig;
pub use error::{ExtractError, ParseError, Result};
pub use extract::{CaseSensitivity, DocumentProcessor, OutputMode, TagSet, TraversalLimits};
pub use parser::{Markup, MarkupParser, ParseOptions};
