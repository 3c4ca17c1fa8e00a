//! Tag-filtered text extraction.
//!
//! - [`matcher`]: tag set and the direct-parent predicate
//! - [`traversal`]: heap-stack walk in document order
//! - [`dump`]: unfiltered node listing
//! - [`processor`]: parse, root check and traversal for one document

pub mod dump;
pub mod matcher;
pub mod processor;
pub mod traversal;

pub use matcher::{is_selected, CaseSensitivity, TagSet};
pub use processor::{DocumentProcessor, OutputMode};
pub use traversal::{collect, collect_into, TraversalLimits};
