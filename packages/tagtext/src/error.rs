//! Error types for text extraction.
//!
//! Uses the dual-error pattern: `ExtractError` for library consumers
//! with detailed error context, and `ParseError` for the markup parsers,
//! which know nothing about where their input came from.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the extraction library.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Command-line arguments that clap cannot reject on its own.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Tag name that cannot occur in markup.
    #[error("Invalid tag name: '{0}'. Expected an element name such as 'li' or 'h1'")]
    InvalidTagName(String),

    /// Batch suffix that would escape the working directory or is empty.
    #[error("Invalid batch suffix: '{0}'. Expected a non-empty name fragment without path separators")]
    InvalidSuffix(String),

    /// The parser could not produce a tree for a document.
    #[error("Failed to parse document {source_name}: {source}")]
    Parse {
        source_name: String,
        #[source]
        source: ParseError,
    },

    /// A tree was produced but it has no root element.
    #[error("Unable to get root element, document is empty: {source_name}")]
    EmptyDocument { source_name: String },

    /// Element nesting deeper than the configured cap.
    #[error("Document nesting exceeds the depth limit of {limit}")]
    DepthExceeded { limit: usize },

    /// The output file could not be created or written.
    #[error("Failed to write output file {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// One or more documents of a batch failed.
    #[error("{failed} of {attempted} document(s) failed in batch mode")]
    BatchFailed { failed: usize, attempted: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure reported by a markup parser.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input could not be read at all.
    #[error("cannot read input: {0}")]
    Read(#[source] std::io::Error),

    /// Strict XML parsing rejected the markup.
    #[error("XML parsing failed: {0}")]
    Xml(#[from] roxmltree::Error),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExtractError::InvalidTagName("<li>".to_string());
        assert!(err.to_string().contains("<li>"));
        assert!(err.to_string().contains("'li'"));
    }

    #[test]
    fn test_empty_document_names_source() {
        let err = ExtractError::EmptyDocument {
            source_name: "blank.html".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unable to get root element, document is empty: blank.html"
        );
    }

    #[test]
    fn test_output_write_names_path() {
        let err = ExtractError::OutputWrite {
            path: PathBuf::from("out/result.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let message = err.to_string();
        assert!(message.contains("result.txt"));
        assert!(message.contains("missing"));
    }

    #[test]
    fn test_parse_error_wraps_reason() {
        let err = ExtractError::Parse {
            source_name: "page.html".to_string(),
            source: ParseError::Read(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "denied",
            )),
        };
        assert_eq!(
            err.to_string(),
            "Failed to parse document page.html: cannot read input: denied"
        );
    }
}
