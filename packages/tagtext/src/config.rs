//! Configuration constants, validation, and the per-run settings.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{ExtractError, Result};
use crate::extract::{CaseSensitivity, DocumentProcessor, OutputMode, TagSet, TraversalLimits};
use crate::parser::{create_parser, Markup, ParseOptions};

/// Token that ends the interactive tag list.
pub const QUIT_TOKEN: &str = "quit";

/// Default cap on element nesting during traversal.
///
/// Far beyond any real page, low enough that hostile input fails with a
/// clear error instead of growing without bound.
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Element names as they appear in HTML and XML markup.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TAG_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_.:-]*$").expect("valid regex"));

/// Batch suffix: anything that stays inside one file name.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SUFFIX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^/\\\x00]+$").expect("valid regex"));

/// Validate a tag name entered by the user.
///
/// # Examples
/// ```
/// use tagtext::config::validate_tag_name;
///
/// assert!(validate_tag_name("li").is_ok());
/// assert!(validate_tag_name("svg:text").is_ok());
/// assert!(validate_tag_name("<li>").is_err());
/// ```
pub fn validate_tag_name(name: &str) -> Result<()> {
    if TAG_NAME_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(ExtractError::InvalidTagName(name.to_string()))
    }
}

/// Validate a batch output suffix.
///
/// # Examples
/// ```
/// use tagtext::config::validate_suffix;
///
/// assert!(validate_suffix("_out").is_ok());
/// assert!(validate_suffix("").is_err());
/// assert!(validate_suffix("../x").is_err());
/// ```
pub fn validate_suffix(suffix: &str) -> Result<()> {
    if SUFFIX_PATTERN.is_match(suffix) {
        Ok(())
    } else {
        Err(ExtractError::InvalidSuffix(suffix.to_string()))
    }
}

/// Map the `--max-depth` argument to a limit; 0 disables the cap.
#[must_use]
pub fn max_depth_from_arg(value: usize) -> Option<usize> {
    (value > 0).then_some(value)
}

/// Settings that apply to every document of a run.
#[derive(Debug, Clone, Default)]
pub struct ExtractConfig {
    pub markup: Markup,
    pub parse_options: ParseOptions,
    pub case: CaseSensitivity,
    pub limits: TraversalLimits,
    pub mode: OutputMode,
}

impl ExtractConfig {
    /// Validate `tags` and build the processor used for the whole run.
    pub fn build_processor(&self, tags: Vec<String>) -> Result<DocumentProcessor> {
        for tag in &tags {
            validate_tag_name(tag)?;
        }
        let tags = TagSet::new(tags, self.case);
        let parser = create_parser(self.markup, self.parse_options);
        Ok(DocumentProcessor::new(parser, tags)
            .with_limits(self.limits)
            .with_mode(self.mode))
    }
}
