//! Reading the tag list from an interactive prompt.

use std::io::BufRead;

use crate::config::QUIT_TOKEN;
use crate::error::Result;

/// Read whitespace-separated tag names until the [`QUIT_TOKEN`] token.
///
/// Tokens may span several lines. End of input also ends the list, so a
/// closed stdin never hangs the run. Anything after `quit` is ignored.
pub fn read_tag_list<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut tags = Vec::new();
    for line in reader.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            if token == QUIT_TOKEN {
                return Ok(tags);
            }
            tags.push(token.to_string());
        }
    }
    tracing::debug!(count = tags.len(), "Tag input ended without quit token");
    Ok(tags)
}

/// Split a `--tags` value on commas, dropping empty entries.
#[must_use]
pub fn split_tag_arg(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
