//! Batch mode: every file of a directory, one output per input.

use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::validate_suffix;
use crate::error::{ExtractError, Result};
use crate::extract::DocumentProcessor;
use crate::output::write_output;

/// What to do when a document fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first failed document; later documents are not touched.
    #[default]
    FailFast,

    /// Record the failure and go on with the next document.
    Continue,
}

/// Outcome for one input of a batch.
#[derive(Debug)]
pub struct BatchResult {
    pub input: PathBuf,
    /// Derived output path, `None` when no name could be derived.
    pub output: Option<PathBuf>,
    pub outcome: Result<()>,
}

impl BatchResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Per-candidate notification from [`run_batch_with`].
#[derive(Debug, Clone, Copy)]
pub enum BatchProgress<'a> {
    /// The candidate was left out: the running executable, or an output
    /// this run already wrote.
    Skipped(&'a Path),

    /// The candidate was processed, successfully or not.
    Finished(&'a BatchResult),
}

/// Derive the output path for `path`: `stem + suffix + extension`, next
/// to the input.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use tagtext::batch::derive_output_name;
///
/// let out = derive_output_name(Path::new("report.html"), "_out").unwrap();
/// assert_eq!(out, Path::new("report_out.html"));
///
/// let out = derive_output_name(Path::new("docs/README"), "-text").unwrap();
/// assert_eq!(out, Path::new("docs/README-text"));
/// ```
pub fn derive_output_name(path: &Path, suffix: &str) -> Result<PathBuf> {
    validate_suffix(suffix)?;
    let stem = path.file_stem().ok_or_else(|| {
        ExtractError::InvalidArguments(format!(
            "cannot derive an output name from {}",
            path.display()
        ))
    })?;

    let mut name = stem.to_os_string();
    name.push(suffix);
    if let Some(extension) = path.extension() {
        name.push(".");
        name.push(extension);
    }
    Ok(path.with_file_name(name))
}

/// List the regular files of `dir`, sorted by file name.
pub fn list_candidates(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            candidates.push(path);
        }
    }
    candidates.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(candidates)
}

/// File name of the running executable, to keep it out of a batch.
#[must_use]
pub fn current_exe_name() -> Option<OsString> {
    std::env::current_exe()
        .ok()
        .and_then(|path| path.file_name().map(OsStr::to_os_string))
}

/// Process every candidate and write each result next to its input.
///
/// See [`run_batch_with`].
pub fn run_batch(
    candidates: &[PathBuf],
    processor: &DocumentProcessor,
    suffix: &str,
    exclude_name: Option<&OsStr>,
    policy: FailurePolicy,
) -> Vec<BatchResult> {
    run_batch_with(candidates, processor, suffix, exclude_name, policy, |_| {})
}

/// Process every candidate, calling `on_progress` once per candidate
/// visited.
///
/// Candidates named `exclude_name` are skipped, as are files this run has
/// already written; both report [`BatchProgress::Skipped`]. Each document
/// gets a fresh buffer. Under [`FailurePolicy::FailFast`] the first failure
/// is the last result.
pub fn run_batch_with<F>(
    candidates: &[PathBuf],
    processor: &DocumentProcessor,
    suffix: &str,
    exclude_name: Option<&OsStr>,
    policy: FailurePolicy,
    mut on_progress: F,
) -> Vec<BatchResult>
where
    F: FnMut(BatchProgress<'_>),
{
    let mut results = Vec::new();
    let mut written: HashSet<PathBuf> = HashSet::new();

    for input in candidates {
        if exclude_name.is_some_and(|name| input.file_name() == Some(name)) {
            tracing::debug!(path = %input.display(), "Skipping running executable");
            on_progress(BatchProgress::Skipped(input));
            continue;
        }
        if written.contains(input) {
            tracing::debug!(path = %input.display(), "Skipping output written by this run");
            on_progress(BatchProgress::Skipped(input));
            continue;
        }

        let result = process_one(input, processor, suffix);
        match (&result.outcome, &result.output) {
            (Ok(()), Some(output)) => {
                tracing::info!(
                    input = %input.display(),
                    output = %output.display(),
                    "Extracted document"
                );
                written.insert(output.clone());
            }
            (Err(e), _) => {
                tracing::warn!(input = %input.display(), error = %e, "Document failed");
            }
            (Ok(()), None) => {}
        }

        let failed = !result.is_success();
        on_progress(BatchProgress::Finished(&result));
        results.push(result);

        if failed && policy == FailurePolicy::FailFast {
            tracing::warn!(
                remaining = candidates.len().saturating_sub(results.len()),
                "Aborting batch after failure"
            );
            break;
        }
    }

    results
}

fn process_one(input: &Path, processor: &DocumentProcessor, suffix: &str) -> BatchResult {
    let output = match derive_output_name(input, suffix) {
        Ok(output) => output,
        Err(e) => {
            return BatchResult {
                input: input.to_path_buf(),
                output: None,
                outcome: Err(e),
            }
        }
    };

    let outcome = processor
        .process_file(input)
        .and_then(|text| write_output(&output, &text));

    BatchResult {
        input: input.to_path_buf(),
        output: Some(output),
        outcome,
    }
}

/// Number of failed documents in `results`.
#[must_use]
pub fn failure_count(results: &[BatchResult]) -> usize {
    results.iter().filter(|r| !r.is_success()).count()
}
