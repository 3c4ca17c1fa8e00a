//! Command-line interface for the extractor.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::batch::{
    current_exe_name, failure_count, list_candidates, run_batch_with, BatchProgress, FailurePolicy,
};
use crate::config::{max_depth_from_arg, validate_suffix, ExtractConfig, DEFAULT_MAX_DEPTH, QUIT_TOKEN};
use crate::error::{ExtractError, Result};
use crate::extract::{CaseSensitivity, DocumentProcessor, OutputMode, TraversalLimits};
use crate::input::{read_tag_list, split_tag_arg};
use crate::output::write_output;
use crate::parser::{Markup, ParseOptions};

/// Extract the text of selected HTML elements into plain-text files.
///
/// Tag names are read from standard input, separated by whitespace and
/// terminated by `quit`, unless --tags is given.
#[derive(Parser, Debug)]
#[command(name = "tagtext")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input document
    #[arg(required_unless_present = "batch", conflicts_with = "batch")]
    pub input: Option<PathBuf>,

    /// Output text file
    #[arg(required_unless_present = "batch", conflicts_with = "batch")]
    pub output: Option<PathBuf>,

    /// Process every file in the working directory, writing stem+SUFFIX+extension
    #[arg(short = 'b', long = "batch", value_name = "SUFFIX", allow_hyphen_values = true)]
    pub batch: Option<String>,

    /// Comma-separated tag names (skips the prompt)
    #[arg(short, long, value_name = "LIST")]
    pub tags: Option<String>,

    /// Match tag names case-insensitively
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Parser to use for the input
    #[arg(short, long, value_enum, default_value = "html")]
    pub markup: Markup,

    /// Maximum element nesting depth, 0 for no limit
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Drop whitespace-only text nodes while parsing
    #[arg(long)]
    pub drop_blanks: bool,

    /// Write a listing of every element and text node instead
    #[arg(long)]
    pub dump: bool,

    /// In batch mode, continue after a failed document
    #[arg(long, requires = "batch")]
    pub keep_going: bool,
}

impl Cli {
    /// Settings shared by every document of this run.
    #[must_use]
    pub fn extract_config(&self) -> ExtractConfig {
        ExtractConfig {
            markup: self.markup,
            parse_options: ParseOptions {
                drop_blank_text: self.drop_blanks,
            },
            case: if self.ignore_case {
                CaseSensitivity::Insensitive
            } else {
                CaseSensitivity::Sensitive
            },
            limits: TraversalLimits {
                max_depth: max_depth_from_arg(self.max_depth),
            },
            mode: if self.dump {
                OutputMode::Dump
            } else {
                OutputMode::Matched
            },
        }
    }

    #[must_use]
    pub fn failure_policy(&self) -> FailurePolicy {
        if self.keep_going {
            FailurePolicy::Continue
        } else {
            FailurePolicy::FailFast
        }
    }
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let stdin = std::io::stdin();
    execute(&cli, stdin.lock())
}

/// Run parsed arguments, reading the tag list from `tag_input` when
/// `--tags` is absent.
pub fn execute<R: BufRead>(cli: &Cli, tag_input: R) -> Result<()> {
    if let Some(suffix) = &cli.batch {
        validate_suffix(suffix)?;
    }

    let tags = match &cli.tags {
        Some(list) => split_tag_arg(list),
        None => prompt_tags(tag_input)?,
    };
    let processor = cli.extract_config().build_processor(tags)?;

    match (&cli.batch, &cli.input, &cli.output) {
        (Some(suffix), _, _) => batch_command(&processor, suffix, cli.failure_policy()),
        (None, Some(input), Some(output)) => single_command(&processor, input, output),
        _ => Err(ExtractError::InvalidArguments(
            "expected <INPUT> <OUTPUT> or -b <SUFFIX>".to_string(),
        )),
    }
}

fn prompt_tags<R: BufRead>(reader: R) -> Result<Vec<String>> {
    eprintln!(
        "{} separated by whitespace, finish with '{}':",
        style("Enter tag names").bold(),
        style(QUIT_TOKEN).cyan()
    );
    let tags = read_tag_list(reader)?;
    if tags.is_empty() {
        eprintln!(
            "{} no tags given, output will be empty",
            style("Note:").yellow().bold()
        );
    }
    Ok(tags)
}

/// Execute single-file mode.
fn single_command(processor: &DocumentProcessor, input: &Path, output: &Path) -> Result<()> {
    let text = processor.process_file(input)?;
    write_output(output, &text)?;

    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        output.display()
    );
    Ok(())
}

/// Execute batch mode over the working directory.
fn batch_command(processor: &DocumentProcessor, suffix: &str, policy: FailurePolicy) -> Result<()> {
    let dir = std::env::current_dir()?;
    let candidates = list_candidates(&dir)?;
    let exclude = current_exe_name();

    let pb = ProgressBar::new(candidates.len() as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .expect("valid template"),
    );

    let results = run_batch_with(
        &candidates,
        processor,
        suffix,
        exclude.as_deref(),
        policy,
        |progress| {
            let input = match progress {
                BatchProgress::Skipped(input) => input,
                BatchProgress::Finished(result) => result.input.as_path(),
            };
            pb.inc(1);
            pb.set_message(display_name(input));
        },
    );
    pb.finish_and_clear();

    for result in &results {
        match (&result.outcome, &result.output) {
            (Ok(()), Some(output)) => println!(
                "  {} {} -> {}",
                style("✓").green(),
                display_name(&result.input),
                display_name(output)
            ),
            (Ok(()), None) => {}
            (Err(e), _) => println!(
                "  {} {}: {}",
                style("✗").red(),
                display_name(&result.input),
                e
            ),
        }
    }

    let failed = failure_count(&results);
    println!();
    println!(
        "{} {} document(s)",
        style("Processed").bold(),
        results.len() - failed
    );

    if failed > 0 {
        if policy == FailurePolicy::FailFast {
            eprintln!(
                "{} stopped at the first failure, use --keep-going to continue past it",
                style("Batch aborted:").red().bold()
            );
        }
        return Err(ExtractError::BatchFailed {
            failed,
            attempted: results.len(),
        });
    }
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
