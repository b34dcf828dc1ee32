//! CLI support for databreaks
//!
//! Provides programmatic access to the `databreaks` subcommands so they can
//! be embedded in other tools.

mod check;
mod convert;
mod docs;

pub use check::{execute_check, CheckOptions, CheckReport, ParseOutcome, DEFAULT_QUERY};
pub use convert::{compose_from_json, decompose_to_json, ConvertOptions};
pub use docs::{get_grammar_overview, get_grammar_topic, GrammarTopic};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Lang(#[from] crate::UnknownLang),

    #[error("No input provided. Use --input or pipe JSON to stdin.")]
    NoInput,

    #[error("Unknown topic: '{0}'\nRun 'databreaks grammar' to see available topics.")]
    UnknownTopic(String),
}
