//! Decompose a query and render it back, reporting both halves

use crate::{Lang, Query, TraceSink, Translator};
use serde::Serialize;
use std::sync::Arc;

/// Query checked when none is given on the command line.
pub const DEFAULT_QUERY: &str =
    "SELECT MEAN(ensemble), MAX(entropy) + MIN(enchiladas) AS extra_Es FROM E_LETTERS";

/// Options for the check command
#[derive(Clone)]
pub struct CheckOptions {
    /// Query text to decompose
    pub query: String,
    /// Language the query is written in
    pub lang: Lang,
    /// Sink for decomposition steps, silent when `None`
    pub trace: Option<Arc<dyn TraceSink>>,
}

impl Default for CheckOptions {
    fn default() -> Self {
        CheckOptions {
            query: DEFAULT_QUERY.to_string(),
            lang: Lang::default(),
            trace: None,
        }
    }
}

/// Decomposed model, or the message of the error that stopped it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParseOutcome {
    Query(Query),
    Error(String),
}

/// Result of a check operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub influx_parse: ParseOutcome,
    pub influx_compose: String,
    /// Whether the rendering equals the input with whitespace collapsed
    pub round_trip: bool,
}

/// Execute a databreaks check operation
///
/// Never fails: a parse error is reported inside the record, and the
/// rendering of the (then empty) query is still included.
pub fn execute_check(options: &CheckOptions) -> CheckReport {
    let mut translator = Translator::new(options.lang);
    if let Some(trace) = &options.trace {
        translator = translator.with_trace(Arc::clone(trace));
    }

    let influx_parse = match translator.parse_from_lang(&options.query) {
        Ok(()) => ParseOutcome::Query(translator.query.clone()),
        Err(e) => ParseOutcome::Error(e.to_string()),
    };
    let influx_compose = translator.render_to_lang();
    let round_trip = matches!(influx_parse, ParseOutcome::Query(_))
        && influx_compose == collapse_whitespace(&options.query);

    CheckReport {
        influx_parse,
        influx_compose,
        round_trip,
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
