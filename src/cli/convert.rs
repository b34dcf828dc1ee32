//! Query text <-> JSON model conversion

use super::CliError;
use crate::{Lexer, Parser, TraceSink, output};
use std::sync::Arc;

/// Options for the decompose command
#[derive(Clone, Default)]
pub struct ConvertOptions {
    /// Pretty-print the JSON
    pub pretty: bool,
    /// Sink for decomposition steps, silent when `None`
    pub trace: Option<Arc<dyn TraceSink>>,
}

/// Decompose query text and serialize the model as JSON
pub fn decompose_to_json(query: &str, options: &ConvertOptions) -> Result<String, CliError> {
    let mut parser = Parser::new(Lexer::new(query));
    if let Some(trace) = &options.trace {
        parser = parser.with_trace(trace.as_ref());
    }
    let model = parser.parse_query()?;

    let json = if options.pretty {
        output::to_json_pretty(&model)?
    } else {
        output::to_json(&model)?
    };
    Ok(json)
}

/// Read a JSON model and render it as query text
pub fn compose_from_json(json: &str) -> Result<String, CliError> {
    let model = output::from_json(json)?;
    Ok(output::to_query_string(&model))
}
