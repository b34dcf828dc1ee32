//! Diagnostic trace sinks for decomposition.
//!
//! The parser reports every intermediate extraction to a [`TraceSink`]. The
//! default sink discards everything; [`TracingSink`] forwards to `tracing` at
//! debug level, and any `Fn(&TraceEvent)` closure can serve as a sink.

use crate::ast::Operator;
use crate::parser::ParseError;

/// One intermediate step of a decomposition.
#[derive(Debug, Clone, Copy)]
pub enum TraceEvent<'a> {
    /// Text between `SELECT` and the final `FROM`
    Composite(&'a str),

    /// Trimmed text after the final `FROM`
    Measurement(&'a str),

    /// Text of every branch, in order
    Branches(&'a [&'a str]),

    /// A field unit split into its parts
    Unit {
        branch: usize,
        text: &'a str,
        function: &'a str,
        column: &'a str,
    },

    /// Operators collected for a branch
    Operators {
        branch: usize,
        operators: &'a [Operator],
    },

    /// Alias found for a branch
    Alias { branch: usize, alias: &'a str },

    /// Decomposition stopped with an error
    Rejected(&'a ParseError),
}

pub trait TraceSink: Send + Sync {
    fn record(&self, event: &TraceEvent<'_>);
}

/// Sink that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTrace;

impl TraceSink for NoopTrace {
    #[inline]
    fn record(&self, _event: &TraceEvent<'_>) {}
}

/// Sink that emits each event as a `tracing` debug event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn record(&self, event: &TraceEvent<'_>) {
        match event {
            TraceEvent::Composite(text) => {
                tracing::debug!(composite = %text, "obtained field composite")
            }
            TraceEvent::Measurement(text) => {
                tracing::debug!(measurement = %text, "obtained measurement")
            }
            TraceEvent::Branches(branches) => {
                tracing::debug!(count = branches.len(), ?branches, "obtained branches")
            }
            TraceEvent::Unit {
                branch,
                text,
                function,
                column,
            } => tracing::debug!(branch, unit = %text, function = %function, column = %column, "split field unit"),
            TraceEvent::Operators { branch, operators } => {
                tracing::debug!(branch, ?operators, "collected operators")
            }
            TraceEvent::Alias { branch, alias } => {
                tracing::debug!(branch, alias = %alias, "obtained alias")
            }
            TraceEvent::Rejected(err) => tracing::debug!(error = %err, "cannot parse query"),
        }
    }
}

impl<F> TraceSink for F
where
    F: Fn(&TraceEvent<'_>) + Send + Sync,
{
    fn record(&self, event: &TraceEvent<'_>) {
        self(event)
    }
}
