use crate::{
    ast::{FieldBranch, FieldComposite, FieldUnit, Operator, Query, Token},
    lexer::{Lexer, Spanned},
    trace::{NoopTrace, TraceEvent, TraceSink},
};
use std::ops::Range;

/// Reasons a query string does not match `SELECT <fields> FROM <measurement>`.
///
/// Every error is terminal: decomposition never returns a partial query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input does not start with `SELECT` or has no `FROM` after it
    #[error("Cannot parse query: improper syntax, expected SELECT <fields> FROM <measurement>")]
    NoMatch,

    /// Nothing but whitespace follows the final `FROM`
    #[error("Cannot parse query: no measurement after FROM")]
    NoMeasurement,

    /// No field branch between `SELECT` and `FROM`
    #[error("Cannot parse query: nothing to match between SELECT and FROM")]
    EmptyComposite,

    /// A branch is not `function(column) [op function(column)]* [AS alias]`
    #[error("Cannot parse query: improper field syntax at position {position}: {reason}")]
    BadFieldSyntax { position: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, ParseError>;

static NOOP: NoopTrace = NoopTrace;

/// Decomposes a query string using the default (silent) trace sink.
pub fn decompose(query: &str) -> Result<Query> {
    Parser::new(Lexer::new(query)).parse_query()
}

pub struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Spanned>,
    trace: &'a dyn TraceSink,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        let source = lexer.source();
        Parser {
            source,
            tokens: lexer.tokenize(),
            trace: &NOOP,
        }
    }

    /// Routes intermediate extractions to `trace`.
    pub fn with_trace(mut self, trace: &'a dyn TraceSink) -> Self {
        self.trace = trace;
        self
    }

    /// Decomposes the whole input into a [`Query`].
    ///
    /// Runs clause split, branch split and branch decomposition in order;
    /// the first stage to fail decides the error.
    pub fn parse_query(&self) -> Result<Query> {
        let result = self.decompose();
        if let Err(err) = &result {
            self.trace.record(&TraceEvent::Rejected(err));
        }
        result
    }

    fn decompose(&self) -> Result<Query> {
        let (select, from) = self.split_clause()?;

        let composite = self.text(self.tokens[select].span.end..self.tokens[from].span.start);
        self.trace.record(&TraceEvent::Composite(composite.trim()));

        let measurement = self.source[self.tokens[from].span.end..].trim();
        self.trace.record(&TraceEvent::Measurement(measurement));
        if measurement.is_empty() {
            return Err(ParseError::NoMeasurement);
        }

        let segments = self.split_branches(select + 1, from);
        if segments.is_empty() {
            return Err(ParseError::EmptyComposite);
        }

        let texts: Vec<&str> = segments
            .iter()
            .map(|range| self.segment_text(range).trim())
            .collect();
        self.trace.record(&TraceEvent::Branches(&texts));

        let field_branches = segments
            .iter()
            .enumerate()
            .map(|(index, range)| self.parse_branch(index, range.clone()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Query::new(measurement, FieldComposite::new(field_branches)))
    }

    /// Finds the leading `SELECT` and the last top-level `FROM` after it.
    ///
    /// When parentheses are left open at the end of the input, no `FROM` may
    /// sit at depth zero; the last nested `FROM` is used then, and the branch
    /// scan reports the imbalance. With balanced parentheses a nested `FROM`
    /// is never a clause.
    fn split_clause(&self) -> Result<(usize, usize)> {
        if self.tokens[0].token != Token::Select {
            return Err(ParseError::NoMatch);
        }

        let mut depth = 0usize;
        let mut top_level = None;
        let mut nested = None;
        for (index, spanned) in self.tokens.iter().enumerate().skip(1) {
            match spanned.token {
                Token::LParen => depth += 1,
                Token::RParen => depth = depth.saturating_sub(1),
                Token::From if depth == 0 => top_level = Some(index),
                Token::From => nested = Some(index),
                _ => {}
            }
        }

        let from = match (top_level, nested) {
            (Some(from), _) => from,
            (None, Some(from)) if depth > 0 => from,
            _ => return Err(ParseError::NoMatch),
        };
        Ok((0, from))
    }

    /// Splits the token range `start..end` on commas at depth zero.
    ///
    /// Each returned range ends at the index of its delimiter token (a comma
    /// or the `FROM` keyword). Segments holding no tokens are dropped.
    fn split_branches(&self, start: usize, end: usize) -> Vec<Range<usize>> {
        let mut segments = Vec::new();
        let mut depth = 0usize;
        let mut segment_start = start;

        for index in start..end {
            match self.tokens[index].token {
                Token::LParen => depth += 1,
                Token::RParen => depth = depth.saturating_sub(1),
                Token::Comma if depth == 0 => {
                    if index > segment_start {
                        segments.push(segment_start..index);
                    }
                    segment_start = index + 1;
                }
                _ => {}
            }
        }
        if end > segment_start {
            segments.push(segment_start..end);
        }

        segments
    }

    /// Scans one branch: `unit (op unit)* (AS alias)?`.
    fn parse_branch(&self, index: usize, range: Range<usize>) -> Result<FieldBranch> {
        let mut cursor = range.start;
        let mut field_units = Vec::new();
        let mut operators = Vec::new();
        let mut alias = None;

        loop {
            field_units.push(self.parse_unit(index, &mut cursor, range.end)?);

            if cursor == range.end {
                break;
            }

            let spanned = &self.tokens[cursor];
            if let Some(op) = Operator::from_token(&spanned.token) {
                operators.push(op);
                cursor += 1;
                if cursor == range.end {
                    return Err(bad_field(
                        spanned.span.start,
                        format!("operator `{}` has no field unit after it", op),
                    ));
                }
                continue;
            }

            if spanned.token == Token::As {
                let text = self
                    .text(spanned.span.end..self.tokens[range.end].span.start)
                    .trim();
                if text.is_empty() {
                    return Err(bad_field(spanned.span.start, "expected an alias after AS"));
                }
                self.trace.record(&TraceEvent::Alias {
                    branch: index,
                    alias: text,
                });
                alias = Some(text.to_string());
                break;
            }

            return Err(bad_field(
                spanned.span.start,
                format!(
                    "expected an operator or AS after a field unit, got `{}`",
                    spanned.token
                ),
            ));
        }

        self.trace.record(&TraceEvent::Operators {
            branch: index,
            operators: &operators,
        });

        Ok(FieldBranch::unchecked(field_units, operators, alias))
    }

    /// Scans `function(column)` starting at `cursor`, leaving `cursor` just
    /// past the closing parenthesis.
    fn parse_unit(&self, branch: usize, cursor: &mut usize, end: usize) -> Result<FieldUnit> {
        let first = *cursor;
        // Keywords are plain words in function position: `select(x)` is a unit.
        while *cursor < end && is_function_word(&self.tokens[*cursor].token) {
            *cursor += 1;
        }

        if *cursor == first {
            let spanned = &self.tokens[first];
            return Err(bad_field(
                spanned.span.start,
                format!("expected a function name, got `{}`", spanned.token),
            ));
        }

        if *cursor == end || self.tokens[*cursor].token != Token::LParen {
            let start = self.tokens[first].span.start;
            let stop = self.tokens[*cursor - 1].span.end;
            return Err(bad_field(
                start,
                format!("`{}` is not of the form function(column)", self.text(start..stop)),
            ));
        }

        let open = *cursor;
        let close = self.matching_paren(open, end)?;

        let function = self
            .text(self.tokens[first].span.start..self.tokens[open].span.start)
            .trim();
        let column = self
            .text(self.tokens[open].span.end..self.tokens[close].span.start)
            .trim();

        if column.is_empty() {
            return Err(bad_field(
                self.tokens[open].span.start,
                format!("function `{}` has no column", function),
            ));
        }
        if column.chars().any(char::is_whitespace) {
            return Err(bad_field(
                self.tokens[open].span.end,
                format!("column `{}` contains whitespace", column),
            ));
        }

        let text = self.text(self.tokens[first].span.start..self.tokens[close].span.end);
        self.trace.record(&TraceEvent::Unit {
            branch,
            text,
            function,
            column,
        });

        *cursor = close + 1;
        Ok(FieldUnit::new(function, column))
    }

    /// Index of the `)` closing the `(` at `open`, within the branch.
    fn matching_paren(&self, open: usize, end: usize) -> Result<usize> {
        let mut depth = 0usize;

        for index in open..end {
            let spanned = &self.tokens[index];
            match &spanned.token {
                Token::LParen => depth += 1,
                Token::RParen => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(index);
                    }
                }
                token if token.is_operator() => {
                    return Err(bad_field(
                        spanned.span.start,
                        format!("operator `{}` inside a column", token),
                    ));
                }
                _ => {}
            }
        }

        Err(bad_field(
            self.tokens[open].span.start,
            "unbalanced parentheses in field unit",
        ))
    }

    fn text(&self, range: Range<usize>) -> &'a str {
        &self.source[range]
    }

    fn segment_text(&self, range: &Range<usize>) -> &'a str {
        self.text(self.tokens[range.start].span.start..self.tokens[range.end].span.start)
    }
}

fn is_function_word(token: &Token) -> bool {
    matches!(token, Token::Word(_)) || token.is_keyword()
}

fn bad_field(position: usize, reason: impl Into<String>) -> ParseError {
    ParseError::BadFieldSyntax {
        position,
        reason: reason.into(),
    }
}
