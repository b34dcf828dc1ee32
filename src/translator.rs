//! Language-tagged façade over decomposition and rendering.
//!
//! A [`Translator`] holds one [`Query`] and the [`Lang`] it was read from.
//! Only InfluxQL exists today, so the tag is recorded but never changes how
//! text is parsed or rendered.

use crate::{
    ast::Query,
    lexer::Lexer,
    output::to_query_string,
    parser::{ParseError, Parser},
    trace::{NoopTrace, TraceSink},
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, sync::Arc};

/// Query dialect tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lang {
    #[default]
    #[serde(rename = "influxql")]
    InfluxQl,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown query language: '{0}'")]
pub struct UnknownLang(pub String);

impl FromStr for Lang {
    type Err = UnknownLang;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "influxql" | "influx" => Ok(Lang::InfluxQl),
            _ => Err(UnknownLang(s.to_string())),
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lang::InfluxQl => write!(f, "influxql"),
        }
    }
}

/// Holds one decomposed query and converts it from and to text.
pub struct Translator {
    pub query: Query,
    pub lang: Lang,
    trace: Arc<dyn TraceSink>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Lang::default())
    }
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("query", &self.query)
            .field("lang", &self.lang)
            .finish_non_exhaustive()
    }
}

impl Translator {
    pub fn new(lang: Lang) -> Self {
        Translator {
            query: Query::default(),
            lang,
            trace: Arc::new(NoopTrace),
        }
    }

    /// Sends every later decomposition through `trace`.
    pub fn with_trace(mut self, trace: Arc<dyn TraceSink>) -> Self {
        self.trace = trace;
        self
    }

    /// Replaces the held query with the decomposition of `text`.
    ///
    /// On failure the held query is reset to `Query::default()`.
    pub fn parse_from_lang(&mut self, text: &str) -> Result<(), ParseError> {
        let parsed = Parser::new(Lexer::new(text))
            .with_trace(self.trace.as_ref())
            .parse_query();

        match parsed {
            Ok(query) => {
                self.query = query;
                Ok(())
            }
            Err(err) => {
                self.query = Query::default();
                Err(err)
            }
        }
    }

    /// Renders the held query.
    pub fn render_to_lang(&self) -> String {
        to_query_string(&self.query)
    }
}
