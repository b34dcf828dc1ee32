pub mod ast;
pub mod cli;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod trace;
pub mod translator;

pub use ast::{FieldBranch, FieldComposite, FieldUnit, ModelError, Operator, Query, Token};
pub use lexer::{Lexer, Span, Spanned};
pub use output::{from_json, to_json, to_json_pretty, to_query_string};
pub use parser::{decompose, ParseError, Parser};
pub use trace::{NoopTrace, TraceEvent, TraceSink, TracingSink};
pub use translator::{Lang, Translator, UnknownLang};
