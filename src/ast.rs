//! # Field-composite query model
//!
//! This module defines the tokens and the language-independent model that a
//! restricted `SELECT ... FROM ...` query decomposes into.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[operators]** - Arithmetic operators joining field units
//! - **[fields]** - Field units, branches and the composite
//! - **[query]** - A complete decomposed query
//!
//! ## Quick Start
//!
//! ```text
//! SELECT MEAN(ensemble), MAX(entropy) + MIN(enchiladas) AS extra_Es FROM E_LETTERS
//! ```
//!
//! decomposes into:
//!
//! ```text
//! Query
//! ├── measurement: E_LETTERS
//! └── fields
//!     ├── branch: MEAN(ensemble)
//!     └── branch: MAX(entropy) + MIN(enchiladas)   alias: extra_Es
//! ```
//!
//! ## Core Concepts
//!
//! ### Field units
//!
//! A unit is a `function(column)` pair. Neither name is validated; the
//! column may contain nested parentheses and commas but no whitespace or
//! operator characters.
//!
//! ### Field branches
//!
//! Units are joined by `+ - * /`. Operators are positional only: the model
//! keeps them in encounter order and never evaluates or reorders them.
//!
//! ### Aliases
//!
//! A trailing `AS <name>` names the branch; everything after the keyword up
//! to the end of the branch is the alias.
pub mod fields;
pub mod operators;
pub mod query;
pub mod tokens;

pub use fields::{FieldBranch, FieldComposite, FieldUnit, ModelError};
pub use operators::Operator;
pub use query::Query;
pub use tokens::Token;
