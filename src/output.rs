//! Query text and JSON output for decomposed queries.
//!
//! This module is the reverse direction of the parser. Rendering is a fold
//! over the model: it never validates and never fails.
//!
//! # Features
//!
//! - **Canonical text** via [`to_query_string()`] and `Display` on every model type
//! - **Compact JSON** via [`to_json()`]
//! - **Pretty JSON** via [`to_json_pretty()`] - 2-space indentation
//! - **JSON input** via [`from_json()`]
//!
//! # Rendering rules
//!
//! - unit: `Function(Column)`
//! - branch: units separated by ` <op> `; operator `i` is written after unit
//!   `i` only while `i < operators.len()`, so missing operators leave units
//!   glued together. A surplus operator at the last unit's index is written
//!   after that unit (`A(a) + B(b) + `); operators past it are dropped.
//!   ` AS <alias>` follows when an alias is present.
//! - composite: branches joined with `", "`
//! - query: `SELECT <composite> FROM <measurement>`
//!
//! # Examples
//!
//! ```
//! use databreaks::ast::{FieldBranch, FieldComposite, FieldUnit, Query};
//! use databreaks::output::to_query_string;
//!
//! let query = Query::new(
//!     "cpu",
//!     FieldComposite::new(vec![FieldBranch::single(FieldUnit::new("MEAN", "load"))]),
//! );
//!
//! assert_eq!(to_query_string(&query), "SELECT MEAN(load) FROM cpu");
//! ```

use crate::ast::{FieldBranch, FieldComposite, FieldUnit, Query};
use std::fmt;

/// Renders the canonical query string.
pub fn to_query_string(query: &Query) -> String {
    query.to_string()
}

/// Compact JSON record of the query.
pub fn to_json(query: &Query) -> serde_json::Result<String> {
    serde_json::to_string(query)
}

/// Indented JSON record of the query.
pub fn to_json_pretty(query: &Query) -> serde_json::Result<String> {
    serde_json::to_string_pretty(query)
}

/// Reads a query model from its JSON record.
pub fn from_json(json: &str) -> serde_json::Result<Query> {
    serde_json::from_str(json)
}

impl fmt::Display for FieldUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.function, self.column)
    }
}

impl fmt::Display for FieldBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, unit) in self.field_units.iter().enumerate() {
            write!(f, "{}", unit)?;
            if let Some(op) = self.operators.get(i) {
                write!(f, " {} ", op)?;
            }
        }
        match &self.alias {
            Some(alias) if !alias.is_empty() => write!(f, " AS {}", alias),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for FieldComposite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, branch) in self.field_branches.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", branch)?;
        }
        Ok(())
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SELECT {} FROM {}", self.fields, self.measurement)
    }
}
