use crate::ast::FieldComposite;
use serde::{Deserialize, Serialize};

/// Decomposed form of one `SELECT <fields> FROM <measurement>` statement.
///
/// The default value (no branches, empty measurement) is what a failed
/// decomposition leaves behind in a [`Translator`](crate::Translator).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Field composite between `SELECT` and `FROM`
    #[serde(default)]
    pub fields: FieldComposite,

    /// Source name after `FROM`, kept verbatim
    #[serde(default)]
    pub measurement: String,
}

impl Query {
    pub fn new(measurement: impl Into<String>, fields: FieldComposite) -> Self {
        Query {
            fields,
            measurement: measurement.into(),
        }
    }
}
