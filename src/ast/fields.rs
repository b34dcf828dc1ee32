use crate::ast::Operator;
use serde::{Deserialize, Deserializer, Serialize};

/// A single `function(column)` pair.
///
/// # Example
/// ```text
/// MEAN(ensemble)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldUnit {
    /// Function applied to the column (not validated)
    pub function: String,

    /// Column the function reads (not validated)
    pub column: String,
}

impl FieldUnit {
    pub fn new(function: impl Into<String>, column: impl Into<String>) -> Self {
        FieldUnit {
            function: function.into(),
            column: column.into(),
        }
    }
}

/// One projected output column.
///
/// A branch is one or more field units joined by arithmetic operators, with
/// an optional alias:
///
/// ```text
/// MAX(entropy) + MIN(enchiladas) AS extra_Es
/// ```
///
/// A well-formed branch holds exactly one operator fewer than it holds units.
/// Only [`FieldBranch::new`] enforces that; building the struct directly (or
/// through [`FieldBranch::unchecked`]) does not, and rendering tolerates the
/// mismatch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldBranch {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub field_units: Vec<FieldUnit>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub operators: Vec<Operator>,

    /// Trailing `AS <name>`; an empty string deserializes to `None`
    #[serde(default, deserialize_with = "empty_as_none")]
    pub alias: Option<String>,
}

/// Errors raised when building model values through their checked constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("branch has {units} field unit(s) but {operators} operator(s); expected {expected}")]
    OperatorCount {
        units: usize,
        operators: usize,
        expected: usize,
    },
}

impl FieldBranch {
    /// Builds a branch, checking that operators sit strictly between units.
    pub fn new(
        field_units: Vec<FieldUnit>,
        operators: Vec<Operator>,
        alias: Option<String>,
    ) -> Result<Self, ModelError> {
        let expected = field_units.len().saturating_sub(1);
        if field_units.is_empty() || operators.len() != expected {
            return Err(ModelError::OperatorCount {
                units: field_units.len(),
                operators: operators.len(),
                expected,
            });
        }
        Ok(Self::unchecked(field_units, operators, alias))
    }

    pub fn unchecked(
        field_units: Vec<FieldUnit>,
        operators: Vec<Operator>,
        alias: Option<String>,
    ) -> Self {
        FieldBranch {
            field_units,
            operators,
            alias: alias.filter(|a| !a.is_empty()),
        }
    }

    /// Branch with a single unit, no operators and no alias.
    pub fn single(unit: FieldUnit) -> Self {
        Self::unchecked(vec![unit], Vec::new(), None)
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        let alias = alias.into();
        self.alias = if alias.is_empty() { None } else { Some(alias) };
        self
    }

    pub fn is_well_formed(&self) -> bool {
        !self.field_units.is_empty() && self.operators.len() + 1 == self.field_units.len()
    }
}

/// Ordered list of branches between `SELECT` and `FROM`.
///
/// Order defines output column order; duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldComposite {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub field_branches: Vec<FieldBranch>,
}

impl FieldComposite {
    pub fn new(field_branches: Vec<FieldBranch>) -> Self {
        FieldComposite { field_branches }
    }

    pub fn len(&self) -> usize {
        self.field_branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.field_branches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldBranch> {
        self.field_branches.iter()
    }
}

impl<'a> IntoIterator for &'a FieldComposite {
    type Item = &'a FieldBranch;
    type IntoIter = std::slice::Iter<'a, FieldBranch>;

    fn into_iter(self) -> Self::IntoIter {
        self.field_branches.iter()
    }
}

// Records written by other tools carry `null` for empty lists and `""` for a
// missing alias.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|a| !a.is_empty()))
}
