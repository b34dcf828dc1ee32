//! Grammar reference for the databreaks CLI

use super::CliError;

/// Available grammar topics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarTopic {
    Clauses,
    Branches,
    Units,
    Aliases,
    Errors,
    Model,
}

impl GrammarTopic {
    /// Parse topic name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "clauses" | "clause" | "select" => Some(Self::Clauses),
            "branches" | "branch" | "operators" | "ops" => Some(Self::Branches),
            "units" | "unit" | "fields" => Some(Self::Units),
            "aliases" | "alias" | "as" => Some(Self::Aliases),
            "errors" | "error" => Some(Self::Errors),
            "model" | "json" => Some(Self::Model),
            _ => None,
        }
    }
}

/// Get the grammar overview (topic listing)
pub fn get_grammar_overview() -> &'static str {
    r#"DATABREAKS GRAMMAR

databreaks reads a single SELECT statement whose projection is a list of
function(column) units joined by arithmetic operators, and turns it into a
language-independent model. The model renders back into canonical text.

  Query     := SELECT Composite FROM Measurement
  Composite := Branch ("," Branch)*
  Branch    := Unit (Operator Unit)* (AS Alias)?
  Unit      := Function "(" Column ")"
  Operator  := + | - | * | /

TOPICS

  clauses           SELECT / FROM split and the measurement
  branches          Comma splitting and operators between units
  units             function(column) pairs
  aliases           Naming a branch with AS
  errors            Why a query is rejected
  model             JSON field names of the decomposed model

Run 'databreaks grammar <topic>' for details.
"#
}

/// Get the reference text for a specific topic
pub fn get_grammar_topic(name: &str) -> Result<&'static str, CliError> {
    match GrammarTopic::from_name(name) {
        Some(GrammarTopic::Clauses) => Ok(CLAUSES_DOC),
        Some(GrammarTopic::Branches) => Ok(BRANCHES_DOC),
        Some(GrammarTopic::Units) => Ok(UNITS_DOC),
        Some(GrammarTopic::Aliases) => Ok(ALIASES_DOC),
        Some(GrammarTopic::Errors) => Ok(ERRORS_DOC),
        Some(GrammarTopic::Model) => Ok(MODEL_DOC),
        None => Err(CliError::UnknownTopic(name.to_string())),
    }
}

const CLAUSES_DOC: &str = r#"CLAUSES - SELECT and FROM

  SELECT <composite> FROM <measurement>

  The query must start with SELECT (any case). The composite runs up to the
  last FROM outside parentheses; everything after that FROM, trimmed, is the
  measurement and is kept verbatim.

    Query:        SELECT MEAN(load) FROM "telegraf"."autogen"."cpu"
    Measurement:  "telegraf"."autogen"."cpu"

  A FROM with nothing after it is rejected.
"#;

const BRANCHES_DOC: &str = r#"BRANCHES - Output columns

  Commas outside parentheses separate branches. Each branch becomes one
  output column, in order; duplicates are kept.

    SELECT MEAN(a), MEAN(a), MAX(b) FROM m      three branches

  Inside a branch, units are joined by + - * /. Operators are recorded in
  order and have no precedence:

    MAX(entropy) + MIN(enchiladas) * MEAN(x)
    units:     MAX(entropy), MIN(enchiladas), MEAN(x)
    operators: +, *

  Every operator must sit between two units.
"#;

const UNITS_DOC: &str = r#"UNITS - function(column)

  A unit is a function name followed by a parenthesised column.

    MEAN(ensemble)          function MEAN, column ensemble
    COUNT DISTINCT(host)    function "COUNT DISTINCT", column host
    PERCENTILE(value,95)    function PERCENTILE, column "value,95"
    ABS(MEAN(x))            function ABS, column "MEAN(x)"

  Neither name is validated. The column may not contain whitespace or
  operator characters, and may not be empty.
"#;

const ALIASES_DOC: &str = r#"ALIASES - AS <name>

  A trailing AS (any case) names the branch. The alias is the rest of the
  branch text, trimmed.

    MAX(entropy) + MIN(enchiladas) AS extra_Es

  AS must follow a complete unit and must be followed by a name.
"#;

const ERRORS_DOC: &str = r#"ERRORS

  no match            Input does not start with SELECT, or has no FROM
                        INSERT x
                        SELECT MEAN(a)
  no measurement      Nothing after FROM
                        SELECT MEAN(a) FROM
  empty composite     Nothing between SELECT and FROM
                        SELECT FROM m
  bad field syntax    A branch is not unit (op unit)* (AS alias)?
                        SELECT a+b FROM t
                        SELECT MEAN(a) + FROM t
                        SELECT MEAN(a b) FROM t

  Errors are final; no partial model is produced.
"#;

const MODEL_DOC: &str = r#"MODEL - JSON record

  {
    "fields": {
      "field_branches": [
        {
          "field_units": [ { "function": "MAX", "column": "entropy" },
                           { "function": "MIN", "column": "enchiladas" } ],
          "operators": [ "+" ],
          "alias": "extra_Es"
        }
      ]
    },
    "measurement": "E_LETTERS"
  }

  "alias" is null when a branch has none; null or "" are accepted on input,
  as is null for "operators".
"#;
