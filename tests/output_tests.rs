// tests/output_tests.rs

use databreaks::ast::{FieldBranch, FieldComposite, FieldUnit, ModelError, Operator, Query};
use databreaks::output::{from_json, to_json, to_json_pretty, to_query_string};
use serde_json::json;

fn unit(function: &str, column: &str) -> FieldUnit {
    FieldUnit::new(function, column)
}

fn query(measurement: &str, branches: Vec<FieldBranch>) -> Query {
    Query::new(measurement, FieldComposite::new(branches))
}

// ============================================================================
// Text rendering
// ============================================================================

#[test]
fn test_unit_rendering() {
    assert_eq!(unit("MEAN", "ensemble").to_string(), "MEAN(ensemble)");
}

#[test]
fn test_branch_rendering() {
    let branch = FieldBranch::new(
        vec![unit("MAX", "entropy"), unit("MIN", "enchiladas")],
        vec![Operator::Add],
        Some("extra_Es".to_string()),
    )
    .unwrap();

    assert_eq!(branch.to_string(), "MAX(entropy) + MIN(enchiladas) AS extra_Es");
}

#[test]
fn test_every_operator_symbol() {
    let branch = FieldBranch::new(
        vec![unit("A", "a"), unit("B", "b"), unit("C", "c"), unit("D", "d"), unit("E", "e")],
        vec![
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ],
        None,
    )
    .unwrap();

    assert_eq!(branch.to_string(), "A(a) + B(b) - C(c) * D(d) / E(e)");
}

#[test]
fn test_query_rendering() {
    let q = query(
        "E_LETTERS",
        vec![
            FieldBranch::single(unit("MEAN", "ensemble")),
            FieldBranch::single(unit("MAX", "entropy")).with_alias("top"),
        ],
    );

    assert_eq!(
        to_query_string(&q),
        "SELECT MEAN(ensemble), MAX(entropy) AS top FROM E_LETTERS"
    );
    assert_eq!(q.to_string(), to_query_string(&q));
}

#[test]
fn test_empty_query_rendering() {
    assert_eq!(to_query_string(&Query::default()), "SELECT  FROM ");
}

#[test]
fn test_empty_alias_is_not_rendered() {
    let mut branch = FieldBranch::single(unit("MEAN", "a"));
    branch.alias = Some(String::new());
    assert_eq!(branch.to_string(), "MEAN(a)");

    assert_eq!(FieldBranch::single(unit("MEAN", "a")).with_alias("").alias, None);
}

// ============================================================================
// Degraded rendering of hand-built branches
// ============================================================================

#[test]
fn test_missing_operators_glue_units() {
    let branch = FieldBranch::unchecked(
        vec![unit("A", "a"), unit("B", "b"), unit("C", "c")],
        vec![Operator::Multiply],
        None,
    );

    assert!(!branch.is_well_formed());
    assert_eq!(branch.to_string(), "A(a) * B(b)C(c)");
}

#[test]
fn test_surplus_operators() {
    let branch = FieldBranch {
        field_units: vec![unit("A", "a")],
        operators: vec![Operator::Add, Operator::Divide, Operator::Subtract],
        alias: None,
    };

    assert_eq!(branch.to_string(), "A(a) + ");
}

#[test]
fn test_trailing_operator_before_alias() {
    let branch = FieldBranch::unchecked(
        vec![unit("A", "a"), unit("B", "b")],
        vec![Operator::Add, Operator::Add],
        Some("x".to_string()),
    );

    assert_eq!(branch.to_string(), "A(a) + B(b) +  AS x");
}

#[test]
fn test_branch_without_units() {
    let branch = FieldBranch::unchecked(Vec::new(), vec![Operator::Add], Some("x".into()));
    assert_eq!(branch.to_string(), " AS x");
}

// ============================================================================
// Checked construction
// ============================================================================

#[test]
fn test_checked_constructor_rejects_mismatch() {
    let err = FieldBranch::new(
        vec![unit("A", "a"), unit("B", "b")],
        Vec::new(),
        None,
    )
    .unwrap_err();

    assert_eq!(
        err,
        ModelError::OperatorCount {
            units: 2,
            operators: 0,
            expected: 1
        }
    );
    assert!(FieldBranch::new(Vec::new(), Vec::new(), None).is_err());
}

#[test]
fn test_operator_symbols() {
    for op in [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ] {
        assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        assert_eq!(op.to_string(), op.symbol());
    }
    assert_eq!(Operator::from_symbol("%"), None);
}

// ============================================================================
// JSON
// ============================================================================

#[test]
fn test_json_field_names() {
    let q = query(
        "E_LETTERS",
        vec![FieldBranch::new(
            vec![unit("MAX", "entropy"), unit("MIN", "enchiladas")],
            vec![Operator::Add],
            Some("extra_Es".into()),
        )
        .unwrap()],
    );

    let value: serde_json::Value = serde_json::from_str(&to_json(&q).unwrap()).unwrap();
    assert_eq!(
        value,
        json!({
            "fields": {
                "field_branches": [{
                    "field_units": [
                        {"function": "MAX", "column": "entropy"},
                        {"function": "MIN", "column": "enchiladas"}
                    ],
                    "operators": ["+"],
                    "alias": "extra_Es"
                }]
            },
            "measurement": "E_LETTERS"
        })
    );
}

#[test]
fn test_json_without_alias_is_null() {
    let q = query("m", vec![FieldBranch::single(unit("MEAN", "a"))]);
    let value: serde_json::Value = serde_json::from_str(&to_json(&q).unwrap()).unwrap();
    assert!(value["fields"]["field_branches"][0]["alias"].is_null());
}

#[test]
fn test_pretty_json_is_indented() {
    let q = query("m", vec![FieldBranch::single(unit("MEAN", "a"))]);
    let pretty = to_json_pretty(&q).unwrap();
    assert!(pretty.contains("\n  \"fields\": {"));
    assert_eq!(from_json(&pretty).unwrap(), q);
}

#[test]
fn test_json_accepts_null_and_empty_fields() {
    let q = from_json(
        r#"{
            "measurement": "m",
            "fields": {
                "field_branches": [
                    {"field_units": [{"function": "MEAN", "column": "a"}], "operators": null, "alias": ""},
                    {"field_units": [{"function": "MAX", "column": "b"}]}
                ]
            }
        }"#,
    )
    .unwrap();

    assert_eq!(q.fields.len(), 2);
    for branch in &q.fields {
        assert!(branch.operators.is_empty());
        assert_eq!(branch.alias, None);
    }
    assert_eq!(to_query_string(&q), "SELECT MEAN(a), MAX(b) FROM m");
}

#[test]
fn test_json_rejects_unknown_operator() {
    let result = from_json(
        r#"{"measurement": "m", "fields": {"field_branches": [
            {"field_units": [{"function": "A", "column": "a"}, {"function": "B", "column": "b"}],
             "operators": ["%"]}
        ]}}"#,
    );
    assert!(result.is_err());
}
