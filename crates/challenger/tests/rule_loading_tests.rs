//! Tests for loading and validating rule files

use std::io::Write;

use challenger::*;
use pretty_assertions::assert_eq;

fn write_rules(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write rules");
    file
}

#[test]
fn test_load_rules_from_path() {
    let file = write_rules(
        r#"[
            { "type": "VariableDeclaration", "criteria": "contains", "tag": "declare" },
            { "type": "WhileStatement", "criteria": "missing" }
        ]"#,
    );

    let rules = RuleList::from_path(file.path()).unwrap();
    assert_eq!(
        rules.rules(),
        &[
            Rule::contains("VariableDeclaration").with_tag("declare"),
            Rule::missing("WhileStatement"),
        ]
    );
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = RuleList::from_path(&path).unwrap_err();
    assert!(matches!(err, RuleError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_wrong_shape_is_a_parse_error() {
    let file = write_rules(r#"{ "type": "ForStatement", "criteria": "contains" }"#);
    let err = RuleList::from_path(file.path()).unwrap_err();
    assert!(matches!(err, RuleError::Parse(_)));
}

#[test]
fn test_unknown_criteria_loads_but_fails_validation() {
    let rules = RuleList::from_json_str(
        r#"[{ "type": "ForStatement", "criteria": "present", "tag": "loop" }]"#,
    )
    .unwrap();

    assert_eq!(
        rules.rules()[0].polarity,
        Polarity::Unrecognized("present".to_string())
    );
    assert!(matches!(
        rules.validate(),
        Err(RuleError::UnrecognizedPolarity { .. })
    ));

    // Still evaluates, and fails, when not validated.
    let tree = vec![Node::new("ForStatement")];
    let report = Suite::new(rules).run(&tree);
    assert!(report.has_failures());
}

#[test]
fn test_problems_lists_every_malformed_rule() {
    let rules = RuleList::from_json_str(
        r#"[
            { "type": "WhileStatement", "criteria": "missing",
              "children": [{ "type": "IfStatement", "criteria": "contains" }] },
            { "type": "ForStatement", "criteria": "contains",
              "children": [{ "type": "IfStatement", "criteria": "sometimes" }] }
        ]"#,
    )
    .unwrap();

    let messages: Vec<_> = rules.problems().iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        vec![
            "rules[0]: a `missing` rule for `WhileStatement` cannot carry nested rules".to_string(),
            "rules[1].children[0]: unrecognized criteria `sometimes` for `IfStatement`".to_string(),
        ]
    );
}

#[test]
fn test_rule_list_round_trips_through_json() {
    let rules = RuleList::new(vec![
        Rule::contains("ForStatement")
            .with_tag("loop")
            .with_child(Rule::contains("IfStatement")),
        Rule::missing("WhileStatement"),
    ]);

    let json = serde_json::to_string(&rules).unwrap();
    assert_eq!(RuleList::from_json_str(&json).unwrap(), rules);
}
