//! Challenge rules
//!
//! Rule lists are plain JSON, in the format exercise authors already write:
//!
//! ```json
//! [
//!   { "type": "VariableDeclaration", "criteria": "contains", "tag": ".rule__one" },
//!   { "type": "WhileStatement", "criteria": "missing", "tag": ".rule__two" },
//!   {
//!     "type": "ForStatement",
//!     "criteria": "contains",
//!     "children": [{ "type": "IfStatement", "criteria": "contains" }]
//!   }
//! ]
//! ```

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RuleError};

/// Whether a rule's target kind must be present or absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Polarity {
    /// The target kind must appear
    Contains,

    /// The target kind must not appear
    Missing,

    /// Anything else; never matches
    Unrecognized(String),
}

impl Polarity {
    /// The criteria string as it appears in rule files.
    pub fn as_str(&self) -> &str {
        match self {
            Polarity::Contains => "contains",
            Polarity::Missing => "missing",
            Polarity::Unrecognized(other) => other,
        }
    }
}

impl From<String> for Polarity {
    fn from(s: String) -> Self {
        match s.as_str() {
            "contains" => Polarity::Contains,
            "missing" => Polarity::Missing,
            _ => Polarity::Unrecognized(s),
        }
    }
}

impl From<Polarity> for String {
    fn from(p: Polarity) -> Self {
        match p {
            Polarity::Unrecognized(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single challenge: a presence or absence test for one node kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// The node kind to look for
    #[serde(rename = "type")]
    pub target_kind: String,

    /// Presence or absence
    #[serde(rename = "criteria")]
    pub polarity: Polarity,

    /// Alternatives that must hold inside a match of this rule; the first
    /// one satisfied wins
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Rule>,

    /// Opaque key handed back to observers
    #[serde(default, alias = "DOM", skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl Rule {
    /// A rule requiring `kind` to be present.
    pub fn contains(kind: impl Into<String>) -> Self {
        Self::with_polarity(kind, Polarity::Contains)
    }

    /// A rule requiring `kind` to be absent.
    pub fn missing(kind: impl Into<String>) -> Self {
        Self::with_polarity(kind, Polarity::Missing)
    }

    /// A rule with an explicit polarity.
    pub fn with_polarity(kind: impl Into<String>, polarity: Polarity) -> Self {
        Self {
            target_kind: kind.into(),
            polarity,
            children: Vec::new(),
            tag: None,
        }
    }

    /// Append one nested rule.
    pub fn with_child(mut self, child: Rule) -> Self {
        self.children.push(child);
        self
    }

    /// Replace the nested rules.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Rule>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// Attach an observer tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Whether this rule scopes nested rules.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Check this rule and its nested rules for malformed shapes.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();
        self.collect_problems("rule", &mut problems);
        first_problem(problems)
    }

    fn collect_problems(&self, path: &str, problems: &mut Vec<RuleError>) {
        match &self.polarity {
            Polarity::Missing if self.has_children() => {
                problems.push(RuleError::MissingWithChildren {
                    path: path.to_string(),
                    kind: self.target_kind.clone(),
                });
            }
            Polarity::Unrecognized(criteria) => {
                problems.push(RuleError::UnrecognizedPolarity {
                    path: path.to_string(),
                    kind: self.target_kind.clone(),
                    criteria: criteria.clone(),
                });
            }
            _ => {}
        }

        for (i, child) in self.children.iter().enumerate() {
            child.collect_problems(&format!("{}.children[{}]", path, i), problems);
        }
    }
}

fn first_problem(problems: Vec<RuleError>) -> Result<()> {
    match problems.into_iter().next() {
        Some(problem) => Err(problem),
        None => Ok(()),
    }
}

/// An ordered list of independent rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleList {
    rules: Vec<Rule>,
}

impl RuleList {
    /// Wrap a vector of rules.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Parse a rule list from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a rule list from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a rule list from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| RuleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// The rules, in order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Iterate the rules in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Every malformed rule in the list, in order.
    pub fn problems(&self) -> Vec<RuleError> {
        let mut problems = Vec::new();
        for (i, rule) in self.rules.iter().enumerate() {
            rule.collect_problems(&format!("rules[{}]", i), &mut problems);
        }
        problems
    }

    /// Fail on the first malformed rule.
    pub fn validate(&self) -> Result<()> {
        first_problem(self.problems())
    }
}

impl From<Vec<Rule>> for RuleList {
    fn from(rules: Vec<Rule>) -> Self {
        Self::new(rules)
    }
}

impl<'a> IntoIterator for &'a RuleList {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_polarity_from_string() {
        assert_eq!(Polarity::from("contains".to_string()), Polarity::Contains);
        assert_eq!(Polarity::from("missing".to_string()), Polarity::Missing);
        assert_eq!(
            Polarity::from("Contains".to_string()),
            Polarity::Unrecognized("Contains".to_string())
        );
    }

    #[test]
    fn test_parse_original_challenge_format() {
        let rules = RuleList::from_json_str(
            r#"[
                { "type": "VariableDeclaration", "criteria": "contains", "DOM": ".rule__one" },
                {
                    "type": "ForStatement",
                    "criteria": "contains",
                    "children": [{ "type": "IfStatement", "criteria": "contains" }]
                }
            ]"#,
        )
        .unwrap();

        assert_eq!(rules.len(), 2);
        assert_eq!(
            rules.rules()[0],
            Rule::contains("VariableDeclaration").with_tag(".rule__one")
        );
        assert_eq!(
            rules.rules()[1],
            Rule::contains("ForStatement").with_child(Rule::contains("IfStatement"))
        );
    }

    #[test]
    fn test_serialize_uses_rule_file_names() {
        let rule = Rule::missing("WhileStatement").with_tag("no-while");
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "WhileStatement", "criteria": "missing", "tag": "no-while" })
        );
    }

    #[test]
    fn test_validate_flags_missing_with_children() {
        let rules = RuleList::new(vec![
            Rule::contains("ForStatement"),
            Rule::missing("WhileStatement").with_child(Rule::contains("IfStatement")),
        ]);

        let err = rules.validate().unwrap_err();
        assert!(matches!(
            err,
            RuleError::MissingWithChildren { ref path, .. } if path == "rules[1]"
        ));
    }

    #[test]
    fn test_validate_reports_nested_paths() {
        let rule = Rule::contains("ForStatement")
            .with_child(Rule::contains("IfStatement"))
            .with_child(Rule::with_polarity("IfStatement", Polarity::from("absent".to_string())));

        let problems = RuleList::new(vec![rule]).problems();
        assert_eq!(problems.len(), 1);
        assert_eq!(
            problems[0].to_string(),
            "rules[0].children[1]: unrecognized criteria `absent` for `IfStatement`"
        );
    }

    #[test]
    fn test_validate_accepts_well_formed_rules() {
        let rule = Rule::contains("ForStatement").with_child(Rule::missing("IfStatement"));
        assert!(rule.validate().is_ok());
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let err = RuleList::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, RuleError::Parse(_)));
    }
}
