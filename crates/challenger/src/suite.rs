//! Running rule lists against a tree
//!
//! Every rule is evaluated independently against the same tree, and every
//! outcome is reported, even after an earlier rule has failed.

use serde::Serialize;
use tracing::{debug, info};

use crate::error::Result;
use crate::eval::rule_satisfied;
use crate::rule::{Polarity, Rule, RuleList};
use crate::scope::Scope;

/// Evaluate `rules` against `tree`, calling `on_result` once per rule in
/// list order.
///
/// Returns `true` if **any** rule failed. Negate it to ask "did everything
/// pass".
///
/// # Example
///
/// ```
/// use challenger::{run_suite, Node, Rule, RuleList};
///
/// let tree = vec![Node::new("VariableDeclaration")];
/// let rules = RuleList::new(vec![
///     Rule::contains("VariableDeclaration"),
///     Rule::missing("WhileStatement"),
/// ]);
///
/// let mut seen = Vec::new();
/// let has_failures = run_suite(&tree, &rules, |satisfied, rule| {
///     seen.push((rule.target_kind.clone(), satisfied));
/// });
///
/// assert!(!has_failures);
/// assert_eq!(seen.len(), 2);
/// ```
pub fn run_suite<'a, F>(tree: impl Into<Scope<'a>>, rules: &RuleList, mut on_result: F) -> bool
where
    F: FnMut(bool, &Rule),
{
    let scope = tree.into();
    let mut has_failures = false;

    for rule in rules {
        let satisfied = rule_satisfied(&scope, rule);
        debug!(
            kind = %rule.target_kind,
            criteria = %rule.polarity,
            satisfied,
            "rule evaluated"
        );

        if !satisfied {
            has_failures = true;
        }
        on_result(satisfied, rule);
    }

    has_failures
}

/// Outcome of one rule in a suite run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleOutcome {
    /// Position of the rule in its list
    pub index: usize,

    /// The rule's target kind
    #[serde(rename = "type")]
    pub target_kind: String,

    /// The rule's criteria
    #[serde(rename = "criteria")]
    pub polarity: Polarity,

    /// The rule's observer tag, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Whether the rule held
    pub satisfied: bool,
}

/// Per-rule outcomes of a suite run, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SuiteReport {
    /// One entry per rule
    pub results: Vec<RuleOutcome>,
}

impl SuiteReport {
    /// Whether every rule held.
    pub fn all_satisfied(&self) -> bool {
        self.results.iter().all(|r| r.satisfied)
    }

    /// Whether at least one rule failed.
    pub fn has_failures(&self) -> bool {
        !self.all_satisfied()
    }

    /// The rules that failed.
    pub fn failed(&self) -> impl Iterator<Item = &RuleOutcome> {
        self.results.iter().filter(|r| !r.satisfied)
    }

    /// Number of rules that held.
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.satisfied).count()
    }
}

/// A reusable rule list.
///
/// # Example
///
/// ```
/// use challenger::{Node, Rule, Suite};
///
/// let suite = Suite::new(vec![Rule::contains("ForStatement").with_tag("loop")]);
/// let report = suite.run(&Vec::<Node>::new());
///
/// assert!(report.has_failures());
/// assert_eq!(report.results[0].tag.as_deref(), Some("loop"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Suite {
    rules: RuleList,
}

impl Suite {
    /// Build a suite without validating its rules.
    ///
    /// Malformed rules still evaluate; they simply fail or ignore what
    /// makes them malformed.
    pub fn new(rules: impl Into<RuleList>) -> Self {
        Self {
            rules: rules.into(),
        }
    }

    /// Build a suite, rejecting malformed rules up front.
    pub fn validated(rules: impl Into<RuleList>) -> Result<Self> {
        let rules = rules.into();
        rules.validate()?;
        Ok(Self { rules })
    }

    /// The suite's rules.
    pub fn rules(&self) -> &RuleList {
        &self.rules
    }

    /// Evaluate the suite and collect a report.
    pub fn run<'a>(&self, tree: impl Into<Scope<'a>>) -> SuiteReport {
        self.run_with(tree, |_, _| {})
    }

    /// Evaluate the suite, calling `on_result` for each rule as it is
    /// decided, and collect a report.
    pub fn run_with<'a, F>(&self, tree: impl Into<Scope<'a>>, mut on_result: F) -> SuiteReport
    where
        F: FnMut(bool, &Rule),
    {
        let mut results = Vec::with_capacity(self.rules.len());
        run_suite(tree, &self.rules, |satisfied, rule| {
            results.push(RuleOutcome {
                index: results.len(),
                target_kind: rule.target_kind.clone(),
                polarity: rule.polarity.clone(),
                tag: rule.tag.clone(),
                satisfied,
            });
            on_result(satisfied, rule);
        });

        let report = SuiteReport { results };
        info!(
            passed = report.passed_count(),
            total = report.results.len(),
            "suite evaluated"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_run_suite_reports_every_rule_in_order() {
        let tree = vec![Node::new("VariableDeclaration")];
        let rules = RuleList::new(vec![
            Rule::contains("ForStatement"),
            Rule::contains("VariableDeclaration"),
            Rule::missing("VariableDeclaration"),
        ]);

        let mut seen = Vec::new();
        let has_failures = run_suite(&tree, &rules, |satisfied, rule| {
            seen.push((rule.target_kind.clone(), satisfied));
        });

        assert!(has_failures);
        assert_eq!(
            seen,
            vec![
                ("ForStatement".to_string(), false),
                ("VariableDeclaration".to_string(), true),
                ("VariableDeclaration".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_empty_rule_list_has_no_failures() {
        let tree = vec![Node::new("VariableDeclaration")];
        assert!(!run_suite(&tree, &RuleList::default(), |_, _| {}));
    }

    #[test]
    fn test_report_indexes_and_failures() {
        let tree = vec![Node::new("VariableDeclaration")];
        let suite = Suite::new(vec![
            Rule::contains("VariableDeclaration"),
            Rule::contains("WhileStatement").with_tag("while"),
        ]);

        let report = suite.run(&tree);
        assert_eq!(report.passed_count(), 1);
        assert!(report.has_failures());

        let failed: Vec<_> = report.failed().collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].index, 1);
        assert_eq!(failed[0].tag.as_deref(), Some("while"));
    }

    #[test]
    fn test_validated_rejects_missing_with_children() {
        let result = Suite::validated(vec![
            Rule::missing("WhileStatement").with_child(Rule::contains("IfStatement")),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_report_serializes_rule_file_names() {
        let tree = vec![Node::new("VariableDeclaration")];
        let report = Suite::new(vec![Rule::missing("WhileStatement")]).run(&tree);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "results": [{
                    "index": 0,
                    "type": "WhileStatement",
                    "criteria": "missing",
                    "satisfied": true
                }]
            })
        );
    }
}
