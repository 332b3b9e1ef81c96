//! Single-node criteria test

use crate::node::Node;
use crate::rule::{Polarity, Rule};

/// Test one node against one rule's kind and polarity.
///
/// `contains` passes when the kinds are equal, `missing` when they differ.
/// A node without a kind equals no target, so it never passes `contains`
/// and always passes `missing`. An unrecognized polarity never passes.
pub fn matches(node: &Node, rule: &Rule) -> bool {
    match rule.polarity {
        Polarity::Contains => node.typed_kind() == Some(rule.target_kind.as_str()),
        Polarity::Missing => node.typed_kind() != Some(rule.target_kind.as_str()),
        Polarity::Unrecognized(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_matches_same_kind() {
        let node = Node::new("VariableDeclaration");
        assert!(matches(&node, &Rule::contains("VariableDeclaration")));
        assert!(!matches(&node, &Rule::contains("WhileStatement")));
    }

    #[test]
    fn test_missing_matches_other_kinds() {
        let node = Node::new("WhileStatement");
        assert!(!matches(&node, &Rule::missing("WhileStatement")));
        assert!(matches(&node, &Rule::missing("ForStatement")));
    }

    #[test]
    fn test_untyped_node_never_equals_a_kind() {
        let untyped = Node::default().with("start", 0.0);
        assert!(!matches(&untyped, &Rule::contains("")));
        assert!(matches(&untyped, &Rule::missing("")));

        assert!(matches(&Node::new(""), &Rule::contains("")));
    }

    #[test]
    fn test_unrecognized_never_matches() {
        let rule = Rule::with_polarity("WhileStatement", Polarity::Unrecognized("has".into()));
        assert!(!matches(&Node::new("WhileStatement"), &rule));
        assert!(!matches(&Node::new("IfStatement"), &rule));
    }
}
