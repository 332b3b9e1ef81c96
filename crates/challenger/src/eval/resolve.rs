//! Recursive challenge search
//!
//! The two polarities search differently, so each has its own path:
//!
//! - [`contains`] looks for a node of the target kind, and once one is
//!   found, checks the rule's nested alternatives inside it.
//! - [`forbidden_present`] looks for any node of the forbidden kind and
//!   stops at the first one.
//!
//! Both are depth-first, visit candidates in their natural order, and stop
//! at the first hit.

use tracing::trace;

use super::children::child_scope;
use super::criteria::matches;
use crate::rule::{Polarity, Rule};
use crate::scope::Scope;

/// Run the search for `rule` over `scope` and return its raw outcome.
///
/// For `contains` rules this is "found". For `missing` rules it is
/// "the forbidden kind was reached", the opposite of satisfied; see
/// [`rule_satisfied`] for the caller-facing sense.
pub fn is_satisfied(scope: &Scope<'_>, rule: &Rule) -> bool {
    match rule.polarity {
        Polarity::Contains => contains(scope, rule),
        Polarity::Missing => forbidden_present(scope, rule),
        Polarity::Unrecognized(_) => false,
    }
}

/// Whether `rule` holds over `scope`: `true` always means satisfied.
pub fn rule_satisfied(scope: &Scope<'_>, rule: &Rule) -> bool {
    let raw = is_satisfied(scope, rule);
    match rule.polarity {
        Polarity::Missing => !raw,
        _ => raw,
    }
}

/// Search for a node of `rule.target_kind`.
///
/// A matching node with no nested rules is a hit. A matching node with
/// nested rules is a hit only if the raw search for one of them succeeds
/// within the node's child scope; otherwise the search moves on to the
/// next sibling. A non-matching node is searched recursively with the same
/// rule.
///
/// Nested `missing` rules are not inverted: they succeed when the
/// forbidden kind *is* reached inside the match. Only the suite runner
/// inverts, and only for top-level rules.
pub fn contains(scope: &Scope<'_>, rule: &Rule) -> bool {
    for node in scope.iter() {
        let found = if matches(node, rule) {
            if rule.has_children() {
                let inner = child_scope(node);
                trace!(kind = node.kind(), candidates = inner.len(), "checking nested rules");
                rule.children.iter().any(|child| is_satisfied(&inner, child))
            } else {
                trace!(kind = node.kind(), "matched");
                true
            }
        } else {
            contains(&child_scope(node), rule)
        };

        if found {
            return true;
        }
    }

    false
}

/// Search for a node of the forbidden `rule.target_kind`.
///
/// Nested rules play no part here.
pub fn forbidden_present(scope: &Scope<'_>, rule: &Rule) -> bool {
    for node in scope.iter() {
        if !matches(node, rule) {
            trace!(kind = node.kind(), "forbidden kind reached");
            return true;
        }

        if forbidden_present(&child_scope(node), rule) {
            return true;
        }
    }

    false
}
