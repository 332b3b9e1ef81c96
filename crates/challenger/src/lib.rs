//! # Challenger
//!
//! Structural challenge evaluation over parsed syntax trees.
//!
//! An exercise asks a learner to use (or avoid) particular constructs: "declare
//! a variable", "don't use a `while` loop", "write a `for` loop with an `if`
//! inside". Challenger takes the learner's already-parsed program and a list
//! of such rules, and decides which rules hold.
//!
//! ## Architecture
//!
//! - **Frontend**: Turn an external parser's output into [`Node`]s
//! - **Criteria**: Test a single node against a rule
//! - **Children**: Pick where a search descends, per node kind
//! - **Resolve**: Recursive, early-exit search for one rule
//! - **Suite**: Evaluate a rule list and report each outcome
//!
//! ## Example
//!
//! ```
//! use challenger::{run_suite, Node, Rule, RuleList};
//!
//! let for_loop = Node::new("ForStatement").with(
//!     "body",
//!     Node::new("BlockStatement").with_list("body", vec![Node::new("IfStatement")]),
//! );
//! let tree = vec![Node::new("VariableDeclaration"), for_loop];
//!
//! let rules = RuleList::new(vec![
//!     Rule::contains("VariableDeclaration"),
//!     Rule::missing("WhileStatement"),
//!     Rule::contains("ForStatement").with_child(Rule::contains("IfStatement")),
//! ]);
//!
//! let has_failures = run_suite(&tree, &rules, |_, _| {});
//! assert!(!has_failures);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod eval;
pub mod frontend;
pub mod frontends;
pub mod node;
pub mod rule;
pub mod scope;
pub mod suite;

// Re-export main types
pub use error::{LoadError, Result, RuleError};
pub use eval::{child_scope, is_satisfied, matches, rule_satisfied};
pub use frontend::TreeFrontend;
pub use node::{Attr, Node, Scalar};
pub use rule::{Polarity, Rule, RuleList};
pub use scope::Scope;
pub use suite::{run_suite, RuleOutcome, Suite, SuiteReport};

/// Challenger version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
