//! Rule evaluation over syntax trees
//!
//! Leaf first: [`criteria`] tests one node, [`children`] decides where to
//! descend, [`resolve`] runs the recursive search.

pub mod children;
pub mod criteria;
pub mod resolve;

pub use children::{child_scope, extraction_for, Extraction};
pub use criteria::matches;
pub use resolve::{contains, forbidden_present, is_satisfied, rule_satisfied};
