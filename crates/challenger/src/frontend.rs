//! Tree source interface
//!
//! Challenger never parses program text. A frontend takes the output of
//! some external parser and turns it into [`Node`]s:
//!
//! ```text
//! Source → [external parser] → parser output → [Frontend] → Vec<Node> → [Suite]
//! ```

use crate::error::LoadError;
use crate::node::Node;

// ═══════════════════════════════════════════════════════════════════════
// TREE FRONTEND TRAIT
// ═══════════════════════════════════════════════════════════════════════

/// Adapter between an external parser's output and the evaluation core.
///
/// # Example Implementation
///
/// ```
/// use challenger::frontend::TreeFrontend;
/// use challenger::{LoadError, Node};
///
/// /// One statement kind per line.
/// struct KindPerLine;
///
/// impl TreeFrontend for KindPerLine {
///     fn load(&self, source: &str) -> Result<Vec<Node>, LoadError> {
///         Ok(source.lines().map(|kind| Node::new(kind.trim())).collect())
///     }
///
///     fn name(&self) -> &str {
///         "kind-per-line"
///     }
/// }
///
/// let tree = KindPerLine.load("VariableDeclaration\nForStatement").unwrap();
/// assert_eq!(tree[1].kind(), "ForStatement");
/// ```
pub trait TreeFrontend: Send + Sync {
    /// Load the top-level statement sequence.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the input is not a tree this frontend
    /// understands.
    fn load(&self, source: &str) -> Result<Vec<Node>, LoadError>;

    /// Human-readable frontend name.
    fn name(&self) -> &str;
}
