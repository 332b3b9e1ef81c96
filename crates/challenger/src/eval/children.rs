//! Child scope extraction
//!
//! Which attribute of a node holds the "nested code" a rule should search
//! depends on the node's kind. The table is deliberately narrow: it covers
//! the constructs exercises teach, and everything else falls back to a
//! generic `body` attribute.

use crate::node::{Attr, Node};
use crate::scope::Scope;

/// How to reach the nested code of one node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    /// `consequent.body`
    Consequent,
    /// `body.body`
    Body,
    /// `expression.right.body.body`, for `x = function () { ... }`
    AssignedFunctionBody,
    /// `arguments`
    Arguments,
    /// `declarations`
    Declarations,
    /// `init.body.body` when `init` is a function declaration, else `init`
    Initializer,
    /// `body`
    Fallback,
}

/// Pick the extraction strategy for a node kind.
pub fn extraction_for(kind: &str) -> Extraction {
    match kind {
        "IfStatement" => Extraction::Consequent,
        "ForStatement" | "WhileStatement" | "FunctionDeclaration" => Extraction::Body,
        "ExpressionStatement" => Extraction::AssignedFunctionBody,
        "CallExpression" => Extraction::Arguments,
        "VariableDeclaration" => Extraction::Declarations,
        "VariableDeclarator" => Extraction::Initializer,
        _ => Extraction::Fallback,
    }
}

/// The candidates a search descends into below `node`.
///
/// Missing intermediate attributes give an empty scope.
pub fn child_scope(node: &Node) -> Scope<'_> {
    Scope::from_attr(child_attr(node))
}

fn child_attr(node: &Node) -> Option<&Attr> {
    match extraction_for(node.kind()) {
        Extraction::Consequent => node.path(&["consequent", "body"]),
        Extraction::Body => node.path(&["body", "body"]),
        Extraction::AssignedFunctionBody => node.path(&["expression", "right", "body", "body"]),
        Extraction::Arguments => node.get("arguments"),
        Extraction::Declarations => node.get("declarations"),
        Extraction::Initializer => {
            let init = node.get("init")?;
            match init.as_node() {
                Some(function) if function.kind() == "FunctionDeclaration" => {
                    function.path(&["body", "body"])
                }
                _ => Some(init),
            }
        }
        Extraction::Fallback => node.get("body"),
    }
}
