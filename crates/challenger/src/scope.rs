//! Normalised search scopes
//!
//! Whatever shape an attribute has, the resolver only ever sees an ordered
//! list of candidate nodes. The conversion happens here, once.

use crate::node::{Attr, Node};

/// An ordered, possibly empty, list of candidate nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scope<'a> {
    nodes: Vec<&'a Node>,
}

impl<'a> Scope<'a> {
    /// A scope with no candidates.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A scope over a statement sequence, such as a program body.
    pub fn from_nodes(nodes: &'a [Node]) -> Self {
        Self {
            nodes: nodes.iter().collect(),
        }
    }

    /// The candidates found inside a single node: its node-valued
    /// attributes, in order.
    pub fn within(node: &'a Node) -> Self {
        Self {
            nodes: node.child_nodes().collect(),
        }
    }

    /// Normalise an attribute value.
    ///
    /// - a sequence yields its node elements (scalars and nested
    ///   sequences can never match, and have nothing to descend into)
    /// - a node yields its node-valued attributes
    /// - a scalar or an absent attribute yields nothing
    pub fn from_attr(attr: Option<&'a Attr>) -> Self {
        match attr {
            Some(Attr::List(items)) => Self {
                nodes: items.iter().filter_map(Attr::as_node).collect(),
            },
            Some(Attr::Node(node)) => Self::within(node),
            Some(Attr::Scalar(_)) | None => Self::empty(),
        }
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether there are no candidates.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate candidates in order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Node> + '_ {
        self.nodes.iter().copied()
    }
}

impl<'a> From<&'a [Node]> for Scope<'a> {
    fn from(nodes: &'a [Node]) -> Self {
        Self::from_nodes(nodes)
    }
}

impl<'a> From<&'a Vec<Node>> for Scope<'a> {
    fn from(nodes: &'a Vec<Node>) -> Self {
        Self::from_nodes(nodes)
    }
}
