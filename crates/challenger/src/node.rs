//! Syntax tree representation
//!
//! A [`Node`] is what an external parser hands us: a `kind` discriminator
//! (`"IfStatement"`, `"ForStatement"`, ...) plus named attributes. Attributes
//! keep insertion order, which is the order the resolver visits them in.

use indexmap::IndexMap;
use serde_json::{Map, Number, Value as Json};

/// A single syntax tree node.
///
/// # Example
///
/// ```
/// use challenger::Node;
///
/// let stmt = Node::new("ForStatement").with(
///     "body",
///     Node::new("BlockStatement").with_list("body", vec![Node::new("IfStatement")]),
/// );
///
/// assert_eq!(stmt.kind(), "ForStatement");
/// assert_eq!(stmt.path(&["body", "body"]).and_then(|a| a.as_list()).map(|l| l.len()), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    kind: Option<String>,
    attrs: IndexMap<String, Attr>,
}

/// An attribute value: a nested node, a sequence, or a scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum Attr {
    /// A nested node
    Node(Node),

    /// An ordered sequence (usually of nodes)
    List(Vec<Attr>),

    /// Anything that is not a node or a sequence
    Scalar(Scalar),
}

/// Leaf attribute values.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Explicit null
    Null,
    /// Boolean
    Bool(bool),
    /// Number
    Number(f64),
    /// String
    String(String),
}

impl Node {
    /// Create a node of the given kind with no attributes.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            attrs: IndexMap::new(),
        }
    }

    /// Add an attribute, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Attr>) -> Self {
        self.set(name, value);
        self
    }

    /// Add a list-of-nodes attribute, builder style.
    pub fn with_list<I>(self, name: impl Into<String>, nodes: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        let list = nodes.into_iter().map(Attr::Node).collect::<Vec<_>>();
        self.with(name, Attr::List(list))
    }

    /// Set an attribute, replacing any previous value under the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Attr>) {
        self.attrs.insert(name.into(), value.into());
    }

    /// The node's kind discriminator, empty for untyped objects.
    pub fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or_default()
    }

    /// The node's kind, or `None` for an object that carried no `type`.
    ///
    /// Untyped objects (source locations, ranges) never equal any kind,
    /// not even the empty one.
    pub fn typed_kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Look up an attribute by name.
    pub fn get(&self, name: &str) -> Option<&Attr> {
        self.attrs.get(name)
    }

    /// Look up an attribute that holds a node.
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.get(name).and_then(Attr::as_node)
    }

    /// Look up an attribute that holds a sequence.
    pub fn list(&self, name: &str) -> Option<&[Attr]> {
        self.get(name).and_then(Attr::as_list)
    }

    /// Walk a chain of node-valued attributes and return the last one.
    ///
    /// Every name but the last must resolve to a node; the last may hold
    /// anything. `node.path(&["body", "body"])` is `node.body.body`.
    pub fn path(&self, names: &[&str]) -> Option<&Attr> {
        let (last, init) = names.split_last()?;
        let mut current = self;
        for name in init {
            current = current.node(name)?;
        }
        current.get(last)
    }

    /// All attributes in their natural order.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &Attr)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The attributes that hold a node, in their natural order.
    pub fn child_nodes(&self) -> impl Iterator<Item = &Node> {
        self.attrs.values().filter_map(Attr::as_node)
    }

    /// Build a node from an ESTree-style JSON object.
    ///
    /// A string `type` member becomes the kind; without one the node is
    /// untyped. Every other member becomes an attribute. Returns `None` for
    /// non-objects.
    pub fn from_json(value: &Json) -> Option<Self> {
        let object = value.as_object()?;
        let kind = object.get("type").and_then(Json::as_str).map(str::to_string);

        let attrs = object
            .iter()
            .filter(|(key, _)| key.as_str() != "type")
            .map(|(key, value)| (key.clone(), Attr::from_json(value)))
            .collect();

        Some(Self { kind, attrs })
    }

    /// Convert back to an ESTree-style JSON object.
    pub fn to_json(&self) -> Json {
        let mut object = Map::new();
        if let Some(kind) = &self.kind {
            object.insert("type".to_string(), Json::String(kind.clone()));
        }
        for (name, attr) in &self.attrs {
            object.insert(name.clone(), attr.to_json());
        }
        Json::Object(object)
    }
}

impl Attr {
    /// The node held by this attribute, if any.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Attr::Node(node) => Some(node),
            _ => None,
        }
    }

    /// The sequence held by this attribute, if any.
    pub fn as_list(&self) -> Option<&[Attr]> {
        match self {
            Attr::List(items) => Some(items),
            _ => None,
        }
    }

    /// The scalar held by this attribute, if any.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Attr::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Convert a JSON value into an attribute.
    pub fn from_json(value: &Json) -> Self {
        match value {
            Json::Object(_) => Node::from_json(value)
                .map(Attr::Node)
                .unwrap_or(Attr::Scalar(Scalar::Null)),
            Json::Array(items) => Attr::List(items.iter().map(Attr::from_json).collect()),
            Json::Null => Attr::Scalar(Scalar::Null),
            Json::Bool(b) => Attr::Scalar(Scalar::Bool(*b)),
            Json::Number(n) => Attr::Scalar(Scalar::Number(n.as_f64().unwrap_or(f64::NAN))),
            Json::String(s) => Attr::Scalar(Scalar::String(s.clone())),
        }
    }

    /// Convert back to JSON.
    pub fn to_json(&self) -> Json {
        match self {
            Attr::Node(node) => node.to_json(),
            Attr::List(items) => Json::Array(items.iter().map(Attr::to_json).collect()),
            Attr::Scalar(Scalar::Null) => Json::Null,
            Attr::Scalar(Scalar::Bool(b)) => Json::Bool(*b),
            Attr::Scalar(Scalar::Number(n)) => Number::from_f64(*n).map_or(Json::Null, Json::Number),
            Attr::Scalar(Scalar::String(s)) => Json::String(s.clone()),
        }
    }
}

impl From<Node> for Attr {
    fn from(node: Node) -> Self {
        Attr::Node(node)
    }
}

impl From<Vec<Node>> for Attr {
    fn from(nodes: Vec<Node>) -> Self {
        Attr::List(nodes.into_iter().map(Attr::Node).collect())
    }
}

impl From<Vec<Attr>> for Attr {
    fn from(items: Vec<Attr>) -> Self {
        Attr::List(items)
    }
}

impl From<Scalar> for Attr {
    fn from(scalar: Scalar) -> Self {
        Attr::Scalar(scalar)
    }
}

impl From<bool> for Attr {
    fn from(b: bool) -> Self {
        Attr::Scalar(Scalar::Bool(b))
    }
}

impl From<f64> for Attr {
    fn from(n: f64) -> Self {
        Attr::Scalar(Scalar::Number(n))
    }
}

impl From<&str> for Attr {
    fn from(s: &str) -> Self {
        Attr::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<String> for Attr {
    fn from(s: String) -> Self {
        Attr::Scalar(Scalar::String(s))
    }
}
