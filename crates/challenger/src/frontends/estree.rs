//! ESTree JSON frontend
//!
//! Reads the JSON an ESTree-compatible JavaScript parser (esprima, acorn,
//! espree, ...) emits for a program.

use serde_json::Value as Json;

use crate::error::LoadError;
use crate::frontend::TreeFrontend;
use crate::node::{Attr, Node};

/// Loads ESTree JSON documents.
///
/// Accepts a whole `Program` (its `body` is returned), a bare array of
/// statements, or a single statement object.
///
/// # Example
///
/// ```
/// use challenger::frontends::EstreeFrontend;
/// use challenger::frontend::TreeFrontend;
///
/// let json = r#"{
///     "type": "Program",
///     "body": [{ "type": "VariableDeclaration", "declarations": [], "kind": "var" }],
///     "sourceType": "script"
/// }"#;
///
/// let tree = EstreeFrontend::new().load(json).unwrap();
/// assert_eq!(tree.len(), 1);
/// assert_eq!(tree[0].kind(), "VariableDeclaration");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EstreeFrontend;

impl EstreeFrontend {
    /// Create a new ESTree frontend.
    pub fn new() -> Self {
        Self
    }

    /// Convert an already-decoded JSON document.
    pub fn load_value(&self, value: &Json) -> Result<Vec<Node>, LoadError> {
        match value {
            Json::Array(items) => statements(items),
            Json::Object(object) => {
                if object.get("type").and_then(Json::as_str) == Some("Program") {
                    match object.get("body") {
                        Some(Json::Array(items)) => statements(items),
                        Some(other) => Err(shape_error("a `body` array on `Program`", other)),
                        None => Ok(Vec::new()),
                    }
                } else {
                    Ok(Node::from_json(value).into_iter().collect())
                }
            }
            other => Err(shape_error("a Program, statement, or statement array", other)),
        }
    }
}

impl TreeFrontend for EstreeFrontend {
    fn load(&self, source: &str) -> Result<Vec<Node>, LoadError> {
        let value: Json = serde_json::from_str(source)?;
        self.load_value(&value)
    }

    fn name(&self) -> &str {
        "ESTree"
    }
}

fn statements(items: &[Json]) -> Result<Vec<Node>, LoadError> {
    items
        .iter()
        .map(|item| match Attr::from_json(item) {
            Attr::Node(node) => Ok(node),
            _ => Err(shape_error("a statement object", item)),
        })
        .collect()
}

fn shape_error(expected: &'static str, found: &Json) -> LoadError {
    let found = match found {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "an array",
        Json::Object(_) => "an object",
    };
    LoadError::Shape {
        expected,
        found: found.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_bare_statement_array() {
        let tree = EstreeFrontend::new()
            .load(r#"[{ "type": "WhileStatement" }, { "type": "EmptyStatement" }]"#)
            .unwrap();
        let kinds: Vec<_> = tree.iter().map(Node::kind).collect();
        assert_eq!(kinds, vec!["WhileStatement", "EmptyStatement"]);
    }

    #[test]
    fn test_load_single_statement() {
        let tree = EstreeFrontend::new()
            .load(r#"{ "type": "ForStatement", "body": { "type": "BlockStatement", "body": [] } }"#)
            .unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].kind(), "ForStatement");
    }

    #[test]
    fn test_program_without_body_is_empty() {
        let tree = EstreeFrontend::new().load(r#"{ "type": "Program" }"#).unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_rejects_non_statement_input() {
        let err = EstreeFrontend::new().load("42").unwrap_err();
        assert!(matches!(err, LoadError::Shape { .. }));

        let err = EstreeFrontend::new().load("[1]").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unexpected tree shape: expected a statement object, found a number"
        );
    }

    #[test]
    fn test_rejects_invalid_json() {
        let err = EstreeFrontend::new().load("{").unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }
}
