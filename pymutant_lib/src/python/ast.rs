//! The `python::ast` module names the JSON form of the Python syntax tree and provides helpers
//! for reading and building its nodes.
//!
//! Every node is a JSON object carrying `ast_type` (the `ast` class name), `node_id` (the
//! parser's pre-order number) and then the node's fields in `_fields` order.  `Constant` nodes
//! carry `value` and `repr`, the exact literal text.

use crate::json::JSONMutate;
use serde_json::{json, Value};

/// Type alias for the JSON encoded Python syntax tree.
pub type PythonAST = Value;

/// Convenience accessors for nodes of a [`PythonAST`].
pub trait PythonNode {
    /// Return the node's `ast_type`, or `None` if the value is not a node.
    fn ast_type(&self) -> Option<&str>;

    /// Return the parser-assigned id of the node.
    fn node_id(&self) -> Option<u64>;

    /// Return true if the value is a node of type `ast_type`.
    ///
    /// # Arguments
    ///
    /// * `ast_type` - The node class name.
    fn is_node_type(&self, ast_type: &str) -> bool {
        self.ast_type() == Some(ast_type)
    }
}

impl PythonNode for PythonAST {
    fn ast_type(&self) -> Option<&str> {
        if !self.is_object() {
            return None;
        }
        self.get_str_for_key("ast_type")
    }

    fn node_id(&self) -> Option<u64> {
        self.get("node_id").and_then(|v| v.as_u64())
    }
}

/// Return a new `Constant` node without a node id.
///
/// # Arguments
///
/// * `value` - The JSON form of the constant.
/// * `literal` - The Python source text of the constant.
pub fn new_constant_node(value: Value, literal: &str) -> PythonAST {
    json!({
        "ast_type": "Constant",
        "node_id": null,
        "value": value,
        "repr": literal,
        "kind": null
    })
}

/// Return a new `Constant` node holding `None`.
pub fn new_none_node() -> PythonAST {
    new_constant_node(Value::Null, "None")
}

/// Return a new `Constant` node holding `True` or `False`.
///
/// # Arguments
///
/// * `value` - The boolean value.
pub fn new_bool_node(value: bool) -> PythonAST {
    let literal = if value { "True" } else { "False" };
    new_constant_node(Value::Bool(value), literal)
}

/// Return a new `Assign` node with a single target.
///
/// # Arguments
///
/// * `node_id` - The id the node should carry.
/// * `target` - The assignment target.
/// * `value` - The assigned expression.
pub fn new_assign_node(node_id: Value, target: PythonAST, value: PythonAST) -> PythonAST {
    json!({
        "ast_type": "Assign",
        "node_id": node_id,
        "targets": [target],
        "value": value,
        "type_comment": null
    })
}

/// Return true if `ast` has the shape of a parsed module.
///
/// # Arguments
///
/// * `ast` - The candidate syntax tree.
pub fn is_python_module(ast: &Value) -> bool {
    ast.is_node_type("Module") && ast.get_array_for_key("body").is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_node_accessors() {
        let node = json!({"ast_type": "Name", "node_id": 4, "id": "x"});
        assert_eq!(node.ast_type(), Some("Name"));
        assert_eq!(node.node_id(), Some(4));
        assert!(node.is_node_type("Name"));
        assert_eq!(json!("Name").ast_type(), None);
        assert_eq!(json!({"ast_type": "Load"}).node_id(), None);
    }

    #[test]
    fn test_new_constant_nodes() {
        let none = new_none_node();
        assert_eq!(none.get_str_for_key("repr"), Some("None"));
        assert!(none["value"].is_null());

        let t = new_bool_node(true);
        assert_eq!(t.get_str_for_key("repr"), Some("True"));
        assert_eq!(t.get_bool_for_key("value"), Some(true));
        assert_eq!(new_bool_node(false).get_str_for_key("repr"), Some("False"));
    }

    #[test]
    fn test_new_assign_node_keeps_id() {
        let target = json!({"ast_type": "Name", "node_id": 2, "id": "x"});
        let node = new_assign_node(json!(1), target, new_none_node());
        assert_eq!(node.node_id(), Some(1));
        assert_eq!(node.get_array_for_key("targets").map(|a| a.len()), Some(1));
        assert!(node["value"].is_node_type("Constant"));
    }

    #[test]
    fn test_is_python_module() {
        assert!(is_python_module(&json!({"ast_type": "Module", "body": []})));
        assert!(!is_python_module(&json!({"ast_type": "Module"})));
        assert!(!is_python_module(&json!({"ast_type": "Expression", "body": {}})));
    }
}
