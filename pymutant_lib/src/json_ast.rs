//! The `json_ast` module provides the implementation of the [`SimpleAST`] trait for [`Value`]
//! objects.
//!
//! The children of a JSON dictionary are its member values in member order, and the children
//! of a JSON array are its items.  With `serde_json`'s `preserve_order` feature the member order
//! is the order the parser wrote the node's fields, so a traversal follows the parser's field
//! order.

use crate::ast::SimpleAST;
use serde_json::Value;

impl SimpleAST<Value> for Value {
    fn get_node(&self) -> &Value {
        self
    }

    fn get_node_mut(&mut self) -> &mut Value {
        self
    }

    fn get_children(&self) -> Vec<Box<&dyn SimpleAST<Value>>> {
        match self {
            Value::Object(object) => object
                .values()
                .map(|v| Box::new(v as &dyn SimpleAST<Value>))
                .collect(),
            Value::Array(array) => array
                .iter()
                .map(|v| Box::new(v as &dyn SimpleAST<Value>))
                .collect(),
            _ => vec![],
        }
    }

    fn get_children_mut(&mut self) -> Vec<Box<&mut dyn SimpleAST<Value>>> {
        match self {
            Value::Object(object) => object
                .values_mut()
                .map(|v| Box::new(v as &mut dyn SimpleAST<Value>))
                .collect(),
            Value::Array(array) => array
                .iter_mut()
                .map(|v| Box::new(v as &mut dyn SimpleAST<Value>))
                .collect(),
            _ => vec![],
        }
    }
}
