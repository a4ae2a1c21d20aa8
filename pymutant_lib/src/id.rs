//! The `id` module provides trait [`Id`] for reading the parser-assigned identifier of a syntax
//! tree node, and [`JSONIDMaker`], the implementation for JSON encoded trees.

use serde_json::Value;

pub trait Id<AST> {
    /// Return the identifier of `node`, or `None` if the node does not carry one.
    ///
    /// # Arguments
    ///
    /// * `node` - The node in the syntax tree.
    fn get_id(&self, node: &AST) -> Option<u64>;
}

/// Reads node ids out of [`Value`] nodes with a closure, so each tree format can name the member
/// that holds the id.
pub struct JSONIDMaker<F>
where
    F: Fn(&Value) -> Option<u64>,
{
    f: F,
}

impl<F> JSONIDMaker<F>
where
    F: Fn(&Value) -> Option<u64>,
{
    /// Create a new json id maker object.
    ///
    /// # Arguments
    ///
    /// * `f` - The closure that extracts the id from a node.
    pub fn new(f: F) -> JSONIDMaker<F> {
        JSONIDMaker { f }
    }
}

impl<F> Id<Value> for JSONIDMaker<F>
where
    F: Fn(&Value) -> Option<u64>,
{
    fn get_id(&self, node: &Value) -> Option<u64> {
        (self.f)(node)
    }
}
