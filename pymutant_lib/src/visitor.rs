//! The `visitor` module provides the traits that describe the functionality an object must have
//! to traverse a syntax tree.

/// Trait for objects that walk a syntax tree without changing it.
///
/// The traversal algorithm in [`crate::ast::ASTTraverser`] calls the methods in this order for
/// every node:
///
/// * `on_enter` - the visitor starts examining the node.
/// * `visit` - the visitor handles the node. Returning true stops the whole traversal.
/// * `visit_children` - the visitor decides whether the traversal should descend into the
/// node's children.
/// * `on_exit` - called after every child has been traversed.
///
/// Work done in `on_exit` therefore sees the node after all of its descendants, which gives a
/// post-order walk.
pub trait Visitor<N: ?Sized> {
    /// The traversal algorithm calls this function when the visitor enters a node.
    ///
    /// # Arguments
    ///
    /// * `node` - A reference to the node that the visitor has started visiting.
    fn on_enter(&mut self, _node: &N) {}

    /// Fully process `node`.  Return true to terminate the traversal of the syntax tree.
    ///
    /// # Arguments
    ///
    /// * `node` - A reference to the node that the visitor should process.
    fn visit(&mut self, _node: &N) -> bool {
        false
    }

    /// Return true if the traversal algorithm should process the node's children.
    ///
    /// A visitor that walks the children of a node itself (the pretty-printer does this) returns
    /// false so the children are not traversed a second time.
    ///
    /// # Arguments
    ///
    /// * `node` - A reference to the node.
    fn visit_children(&mut self, _node: &N) -> bool {
        true
    }

    /// The traversal algorithm calls this function after processing the children of `node`.
    ///
    /// # Arguments
    ///
    /// * `node` - A reference to the current node.
    fn on_exit(&mut self, _node: &N) {}
}

/// Trait for objects that walk a syntax tree and may rewrite it.
///
/// This trait behaves in the same manner as [`Visitor`] but receives mutable nodes.
pub trait VisitorMut<N: ?Sized> {
    /// The traversal algorithm calls this function when the visitor enters a node.
    ///
    /// # Arguments
    ///
    /// * `node` - A mutable reference to the node that the visitor has started visiting.
    fn on_enter(&mut self, _node: &mut N) {}

    /// Fully process `node`.  Return true to terminate the traversal of the syntax tree.
    ///
    /// # Arguments
    ///
    /// * `node` - A mutable reference to the node that the visitor should process.
    fn visit_mut(&mut self, _node: &mut N) -> bool {
        false
    }

    /// Return true if the traversal algorithm should process the node's children.
    ///
    /// # Arguments
    ///
    /// * `node` - A mutable reference to the node.
    fn visit_children(&mut self, _node: &mut N) -> bool {
        true
    }

    /// The traversal algorithm calls this function after processing the children of `node`.
    ///
    /// # Arguments
    ///
    /// * `node` - A mutable reference to the current node.
    fn on_exit(&mut self, _node: &mut N) {}
}
