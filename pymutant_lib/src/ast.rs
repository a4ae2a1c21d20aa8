//! The `ast` module provides the [`SimpleAST`] trait and the [`ASTTraverser`] that walks any
//! tree conforming to it.

use crate::visitor::*;

/// Trait used to inspect a conforming syntax tree object for the information necessary to
/// traverse the tree.
pub trait SimpleAST<N> {
    /// Return a reference to the node of the syntax tree.
    fn get_node(&self) -> &N;

    /// Return a mutable reference to the node of the syntax tree.
    fn get_node_mut(&mut self) -> &mut N;

    /// Return a list of references to the children of the node, in order.
    fn get_children(&self) -> Vec<Box<&dyn SimpleAST<N>>>;

    /// Return a list of mutable references to the children of the node, in order.
    fn get_children_mut(&mut self) -> Vec<Box<&mut dyn SimpleAST<N>>>;
}

/// Type used to traverse a syntax tree.
///
/// Includes traversal functions for mutable and non-mutable traversals.  Both functions visit
/// children in the order returned by [`SimpleAST::get_children`], so two traversals of equal
/// trees call the visitor on the same nodes in the same order.
pub struct ASTTraverser {}

impl ASTTraverser {
    /// Traverse a syntax tree without mutating it.  Return true if the traversal stopped early.
    ///
    /// # Trait Bounds
    ///
    /// * `N` - The node type of the syntax tree.
    /// * `A` - The type that conforms to the SimpleAST trait.
    /// * `V` - The visitor type for visiting nodes of type `N`.
    ///
    /// # Arguments
    ///
    /// * `tree_node` - The node of the syntax tree to traverse.
    /// * `visitor` - The visitor object that implements the algorithm.
    pub fn traverse<N, A: SimpleAST<N> + ?Sized, V: Visitor<N> + ?Sized>(
        tree_node: &A,
        visitor: &mut V,
    ) -> bool {
        let node = tree_node.get_node();

        visitor.on_enter(node);

        if visitor.visit(node) {
            visitor.on_exit(node);
            return true;
        }

        if visitor.visit_children(node) {
            for child in tree_node.get_children() {
                if ASTTraverser::traverse(*child, visitor) {
                    visitor.on_exit(node);
                    return true;
                }
            }
        }

        visitor.on_exit(node);
        false
    }

    /// Traverse a syntax tree, possibly mutating it.  Return true if the traversal stopped early.
    ///
    /// # Trait Bounds
    ///
    /// * `N` - The node type of the syntax tree.
    /// * `A` - The type that conforms to the SimpleAST trait.
    /// * `V` - The visitor type for visiting nodes of type `N`.
    ///
    /// # Arguments
    ///
    /// * `tree_node` - The node of the syntax tree to traverse.
    /// * `visitor` - The visitor object that implements the algorithm.
    pub fn traverse_mut<N, A: SimpleAST<N> + ?Sized, V: VisitorMut<N> + ?Sized>(
        tree_node: &mut A,
        visitor: &mut V,
    ) -> bool {
        // The node is borrowed again for each call so the borrow never overlaps the borrow of
        // the children below.
        visitor.on_enter(tree_node.get_node_mut());

        let mut should_stop = visitor.visit_mut(tree_node.get_node_mut());
        if should_stop {
            visitor.on_exit(tree_node.get_node_mut());
            return true;
        }

        if visitor.visit_children(tree_node.get_node_mut()) {
            for child in tree_node.get_children_mut() {
                should_stop = ASTTraverser::traverse_mut(*child, visitor);
                if should_stop {
                    break;
                }
            }
        }

        visitor.on_exit(tree_node.get_node_mut());
        should_stop
    }
}
