//! The `mutator` module provides traits for objects that perform mutation algorithms.

use crate::mutation::MutationType;
use crate::mutator_result::MutatorResult;

/// Trait that describes the functionality that an object implementing a mutation algorithm
/// must provide.
///
/// A mutator answers two questions about a node.  [`Mutator::is_monitored_node`] decides whether
/// the node is of the kind the algorithm watches; every monitored node consumes a site identity.
/// [`Mutator::is_mutable_node`] decides whether a monitored node is also eligible for the
/// rewrite.  Neither question involves randomness.
///
/// # Generic Parameter
///
/// * N - The type of the syntax tree on which the [`Mutator<N>`] should operate.
pub trait Mutator<N> {
    /// Return true if `node` is of the kind this algorithm monitors.
    ///
    /// # Arguments
    ///
    /// * `node` - The node to inspect.
    fn is_monitored_node(&self, node: &N) -> bool;

    /// Return true if the mutator can rewrite `node`.  Only monitored nodes can be mutable.
    ///
    /// # Arguments
    ///
    /// * `node` - The node to check for mutability.
    fn is_mutable_node(&self, node: &N) -> bool;

    /// Rewrite `node` in place.  Return `None`, leaving `node` untouched, if the node does not
    /// have the shape the rewrite needs.
    ///
    /// # Arguments
    ///
    /// * `node` - The node to mutate.
    fn mutate(&mut self, node: &mut N) -> Option<MutatorResult>;

    /// Returns the enum value identifying the mutation algorithm implemented by the object.
    fn implements(&self) -> MutationType;
}

/// Trait that describes the functionality needed from the object that will create mutators on
/// behalf of a specific language.
pub trait MutatorFactory<N> {
    /// If possible, return a mutator object that implements the requested mutation algorithm.
    ///
    /// # Arguments
    ///
    /// * `mutation_type` - The mutation algorithm
    fn mutator_for(&self, mutation_type: &MutationType) -> Option<Box<dyn Mutator<N>>>;
}
