//! The `mutator_result` module contains the code for [`MutatorResult`].

use crate::mutation::MutationType;

/// Result type returned from the mutation operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutatorResult {
    /// The mutation algorithm used.
    pub mutation_type: Option<MutationType>,

    /// The site identity of the mutated node.
    pub index: Option<usize>,

    /// The id of the mutated node or None if the mutated node did not have an id.
    pub mutated_node_id: Option<u64>,

    /// One-line description of an operator replacement, for example `replacing Add with Sub`.
    pub note: Option<String>,
}

impl MutatorResult {
    /// Create a new, empty, mutation result.
    pub fn new() -> MutatorResult {
        MutatorResult {
            mutation_type: None,
            index: None,
            mutated_node_id: None,
            note: None,
        }
    }

    /// Create a result for a rewrite made by `mutation_type`, carrying an optional note.
    ///
    /// # Arguments
    ///
    /// * `mutation_type` - The algorithm that made the rewrite.
    /// * `note` - The diagnostic note, if the algorithm reports one.
    pub fn for_rewrite(mutation_type: MutationType, note: Option<String>) -> MutatorResult {
        MutatorResult {
            mutation_type: Some(mutation_type),
            note,
            ..MutatorResult::new()
        }
    }
}

impl Default for MutatorResult {
    fn default() -> Self {
        Self::new()
    }
}
