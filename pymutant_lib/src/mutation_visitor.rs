//! The `mutation_visitor` module provides [`SiteEnumerator`], a [`Visitor`] that assigns site
//! identities and collects candidate sites, and [`MutationMaker`], a [`VisitorMut`] that replays
//! the same counting walk over a fresh tree and rewrites exactly one site.
//!
//! Both visitors count in `on_exit`, so a monitored node receives its identity after all of its
//! descendants.  The counter advances once for every monitored node whether or not the node is
//! eligible, which keeps identities stable between the two walks.

use crate::error::PyMutantError;
use crate::id::Id;
use crate::mutation::MutationType;
use crate::mutator::*;
use crate::mutator_result::MutatorResult;
use crate::visitor::*;

/// A node the engine can mutate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateSite {
    /// The dense site identity assigned by the traversal counter.
    pub id: usize,

    /// The parser-assigned id of the node, if the tree carries one.
    pub node_id: Option<u64>,

    /// The algorithm that monitors the node.
    pub mutation_type: MutationType,
}

/// Return the index of the mutator that monitors `node`.
fn monitoring_mutator<AST>(mutators: &[Box<dyn Mutator<AST>>], node: &AST) -> Option<usize> {
    mutators.iter().position(|m| m.is_monitored_node(node))
}

/// The struct for traversing a syntax tree and recording candidate sites.
pub struct SiteEnumerator<'a, AST> {
    /// Mutators for every monitored kind, enabled or not.
    mutators: &'a [Box<dyn Mutator<AST>>],

    /// The algorithms whose eligible nodes become candidates.
    enabled: &'a [MutationType],

    /// A [`Id<AST>`] trait object that can produce an id value for a node.
    id_maker: Box<dyn Id<AST> + 'a>,

    /// The identity the next monitored node will receive.
    pub next_identity: usize,

    /// The candidate sites in traversal order.
    pub candidates: Vec<CandidateSite>,
}

impl<'a, AST> SiteEnumerator<'a, AST> {
    /// Create the new site enumerator.
    ///
    /// # Arguments
    ///
    /// * `mutators` - One mutator for every monitored node kind.
    /// * `enabled` - The algorithms whose eligible nodes should become candidates.
    /// * `id_maker` - The object that reads node ids.
    pub fn new(
        mutators: &'a [Box<dyn Mutator<AST>>],
        enabled: &'a [MutationType],
        id_maker: Box<dyn Id<AST> + 'a>,
    ) -> SiteEnumerator<'a, AST> {
        SiteEnumerator {
            mutators,
            enabled,
            id_maker,
            next_identity: 0,
            candidates: vec![],
        }
    }
}

impl<'a, AST> Visitor<AST> for SiteEnumerator<'a, AST> {
    fn on_exit(&mut self, node: &AST) {
        let Some(index) = monitoring_mutator(self.mutators, node) else {
            return;
        };

        let mutator = &self.mutators[index];
        let mutation_type = mutator.implements();
        if self.enabled.contains(&mutation_type) && mutator.is_mutable_node(node) {
            self.candidates.push(CandidateSite {
                id: self.next_identity,
                node_id: self.id_maker.get_id(node),
                mutation_type,
            });
        }

        self.next_identity += 1;
    }
}

/// The struct for traversing a syntax tree and rewriting the node at one site identity.
///
/// The walk always runs to the end of the tree.  When the site is not reached, or the node found
/// there is of another kind, [`MutationMaker::result`] stays `None`.
pub struct MutationMaker<'a, AST> {
    /// Mutators for every monitored kind, in the same order used by the enumerator.
    mutators: &'a mut [Box<dyn Mutator<AST>>],

    /// The site to rewrite.
    target: &'a CandidateSite,

    /// The identity the next monitored node will receive.
    current_identity: usize,

    /// A [`Id<AST>`] trait object that can produce an id value for a node.
    id_maker: Box<dyn Id<AST> + 'a>,

    /// The outcome of the rewrite, if one happened.
    pub result: Option<MutatorResult>,

    /// Set when the node at the target identity is not the node recorded for the site.
    pub error: Option<PyMutantError>,
}

impl<'a, AST> MutationMaker<'a, AST> {
    /// Create the new mutation maker.
    ///
    /// # Arguments
    ///
    /// * `mutators` - One mutator for every monitored node kind.
    /// * `target` - The site to rewrite.
    /// * `id_maker` - The object that reads node ids.
    pub fn new(
        mutators: &'a mut [Box<dyn Mutator<AST>>],
        target: &'a CandidateSite,
        id_maker: Box<dyn Id<AST> + 'a>,
    ) -> MutationMaker<'a, AST> {
        MutationMaker {
            mutators,
            target,
            current_identity: 0,
            id_maker,
            result: None,
            error: None,
        }
    }

    /// Rewrite `node`, which sits at the target identity.
    fn rewrite(&mut self, index: usize, node: &mut AST) {
        let found_id = self.id_maker.get_id(node);
        if let (Some(expected), Some(found)) = (self.target.node_id, found_id) {
            if expected != found {
                log::warn!(
                    "Site {} expected node {} but reached node {}",
                    self.target.id,
                    expected,
                    found
                );
                self.error = Some(PyMutantError::SiteDiverged(
                    self.target.id,
                    expected,
                    found,
                ));
                return;
            }
        }

        let mutator = &mut self.mutators[index];
        if mutator.implements() != self.target.mutation_type || !mutator.is_mutable_node(node) {
            log::debug!(
                "Site {} is a {} node, not an eligible {} node",
                self.target.id,
                mutator.implements(),
                self.target.mutation_type
            );
            return;
        }

        if let Some(mut result) = mutator.mutate(node) {
            result.index = Some(self.target.id);
            result.mutated_node_id = found_id;
            self.result = Some(result);
        }
    }
}

impl<'a, AST> VisitorMut<AST> for MutationMaker<'a, AST> {
    fn on_exit(&mut self, node: &mut AST) {
        let Some(index) = monitoring_mutator(self.mutators, node) else {
            return;
        };

        if self.current_identity == self.target.id {
            self.rewrite(index, node);
        }

        self.current_identity += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ASTTraverser;
    use crate::id::JSONIDMaker;
    use crate::mutation::get_all_mutation_algorithms;
    use crate::python::ast::PythonNode;
    use crate::python::sample_trees::*;
    use crate::python::PythonMutatorFactory;
    use serde_json::Value;

    fn node_id_maker<'a>() -> Box<dyn Id<Value> + 'a> {
        Box::new(JSONIDMaker::new(|n: &Value| n.node_id()))
    }

    #[test]
    fn test_counter_advances_for_ineligible_nodes() {
        let mutators = PythonMutatorFactory {}.all_mutators();
        let enabled = get_all_mutation_algorithms();
        let mut enumerator = SiteEnumerator::new(&mutators, &enabled, node_id_maker());
        ASTTraverser::traverse(&loop_tree(), &mut enumerator);

        assert_eq!(enumerator.next_identity, 6);
        assert_eq!(enumerator.candidates.len(), 5);
        assert!(enumerator
            .candidates
            .windows(2)
            .all(|pair| pair[0].id < pair[1].id));
    }

    #[test]
    fn test_enumeration_is_deterministic() {
        let mutators = PythonMutatorFactory {}.all_mutators();
        let enabled = get_all_mutation_algorithms();

        let mut first = SiteEnumerator::new(&mutators, &enabled, node_id_maker());
        ASTTraverser::traverse(&scenario_tree(), &mut first);
        let mut second = SiteEnumerator::new(&mutators, &enabled, node_id_maker());
        ASTTraverser::traverse(&scenario_tree(), &mut second);

        assert_eq!(first.candidates, second.candidates);
    }

    #[test]
    fn test_maker_rewrites_only_the_target() {
        let mut mutators = PythonMutatorFactory {}.all_mutators();
        let site = CandidateSite {
            id: 1,
            node_id: Some(6),
            mutation_type: MutationType::Comparison,
        };

        let mut ast = scenario_tree();
        let mut maker = MutationMaker::new(&mut mutators, &site, node_id_maker());
        ASTTraverser::traverse_mut(&mut ast, &mut maker);

        let result = maker.result.unwrap();
        assert_eq!(result.index, Some(1));
        assert_eq!(result.mutated_node_id, Some(6));
        assert!(maker.error.is_none());

        let mut expected = scenario_tree();
        expected["body"][1]["test"]["ops"][0]["ast_type"] = Value::from("LtE");
        assert_eq!(ast, expected);
    }
}
