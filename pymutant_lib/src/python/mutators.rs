//! The `python::mutators` module provides the objects that implement the mutation algorithms
//! for Python syntax trees.  The module also provides the factory that implements
//! [`MutatorFactory<t>`].
//!
//! Every mutator reads its rewrite from [`rewrite_for`], so the catalog in
//! [`crate::operators`] is the only place that knows which operator becomes which.

use crate::json::*;
use crate::mutation::*;
use crate::mutator::*;
use crate::mutator_result::MutatorResult;
use crate::operators::*;
use crate::python::ast::*;

/// The object that implements operator flips for `BinOp`, `BoolOp` and `Compare` nodes.
///
/// The operator node sits at `operator_key` inside the monitored node.  For `Compare` nodes the
/// key selects the first entry of `ops`, so only the first operator of a chained comparison is
/// considered.
struct OperatorFlipMutator {
    /// The mutation algorithm implemented by the mutator.
    mutation_type: MutationType,

    /// The `ast_type` of the monitored node.
    node_type: &'static str,

    /// Path to the operator node inside the monitored node.
    operator_key: &'static str,

    /// The operator pairs from the rewrite catalog.
    pairs: &'static [(&'static str, &'static str)],

    /// True if a rewrite should describe the replaced operator.
    reports_replacement: bool,
}

impl OperatorFlipMutator {
    /// Return a new instance of the mutator.
    ///
    /// # Arguments
    ///
    /// * `mutation_type` - the mutation algorithm implemented by the mutator
    /// * `node_type` - the node type the algorithm monitors
    /// * `operator_key` - the path to the operator node
    /// * `reports_replacement` - whether the mutator writes a note for each rewrite
    fn new(
        mutation_type: MutationType,
        node_type: &'static str,
        operator_key: &'static str,
        reports_replacement: bool,
    ) -> OperatorFlipMutator {
        let pairs = match rewrite_for(&mutation_type) {
            Rewrite::FlipOperator(pairs) => pairs,
            _ => &[],
        };
        OperatorFlipMutator {
            mutation_type,
            node_type,
            operator_key,
            pairs,
            reports_replacement,
        }
    }

    /// Return the operator name of `node` and its replacement.
    fn flip_for(&self, node: &PythonAST) -> Option<(String, &'static str)> {
        let operator = node.borrow_value_for_key(self.operator_key)?.ast_type()?;
        let replacement = flip_operator(self.pairs, operator)?;
        Some((String::from(operator), replacement))
    }
}

impl Mutator<PythonAST> for OperatorFlipMutator {
    fn is_monitored_node(&self, node: &PythonAST) -> bool {
        node.is_node_type(self.node_type)
    }

    fn is_mutable_node(&self, node: &PythonAST) -> bool {
        self.is_monitored_node(node) && self.flip_for(node).is_some()
    }

    fn mutate(&mut self, node: &mut PythonAST) -> Option<MutatorResult> {
        let (original, replacement) = self.flip_for(node)?;

        let path = format!("/{}", self.operator_key);
        let operator_node = node.pointer_mut(&path)?;
        operator_node.set_str_for_key("ast_type", replacement);

        let note = if self.reports_replacement {
            Some(format!("replacing {original} with {replacement}"))
        } else {
            None
        };

        log::debug!(
            "{} mutator changed {} to {}",
            self.mutation_type,
            original,
            replacement
        );

        Some(MutatorResult::for_rewrite(self.mutation_type, note))
    }

    fn implements(&self) -> MutationType {
        self.mutation_type
    }
}

/// Implements the assignment mutation algorithm.
///
/// An `Assign` keeps its targets and gets `None` as its value.  An `AugAssign` is replaced by a
/// plain `Assign` of its target to `None`, so `x += 1` becomes `x = None`.
struct AssignmentMutator {}

impl AssignmentMutator {
    /// Create a new assignment mutator.
    fn new() -> AssignmentMutator {
        AssignmentMutator {}
    }
}

impl Mutator<PythonAST> for AssignmentMutator {
    fn is_monitored_node(&self, node: &PythonAST) -> bool {
        node.is_node_type("Assign") || node.is_node_type("AugAssign")
    }

    fn is_mutable_node(&self, node: &PythonAST) -> bool {
        self.is_monitored_node(node)
    }

    fn mutate(&mut self, node: &mut PythonAST) -> Option<MutatorResult> {
        match node.ast_type()? {
            "Assign" => {
                if !node.contains_key("value") {
                    return None;
                }
                node.set_node_for_key("value", new_none_node());
            }
            "AugAssign" => {
                let target = node.take_value_for_key("target")?;
                let node_id = node.take_value_for_key("node_id").unwrap_or_default();
                *node = new_assign_node(node_id, target, new_none_node());
            }
            _ => return None,
        }

        Some(MutatorResult::for_rewrite(MutationType::Assignment, None))
    }

    fn implements(&self) -> MutationType {
        MutationType::Assignment
    }
}

/// Implements the `if` and `while` algorithms by replacing the statement's test with a boolean
/// constant.
struct ConditionMutator {
    /// The mutation algorithm implemented by the mutator.
    mutation_type: MutationType,

    /// The `ast_type` of the monitored statement.
    node_type: &'static str,

    /// The constant that replaces the test.
    forced_value: bool,
}

impl ConditionMutator {
    /// Create a new condition mutator.
    ///
    /// # Arguments
    ///
    /// * `mutation_type` - the mutation algorithm implemented by the mutator
    /// * `node_type` - the statement type the algorithm monitors
    fn new(mutation_type: MutationType, node_type: &'static str) -> ConditionMutator {
        let forced_value = match rewrite_for(&mutation_type) {
            Rewrite::ForceTest(value) => value,
            _ => true,
        };
        ConditionMutator {
            mutation_type,
            node_type,
            forced_value,
        }
    }
}

impl Mutator<PythonAST> for ConditionMutator {
    fn is_monitored_node(&self, node: &PythonAST) -> bool {
        node.is_node_type(self.node_type)
    }

    fn is_mutable_node(&self, node: &PythonAST) -> bool {
        self.is_monitored_node(node)
    }

    fn mutate(&mut self, node: &mut PythonAST) -> Option<MutatorResult> {
        if !node.contains_key("test") {
            return None;
        }
        node.set_node_for_key("test", new_bool_node(self.forced_value));
        Some(MutatorResult::for_rewrite(self.mutation_type, None))
    }

    fn implements(&self) -> MutationType {
        self.mutation_type
    }
}

/// Implement the [`MutatorFactory<T>`] trait to have an interface for getting mutators for
/// requested mutation algorithms.
pub struct PythonMutatorFactory {}

impl PythonMutatorFactory {
    /// Return one mutator for every mutation algorithm, in the order of
    /// [`get_all_mutation_algorithms`].
    pub fn all_mutators(&self) -> Vec<Box<dyn Mutator<PythonAST>>> {
        get_all_mutation_algorithms()
            .iter()
            .filter_map(|t| self.mutator_for(t))
            .collect()
    }
}

impl MutatorFactory<PythonAST> for PythonMutatorFactory {
    fn mutator_for(&self, mutation_type: &MutationType) -> Option<Box<dyn Mutator<PythonAST>>> {
        match mutation_type {
            MutationType::Assignment => Some(Box::new(AssignmentMutator::new())),
            MutationType::BinaryOp => Some(Box::new(OperatorFlipMutator::new(
                MutationType::BinaryOp,
                "BinOp",
                "op",
                true,
            ))),
            MutationType::BooleanOp => Some(Box::new(OperatorFlipMutator::new(
                MutationType::BooleanOp,
                "BoolOp",
                "op",
                false,
            ))),
            MutationType::Comparison => Some(Box::new(OperatorFlipMutator::new(
                MutationType::Comparison,
                "Compare",
                "ops/0",
                true,
            ))),
            MutationType::IfStatement => Some(Box::new(ConditionMutator::new(
                MutationType::IfStatement,
                "If",
            ))),
            MutationType::WhileStatement => Some(Box::new(ConditionMutator::new(
                MutationType::WhileStatement,
                "While",
            ))),
        }
    }
}
