//! The `python::node_finder` module provides [`UnsupportedNodeFinder`], a [`Visitor`] that looks
//! for the first node the Python pretty-printer cannot turn back into source.

use crate::ast::ASTTraverser;
use crate::error::PyMutantError;
use crate::operators::python_operator_token;
use crate::python::ast::{PythonAST, PythonNode};
use crate::python::pretty_printer::PythonNodePrinterFactory;
use crate::visitor::Visitor;

/// Node types that parent printers write themselves, so they need no printer of their own.
static IMPLICIT_NODE_TYPES: &[&str] = &["Load", "Store", "Del", "TypeIgnore"];

/// Visitor that stops at the first unsupported node.
pub struct UnsupportedNodeFinder<'a> {
    factory: &'a PythonNodePrinterFactory,

    /// The `ast_type` of the first unsupported node.
    pub unsupported: Option<String>,
}

impl<'a> UnsupportedNodeFinder<'a> {
    /// Create a new finder.
    ///
    /// # Arguments
    ///
    /// * `factory` - The printer factory whose node types count as supported.
    pub fn new(factory: &'a PythonNodePrinterFactory) -> UnsupportedNodeFinder<'a> {
        UnsupportedNodeFinder {
            factory,
            unsupported: None,
        }
    }
}

impl<'a> Visitor<PythonAST> for UnsupportedNodeFinder<'a> {
    fn visit(&mut self, node: &PythonAST) -> bool {
        let Some(ast_type) = node.ast_type() else {
            return false;
        };

        let supported = IMPLICIT_NODE_TYPES.contains(&ast_type)
            || python_operator_token(ast_type).is_some()
            || self.factory.printer_for_type(ast_type).is_some();
        if !supported {
            self.unsupported = Some(String::from(ast_type));
        }
        !supported
    }
}

/// Return an error naming the first node of `ast` that cannot be printed.
///
/// # Arguments
///
/// * `ast` - The syntax tree to check.
/// * `factory` - The printer factory that will print the tree.
pub fn check_printable(
    ast: &PythonAST,
    factory: &PythonNodePrinterFactory,
) -> Result<(), PyMutantError> {
    let mut finder = UnsupportedNodeFinder::new(factory);
    ASTTraverser::traverse(ast, &mut finder);
    match finder.unsupported {
        Some(ast_type) => Err(PyMutantError::UnsupportedNode(ast_type)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::python::sample_trees::*;
    use serde_json::json;

    #[test]
    fn test_sample_trees_are_printable() {
        let factory = PythonNodePrinterFactory::default();
        assert!(check_printable(&scenario_tree(), &factory).is_ok());
        assert!(check_printable(&loop_tree(), &factory).is_ok());
    }

    #[test]
    fn test_match_statement_is_unsupported() {
        let factory = PythonNodePrinterFactory::default();
        let ast = json!({
            "ast_type": "Module", "node_id": 0,
            "body": [{
                "ast_type": "Match", "node_id": 1,
                "subject": {"ast_type": "Name", "node_id": 2, "id": "x", "ctx": {"ast_type": "Load", "node_id": 3}},
                "cases": []
            }],
            "type_ignores": []
        });
        match check_printable(&ast, &factory) {
            Err(PyMutantError::UnsupportedNode(t)) => assert_eq!(t, "Match"),
            other => panic!("expected an unsupported node, got {other:?}"),
        }
    }
}
