//! The `node_printer` module contains the [`NodePrinter<AST>`] and [`NodePrinterFactory<AST>`]
//! traits.

use crate::preferences::{PreferenceValue, Preferences};
use crate::pretty_printer::PrettyPrinter;
use std::io::Write;

/// Trait that provides the functionality needed by objects that print one kind of syntax tree
/// node.
///
/// The semantics of this trait shadow the [`crate::visitor::Visitor`] trait: the traversal calls
/// `on_entry` when it reaches the node, `print_node` to write out the bulk of the node, and
/// `on_exit` when it leaves the node.
pub trait NodePrinter<AST> {
    /// Called when the node traversal first encounters the node.
    ///
    /// # Arguments
    ///
    /// * `_printer` - The [`PrettyPrinter`] that will write content to `_stream`
    /// * `_stream` - The [`Write`] object that will receive formatted output.
    /// * `_factory` - The [`NodePrinterFactory<AST>`] trait object that will generate node
    /// printers for the children of the node.
    /// * `_node` - The syntax tree node.
    fn on_entry(
        &mut self,
        _printer: &mut PrettyPrinter,
        _stream: &mut dyn Write,
        _factory: &dyn NodePrinterFactory<AST>,
        _node: &AST,
    ) {
    }

    /// Called when the node printing object should write out the bulk of the node.
    ///
    /// # Arguments
    ///
    /// * `_printer` - The [`PrettyPrinter`] that will write content to `_stream`.
    /// * `_stream` - The [`Write`] object that will receive formatted output.
    /// * `_factory` - The [`NodePrinterFactory<AST>`] trait object that will generate node
    /// printers for the children of the node.
    /// * `_node` - The syntax tree node.
    fn print_node(
        &mut self,
        _printer: &mut PrettyPrinter,
        _stream: &mut dyn Write,
        _factory: &dyn NodePrinterFactory<AST>,
        _node: &AST,
    ) {
    }

    /// Called when the node traversal algorithm leaves the node.
    fn on_exit(
        &mut self,
        _printer: &mut PrettyPrinter,
        _stream: &mut dyn Write,
        _factory: &dyn NodePrinterFactory<AST>,
        _node: &AST,
    ) {
    }

    /// Return true if the traversal should traverse and print children nodes.
    fn visit_children(&mut self) -> bool {
        false
    }
}

/// Trait that describes the functionality for an object that will create [`NodePrinter<AST>`]
/// objects for printing the nodes of a syntax tree.
pub trait NodePrinterFactory<AST> {
    /// Get a node printer for `node`.
    ///
    /// # Arguments
    ///
    /// * `node` - The node from the syntax tree.
    fn printer_for(&self, node: &AST) -> Box<dyn NodePrinter<AST>>;

    /// Get a true/false value for a settings key.  Missing and non-boolean values read as false.
    ///
    /// # Arguments
    ///
    /// * `key` - The string for the key.
    fn get_preference_value_for_key(&self, key: &str) -> bool {
        matches!(
            self.get_settings().get_value_for_key(key),
            Some(PreferenceValue::Boolean(true))
        )
    }

    /// Get the settings object for the factory.
    fn get_settings(&self) -> &Preferences;
}
