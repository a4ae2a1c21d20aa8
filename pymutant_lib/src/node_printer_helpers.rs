//! The `node_printer_helpers` module contains common algorithms node printers use to print the
//! children of a node.

use crate::ast::{ASTTraverser, SimpleAST};
use crate::node_printer::NodePrinterFactory;
use crate::pretty_print_visitor::PrettyPrintVisitor;
use crate::pretty_printer::{write_space, write_token, PrettyPrinter};
use std::io::Write;

/// Helper function to traverse a child node and print it.
///
/// # Arguments
///
/// * `printer` - The [`PrettyPrinter`] object that will write to `stream`.
/// * `stream` - The [`Write`] object that will receive formatted output
/// * `factory` - The [`NodePrinterFactory<AST>`] object for generating node printers.
/// * `node` - The node in the syntax tree to traverse.
pub fn traverse_sub_node_and_print<AST: SimpleAST<AST>>(
    printer: &mut PrettyPrinter,
    stream: &mut dyn Write,
    factory: &dyn NodePrinterFactory<AST>,
    node: &AST,
) {
    let mut visitor = PrettyPrintVisitor::<AST>::new(stream, printer, factory);
    ASTTraverser::traverse(node, &mut visitor);
}

/// Helper function to print the elements of an array separated by `, `.
///
/// # Arguments
///
/// * `printer` - The [`PrettyPrinter`] that will send formatted output to `stream`.
/// * `stream` - The [`Write`] object that will receive the formatted output.
/// * `factory` - The [`NodePrinterFactory<AST>`] to use for printing each element.
/// * `array` - The nodes to print.
pub fn print_array_helper<AST: SimpleAST<AST>>(
    printer: &mut PrettyPrinter,
    stream: &mut dyn Write,
    factory: &dyn NodePrinterFactory<AST>,
    array: &[AST],
) {
    print_array_helper_with_node_handler_and_space_formatter(
        printer,
        stream,
        factory,
        array,
        |p, s, f, n| {
            traverse_sub_node_and_print(p, s, f, n);
        },
        |p, s, _f| {
            write_token(p, s, ",");
            write_space(p, s);
        },
    )
}

/// Helper function to print out the elements of an array using a closure to format each node
/// and a closure to write the content between nodes.
///
/// # Arguments
///
/// * `printer` - The [`PrettyPrinter`] that will send formatted output to `stream`.
/// * `stream` - The [`Write`] object that will receive the formatted output.
/// * `factory` - The [`NodePrinterFactory<AST>`] to pass to the closures.
/// * `array` - The nodes to print.
/// * `node_printer` - The closure that prints each element of `array`.
/// * `inter_node_formatter` - The closure that prints the content between elements.
pub fn print_array_helper_with_node_handler_and_space_formatter<AST, F, I>(
    printer: &mut PrettyPrinter,
    stream: &mut dyn Write,
    factory: &dyn NodePrinterFactory<AST>,
    array: &[AST],
    node_printer: F,
    inter_node_formatter: I,
) where
    F: Fn(&mut PrettyPrinter, &mut dyn Write, &dyn NodePrinterFactory<AST>, &AST),
    I: Fn(&mut PrettyPrinter, &mut dyn Write, &dyn NodePrinterFactory<AST>),
{
    for (i, n) in array.iter().enumerate() {
        if i > 0 {
            inter_node_formatter(printer, stream, factory);
        }
        node_printer(printer, stream, factory, n);
    }
}
