//! The `pretty_print_visitor` module provides a common pretty-print [`Visitor`] object that can
//! traverse a syntax tree. Language specific behavior comes from an object conforming to
//! [`NodePrinterFactory<AST>`] that produces [`NodePrinter<AST>`] trait objects for each node.

use crate::node_printer::*;
use crate::pretty_printer::PrettyPrinter;
use crate::visitor::Visitor;
use std::io::Write;

/// [`Visitor<T>`] conforming object that will emit the source code version of a program.
pub struct PrettyPrintVisitor<'a, AST> {
    /// Stack of node printers, one for each node the traversal is inside of.
    stack: Vec<Box<dyn NodePrinter<AST>>>,
    /// The [`PrettyPrinter`] object that writes formatted output.
    pretty_printer: &'a mut PrettyPrinter,
    /// The [`Write`] object that receives formatted output.
    out_stream: &'a mut dyn Write,
    /// The object that produces [`NodePrinter<AST>`] trait objects.
    node_printer_factory: &'a dyn NodePrinterFactory<AST>,
}

impl<'a, AST> PrettyPrintVisitor<'a, AST> {
    /// Create a new visitor.
    ///
    /// # Arguments
    ///
    /// * `stream` - The [`Write`] object that will receive formatted output.
    /// * `printer` - The [`PrettyPrinter`] object that will generate formatted output.
    /// * `factory` - The [`NodePrinterFactory<AST>`] that generates node printers.
    pub fn new(
        stream: &'a mut dyn Write,
        printer: &'a mut PrettyPrinter,
        factory: &'a dyn NodePrinterFactory<AST>,
    ) -> PrettyPrintVisitor<'a, AST> {
        PrettyPrintVisitor {
            stack: vec![],
            pretty_printer: printer,
            out_stream: stream,
            node_printer_factory: factory,
        }
    }
}

impl<'a, AST> Visitor<AST> for PrettyPrintVisitor<'a, AST> {
    fn on_enter(&mut self, node: &AST) {
        let mut printer = self.node_printer_factory.printer_for(node);
        printer.on_entry(
            self.pretty_printer,
            self.out_stream,
            self.node_printer_factory,
            node,
        );
        self.stack.push(printer);
    }

    fn visit(&mut self, node: &AST) -> bool {
        if let Some(p) = self.stack.last_mut() {
            p.print_node(
                self.pretty_printer,
                self.out_stream,
                self.node_printer_factory,
                node,
            );
        }
        false
    }

    fn visit_children(&mut self, _node: &AST) -> bool {
        match self.stack.last_mut() {
            Some(p) => p.visit_children(),
            None => true,
        }
    }

    fn on_exit(&mut self, node: &AST) {
        if let Some(mut p) = self.stack.pop() {
            p.on_exit(
                self.pretty_printer,
                self.out_stream,
                self.node_printer_factory,
                node,
            );
        }
    }
}
