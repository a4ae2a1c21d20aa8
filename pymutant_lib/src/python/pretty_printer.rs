//! The `python::pretty_printer` module provides the code to traverse a Python syntax tree and
//! print out the source code represented in the tree.
//!
//! The output is normalized source: nested compound expressions are parenthesized, tuples always
//! carry parentheses and comments are gone.  Every statement starts on its own line.  Printers
//! write the body of a block with a leading newline before each statement, so a compound
//! statement never ends with a newline of its own.

use crate::json::*;
use crate::node_printer::{NodePrinter, NodePrinterFactory};
use crate::node_printer_helpers::*;
use crate::operators::python_operator_token;
use crate::preferences::{PreferenceValue, Preferences};
use crate::pretty_printer::{write_indent, write_newline, write_space, write_token, PrettyPrinter};
use crate::python::ast::{PythonAST, PythonNode};
use serde_json::Value;
use std::io::Write;

/// Settings key: print an `else` block that holds a single `if` statement as `elif`.
pub static ELIF_CHAINS: &str = "elif-chains";

/// Return true if `node` must be wrapped in parentheses when it is the operand of another
/// expression.
fn needs_parens(node: &PythonAST) -> bool {
    matches!(
        node.ast_type(),
        Some("BinOp" | "BoolOp" | "Compare" | "UnaryOp" | "IfExp" | "Lambda" | "Await")
    )
}

/// Print the node stored for `key` if it is a node.
///
/// # Arguments
///
/// * `printer` - The [`PrettyPrinter`] object that will format the output.
/// * `stream` - The [`Write`] object that will receive the formatted text.
/// * `factory` - The [`NodePrinterFactory<AST>`] object that generates node printers for AST
/// nodes.
/// * `node` - The node in the Python AST.
/// * `key` - The field to print.
fn print_field(
    printer: &mut PrettyPrinter,
    stream: &mut dyn Write,
    factory: &dyn NodePrinterFactory<PythonAST>,
    node: &PythonAST,
    key: &str,
) {
    if let Some(sub_node) = node.get(key) {
        if sub_node.is_object() {
            traverse_sub_node_and_print(printer, stream, factory, sub_node);
        }
    }
}

/// Print `node` as the operand of an expression, adding parentheses for compound expressions.
///
/// # Arguments
///
/// * `printer` - The [`PrettyPrinter`] object that will format the output.
/// * `stream` - The [`Write`] object that will receive the formatted text.
/// * `factory` - The [`NodePrinterFactory<AST>`] object that generates node printers for AST
/// nodes.
/// * `node` - The operand.
fn print_operand(
    printer: &mut PrettyPrinter,
    stream: &mut dyn Write,
    factory: &dyn NodePrinterFactory<PythonAST>,
    node: &PythonAST,
) {
    if needs_parens(node) {
        write_token(printer, stream, "(");
        traverse_sub_node_and_print(printer, stream, factory, node);
        write_token(printer, stream, ")");
    } else {
        traverse_sub_node_and_print(printer, stream, factory, node);
    }
}

/// Print the node stored for `key` as an operand.
fn print_operand_field(
    printer: &mut PrettyPrinter,
    stream: &mut dyn Write,
    factory: &dyn NodePrinterFactory<PythonAST>,
    node: &PythonAST,
    key: &str,
) {
    if let Some(sub_node) = node.get(key) {
        if sub_node.is_object() {
            print_operand(printer, stream, factory, sub_node);
        }
    }
}

/// Print the object of an attribute access, subscript or call.  Constants are wrapped when an
/// attribute follows them, so `(1).real` keeps its meaning.
///
/// # Arguments
///
/// * `printer` - The [`PrettyPrinter`] object that will format the output.
/// * `stream` - The [`Write`] object that will receive the formatted text.
/// * `factory` - The [`NodePrinterFactory<AST>`] object that generates node printers for AST
/// nodes.
/// * `node` - The node in the Python AST.
/// * `key` - The field holding the object.
/// * `before_attribute` - True if an attribute name follows the object.
fn print_primary_field(
    printer: &mut PrettyPrinter,
    stream: &mut dyn Write,
    factory: &dyn NodePrinterFactory<PythonAST>,
    node: &PythonAST,
    key: &str,
    before_attribute: bool,
) {
    if let Some(sub_node) = node.get(key) {
        if before_attribute && sub_node.is_node_type("Constant") {
            write_token(printer, stream, "(");
            traverse_sub_node_and_print(printer, stream, factory, sub_node);
            write_token(printer, stream, ")");
        } else {
            print_operand(printer, stream, factory, sub_node);
        }
    }
}

/// Write the array stored for `key` with `, ` between elements.
fn print_list_field(
    printer: &mut PrettyPrinter,
    stream: &mut dyn Write,
    factory: &dyn NodePrinterFactory<PythonAST>,
    node: &PythonAST,
    key: &str,
) {
    if let Some(array) = node.get_array_for_key(key) {
        print_array_helper(printer, stream, factory, array);
    }
}

/// Write `nodes` with `, ` between elements.
fn print_comma_separated<'n>(
    printer: &mut PrettyPrinter,
    stream: &mut dyn Write,
    factory: &dyn NodePrinterFactory<PythonAST>,
    nodes: impl IntoIterator<Item = &'n PythonAST>,
) {
    for (i, n) in nodes.into_iter().enumerate() {
        if i > 0 {
            write_token(printer, stream, ",");
            write_space(printer, stream);
        }
        traverse_sub_node_and_print(printer, stream, factory, n);
    }
}

/// Write each statement on a new, indented line.
fn print_statements(
    printer: &mut PrettyPrinter,
    stream: &mut dyn Write,
    factory: &dyn NodePrinterFactory<PythonAST>,
    statements: &[PythonAST],
) {
    for statement in statements {
        write_newline(printer, stream);
        write_indent(printer, stream);
        traverse_sub_node_and_print(printer, stream, factory, statement);
    }
}

/// Write `:` and then the statements stored for `key` one level deeper.  An empty block is
/// written as `pass`.
///
/// # Arguments
///
/// * `printer` - The [`PrettyPrinter`] object that will format the output.
/// * `stream` - The [`Write`] object that will receive the formatted text.
/// * `factory` - The [`NodePrinterFactory<AST>`] object that generates node printers for AST
/// nodes.
/// * `node` - The compound statement.
/// * `key` - The field holding the block.
fn print_block(
    printer: &mut PrettyPrinter,
    stream: &mut dyn Write,
    factory: &dyn NodePrinterFactory<PythonAST>,
    node: &PythonAST,
    key: &str,
) {
    write_token(printer, stream, ":");
    printer.increase_indent();
    match node.get_array_for_key(key) {
        Some(statements) if !statements.is_empty() => {
            print_statements(printer, stream, factory, statements);
        }
        _ => {
            write_newline(printer, stream);
            write_indent(printer, stream);
            write_token(printer, stream, "pass");
        }
    }
    printer.decrease_indent();
}

/// Write an `else` or `finally` clause if the block stored for `key` is not empty.
fn print_clause(
    printer: &mut PrettyPrinter,
    stream: &mut dyn Write,
    factory: &dyn NodePrinterFactory<PythonAST>,
    node: &PythonAST,
    key: &str,
    keyword: &str,
) {
    if let Some(statements) = node.get_array_for_key(key) {
        if !statements.is_empty() {
            write_newline(printer, stream);
            write_indent(printer, stream);
            write_token(printer, stream, keyword);
            print_block(printer, stream, factory, node, key);
        }
    }
}

/// Write the decorators of a function or class, each on its own line.
fn print_decorators(
    printer: &mut PrettyPrinter,
    stream: &mut dyn Write,
    factory: &dyn NodePrinterFactory<PythonAST>,
    node: &PythonAST,
) {
    if let Some(decorators) = node.get_array_for_key("decorator_list") {
        for decorator in decorators {
            write_token(printer, stream, "@");
            traverse_sub_node_and_print(printer, stream, factory, decorator);
            write_newline(printer, stream);
            write_indent(printer, stream);
        }
    }
}

/// Write the source token for the operator node stored for `key`.
fn print_operator(printer: &mut PrettyPrinter, stream: &mut dyn Write, node: &PythonAST, key: &str) {
    if let Some(operator) = node.get(key).and_then(|o| o.ast_type()) {
        if let Some(token) = python_operator_token(operator) {
            write_token(printer, stream, token);
        }
    }
}

/// Return the pretty-printed form of `node`.
///
/// # Arguments
///
/// * `factory` - The node printer factory.
/// * `node` - The node to pretty-print.
fn node_text(factory: &dyn NodePrinterFactory<PythonAST>, node: &PythonAST) -> String {
    let mut node_contents = Vec::new();
    let mut printer = PrettyPrinter::new_for_source(4);
    traverse_sub_node_and_print(&mut printer, &mut node_contents, factory, node);
    String::from_utf8_lossy(&node_contents).into_owned()
}

/// Return `text` as a single quoted Python string literal.
fn python_string_literal(text: &str) -> String {
    let mut literal = String::from("'");
    for c in text.chars() {
        match c {
            '\\' => literal.push_str("\\\\"),
            '\'' => literal.push_str("\\'"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            c if c.is_control() => literal.push_str(&format!("\\x{:02x}", c as u32)),
            c => literal.push(c),
        }
    }
    literal.push('\'');
    literal
}

/// Return the source text of a `Constant` node.
fn constant_text(node: &PythonAST) -> String {
    if let Some(literal) = node.get_str_for_key("repr") {
        return String::from(literal);
    }
    match node.get("value") {
        Some(Value::Bool(true)) => String::from("True"),
        Some(Value::Bool(false)) => String::from("False"),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => python_string_literal(s),
        _ => String::from("None"),
    }
}

/// Escape the literal part of an f-string body.
fn escape_formatted_literal(text: &str, quote: char) -> String {
    let mut escaped = String::new();
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '{' => escaped.push_str("{{"),
            '}' => escaped.push_str("}}"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c == quote => {
                escaped.push('\\');
                escaped.push(c);
            }
            c if c.is_control() => escaped.push_str(&format!("\\x{:02x}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Return the `{...}` replacement field for a `FormattedValue` node.  The text of the embedded
/// expression is added to `expressions`.
fn formatted_value_text(
    factory: &dyn NodePrinterFactory<PythonAST>,
    node: &PythonAST,
    quote: char,
    expressions: &mut Vec<String>,
) -> String {
    let mut text = String::from("{");
    if let Some(expression) = node.get("value") {
        let mut expression_text = node_text(factory, expression);
        if expression.is_node_type("Lambda") {
            expression_text = format!("({expression_text})");
        }
        if expression_text.starts_with('{') {
            text.push(' ');
        }
        text.push_str(&expression_text);
        expressions.push(expression_text);
    }

    match node.get_int_for_key("conversion") {
        Some(115) => text.push_str("!s"),
        Some(114) => text.push_str("!r"),
        Some(97) => text.push_str("!a"),
        _ => {}
    }

    if let Some(spec) = node.get("format_spec") {
        if let Some(values) = spec.get_array_for_key("values") {
            text.push(':');
            text.push_str(&formatted_string_body(factory, values, quote, expressions));
        }
    }

    text.push('}');
    text
}

/// Return the text between the quotes of an f-string made of `values`.
fn formatted_string_body(
    factory: &dyn NodePrinterFactory<PythonAST>,
    values: &[PythonAST],
    quote: char,
    expressions: &mut Vec<String>,
) -> String {
    let mut body = String::new();
    for value in values {
        match value.ast_type() {
            Some("Constant") => {
                let literal = value.get_str_for_key("value").unwrap_or_default();
                body.push_str(&escape_formatted_literal(literal, quote));
            }
            Some("FormattedValue") => {
                body.push_str(&formatted_value_text(factory, value, quote, expressions));
            }
            _ => {}
        }
    }
    body
}

/// Return the f-string literal made of `values`.  The quote character is chosen so that it does
/// not appear inside any embedded expression.
fn formatted_string_text(
    factory: &dyn NodePrinterFactory<PythonAST>,
    values: &[PythonAST],
) -> String {
    let mut expressions = vec![];
    let mut body = formatted_string_body(factory, values, '"', &mut expressions);

    let mut quote = '"';
    if expressions.iter().any(|e| e.contains('"')) && !expressions.iter().any(|e| e.contains('\''))
    {
        quote = '\'';
        body = formatted_string_body(factory, values, quote, &mut vec![]);
    }

    format!("f{quote}{body}{quote}")
}

/// Return true if an `arguments` node declares no parameters.
fn arguments_are_empty(node: &PythonAST) -> bool {
    let no_list = |key: &str| node.get_array_for_key(key).map_or(true, |a| a.is_empty());
    let no_node = |key: &str| node.get(key).map_or(true, |n| !n.is_object());
    no_list("posonlyargs")
        && no_list("args")
        && no_list("kwonlyargs")
        && no_node("vararg")
        && no_node("kwarg")
}

struct DummyNodePrinter {}

impl NodePrinter<PythonAST> for DummyNodePrinter {
    fn visit_children(&mut self) -> bool {
        true
    }
}

struct ModulePrinter {}

impl NodePrinter<PythonAST> for ModulePrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        if let Some(body) = node.get_array_for_key("body") {
            for statement in body {
                write_indent(printer, stream);
                traverse_sub_node_and_print(printer, stream, factory, statement);
                write_newline(printer, stream);
            }
        }
    }
}

struct FunctionDefPrinter {
    is_async: bool,
}

impl NodePrinter<PythonAST> for FunctionDefPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        print_decorators(printer, stream, factory, node);
        if self.is_async {
            write_token(printer, stream, "async");
            write_space(printer, stream);
        }
        write_token(printer, stream, "def");
        write_space(printer, stream);
        if let Some(name) = node.get_str_for_key("name") {
            write_token(printer, stream, name);
        }
        write_token(printer, stream, "(");
        print_field(printer, stream, factory, node, "args");
        write_token(printer, stream, ")");
        if let Some(returns) = node.get("returns") {
            if returns.is_object() {
                write_token(printer, stream, " -> ");
                traverse_sub_node_and_print(printer, stream, factory, returns);
            }
        }
        print_block(printer, stream, factory, node, "body");
    }
}

struct ClassDefPrinter {}

impl NodePrinter<PythonAST> for ClassDefPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        print_decorators(printer, stream, factory, node);
        write_token(printer, stream, "class");
        write_space(printer, stream);
        if let Some(name) = node.get_str_for_key("name") {
            write_token(printer, stream, name);
        }

        let empty = vec![];
        let bases = node.get_array_for_key("bases").unwrap_or(&empty);
        let keywords = node.get_array_for_key("keywords").unwrap_or(&empty);
        if !bases.is_empty() || !keywords.is_empty() {
            write_token(printer, stream, "(");
            print_comma_separated(printer, stream, factory, bases.iter().chain(keywords.iter()));
            write_token(printer, stream, ")");
        }
        print_block(printer, stream, factory, node, "body");
    }
}

/// Printer for `return`, `raise` style statements: a keyword and an optional expression.
struct KeywordValuePrinter {
    keyword: &'static str,
}

impl NodePrinter<PythonAST> for KeywordValuePrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        write_token(printer, stream, self.keyword);
        if let Some(value) = node.get("value") {
            if value.is_object() {
                write_space(printer, stream);
                traverse_sub_node_and_print(printer, stream, factory, value);
            }
        }
    }
}

struct DeletePrinter {}

impl NodePrinter<PythonAST> for DeletePrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        write_token(printer, stream, "del");
        write_space(printer, stream);
        print_list_field(printer, stream, factory, node, "targets");
    }
}

struct AssignPrinter {}

impl NodePrinter<PythonAST> for AssignPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        if let Some(targets) = node.get_array_for_key("targets") {
            for target in targets {
                traverse_sub_node_and_print(printer, stream, factory, target);
                write_token(printer, stream, " = ");
            }
        }
        print_field(printer, stream, factory, node, "value");
    }
}

struct AugAssignPrinter {}

impl NodePrinter<PythonAST> for AugAssignPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        print_field(printer, stream, factory, node, "target");
        write_space(printer, stream);
        print_operator(printer, stream, node, "op");
        write_token(printer, stream, "=");
        write_space(printer, stream);
        print_field(printer, stream, factory, node, "value");
    }
}

struct AnnAssignPrinter {}

impl NodePrinter<PythonAST> for AnnAssignPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        // `simple` is 0 for a parenthesized name, which Python does not treat as a variable.
        let parenthesized = node.get_int_for_key("simple") == Some(0)
            && node.get("target").map_or(false, |t| t.is_node_type("Name"));
        if parenthesized {
            write_token(printer, stream, "(");
        }
        print_field(printer, stream, factory, node, "target");
        if parenthesized {
            write_token(printer, stream, ")");
        }
        write_token(printer, stream, ":");
        write_space(printer, stream);
        print_field(printer, stream, factory, node, "annotation");
        if let Some(value) = node.get("value") {
            if value.is_object() {
                write_token(printer, stream, " = ");
                traverse_sub_node_and_print(printer, stream, factory, value);
            }
        }
    }
}

struct ForPrinter {
    is_async: bool,
}

impl NodePrinter<PythonAST> for ForPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        if self.is_async {
            write_token(printer, stream, "async");
            write_space(printer, stream);
        }
        write_token(printer, stream, "for");
        write_space(printer, stream);
        print_field(printer, stream, factory, node, "target");
        write_token(printer, stream, " in ");
        print_field(printer, stream, factory, node, "iter");
        print_block(printer, stream, factory, node, "body");
        print_clause(printer, stream, factory, node, "orelse", "else");
    }
}

struct WhilePrinter {}

impl NodePrinter<PythonAST> for WhilePrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        write_token(printer, stream, "while");
        write_space(printer, stream);
        print_field(printer, stream, factory, node, "test");
        print_block(printer, stream, factory, node, "body");
        print_clause(printer, stream, factory, node, "orelse", "else");
    }
}

struct IfPrinter {
    use_elif: bool,
}

impl IfPrinter {
    /// Write `node` as an `if` statement introduced by `keyword`.
    fn print_if(
        &self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
        keyword: &str,
    ) {
        write_token(printer, stream, keyword);
        write_space(printer, stream);
        print_field(printer, stream, factory, node, "test");
        print_block(printer, stream, factory, node, "body");

        match node.get_array_for_key("orelse") {
            Some(orelse) if self.use_elif && orelse.len() == 1 && orelse[0].is_node_type("If") => {
                write_newline(printer, stream);
                write_indent(printer, stream);
                self.print_if(printer, stream, factory, &orelse[0], "elif");
            }
            _ => print_clause(printer, stream, factory, node, "orelse", "else"),
        }
    }
}

impl NodePrinter<PythonAST> for IfPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        self.print_if(printer, stream, factory, node, "if");
    }
}

struct WithPrinter {
    is_async: bool,
}

impl NodePrinter<PythonAST> for WithPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        if self.is_async {
            write_token(printer, stream, "async");
            write_space(printer, stream);
        }
        write_token(printer, stream, "with");
        write_space(printer, stream);
        print_list_field(printer, stream, factory, node, "items");
        print_block(printer, stream, factory, node, "body");
    }
}

struct WithItemPrinter {}

impl NodePrinter<PythonAST> for WithItemPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        print_field(printer, stream, factory, node, "context_expr");
        if let Some(vars) = node.get("optional_vars") {
            if vars.is_object() {
                write_token(printer, stream, " as ");
                traverse_sub_node_and_print(printer, stream, factory, vars);
            }
        }
    }
}

struct RaisePrinter {}

impl NodePrinter<PythonAST> for RaisePrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        write_token(printer, stream, "raise");
        if let Some(exc) = node.get("exc") {
            if exc.is_object() {
                write_space(printer, stream);
                traverse_sub_node_and_print(printer, stream, factory, exc);
                if let Some(cause) = node.get("cause") {
                    if cause.is_object() {
                        write_token(printer, stream, " from ");
                        traverse_sub_node_and_print(printer, stream, factory, cause);
                    }
                }
            }
        }
    }
}

struct TryPrinter {
    handler_keyword: &'static str,
}

impl NodePrinter<PythonAST> for TryPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        write_token(printer, stream, "try");
        print_block(printer, stream, factory, node, "body");
        if let Some(handlers) = node.get_array_for_key("handlers") {
            for handler in handlers {
                write_newline(printer, stream);
                write_indent(printer, stream);
                let mut handler_printer = ExceptHandlerPrinter {
                    keyword: self.handler_keyword,
                };
                handler_printer.print_node(printer, stream, factory, handler);
            }
        }
        print_clause(printer, stream, factory, node, "orelse", "else");
        print_clause(printer, stream, factory, node, "finalbody", "finally");
    }
}

struct ExceptHandlerPrinter {
    keyword: &'static str,
}

impl NodePrinter<PythonAST> for ExceptHandlerPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        write_token(printer, stream, self.keyword);
        if let Some(exception_type) = node.get("type") {
            if exception_type.is_object() {
                write_space(printer, stream);
                traverse_sub_node_and_print(printer, stream, factory, exception_type);
                if let Some(name) = node.get_str_for_key("name") {
                    write_token(printer, stream, " as ");
                    write_token(printer, stream, name);
                }
            }
        }
        print_block(printer, stream, factory, node, "body");
    }
}

struct AssertPrinter {}

impl NodePrinter<PythonAST> for AssertPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        write_token(printer, stream, "assert");
        write_space(printer, stream);
        print_field(printer, stream, factory, node, "test");
        if let Some(msg) = node.get("msg") {
            if msg.is_object() {
                write_token(printer, stream, ",");
                write_space(printer, stream);
                traverse_sub_node_and_print(printer, stream, factory, msg);
            }
        }
    }
}

struct ImportPrinter {}

impl NodePrinter<PythonAST> for ImportPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        write_token(printer, stream, "import");
        write_space(printer, stream);
        print_list_field(printer, stream, factory, node, "names");
    }
}

struct ImportFromPrinter {}

impl NodePrinter<PythonAST> for ImportFromPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        write_token(printer, stream, "from");
        write_space(printer, stream);
        let level = node.get_int_for_key("level").unwrap_or(0).max(0) as usize;
        write_token(printer, stream, &".".repeat(level));
        if let Some(module) = node.get_str_for_key("module") {
            write_token(printer, stream, module);
        }
        write_token(printer, stream, " import ");
        print_list_field(printer, stream, factory, node, "names");
    }
}

struct AliasPrinter {}

impl NodePrinter<PythonAST> for AliasPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        _factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        if let Some(name) = node.get_str_for_key("name") {
            write_token(printer, stream, name);
        }
        if let Some(asname) = node.get_str_for_key("asname") {
            write_token(printer, stream, " as ");
            write_token(printer, stream, asname);
        }
    }
}

/// Printer for `global` and `nonlocal`.
struct NamesStatementPrinter {
    keyword: &'static str,
}

impl NodePrinter<PythonAST> for NamesStatementPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        _factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        write_token(printer, stream, self.keyword);
        write_space(printer, stream);
        if let Some(names) = node.get_array_for_key("names") {
            let names: Vec<&str> = names.iter().filter_map(|n| n.as_str()).collect();
            write_token(printer, stream, &names.join(", "));
        }
    }
}

struct ExprPrinter {}

impl NodePrinter<PythonAST> for ExprPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        print_field(printer, stream, factory, node, "value");
    }
}

/// Printer for `pass`, `break` and `continue`.
struct KeywordPrinter {
    keyword: &'static str,
}

impl NodePrinter<PythonAST> for KeywordPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        _factory: &dyn NodePrinterFactory<PythonAST>,
        _node: &PythonAST,
    ) {
        write_token(printer, stream, self.keyword);
    }
}

struct BoolOpPrinter {}

impl NodePrinter<PythonAST> for BoolOpPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        let operator = node
            .get("op")
            .and_then(|o| o.ast_type())
            .and_then(python_operator_token)
            .unwrap_or("and");
        if let Some(values) = node.get_array_for_key("values") {
            print_array_helper_with_node_handler_and_space_formatter(
                printer,
                stream,
                factory,
                values,
                |p, s, f, n| print_operand(p, s, f, n),
                |p, s, _f| {
                    write_space(p, s);
                    write_token(p, s, operator);
                    write_space(p, s);
                },
            );
        }
    }
}

struct NamedExprPrinter {}

impl NodePrinter<PythonAST> for NamedExprPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        write_token(printer, stream, "(");
        print_field(printer, stream, factory, node, "target");
        write_token(printer, stream, " := ");
        print_operand_field(printer, stream, factory, node, "value");
        write_token(printer, stream, ")");
    }
}

struct BinOpPrinter {}

impl NodePrinter<PythonAST> for BinOpPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        print_operand_field(printer, stream, factory, node, "left");
        write_space(printer, stream);
        print_operator(printer, stream, node, "op");
        write_space(printer, stream);
        print_operand_field(printer, stream, factory, node, "right");
    }
}

struct UnaryOpPrinter {}

impl NodePrinter<PythonAST> for UnaryOpPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        print_operator(printer, stream, node, "op");
        if node.get("op").map_or(false, |o| o.is_node_type("Not")) {
            write_space(printer, stream);
        }
        print_operand_field(printer, stream, factory, node, "operand");
    }
}

struct LambdaPrinter {}

impl NodePrinter<PythonAST> for LambdaPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        write_token(printer, stream, "lambda");
        if let Some(args) = node.get("args") {
            if !arguments_are_empty(args) {
                write_space(printer, stream);
                traverse_sub_node_and_print(printer, stream, factory, args);
            }
        }
        write_token(printer, stream, ":");
        write_space(printer, stream);
        print_field(printer, stream, factory, node, "body");
    }
}

struct IfExpPrinter {}

impl NodePrinter<PythonAST> for IfExpPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        print_operand_field(printer, stream, factory, node, "body");
        write_token(printer, stream, " if ");
        print_operand_field(printer, stream, factory, node, "test");
        write_token(printer, stream, " else ");
        print_operand_field(printer, stream, factory, node, "orelse");
    }
}

struct DictPrinter {}

impl NodePrinter<PythonAST> for DictPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        write_token(printer, stream, "{");
        if let (Some(keys), Some(values)) =
            (node.get_array_for_key("keys"), node.get_array_for_key("values"))
        {
            for (i, (key, value)) in keys.iter().zip(values.iter()).enumerate() {
                if i > 0 {
                    write_token(printer, stream, ",");
                    write_space(printer, stream);
                }
                // A missing key marks a `**mapping` entry.
                if key.is_object() {
                    traverse_sub_node_and_print(printer, stream, factory, key);
                    write_token(printer, stream, ":");
                    write_space(printer, stream);
                    traverse_sub_node_and_print(printer, stream, factory, value);
                } else {
                    write_token(printer, stream, "**");
                    print_operand(printer, stream, factory, value);
                }
            }
        }
        write_token(printer, stream, "}");
    }
}

/// Printer for list, set and tuple displays.
struct SequencePrinter {
    open: &'static str,
    close: &'static str,
    is_tuple: bool,
}

impl NodePrinter<PythonAST> for SequencePrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        write_token(printer, stream, self.open);
        print_list_field(printer, stream, factory, node, "elts");
        if self.is_tuple && node.get_array_for_key("elts").map_or(false, |e| e.len() == 1) {
            write_token(printer, stream, ",");
        }
        write_token(printer, stream, self.close);
    }
}

/// Printer for list, set and dictionary comprehensions and generator expressions.
struct ComprehensionPrinter {
    open: &'static str,
    close: &'static str,
}

impl NodePrinter<PythonAST> for ComprehensionPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        write_token(printer, stream, self.open);
        if node.contains_key("key") {
            print_operand_field(printer, stream, factory, node, "key");
            write_token(printer, stream, ":");
            write_space(printer, stream);
            print_operand_field(printer, stream, factory, node, "value");
        } else {
            print_operand_field(printer, stream, factory, node, "elt");
        }
        if let Some(generators) = node.get_array_for_key("generators") {
            for generator in generators {
                traverse_sub_node_and_print(printer, stream, factory, generator);
            }
        }
        write_token(printer, stream, self.close);
    }
}

struct ComprehensionClausePrinter {}

impl NodePrinter<PythonAST> for ComprehensionClausePrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        if node.get_int_for_key("is_async").unwrap_or(0) != 0 {
            write_token(printer, stream, " async for ");
        } else {
            write_token(printer, stream, " for ");
        }
        print_field(printer, stream, factory, node, "target");
        write_token(printer, stream, " in ");
        print_operand_field(printer, stream, factory, node, "iter");
        if let Some(conditions) = node.get_array_for_key("ifs") {
            for condition in conditions {
                write_token(printer, stream, " if ");
                print_operand(printer, stream, factory, condition);
            }
        }
    }
}

struct AwaitPrinter {}

impl NodePrinter<PythonAST> for AwaitPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        write_token(printer, stream, "await");
        write_space(printer, stream);
        print_operand_field(printer, stream, factory, node, "value");
    }
}

/// Printer for `yield` and `yield from`, which always carry their own parentheses.
struct YieldPrinter {
    keyword: &'static str,
}

impl NodePrinter<PythonAST> for YieldPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        write_token(printer, stream, "(");
        write_token(printer, stream, self.keyword);
        if let Some(value) = node.get("value") {
            if value.is_object() {
                write_space(printer, stream);
                traverse_sub_node_and_print(printer, stream, factory, value);
            }
        }
        write_token(printer, stream, ")");
    }
}

struct ComparePrinter {}

impl NodePrinter<PythonAST> for ComparePrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        print_operand_field(printer, stream, factory, node, "left");
        if let (Some(ops), Some(comparators)) = (
            node.get_array_for_key("ops"),
            node.get_array_for_key("comparators"),
        ) {
            for (op, comparator) in ops.iter().zip(comparators.iter()) {
                if let Some(token) = op.ast_type().and_then(python_operator_token) {
                    write_space(printer, stream);
                    write_token(printer, stream, token);
                    write_space(printer, stream);
                }
                print_operand(printer, stream, factory, comparator);
            }
        }
    }
}

struct CallPrinter {}

impl NodePrinter<PythonAST> for CallPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        print_primary_field(printer, stream, factory, node, "func", false);
        write_token(printer, stream, "(");
        let empty = vec![];
        let args = node.get_array_for_key("args").unwrap_or(&empty);
        let keywords = node.get_array_for_key("keywords").unwrap_or(&empty);
        print_comma_separated(printer, stream, factory, args.iter().chain(keywords.iter()));
        write_token(printer, stream, ")");
    }
}

struct KeywordArgumentPrinter {}

impl NodePrinter<PythonAST> for KeywordArgumentPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        match node.get_str_for_key("arg") {
            Some(arg) => {
                write_token(printer, stream, arg);
                write_token(printer, stream, "=");
            }
            None => write_token(printer, stream, "**"),
        }
        print_field(printer, stream, factory, node, "value");
    }
}

struct JoinedStrPrinter {}

impl NodePrinter<PythonAST> for JoinedStrPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        let empty = vec![];
        let values = node.get_array_for_key("values").unwrap_or(&empty);
        write_token(printer, stream, &formatted_string_text(factory, values));
    }
}

/// A replacement field outside a `JoinedStr` prints as an f-string of its own.
struct FormattedValuePrinter {}

impl NodePrinter<PythonAST> for FormattedValuePrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        let text = formatted_string_text(factory, std::slice::from_ref(node));
        write_token(printer, stream, &text);
    }
}

struct ConstantPrinter {}

impl NodePrinter<PythonAST> for ConstantPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        _factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        write_token(printer, stream, &constant_text(node));
    }
}

struct AttributePrinter {}

impl NodePrinter<PythonAST> for AttributePrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        print_primary_field(printer, stream, factory, node, "value", true);
        write_token(printer, stream, ".");
        if let Some(attr) = node.get_str_for_key("attr") {
            write_token(printer, stream, attr);
        }
    }
}

struct SubscriptPrinter {}

impl SubscriptPrinter {
    /// Write the subscript of `a[...]`.  Tuples lose their parentheses there.
    fn print_slice(
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        slice: &PythonAST,
    ) {
        match slice.ast_type() {
            Some("Tuple") => match slice.get_array_for_key("elts") {
                Some(elts) if !elts.is_empty() => {
                    print_array_helper(printer, stream, factory, elts);
                    if elts.len() == 1 {
                        write_token(printer, stream, ",");
                    }
                }
                _ => write_token(printer, stream, "()"),
            },
            Some("Index") => {
                if let Some(value) = slice.get("value") {
                    SubscriptPrinter::print_slice(printer, stream, factory, value);
                }
            }
            _ => traverse_sub_node_and_print(printer, stream, factory, slice),
        }
    }
}

impl NodePrinter<PythonAST> for SubscriptPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        print_primary_field(printer, stream, factory, node, "value", false);
        write_token(printer, stream, "[");
        if let Some(slice) = node.get("slice") {
            SubscriptPrinter::print_slice(printer, stream, factory, slice);
        }
        write_token(printer, stream, "]");
    }
}

struct StarredPrinter {}

impl NodePrinter<PythonAST> for StarredPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        write_token(printer, stream, "*");
        print_operand_field(printer, stream, factory, node, "value");
    }
}

struct NamePrinter {}

impl NodePrinter<PythonAST> for NamePrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        _factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        if let Some(name) = node.get_str_for_key("id") {
            write_token(printer, stream, name);
        }
    }
}

struct SlicePrinter {}

impl NodePrinter<PythonAST> for SlicePrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        print_operand_field(printer, stream, factory, node, "lower");
        write_token(printer, stream, ":");
        print_operand_field(printer, stream, factory, node, "upper");
        if node.get("step").map_or(false, |s| s.is_object()) {
            write_token(printer, stream, ":");
            print_operand_field(printer, stream, factory, node, "step");
        }
    }
}

/// Printer for the `Index` wrapper that Python 3.8 puts around simple subscripts.
struct IndexPrinter {}

impl NodePrinter<PythonAST> for IndexPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        print_field(printer, stream, factory, node, "value");
    }
}

/// Printer for the `ExtSlice` node of Python 3.8, as in `a[1:2, 3]`.
struct ExtSlicePrinter {}

impl NodePrinter<PythonAST> for ExtSlicePrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        print_list_field(printer, stream, factory, node, "dims");
    }
}

struct ArgumentsPrinter {}

impl ArgumentsPrinter {
    fn separate(printer: &mut PrettyPrinter, stream: &mut dyn Write, first: &mut bool) {
        if !*first {
            write_token(printer, stream, ",");
            write_space(printer, stream);
        }
        *first = false;
    }

    /// Write a parameter and its default value.
    fn print_parameter(
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        arg: &PythonAST,
        default: Option<&PythonAST>,
    ) {
        traverse_sub_node_and_print(printer, stream, factory, arg);
        if let Some(default) = default.filter(|d| d.is_object()) {
            if arg.get("annotation").map_or(false, |a| a.is_object()) {
                write_token(printer, stream, " = ");
            } else {
                write_token(printer, stream, "=");
            }
            traverse_sub_node_and_print(printer, stream, factory, default);
        }
    }
}

impl NodePrinter<PythonAST> for ArgumentsPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        let empty = vec![];
        let positional_only = node.get_array_for_key("posonlyargs").unwrap_or(&empty);
        let args = node.get_array_for_key("args").unwrap_or(&empty);
        let defaults = node.get_array_for_key("defaults").unwrap_or(&empty);
        let keyword_only = node.get_array_for_key("kwonlyargs").unwrap_or(&empty);
        let keyword_defaults = node.get_array_for_key("kw_defaults").unwrap_or(&empty);

        // Defaults belong to the last positional parameters.
        let positional: Vec<&PythonAST> = positional_only.iter().chain(args.iter()).collect();
        let first_default = positional.len().saturating_sub(defaults.len());

        let mut first = true;
        for (i, arg) in positional.iter().enumerate() {
            ArgumentsPrinter::separate(printer, stream, &mut first);
            let default = i
                .checked_sub(first_default)
                .and_then(|d| defaults.get(d));
            ArgumentsPrinter::print_parameter(printer, stream, factory, arg, default);
            if i + 1 == positional_only.len() {
                ArgumentsPrinter::separate(printer, stream, &mut first);
                write_token(printer, stream, "/");
            }
        }

        match node.get("vararg") {
            Some(vararg) if vararg.is_object() => {
                ArgumentsPrinter::separate(printer, stream, &mut first);
                write_token(printer, stream, "*");
                traverse_sub_node_and_print(printer, stream, factory, vararg);
            }
            _ => {
                if !keyword_only.is_empty() {
                    ArgumentsPrinter::separate(printer, stream, &mut first);
                    write_token(printer, stream, "*");
                }
            }
        }

        for (i, arg) in keyword_only.iter().enumerate() {
            ArgumentsPrinter::separate(printer, stream, &mut first);
            ArgumentsPrinter::print_parameter(printer, stream, factory, arg, keyword_defaults.get(i));
        }

        if let Some(kwarg) = node.get("kwarg") {
            if kwarg.is_object() {
                ArgumentsPrinter::separate(printer, stream, &mut first);
                write_token(printer, stream, "**");
                traverse_sub_node_and_print(printer, stream, factory, kwarg);
            }
        }
    }
}

struct ArgPrinter {}

impl NodePrinter<PythonAST> for ArgPrinter {
    fn print_node(
        &mut self,
        printer: &mut PrettyPrinter,
        stream: &mut dyn Write,
        factory: &dyn NodePrinterFactory<PythonAST>,
        node: &PythonAST,
    ) {
        if let Some(name) = node.get_str_for_key("arg") {
            write_token(printer, stream, name);
        }
        if let Some(annotation) = node.get("annotation") {
            if annotation.is_object() {
                write_token(printer, stream, ":");
                write_space(printer, stream);
                traverse_sub_node_and_print(printer, stream, factory, annotation);
            }
        }
    }
}

/// Factory object that generates [`NodePrinter<AST>`] trait objects for [`PythonAST`] nodes.
pub struct PythonNodePrinterFactory {
    /// Printer settings.
    settings: Preferences,
}

impl PythonNodePrinterFactory {
    /// Create a new factory.
    ///
    /// # Arguments
    ///
    /// * `settings` - Printer settings such as [`ELIF_CHAINS`].
    pub fn new(settings: Preferences) -> PythonNodePrinterFactory {
        PythonNodePrinterFactory { settings }
    }

    /// Return the printer for nodes of type `ast_type`, or `None` if the type cannot be printed.
    ///
    /// # Arguments
    ///
    /// * `ast_type` - The node class name.
    pub fn printer_for_type(&self, ast_type: &str) -> Option<Box<dyn NodePrinter<PythonAST>>> {
        let printer: Box<dyn NodePrinter<PythonAST>> = match ast_type {
            "Module" => Box::new(ModulePrinter {}),
            "FunctionDef" => Box::new(FunctionDefPrinter { is_async: false }),
            "AsyncFunctionDef" => Box::new(FunctionDefPrinter { is_async: true }),
            "ClassDef" => Box::new(ClassDefPrinter {}),
            "Return" => Box::new(KeywordValuePrinter { keyword: "return" }),
            "Delete" => Box::new(DeletePrinter {}),
            "Assign" => Box::new(AssignPrinter {}),
            "AugAssign" => Box::new(AugAssignPrinter {}),
            "AnnAssign" => Box::new(AnnAssignPrinter {}),
            "For" => Box::new(ForPrinter { is_async: false }),
            "AsyncFor" => Box::new(ForPrinter { is_async: true }),
            "While" => Box::new(WhilePrinter {}),
            "If" => Box::new(IfPrinter {
                use_elif: <PythonNodePrinterFactory as NodePrinterFactory<PythonAST>>::get_preference_value_for_key(
                    self,
                    ELIF_CHAINS,
                ),
            }),
            "With" => Box::new(WithPrinter { is_async: false }),
            "AsyncWith" => Box::new(WithPrinter { is_async: true }),
            "withitem" => Box::new(WithItemPrinter {}),
            "Raise" => Box::new(RaisePrinter {}),
            "Try" => Box::new(TryPrinter {
                handler_keyword: "except",
            }),
            "TryStar" => Box::new(TryPrinter {
                handler_keyword: "except*",
            }),
            "ExceptHandler" => Box::new(ExceptHandlerPrinter { keyword: "except" }),
            "Assert" => Box::new(AssertPrinter {}),
            "Import" => Box::new(ImportPrinter {}),
            "ImportFrom" => Box::new(ImportFromPrinter {}),
            "alias" => Box::new(AliasPrinter {}),
            "Global" => Box::new(NamesStatementPrinter { keyword: "global" }),
            "Nonlocal" => Box::new(NamesStatementPrinter {
                keyword: "nonlocal",
            }),
            "Expr" => Box::new(ExprPrinter {}),
            "Pass" => Box::new(KeywordPrinter { keyword: "pass" }),
            "Break" => Box::new(KeywordPrinter { keyword: "break" }),
            "Continue" => Box::new(KeywordPrinter {
                keyword: "continue",
            }),
            "BoolOp" => Box::new(BoolOpPrinter {}),
            "NamedExpr" => Box::new(NamedExprPrinter {}),
            "BinOp" => Box::new(BinOpPrinter {}),
            "UnaryOp" => Box::new(UnaryOpPrinter {}),
            "Lambda" => Box::new(LambdaPrinter {}),
            "IfExp" => Box::new(IfExpPrinter {}),
            "Dict" => Box::new(DictPrinter {}),
            "Set" => Box::new(SequencePrinter {
                open: "{",
                close: "}",
                is_tuple: false,
            }),
            "List" => Box::new(SequencePrinter {
                open: "[",
                close: "]",
                is_tuple: false,
            }),
            "Tuple" => Box::new(SequencePrinter {
                open: "(",
                close: ")",
                is_tuple: true,
            }),
            "ListComp" => Box::new(ComprehensionPrinter {
                open: "[",
                close: "]",
            }),
            "SetComp" | "DictComp" => Box::new(ComprehensionPrinter {
                open: "{",
                close: "}",
            }),
            "GeneratorExp" => Box::new(ComprehensionPrinter {
                open: "(",
                close: ")",
            }),
            "comprehension" => Box::new(ComprehensionClausePrinter {}),
            "Await" => Box::new(AwaitPrinter {}),
            "Yield" => Box::new(YieldPrinter { keyword: "yield" }),
            "YieldFrom" => Box::new(YieldPrinter {
                keyword: "yield from",
            }),
            "Compare" => Box::new(ComparePrinter {}),
            "Call" => Box::new(CallPrinter {}),
            "keyword" => Box::new(KeywordArgumentPrinter {}),
            "JoinedStr" => Box::new(JoinedStrPrinter {}),
            "FormattedValue" => Box::new(FormattedValuePrinter {}),
            "Constant" => Box::new(ConstantPrinter {}),
            "Attribute" => Box::new(AttributePrinter {}),
            "Subscript" => Box::new(SubscriptPrinter {}),
            "Starred" => Box::new(StarredPrinter {}),
            "Name" => Box::new(NamePrinter {}),
            "Slice" => Box::new(SlicePrinter {}),
            "Index" => Box::new(IndexPrinter {}),
            "ExtSlice" => Box::new(ExtSlicePrinter {}),
            "arguments" => Box::new(ArgumentsPrinter {}),
            "arg" => Box::new(ArgPrinter {}),
            _ => return None,
        };
        Some(printer)
    }
}

impl Default for PythonNodePrinterFactory {
    fn default() -> Self {
        let mut settings = Preferences::new();
        settings.set_value_for_key(ELIF_CHAINS, PreferenceValue::Boolean(true));
        PythonNodePrinterFactory::new(settings)
    }
}

impl NodePrinterFactory<PythonAST> for PythonNodePrinterFactory {
    fn printer_for(&self, node: &PythonAST) -> Box<dyn NodePrinter<PythonAST>> {
        node.ast_type()
            .and_then(|t| self.printer_for_type(t))
            .unwrap_or_else(|| Box::new(DummyNodePrinter {}))
    }

    fn get_settings(&self) -> &Preferences {
        &self.settings
    }
}
