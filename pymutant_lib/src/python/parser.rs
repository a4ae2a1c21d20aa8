//! The `python::parser` module turns Python source text into a [`PythonAST`] by running the
//! Python interpreter's own `ast` module.
//!
//! The interpreter runs an embedded dump script that reads the program from standard input and
//! writes the JSON form of the tree to standard output.

use crate::error::PyMutantError;
use crate::python::ast::{is_python_module, PythonAST};
use crate::utility::{shell_execute, shell_execute_with_input};
use std::io::ErrorKind;

/// The script the interpreter runs to dump a syntax tree as JSON.
///
/// Nodes are numbered in pre-order.  `Constant` values that JSON cannot hold (bytes, complex
/// numbers, big integers, non-finite floats, `...`) are written as `null`; `repr` always holds
/// the literal text.
static PYTHON_AST_DUMP_SCRIPT: &str = r#"
import ast
import json
import math
import sys

def literal_text(value):
    if value is Ellipsis:
        return "..."
    if isinstance(value, float) and math.isinf(value):
        return "1e309" if value > 0 else "-1e309"
    if isinstance(value, complex) and not math.isfinite(value.imag):
        return "1e309j"
    return repr(value)

def literal_value(value):
    if value is None or isinstance(value, (bool, str)):
        return value
    if isinstance(value, int):
        return value if -(2 ** 63) <= value < 2 ** 63 else None
    if isinstance(value, float) and math.isfinite(value):
        return value
    return None

def convert(node, counter):
    if isinstance(node, ast.AST):
        result = {"ast_type": type(node).__name__, "node_id": counter[0]}
        counter[0] += 1
        for field in node._fields:
            value = getattr(node, field, None)
            if isinstance(node, ast.Constant) and field == "value":
                result["value"] = literal_value(value)
                result["repr"] = literal_text(value)
            else:
                result[field] = convert(value, counter)
        return result
    if isinstance(node, list):
        return [convert(item, counter) for item in node]
    return node

source = sys.stdin.buffer.read()
try:
    tree = ast.parse(source)
except (SyntaxError, ValueError) as error:
    sys.stderr.write(str(error) + "\n")
    sys.exit(1)
json.dump(convert(tree, [0]), sys.stdout)
"#;

/// Map a failure to start the interpreter onto the library error.
fn interpreter_error(interpreter: &str, error: PyMutantError) -> PyMutantError {
    match error {
        PyMutantError::IO(e) if e.kind() == ErrorKind::NotFound => {
            PyMutantError::InterpreterNotFound(String::from(interpreter))
        }
        PyMutantError::IO(e) if e.kind() == ErrorKind::PermissionDenied => {
            PyMutantError::InterpreterNotFound(String::from(interpreter))
        }
        other => other,
    }
}

/// Parse `source` with `interpreter` and return the syntax tree.
///
/// # Arguments
///
/// * `source` - The program text.
/// * `file_name` - The name to use for the program in error messages.
/// * `interpreter` - The Python interpreter to run.
///
/// # Errors
///
/// Returns [`PyMutantError::InterpreterNotFound`] when the interpreter cannot be started and
/// [`PyMutantError::SourceDoesNotParse`] when the program has a syntax error.
pub fn parse_python_source(
    source: &[u8],
    file_name: &str,
    interpreter: &str,
) -> Result<PythonAST, PyMutantError> {
    let args = vec![String::from("-c"), String::from(PYTHON_AST_DUMP_SCRIPT)];

    log::debug!("Parsing {} with Python interpreter {}", file_name, interpreter);

    let output = shell_execute_with_input(interpreter, &args, source)
        .map_err(|e| interpreter_error(interpreter, e))?;

    if !output.status.success() {
        let message = String::from_utf8_lossy(&output.stderr).trim().to_string();
        log::debug!("Parsing {} failed: {}", file_name, message);
        return Err(PyMutantError::SourceDoesNotParse(
            String::from(file_name),
            message,
        ));
    }

    let ast: PythonAST = serde_json::from_slice(&output.stdout)?;
    if !is_python_module(&ast) {
        return Err(PyMutantError::UnrecognizedJSON(format!(
            "{file_name}: interpreter output is not a module"
        )));
    }

    Ok(ast)
}

/// Return the version string the interpreter reports, for example `Python 3.11.7`.
///
/// # Arguments
///
/// * `interpreter` - The Python interpreter to run.
pub fn interpreter_version(interpreter: &str) -> Result<String, PyMutantError> {
    let output = shell_execute(interpreter, &[String::from("--version")])
        .map_err(|e| interpreter_error(interpreter, e))?;
    if !output.status.success() {
        return Err(PyMutantError::InterpreterNotFound(String::from(interpreter)));
    }

    // Python 2 printed the version on stderr.
    let text = if output.stdout.is_empty() {
        output.stderr
    } else {
        output.stdout
    };
    Ok(String::from_utf8_lossy(&text).trim().to_string())
}

/// Return true if `python3` can be run.  Tests that need the interpreter return early without it.
#[cfg(test)]
pub(crate) fn python_is_available() -> bool {
    match interpreter_version("python3") {
        Ok(version) => version.starts_with("Python 3"),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::JSONMutate;
    use crate::python::ast::PythonNode;

    #[test]
    fn test_parse_scenario_source() {
        if !python_is_available() {
            return;
        }

        let ast = parse_python_source(b"x = 1\nif x > 0:\n    y = x + 1\n", "scenario.py", "python3")
            .unwrap();
        assert_eq!(ast.ast_type(), Some("Module"));
        assert_eq!(ast.node_id(), Some(0));

        let body = ast.get_array_for_key("body").unwrap();
        assert_eq!(body.len(), 2);
        assert_eq!(body[0].ast_type(), Some("Assign"));
        assert_eq!(body[0].node_id(), Some(1));
        assert_eq!(body[1].ast_type(), Some("If"));
        assert_eq!(body[1].node_id(), Some(5));

        let constant = &body[0]["value"];
        assert_eq!(constant.get_str_for_key("repr"), Some("1"));
        assert_eq!(constant.get_int_for_key("value"), Some(1));

        let bin_op = &body[1]["body"][0]["value"];
        assert_eq!(bin_op.ast_type(), Some("BinOp"));
        assert_eq!(bin_op.node_id(), Some(14));
        assert_eq!(bin_op["op"].ast_type(), Some("Add"));
    }

    #[test]
    fn test_constant_literal_text() {
        if !python_is_available() {
            return;
        }

        let ast = parse_python_source(b"a = (b'x', 1e400, ..., 10 ** 30, 'q')\n", "c.py", "python3")
            .unwrap();
        let elts = ast["body"][0]["value"].get_array_for_key("elts").unwrap();
        assert_eq!(elts[0].get_str_for_key("repr"), Some("b'x'"));
        assert!(elts[0]["value"].is_null());
        assert_eq!(elts[1].get_str_for_key("repr"), Some("1e309"));
        assert_eq!(elts[2].get_str_for_key("repr"), Some("..."));
        assert_eq!(elts[4].get_str_for_key("value"), Some("q"));
    }

    #[test]
    fn test_syntax_error_does_not_parse() {
        if !python_is_available() {
            return;
        }

        match parse_python_source(b"def f(:\n", "broken.py", "python3") {
            Err(PyMutantError::SourceDoesNotParse(file, message)) => {
                assert_eq!(file, "broken.py");
                assert!(!message.is_empty());
            }
            other => panic!("expected a parse failure, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_interpreter() {
        match parse_python_source(b"x = 1\n", "a.py", "pymutant-no-such-python") {
            Err(PyMutantError::InterpreterNotFound(name)) => {
                assert_eq!(name, "pymutant-no-such-python")
            }
            other => panic!("expected a missing interpreter, got {other:?}"),
        }
        assert!(matches!(
            interpreter_version("pymutant-no-such-python"),
            Err(PyMutantError::InterpreterNotFound(_))
        ));
    }
}
