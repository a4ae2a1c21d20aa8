//! The `mutation` module contains the enumeration of the mutation algorithms supported by the
//! library and the descriptions the command line tool displays for them.

use crate::error::PyMutantError;
use crate::operators::operator_tokens_for;
use std::collections::HashMap;
use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;

/// The kinds of syntax tree nodes the engine monitors, one variant per mutation algorithm.
#[derive(Hash, Eq, PartialEq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum MutationType {
    /// Replace the value of an assignment with `None`.
    ///
    /// # Examples
    ///
    /// `a = b + 10` becomes `a = None`.
    ///
    /// `a += 1` becomes `a = None`.
    Assignment,

    /// Swap the arithmetic operator of a binary expression.
    ///
    /// # Operators
    ///
    /// `+` and `-` swap, as do `*` and `/`.
    BinaryOp,

    /// Swap `and` and `or` in a boolean expression.
    BooleanOp,

    /// Negate the first operator of a comparison.
    ///
    /// # Operators
    ///
    /// `==`/`!=`, `<`/`>=`, `<=`/`>`, `in`/`not in` and `is`/`is not`.
    Comparison,

    /// Force the test of an `if` statement to `True`.
    IfStatement,

    /// Force the test of a `while` statement to `False`.
    WhileStatement,
}

/// Provide the ability to convert a string value into a [`MutationType`] enum.
impl FromStr for MutationType {
    type Err = PyMutantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Assignment" => Ok(MutationType::Assignment),
            "BinaryOp" => Ok(MutationType::BinaryOp),
            "BooleanOp" => Ok(MutationType::BooleanOp),
            "Comparison" => Ok(MutationType::Comparison),
            "IfStatement" => Ok(MutationType::IfStatement),
            "WhileStatement" => Ok(MutationType::WhileStatement),
            _last => Err(PyMutantError::MutationAlgorithmNotSupported(String::from(
                _last,
            ))),
        }
    }
}

impl fmt::Display for MutationType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let text = match self {
            MutationType::Assignment => "Assignment",
            MutationType::BinaryOp => "BinaryOp",
            MutationType::BooleanOp => "BooleanOp",
            MutationType::Comparison => "Comparison",
            MutationType::IfStatement => "IfStatement",
            MutationType::WhileStatement => "WhileStatement",
        };

        write!(f, "{}", text)
    }
}

/// Return a list of all the available mutation algorithms, sorted by name.
pub fn get_all_mutation_algorithms() -> Vec<MutationType> {
    let mut algorithms: Vec<MutationType> = all_algorithm_descriptions().into_keys().collect();

    algorithms.sort_unstable_by_key(|a| a.to_string());

    algorithms
}

/// Type that holds the description of a mutation algorithm.
pub struct MutationAlgorithmDescription {
    /// The basic summary of the algorithm.
    pub summary: &'static str,
    /// Extra useful details about the algorithm.
    pub extra_details: &'static str,
    /// A list of operators the algorithm may affect.
    pub operators: Vec<&'static str>,
    /// Examples of algorithm behavior.
    pub examples: &'static str,
}

/// Return a map of mutation types to the mutation algorithm descriptions.
pub fn all_algorithm_descriptions() -> HashMap<MutationType, MutationAlgorithmDescription> {
    let mut algorithm_map: HashMap<MutationType, MutationAlgorithmDescription> = HashMap::new();

    algorithm_map.insert(
        MutationType::Assignment,
        MutationAlgorithmDescription {
            summary: "Replace the value of an assignment statement with None.",
            extra_details: "Plain assignments keep their targets and receive None as the \
            value. Augmented assignments become plain assignments of None to the same target.",
            operators: vec![],
            examples: "a = b + 10 becomes a = None, a += 1 becomes a = None",
        },
    );

    algorithm_map.insert(
        MutationType::BinaryOp,
        MutationAlgorithmDescription {
            summary: "Swap the arithmetic operator in a binary expression.",
            extra_details: "Addition and subtraction swap, as do multiplication and division. \
            Binary expressions with other operators are counted but never mutated.",
            operators: operator_tokens_for(&MutationType::BinaryOp),
            examples: "a + b becomes a - b, a / b becomes a * b",
        },
    );

    algorithm_map.insert(
        MutationType::BooleanOp,
        MutationAlgorithmDescription {
            summary: "Swap the operator of a boolean expression.",
            extra_details: "The operator applies to every operand of the expression, so a \
            chain such as a and b and c becomes a or b or c.",
            operators: operator_tokens_for(&MutationType::BooleanOp),
            examples: "a and b becomes a or b",
        },
    );

    algorithm_map.insert(
        MutationType::Comparison,
        MutationAlgorithmDescription {
            summary: "Replace the operator of a comparison with its negation.",
            extra_details: "Only the first operator of a chained comparison is inspected and \
            replaced.",
            operators: operator_tokens_for(&MutationType::Comparison),
            examples: "a < b becomes a >= b, a in b becomes a not in b",
        },
    );

    algorithm_map.insert(
        MutationType::IfStatement,
        MutationAlgorithmDescription {
            summary: "Replace the test of an if statement with True.",
            extra_details: "The body of the statement always runs and any else branch never \
            runs. elif branches are if statements of their own.",
            operators: vec![],
            examples: "if a > b: becomes if True:",
        },
    );

    algorithm_map.insert(
        MutationType::WhileStatement,
        MutationAlgorithmDescription {
            summary: "Replace the test of a while loop with False.",
            extra_details: "The loop body never runs and any else branch always runs.",
            operators: vec![],
            examples: "while a < b: becomes while False:",
        },
    );

    algorithm_map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_type_names_round_trip() {
        for mutation_type in get_all_mutation_algorithms() {
            let name = mutation_type.to_string();
            assert_eq!(MutationType::from_str(&name).unwrap(), mutation_type);
        }
    }

    #[test]
    fn test_unknown_mutation_type() {
        match MutationType::from_str("Integer") {
            Err(PyMutantError::MutationAlgorithmNotSupported(name)) => {
                assert_eq!(name, "Integer")
            }
            _ => panic!("Integer should not be a supported mutation algorithm"),
        }
    }

    #[test]
    fn test_all_mutation_algorithms_sorted() {
        let names: Vec<String> = get_all_mutation_algorithms()
            .iter()
            .map(|m| m.to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "Assignment",
                "BinaryOp",
                "BooleanOp",
                "Comparison",
                "IfStatement",
                "WhileStatement"
            ]
        );
    }

    #[test]
    fn test_descriptions_list_operators() {
        let descriptions = all_algorithm_descriptions();
        assert_eq!(
            descriptions[&MutationType::BinaryOp].operators,
            vec!["+", "-", "*", "/"]
        );
        assert!(descriptions[&MutationType::Comparison]
            .operators
            .contains(&"not in"));
        assert!(descriptions[&MutationType::IfStatement].operators.is_empty());
    }
}
