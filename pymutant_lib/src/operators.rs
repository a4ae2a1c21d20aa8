//! The `operators` module holds the fixed rewrite catalog: for every [`MutationType`] the
//! [`Rewrite`] a mutator applies, including the operator-flip pairs, and the table that maps
//! Python operator node names to source tokens.

use crate::mutation::MutationType;

/// The rewrite a mutation type applies to the node it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rewrite {
    /// Replace the assigned value with `None`.
    NullValue,
    /// Swap the operator with its partner in the pair list.  Each pair works in both directions.
    FlipOperator(&'static [(&'static str, &'static str)]),
    /// Replace the test expression with the given boolean constant.
    ForceTest(bool),
}

static BINARY_OPERATOR_FLIPS: &[(&str, &str)] = &[("Add", "Sub"), ("Mult", "Div")];

static BOOLEAN_OPERATOR_FLIPS: &[(&str, &str)] = &[("And", "Or")];

static COMPARISON_OPERATOR_FLIPS: &[(&str, &str)] = &[
    ("Eq", "NotEq"),
    ("Lt", "GtE"),
    ("LtE", "Gt"),
    ("In", "NotIn"),
    ("Is", "IsNot"),
];

/// Python `ast` operator class names and the source text for each.
static PYTHON_OPERATOR_TOKENS: &[(&str, &str)] = &[
    ("Add", "+"),
    ("Sub", "-"),
    ("Mult", "*"),
    ("MatMult", "@"),
    ("Div", "/"),
    ("FloorDiv", "//"),
    ("Mod", "%"),
    ("Pow", "**"),
    ("LShift", "<<"),
    ("RShift", ">>"),
    ("BitOr", "|"),
    ("BitXor", "^"),
    ("BitAnd", "&"),
    ("And", "and"),
    ("Or", "or"),
    ("Eq", "=="),
    ("NotEq", "!="),
    ("Lt", "<"),
    ("LtE", "<="),
    ("Gt", ">"),
    ("GtE", ">="),
    ("Is", "is"),
    ("IsNot", "is not"),
    ("In", "in"),
    ("NotIn", "not in"),
    ("Invert", "~"),
    ("Not", "not"),
    ("UAdd", "+"),
    ("USub", "-"),
];

/// Return the rewrite that `mutation_type` performs.
///
/// # Arguments
///
/// * `mutation_type` - The mutation type.
pub fn rewrite_for(mutation_type: &MutationType) -> Rewrite {
    match mutation_type {
        MutationType::Assignment => Rewrite::NullValue,
        MutationType::BinaryOp => Rewrite::FlipOperator(BINARY_OPERATOR_FLIPS),
        MutationType::BooleanOp => Rewrite::FlipOperator(BOOLEAN_OPERATOR_FLIPS),
        MutationType::Comparison => Rewrite::FlipOperator(COMPARISON_OPERATOR_FLIPS),
        MutationType::IfStatement => Rewrite::ForceTest(true),
        MutationType::WhileStatement => Rewrite::ForceTest(false),
    }
}

/// Return the partner of `operator` in `pairs`, looking in both directions.
///
/// # Arguments
///
/// * `pairs` - The flip pairs for a mutation type.
/// * `operator` - The Python operator class name, for example `Add`.
pub fn flip_operator(
    pairs: &[(&'static str, &'static str)],
    operator: &str,
) -> Option<&'static str> {
    pairs.iter().find_map(|(a, b)| {
        if *a == operator {
            Some(*b)
        } else if *b == operator {
            Some(*a)
        } else {
            None
        }
    })
}

/// Return the source token for a Python operator class name.
///
/// # Arguments
///
/// * `operator` - The operator class name, for example `NotIn`.
pub fn python_operator_token(operator: &str) -> Option<&'static str> {
    PYTHON_OPERATOR_TOKENS
        .iter()
        .find(|(name, _)| *name == operator)
        .map(|(_, token)| *token)
}

/// Return the source tokens of every operator that `mutation_type` can rewrite.
///
/// # Arguments
///
/// * `mutation_type` - The mutation type.
pub fn operator_tokens_for(mutation_type: &MutationType) -> Vec<&'static str> {
    match rewrite_for(mutation_type) {
        Rewrite::FlipOperator(pairs) => pairs
            .iter()
            .flat_map(|(a, b)| [*a, *b])
            .filter_map(python_operator_token)
            .collect(),
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutation::get_all_mutation_algorithms;

    #[test]
    fn test_flips_are_involutions() {
        for mutation_type in get_all_mutation_algorithms() {
            if let Rewrite::FlipOperator(pairs) = rewrite_for(&mutation_type) {
                for (a, b) in pairs {
                    assert_eq!(flip_operator(pairs, a), Some(*b));
                    assert_eq!(flip_operator(pairs, b), Some(*a));
                    let once = flip_operator(pairs, a).unwrap();
                    assert_eq!(flip_operator(pairs, once), Some(*a));
                }
            }
        }
    }

    #[test]
    fn test_flip_operator_outside_table() {
        assert_eq!(flip_operator(BINARY_OPERATOR_FLIPS, "Mod"), None);
        assert_eq!(flip_operator(BINARY_OPERATOR_FLIPS, "Pow"), None);
        assert_eq!(flip_operator(COMPARISON_OPERATOR_FLIPS, "Add"), None);
    }

    #[test]
    fn test_comparison_pairs() {
        let pairs = match rewrite_for(&MutationType::Comparison) {
            Rewrite::FlipOperator(p) => p,
            other => panic!("unexpected rewrite {other:?}"),
        };
        assert_eq!(flip_operator(pairs, "Gt"), Some("LtE"));
        assert_eq!(flip_operator(pairs, "GtE"), Some("Lt"));
        assert_eq!(flip_operator(pairs, "NotIn"), Some("In"));
        assert_eq!(flip_operator(pairs, "IsNot"), Some("Is"));
    }

    #[test]
    fn test_condition_rewrites() {
        assert_eq!(
            rewrite_for(&MutationType::IfStatement),
            Rewrite::ForceTest(true)
        );
        assert_eq!(
            rewrite_for(&MutationType::WhileStatement),
            Rewrite::ForceTest(false)
        );
        assert_eq!(rewrite_for(&MutationType::Assignment), Rewrite::NullValue);
    }

    #[test]
    fn test_every_flippable_operator_has_a_token() {
        for mutation_type in get_all_mutation_algorithms() {
            if let Rewrite::FlipOperator(pairs) = rewrite_for(&mutation_type) {
                assert_eq!(operator_tokens_for(&mutation_type).len(), pairs.len() * 2);
            }
        }
        assert_eq!(python_operator_token("NotIn"), Some("not in"));
        assert_eq!(python_operator_token("FloorDiv"), Some("//"));
        assert_eq!(python_operator_token("Walrus"), None);
    }
}
