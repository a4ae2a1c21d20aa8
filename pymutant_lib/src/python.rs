//! The `python` module contains all the Python language specific implementation details.

pub mod ast;
mod language_interface;
mod mutators;
mod node_finder;
pub mod parser;
pub mod pretty_printer;
#[cfg(test)]
pub(crate) mod sample_trees;

pub use language_interface::PythonLanguageInterface;
pub use mutators::PythonMutatorFactory;
