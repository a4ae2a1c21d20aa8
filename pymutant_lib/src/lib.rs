//! # PyMutant Lib
//!
//! `pymutant_lib` provides an API that an application can use to generate mutants of Python
//! programs.  A mutant is a copy of the program with exactly one syntax tree node rewritten.
//!
//! ## PyMutant Lib Design
//!
//! `pymutant_lib` provides interfaces that allow the library user to accomplish the following:
//! - Recognize a Python source file, a JSON syntax tree file or a configuration file.
//! - Enumerate the candidate sites of a syntax tree for the selected mutation algorithms.
//! - Select a deterministic, seeded plan of sites.
//! - Rewrite one site per fresh copy of the tree and print each mutant back to Python source.

pub use self::emitter::MutantEmitter;
pub use self::error::PyMutantError;
pub use self::language_interface::LanguageInterface;
pub use self::language_interface::MutableLanguage;
pub use self::mutation::MutationType;
pub use self::mutation_visitor::CandidateSite;
pub use self::planner::{MutationPlan, PlannerSettings};
pub use self::pretty_printer::PrettyPrinter;
pub use self::recognizer::Recognizer;

mod ast;
pub mod config_file;
pub mod emitter;
pub mod error;
mod id;
mod json;
mod json_ast;
pub mod interpreter_details;
pub mod language_interface;
pub mod mutation;
pub mod mutation_visitor;
mod mutator;
pub mod mutator_result;
mod node_printer;
mod node_printer_helpers;
mod operators;
pub mod planner;
pub mod preferences;
mod pretty_print_visitor;
pub mod pretty_printer;
pub mod python;
pub mod recognizer;
pub mod string;
mod utility;
mod visitor;
