//! The `language_interface` module provides abstractions to interact with a programming language
//! module for the purpose of generating mutations.  The programming language abstraction
//! provides common APIs that a programming language module can implement and thereby plug-in
//! to the library.

use crate::error::PyMutantError;
use crate::mutation::MutationType;
use crate::mutation_visitor::CandidateSite;
use crate::mutator_result::MutatorResult;
use crate::preferences::Preferences;
use crate::pretty_printer::PrettyPrinter;
use crate::python::PythonLanguageInterface;
use crate::recognizer::FileType;
use serde_json::Value;
use std::io::Write;

/// The result of [`MutableLanguage::mutate_ast`].
#[derive(Debug, Clone)]
pub struct MutateASTResult {
    /// The tree after the mutation pass.  It is unchanged when no site was rewritten.
    pub ast: Value,

    /// Details of the rewrite, or `None` when no node was rewritten.
    pub mutator_result: Option<MutatorResult>,
}

impl MutateASTResult {
    /// Return true if the pass rewrote a node.
    pub fn mutated(&self) -> bool {
        self.mutator_result.is_some()
    }
}

/// Trait that defines the interface to a programming language module.
pub trait MutableLanguage {
    /// Load a syntax tree from `file_name`.
    ///
    /// The file may contain source code or a syntax tree.
    ///
    /// # Arguments
    ///
    /// * `file_name` - The string slice referencing the text containing the file name.
    /// * `file_type` - The type of the file.
    /// * `prefs` - The [`Preferences`] object.
    fn load_ast_from_file(
        &mut self,
        file_name: &str,
        file_type: &FileType,
        prefs: &Preferences,
    ) -> Result<Value, PyMutantError>;

    /// Load a syntax tree from the contents of a file that the caller has already read.
    ///
    /// # Arguments
    ///
    /// * `text` - The contents of the file.
    /// * `file_name` - The name of the file, for error messages.
    /// * `file_type` - The type of the file.
    /// * `prefs` - The [`Preferences`] object.
    fn load_ast_from_text(
        &mut self,
        text: &[u8],
        file_name: &str,
        file_type: &FileType,
        prefs: &Preferences,
    ) -> Result<Value, PyMutantError>;

    /// Choose the mutation algorithms whose eligible nodes become candidate sites.
    ///
    /// # Arguments
    ///
    /// * `mutation_types` - The requested mutation algorithms.
    fn select_mutators_for_mutation_types(
        &mut self,
        mutation_types: &[MutationType],
    ) -> Result<(), PyMutantError>;

    /// Traverse `ast` once and return every candidate site, in traversal order.  The tree is not
    /// modified.
    ///
    /// # Arguments
    ///
    /// * `ast` - The syntax tree.
    fn enumerate_candidate_sites(&mut self, ast: &Value) -> Result<Vec<CandidateSite>, PyMutantError>;

    /// Traverse `ast` and rewrite the node at `site`.
    ///
    /// The function takes ownership of a freshly loaded tree so the mutant shares nothing with
    /// any other tree.  A site that is out of range or that names a node of another kind leaves
    /// the tree unchanged and the result reports `mutated() == false`.
    ///
    /// # Arguments
    ///
    /// * `ast` - The syntax tree to mutate.
    /// * `site` - The site to rewrite.
    ///
    /// # Errors
    ///
    /// Returns [`PyMutantError::SiteDiverged`] when the node reached at the site identity is
    /// not the node recorded for the site.
    fn mutate_ast(
        &mut self,
        ast: Value,
        site: &CandidateSite,
    ) -> Result<MutateASTResult, PyMutantError>;

    /// Return an error naming the first node of `ast` the printer cannot write.  Every mutant of
    /// such a tree fails to print.
    ///
    /// # Arguments
    ///
    /// * `ast` - The syntax tree.
    fn check_ast_is_printable(&self, ast: &Value) -> Result<(), PyMutantError>;

    /// Pretty-print the contents of `ast` to the file named in `file_name`.  No file is written
    /// if the tree cannot be printed.
    ///
    /// # Arguments
    ///
    /// * `ast` - The syntax tree.
    /// * `file_name` - The path of the output file.
    /// * `pretty_printer` - the [`PrettyPrinter`] object used to help write structured output.
    fn pretty_print_ast_to_file(
        &mut self,
        ast: &Value,
        file_name: &str,
        pretty_printer: &mut PrettyPrinter,
    ) -> Result<(), PyMutantError>;

    /// Pretty-print the contents of `ast` to `stream`.
    ///
    /// # Arguments
    ///
    /// * `ast` - The syntax tree.
    /// * `stream` - The [`Write`] object that will receive the printed output.
    /// * `pretty_printer` - the [`PrettyPrinter`] object used to help write structured output to
    /// `stream`.
    fn pretty_print_ast_to_stream(
        &mut self,
        ast: &Value,
        stream: &mut dyn Write,
        pretty_printer: &mut PrettyPrinter,
    ) -> Result<(), PyMutantError>;

    /// Return the file extension for printed output files.
    fn get_extension_for_output_file(&self) -> &str;

    /// Check that `file_name` names a source file of the language.
    ///
    /// # Arguments
    ///
    /// * `file_name` - The path of the file.
    fn file_is_language_source_file(&self, file_name: &str) -> bool;

    /// Check that the contents of the file named by `file_name` contain a syntax tree of the
    /// language.
    ///
    /// # Arguments
    ///
    /// * `file_name` - The path of the file.
    fn file_is_language_ast_file(&self, file_name: &str) -> bool;

    /// Return a [`Preferences`] object containing default interpreter settings for the language.
    fn default_interpreter_settings(&self) -> Preferences;
}

/// The LanguageInterface type provides the object that conforms to the [`MutableLanguage`]
/// trait.
pub struct LanguageInterface {}

impl LanguageInterface {
    /// Return a dynamic object that conforms to the [`MutableLanguage`] trait for Python.
    pub fn get_language_object() -> Box<dyn MutableLanguage> {
        Box::new(PythonLanguageInterface::new())
    }
}
