//! The `recognizer` module provides [`Recognizer`], which classifies an input file as Python
//! source, a JSON syntax tree or a configuration file.

use crate::config_file::CONFIG_FILE_EXTENSION;
use crate::error::PyMutantError;
use crate::language_interface::MutableLanguage;
use std::path::Path;

/// The kinds of input file the tool accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// A Python program.
    Source,
    /// A syntax tree in the interpreter's JSON format.
    AST,
    /// A `.pmt` configuration file.
    Config,
}

/// Object that recognizes input files.
pub struct Recognizer<'a> {
    language: &'a dyn MutableLanguage,
}

impl<'a> Recognizer<'a> {
    /// Create a new recognizer.
    ///
    /// # Arguments
    ///
    /// * `language` - The language object that knows the source extension and tree format.
    pub fn new(language: &'a dyn MutableLanguage) -> Recognizer<'a> {
        Recognizer { language }
    }

    /// Return the type of the file at `file_name`.
    ///
    /// # Arguments
    ///
    /// * `file_name` - The path of the file.
    ///
    /// # Errors
    ///
    /// Returns [`PyMutantError::LanguageNotRecognized`] for anything else.
    pub fn recognize_file(&self, file_name: &str) -> Result<FileType, PyMutantError> {
        let is_config = Path::new(file_name)
            .extension()
            .map_or(false, |e| e == CONFIG_FILE_EXTENSION);
        if is_config {
            return Ok(FileType::Config);
        }

        if self.language.file_is_language_source_file(file_name) {
            return Ok(FileType::Source);
        }

        if self.language.file_is_language_ast_file(file_name) {
            return Ok(FileType::AST);
        }

        Err(PyMutantError::LanguageNotRecognized(String::from(file_name)))
    }
}
