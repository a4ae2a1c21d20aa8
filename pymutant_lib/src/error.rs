//! The `error` module contains `PyMutantError`, the error enumeration used to communicate
//! library errors.

use std::convert::From;
use thiserror::Error;

/// The list of errors that the library can generate.
#[derive(Error, Debug)]
pub enum PyMutantError {
    #[error("IO error: {0}")]
    IO(std::io::Error),

    /// An error indicating that JSON parsing failed.
    #[error("JSON error occurred: {0}")]
    JSON(serde_json::Error),

    /// An error indicating the tool found an unrecognized JSON element.
    #[error("Unrecognized JSON element: {0}")]
    UnrecognizedJSON(String),

    /// An error indicating that the syntax tree contains a node type that the pretty-printer
    /// cannot turn back into source text.
    #[error("Syntax tree contains unsupported node type {0}")]
    UnsupportedNode(String),

    /// An error indicating that the source file did not parse.
    #[error("Source file {0} would not parse: {1}")]
    SourceDoesNotParse(String, String),

    /// An error indicating that the Python interpreter could not be started.
    #[error("Unable to run Python interpreter {0}")]
    InterpreterNotFound(String),

    /// An error indicating a function tried to operate on a file whose type the tool does not
    /// recognize.
    #[error("Unable to determine the type of input file {0}")]
    LanguageNotRecognized(String),

    /// An error indicating that the tool does not implement a mutation algorithm.
    #[error("Mutation algorithm not supported: {0}")]
    MutationAlgorithmNotSupported(String),

    /// An error indicating that the node reached at a site identity is not the node recorded
    /// for that identity when the sites were enumerated.
    #[error("Site {0} diverged: expected node id {1}, found node id {2}")]
    SiteDiverged(usize, u64, u64),

    /// An error indicating that the traversal finished without rewriting the requested site.
    #[error("Site {0} was not reached or could not be rewritten")]
    SiteNotReached(usize),

    /// An error indicating that the tool received a config file that it does not support or
    /// cannot support in the current function.
    #[error("Configuration file {0} not supported")]
    ConfigFileNotSupported(String),

    /// An error indicating that the tool received a configuration file that does not have the
    /// correct file extension.
    #[error("Configuration file {0} does not have the correct extension")]
    ConfigFileBadExtension(String),

    /// An error indicating that configuration file keys are missing.
    #[error("Configuration file {0} does not have keys: {1:?}")]
    ConfigFileMissingRequiredKey(String, Vec<String>),
}

impl From<std::io::Error> for PyMutantError {
    fn from(e: std::io::Error) -> Self {
        PyMutantError::IO(e)
    }
}

impl From<serde_json::Error> for PyMutantError {
    fn from(e: serde_json::Error) -> Self {
        PyMutantError::JSON(e)
    }
}
