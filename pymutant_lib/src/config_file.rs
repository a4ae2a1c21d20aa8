//! The `config_file` module contains code for reading a configuration file.  Configuration files
//! let the user control the tool for each source or AST file with settings that apply to just
//! that file, and let a run be replayed exactly.

use crate::error::PyMutantError;
use crate::json::*;
use crate::mutation::MutationType;
use serde_json::{json, Map, Value};
use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// The extension used for configuration files.
pub static CONFIG_FILE_EXTENSION: &str = "pmt";

/// The key in the configuration file for the files to mutate.
pub static FILENAMES_KEY: &str = "filenames";

/// The seed key.
pub static SEED_KEY: &str = "seed";

/// The key for the maximum number of mutants.
pub static CAP_KEY: &str = "cap";

/// The key for the list of mutation algorithms.
pub static MUTATIONS_KEY: &str = "mutations";

/// The key for the boolean value to use all mutation algorithms.
pub static ALL_MUTATIONS_KEY: &str = "all-mutations";

/// The key for the string value containing the path to where the tool should place
/// output.
pub static OUTPUT_DIR_KEY: &str = "output-directory";

/// The output directory value that sends output to stdout.
pub static STDOUT_OUTPUT: &str = "stdout";

/// The key for the path to the Python interpreter.
pub static PYTHON_KEY: &str = "python";

/// The key for the boolean value indicating whether tool should pretty-print the input
/// source or AST file.
pub static PRINT_ORIGINAL_KEY: &str = "print-original";

/// Configuration details loaded from a .pmt configuration file.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationFileDetails {
    /// Paths to source files or AST files to mutate.
    pub filenames: Vec<PathBuf>,

    /// The random number generator seed, if present in the configuration file.
    pub seed: Option<u64>,

    /// The maximum number of mutants, if present in the configuration file.
    pub cap: Option<usize>,

    /// The list of requested mutations.
    pub mutations: Vec<MutationType>,

    /// True if the tool should use all mutation algorithms.
    pub all_mutations: bool,

    /// The location where the tool should put generated output files.
    pub output_directory: Option<PathBuf>,

    /// The Python interpreter that parses the files.
    pub python: Option<String>,

    /// True if the tool should pretty-print the original source or AST file.
    pub print_original: bool,
}

impl ConfigurationFileDetails {
    /// Create a configuration for `filenames` with no other settings.
    pub fn new(filenames: Vec<PathBuf>) -> ConfigurationFileDetails {
        ConfigurationFileDetails {
            filenames,
            seed: None,
            cap: None,
            mutations: Vec::new(),
            all_mutations: false,
            output_directory: None,
            python: None,
            print_original: false,
        }
    }

    /// Create a new configuration details object by loading the configuration from a JSON
    /// file.  The file must have the extension ".pmt".
    ///
    /// Relative file names in the configuration are resolved against the directory holding the
    /// configuration file.
    ///
    /// # Arguments
    ///
    /// * `config_file` - The path to the configuration file in the file system.
    pub fn new_from_file(config_file: &str) -> Result<ConfigurationFileDetails, PyMutantError> {
        let config_path = Path::new(config_file);

        // The file must have a .pmt extension.
        match config_path.extension() {
            Some(extension) if extension == OsStr::new(CONFIG_FILE_EXTENSION) => {}
            _ => {
                return Err(PyMutantError::ConfigFileBadExtension(String::from(
                    config_file,
                )))
            }
        }

        let json_value = match load_json_from_file_with_name(config_file) {
            Ok(v) if v.is_object() => v,
            _ => {
                return Err(PyMutantError::ConfigFileNotSupported(String::from(
                    config_file,
                )))
            }
        };

        let Some(filenames_array) = json_value.get_array_for_key(FILENAMES_KEY) else {
            return Err(PyMutantError::ConfigFileMissingRequiredKey(
                String::from(config_file),
                vec![String::from(FILENAMES_KEY)],
            ));
        };

        let base_dir = config_path.parent().unwrap_or_else(|| Path::new(""));
        let filenames = filenames_array
            .iter()
            .filter_map(|v| v.as_str())
            .map(|name| base_dir.join(name))
            .collect();

        let mut details = ConfigurationFileDetails::new(filenames);

        if let Some(seed) = json_value.get_int_for_key(SEED_KEY) {
            details.seed = u64::try_from(seed).ok();
        }

        if let Some(cap) = json_value.get_int_for_key(CAP_KEY) {
            details.cap = usize::try_from(cap).ok();
        }

        if let Some(mutations_array) = json_value.get_array_for_key(MUTATIONS_KEY) {
            for name in mutations_array.iter().filter_map(|v| v.as_str()) {
                match MutationType::from_str(name) {
                    Ok(t) => details.mutations.push(t),
                    Err(_) => log::warn!("{config_file}: ignoring unknown mutation type {name}"),
                }
            }
        }

        if let Some(use_all_algorithms) = json_value.get_bool_for_key(ALL_MUTATIONS_KEY) {
            details.all_mutations = use_all_algorithms;
        }

        if let Some(output_directory) = json_value.get_str_for_key(OUTPUT_DIR_KEY) {
            details.output_directory = Some(PathBuf::from(output_directory));
        }

        if let Some(python) = json_value.get_str_for_key(PYTHON_KEY) {
            details.python = Some(String::from(python));
        }

        if let Some(print_original) = json_value.get_bool_for_key(PRINT_ORIGINAL_KEY) {
            details.print_original = print_original;
        }

        Ok(details)
    }

    /// Return true if the configuration sends output to stdout.
    pub fn writes_to_stdout(&self) -> bool {
        self.output_directory
            .as_ref()
            .map_or(false, |d| d.as_os_str() == STDOUT_OUTPUT)
    }

    /// Helper function to get the configuration as a JSON object.
    fn convert_to_json(&self) -> Value {
        let mut json_value = Value::Object(Map::new());

        let json_filenames_array: Vec<Value> = self
            .filenames
            .iter()
            .map(|p| Value::from(p.to_string_lossy().as_ref()))
            .collect();

        json_value.set_node_for_key(FILENAMES_KEY, json![json_filenames_array]);

        if let Some(seed) = self.seed {
            json_value.set_node_for_key(SEED_KEY, json![seed]);
        }

        if let Some(cap) = self.cap {
            json_value.set_node_for_key(CAP_KEY, json![cap]);
        }

        if !self.mutations.is_empty() {
            let mutation_algorithm_names_array: Vec<String> =
                self.mutations.iter().map(|m| m.to_string()).collect();
            json_value.set_node_for_key(MUTATIONS_KEY, json![mutation_algorithm_names_array]);
        }

        if self.all_mutations {
            json_value.set_node_for_key(ALL_MUTATIONS_KEY, json![self.all_mutations]);
        }

        if let Some(output_directory) = &self.output_directory {
            json_value.set_str_for_key(OUTPUT_DIR_KEY, &output_directory.to_string_lossy());
        }

        if let Some(python) = &self.python {
            json_value.set_str_for_key(PYTHON_KEY, python);
        }

        json_value.set_node_for_key(PRINT_ORIGINAL_KEY, json![self.print_original]);

        json_value
    }

    /// Return the configuration as pretty-printed JSON text.
    fn to_pretty_json(&self) -> Result<String, PyMutantError> {
        let standard_json = format!("{}", self.convert_to_json());
        jsonxf::pretty_print(&standard_json).map_err(PyMutantError::UnrecognizedJSON)
    }

    /// Create a configuration file in JSON form and write it to the path at `config_file`.
    ///
    /// # Arguments
    ///
    /// * `config_file` - The path in the file system to write the configuration file.
    pub fn write_to_file_as_json(&self, config_file: &str) -> Result<(), PyMutantError> {
        let pretty_json = self.to_pretty_json()?;

        // Try to create the parent directory if it does not exist.
        if let Some(parent) = Path::new(config_file).parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut f = std::fs::File::create(config_file)?;
        writeln!(f, "{pretty_json}")?;

        Ok(())
    }

    /// Convert a configuration to JSON and write the JSON to `stream`.
    ///
    /// # Arguments
    ///
    /// * `stream` - The stream that will receive the JSON.
    pub fn write_to_stream_as_json(&self, stream: &mut dyn Write) -> Result<(), PyMutantError> {
        let pretty_json = self.to_pretty_json()?;
        writeln!(stream, "{pretty_json}")?;
        Ok(())
    }
}
