//! The `generator_parameters` module provides the definition of [`GeneratorParameters`].

use pymutant_lib::mutation::MutationType;
use pymutant_lib::planner::PlannerSettings;
use pymutant_lib::preferences::Preferences;
use std::path::PathBuf;

/// Object to capture the parameters needed to guide the mutation generator algorithm for one
/// input file.
#[derive(Debug, Clone)]
pub struct GeneratorParameters {
    /// The location of the input file in the file system
    pub file_name: String,

    /// The seed and cap of the mutation plan.
    pub planner: PlannerSettings,

    /// The directory in the file system to put the generated mutations.
    pub output_directory: PathBuf,

    /// True if the mutants go to stdout instead of `output_directory`.
    pub use_stdout: bool,

    /// The mutation algorithms to use to generate the mutants.
    pub mutations: Vec<MutationType>,

    /// If true, then pretty-print a copy of the original program.
    pub print_original: bool,

    /// If true, write the parameters to a configuration file next to the mutants.
    pub save_configuration_file: bool,

    /// Interpreter preferences
    pub preferences: Preferences,
}
