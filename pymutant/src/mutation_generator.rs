//! The `mutation_generator` module provides the `generate_mutants` function that implements
//! the mutation generation algorithm.

use crate::generator_parameters::GeneratorParameters;
use crate::interpreter_settings::InterpreterSettings;
use crate::pretty_printing::{
    file_stem, original_output_stem, pretty_print_ast_to_stream, pretty_print_ast_with_stem,
};
use crate::MutateCLArgs;
use pymutant_lib::config_file::*;
use pymutant_lib::emitter::{MutantEmitter, MANIFEST_FILE_NAME};
use pymutant_lib::error::PyMutantError;
use pymutant_lib::interpreter_details::get_interpreter_from_preferences;
use pymutant_lib::interpreter_details::INTERPRETER_KEY;
use pymutant_lib::language_interface::*;
use pymutant_lib::mutation::{get_all_mutation_algorithms, MutationType};
use pymutant_lib::planner::{MutationPlan, PlannerSettings};
use pymutant_lib::python::parser::interpreter_version;
use pymutant_lib::recognizer::{FileType, Recognizer};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Convert a vector of [`MutationType`] to a vector of [`String`].
///
/// # Arguments
///
/// * `array` - The array of mutation types to convert to strings.
fn get_mutation_strings_from_types(array: &[MutationType]) -> Vec<String> {
    array.iter().map(|t| t.to_string()).collect()
}

/// Convert a vector of [`String`] to a vector of [`MutationType`].  Unknown names are an error.
fn get_mutation_types_from_strings(array: &[String]) -> Result<Vec<MutationType>, PyMutantError> {
    array.iter().map(|s| MutationType::from_str(s)).collect()
}

/// Select the mutation algorithms for a run.  `all_mutations` takes precedence over `mutations`,
/// and an empty selection means every algorithm.
fn select_mutation_types(all_mutations: bool, mutations: &[MutationType]) -> Vec<MutationType> {
    if all_mutations || mutations.is_empty() {
        get_all_mutation_algorithms()
    } else {
        mutations.to_vec()
    }
}

/// Give each input its own subdirectory of its output directory, named after the input.  A
/// repeated name receives a numeric suffix.
///
/// # Arguments
///
/// * `generator_parameters` - The parameters of every input of the run.
fn assign_output_subdirectories(generator_parameters: &mut [GeneratorParameters]) {
    let mut used: HashSet<PathBuf> = HashSet::new();

    for params in generator_parameters.iter_mut().filter(|p| !p.use_stdout) {
        let stem = file_stem(&params.file_name);
        let mut candidate = params.output_directory.join(&stem);
        let mut suffix: usize = 1;
        while used.contains(&candidate) {
            candidate = params.output_directory.join(format!("{stem}_{suffix}"));
            suffix += 1;
        }
        used.insert(candidate.clone());
        params.output_directory = candidate;
    }
}

/// Run the mutation generator algorithm.
///
/// # Arguments
///
/// * `args` - The command line arguments that control the mutation algorithm.
pub fn generate_mutants(args: MutateCLArgs) -> Result<(), PyMutantError> {
    let requested_mutations = get_mutation_types_from_strings(&args.mutations)?;
    let mutations = select_mutation_types(args.all_mutations, &requested_mutations);

    let interpreter_settings = InterpreterSettings {
        python: args.python.clone(),
    };
    let preferences = interpreter_settings.to_preferences();

    let planner = PlannerSettings {
        seed: args.rng_seed,
        cap: args.cap,
    };

    let mut language_object = LanguageInterface::get_language_object();

    let mut generator_parameters: Vec<GeneratorParameters> = Vec::new();

    for file_name in &args.file_names {
        // The file might be a source code file, an AST file, or a configuration file.
        let recognizer = Recognizer::new(language_object.as_ref());
        let file_type = recognizer.recognize_file(file_name)?;

        let default_params = GeneratorParameters {
            file_name: file_name.clone(),
            planner,
            output_directory: PathBuf::from(&args.output_directory),
            use_stdout: args.stdout,
            mutations: mutations.clone(),
            print_original: args.print_original,
            save_configuration_file: args.save_config_files,
            preferences: preferences.clone(),
        };

        if file_type != FileType::Config {
            generator_parameters.push(default_params);
            continue;
        }

        // Values in the configuration file override the command line for the files it lists.
        let configuration_details = ConfigurationFileDetails::new_from_file(file_name)?;
        let mut config_params = default_params;

        if let Some(seed) = configuration_details.seed {
            config_params.planner.seed = seed;
        }

        if let Some(cap) = configuration_details.cap {
            config_params.planner.cap = cap;
        }

        if configuration_details.all_mutations || !configuration_details.mutations.is_empty() {
            config_params.mutations = select_mutation_types(
                configuration_details.all_mutations,
                &configuration_details.mutations,
            );
        }

        if configuration_details.writes_to_stdout() {
            config_params.use_stdout = true;
        } else if let Some(output_directory) = &configuration_details.output_directory {
            config_params.output_directory = output_directory.clone();
        }

        if let Some(python) = &configuration_details.python {
            config_params
                .preferences
                .set_string_for_key(INTERPRETER_KEY, python);
        }

        if configuration_details.print_original {
            config_params.print_original = true;
        }

        for path_buf in &configuration_details.filenames {
            let mut params = config_params.clone();
            params.file_name = path_buf.to_string_lossy().into_owned();
            generator_parameters.push(params);
        }
    }

    if generator_parameters.len() > 1 {
        assign_output_subdirectories(&mut generator_parameters);
    }

    // Now, for each set of parameters, invoke the mutator.  The remaining inputs still run after a
    // failure, and the first failure becomes the result of the run.
    let mut first_error: Option<PyMutantError> = None;
    for params in &generator_parameters {
        if let Err(e) = generate_mutations(language_object.as_mut(), params) {
            println!("Unable to generate mutations for {}: {}", params.file_name, e);
            first_error.get_or_insert(e);
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Report progress on stdout, unless stdout receives the mutants.
fn progress(params: &GeneratorParameters, message: &str) {
    if params.use_stdout {
        log::info!("{message}");
    } else {
        println!("{message}");
    }
}

/// Return the absolute form of `path`, or `path` itself if it does not exist.
fn absolute_path(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Write the parameters used for one input to `<output_directory>/<stem>.pmt`, or to stdout.
///
/// # Arguments
///
/// * `params` - The parameters of the input.
fn save_configuration_file(params: &GeneratorParameters) -> Result<(), PyMutantError> {
    let mut details =
        ConfigurationFileDetails::new(vec![absolute_path(Path::new(&params.file_name))]);
    details.seed = Some(params.planner.seed);
    details.cap = Some(params.planner.cap);
    details.mutations = params.mutations.clone();
    details.python = Some(get_interpreter_from_preferences(&params.preferences));
    details.print_original = params.print_original;

    if params.use_stdout {
        details.output_directory = Some(PathBuf::from(STDOUT_OUTPUT));
        let mut stdout = std::io::stdout();
        return details.write_to_stream_as_json(&mut stdout);
    }

    std::fs::create_dir_all(&params.output_directory)?;
    details.output_directory = Some(absolute_path(&params.output_directory));

    let out_file_path = params.output_directory.join(format!(
        "{}.{}",
        file_stem(&params.file_name),
        CONFIG_FILE_EXTENSION
    ));
    println!("Writing configuration file {}", out_file_path.display());
    details.write_to_file_as_json(&out_file_path.to_string_lossy())
}

/// Generate mutations according the parameters.
///
/// # Arguments
///
/// * `language_object` - The language object that loads, mutates and prints the input.
/// * `params` - The parameters that control the mutation generation algorithm.
fn generate_mutations(
    language_object: &mut dyn MutableLanguage,
    params: &GeneratorParameters,
) -> Result<(), PyMutantError> {
    let file_type = Recognizer::new(language_object).recognize_file(&params.file_name)?;
    if file_type == FileType::Config {
        return Err(PyMutantError::ConfigFileNotSupported(params.file_name.clone()));
    }

    if file_type == FileType::Source {
        let interpreter = get_interpreter_from_preferences(&params.preferences);
        match interpreter_version(&interpreter) {
            Ok(version) => log::info!("Parsing {} with {}", params.file_name, version),
            Err(e) => log::warn!("{e}"),
        }
    }

    let source_text = std::fs::read(&params.file_name)?;

    language_object.select_mutators_for_mutation_types(&params.mutations)?;

    let ast = language_object.load_ast_from_text(
        &source_text,
        &params.file_name,
        &file_type,
        &params.preferences,
    )?;

    // A tree the printer cannot write would fail every mutant.
    language_object.check_ast_is_printable(&ast)?;

    let candidates = language_object.enumerate_candidate_sites(&ast)?;
    progress(
        params,
        &format!(
            "{} contains {} candidate sites for mutation algorithms {:?}",
            params.file_name,
            candidates.len(),
            get_mutation_strings_from_types(&params.mutations)
        ),
    );

    let plan = MutationPlan::new(&candidates, &params.planner);

    // Only pretty-print the original file after verifying that we can load the AST.
    if params.print_original {
        if params.use_stdout {
            let mut stdout = std::io::stdout();
            pretty_print_ast_to_stream(language_object, &ast, &mut stdout)?;
        } else {
            let outfile = pretty_print_ast_with_stem(
                language_object,
                &ast,
                &original_output_stem(&params.file_name),
                &params.output_directory,
            )?;
            println!(
                "Pretty-printing original file {} to {}",
                params.file_name,
                outfile.display()
            );
        }
    }

    if params.save_configuration_file {
        save_configuration_file(params)?;
    }

    let mut emitter = MutantEmitter::new(
        language_object,
        &params.file_name,
        source_text,
        file_type,
        params.preferences.clone(),
    );

    let mut diagnostics = std::io::stderr();
    let report = if params.use_stdout {
        let mut stdout = std::io::stdout();
        emitter.emit_to_stream(&plan, &mut stdout, &mut diagnostics)?
    } else {
        emitter.emit_to_directory(&plan, &params.output_directory, &mut diagnostics)?
    };

    progress(
        params,
        &format!(
            "Generated {} of {} planned mutants of {}",
            report.succeeded(),
            plan.len(),
            params.file_name
        ),
    );

    if report.failed() > 0 {
        log::warn!(
            "{} mutants of {} failed, see {}",
            report.failed(),
            params.file_name,
            MANIFEST_FILE_NAME
        );
    }

    Ok(())
}
