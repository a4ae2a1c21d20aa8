//! The `pretty_printing` module provides services for pretty-printing the input source or AST
//! using the tool's pretty-printing format.  Use these services to change the input file into a form
//! that you can easily compare with the generated mutants using a diff tool.

use crate::interpreter_settings::InterpreterSettings;
use crate::PrettyPrintCLArgs;
use pymutant_lib::error::PyMutantError;
use pymutant_lib::language_interface::*;
use pymutant_lib::preferences::Preferences;
use pymutant_lib::pretty_printer::PrettyPrinter;
use pymutant_lib::recognizer::{FileType, Recognizer};
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};

/// The indentation width of printed programs.
static TAB_WIDTH: usize = 4;

/// Iterate through the files in the args.file_names vector and pretty-print each file.
///
/// # Arguments
///
/// * `args` - The [`PrettyPrintCLArgs`] object.
pub fn pretty_print_files(args: PrettyPrintCLArgs) {
    let interpreter_settings = InterpreterSettings {
        python: args.python,
    };
    let preferences = interpreter_settings.to_preferences();
    let mut language_object = LanguageInterface::get_language_object();
    let out_dir = PathBuf::from(&args.output_directory);

    for file_name in args.file_names {
        if args.stdout {
            let mut stdout = std::io::stdout();
            if let Err(e) = pretty_print_file_to_stream(
                language_object.as_mut(),
                &file_name,
                &mut stdout,
                &preferences,
            ) {
                println!("Unable to pretty-print {}: {}", file_name, e);
            }
        } else {
            match pretty_print_file(language_object.as_mut(), &file_name, &out_dir, &preferences) {
                Ok(outfile) => println!(
                    "Pretty-printing original file {} to {}",
                    file_name,
                    outfile.display()
                ),
                Err(e) => println!("Unable to pretty-print {}: {}", file_name, e),
            }
        }
    }
}

/// Recognize and load the syntax tree in `file_name`.
fn load_ast(
    language_object: &mut dyn MutableLanguage,
    file_name: &str,
    preferences: &Preferences,
) -> Result<Value, PyMutantError> {
    let file_type = Recognizer::new(language_object).recognize_file(file_name)?;
    if file_type == FileType::Config {
        return Err(PyMutantError::ConfigFileNotSupported(String::from(
            file_name,
        )));
    }
    language_object.load_ast_from_file(file_name, &file_type, preferences)
}

/// Pretty-print an individual file.
///
/// # Arguments
///
/// * `language_object` - The language object that loads and prints the file.
/// * `file_name` - The path to the file to pretty-print in the file system.
/// * `output_directory` - The path to the location to save the pretty-printed file.
/// * `preferences` - [`Preferences`] object.
pub fn pretty_print_file(
    language_object: &mut dyn MutableLanguage,
    file_name: &str,
    output_directory: &Path,
    preferences: &Preferences,
) -> Result<PathBuf, PyMutantError> {
    let ast = load_ast(language_object, file_name, preferences)?;
    pretty_print_ast(language_object, &ast, file_name, output_directory)
}

/// Pretty-print an individual file and write the output to `stream`.
///
/// # Arguments
///
/// * `language_object` - The language object that loads and prints the file.
/// * `file_name` - The name of the file to pretty-print.
/// * `stream` - The [`Write`] trait object that will receive the pretty-printed output.
/// * `preferences` - The [`Preferences`] object containing interpreter settings.
pub fn pretty_print_file_to_stream(
    language_object: &mut dyn MutableLanguage,
    file_name: &str,
    stream: &mut dyn Write,
    preferences: &Preferences,
) -> Result<(), PyMutantError> {
    let ast = load_ast(language_object, file_name, preferences)?;
    pretty_print_ast_to_stream(language_object, &ast, stream)
}

/// Return the name of `file_name` without its directory or extension.
pub fn file_stem(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from(file_name))
}

/// Return the stem of the printed copy of `file_name` that is kept beside its mutants.  Mutant
/// files are named by number, so the copy carries an `.original` suffix.
pub fn original_output_stem(file_name: &str) -> String {
    format!("{}.original", file_stem(file_name))
}

/// Pretty print an AST to `<output_dir>/<stem>.py`, where `<stem>` is the name of `file_name`
/// without its directory or extension.
///
/// # Arguments
///
/// * `language_object` - The language object that prints the tree.
/// * `ast` - The syntax tree.
/// * `file_name` - The name of the input the tree came from. May be a complete path.
/// * `output_dir` - The directory in which to place the pretty-printed ast.
pub fn pretty_print_ast(
    language_object: &mut dyn MutableLanguage,
    ast: &Value,
    file_name: &str,
    output_dir: &Path,
) -> Result<PathBuf, PyMutantError> {
    pretty_print_ast_with_stem(language_object, ast, &file_stem(file_name), output_dir)
}

/// Pretty print an AST to `<output_dir>/<stem>.py`.
///
/// # Arguments
///
/// * `language_object` - The language object that prints the tree.
/// * `ast` - The syntax tree.
/// * `stem` - The name of the output file without its extension.
/// * `output_dir` - The directory in which to place the pretty-printed ast.
pub fn pretty_print_ast_with_stem(
    language_object: &mut dyn MutableLanguage,
    ast: &Value,
    stem: &str,
    output_dir: &Path,
) -> Result<PathBuf, PyMutantError> {
    let outfile_name = output_dir.join(format!(
        "{}.{}",
        stem,
        language_object.get_extension_for_output_file()
    ));

    // Try to create the output directory:
    std::fs::create_dir_all(output_dir)?;

    let mut pretty_printer = PrettyPrinter::new_for_source(TAB_WIDTH);
    language_object.pretty_print_ast_to_file(
        ast,
        &outfile_name.to_string_lossy(),
        &mut pretty_printer,
    )?;

    Ok(outfile_name)
}

/// Pretty-print the AST in `ast` to the [`Write`] object `stream`
///
/// # Arguments
///
/// * `language_object` - The language object that prints the tree.
/// * `ast` - The syntax tree.
/// * `stream` - A [`Write`] trait object that can receive the pretty-printed output.
pub fn pretty_print_ast_to_stream(
    language_object: &mut dyn MutableLanguage,
    ast: &Value,
    stream: &mut dyn Write,
) -> Result<(), PyMutantError> {
    let mut pretty_printer = PrettyPrinter::new_for_source(TAB_WIDTH);
    language_object.pretty_print_ast_to_stream(ast, stream, &mut pretty_printer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_original_copy_is_not_a_mutant_name() {
        assert_eq!(file_stem("src/app.py"), "app");
        assert_eq!(original_output_stem("src/app.py"), "app.original");
        assert_eq!(original_output_stem("tests/3.py"), "3.original");
    }
}
