//! The `mutations_info` module provides code to output the list of supported mutations and
//! descriptions of the supported mutations.

use crate::AlgorithmsCLArgs;
use pymutant_lib::mutation::{all_algorithm_descriptions, get_all_mutation_algorithms};
use pymutant_lib::pretty_printer::{
    write_flowable_text, write_indent, write_newline, write_space, write_spaces, write_token,
    write_tokens, PrettyPrinter,
};
use std::io::{stdout, Write};

/// The heading written above the operator list of an algorithm.
static OPERATORS_TEXT: &str = "Operators:";

/// The heading written above the examples of an algorithm.
static EXAMPLES_TEXT: &str = "Examples:";

/// Function that displays either the list of mutation algorithms or their descriptions.
pub fn display_mutations_info(params: AlgorithmsCLArgs) {
    let mut stream = stdout();
    let width = get_terminal_width();

    // The short list wins when both flags are present.
    if params.list {
        display_simple_algorithm_list(&mut stream, width);
    } else if params.describe {
        display_algorithm_descriptions(&mut stream, width);
    }
}

fn get_terminal_width() -> usize {
    match termsize::get() {
        Some(size) => size.cols as usize,
        // Not a terminal, for example output piped into another program.
        None => 80,
    }
}

/// Return the length of the longest algorithm name.
fn algorithm_name_width() -> usize {
    get_all_mutation_algorithms()
        .iter()
        .map(|m| m.to_string().len())
        .max()
        .unwrap_or(0)
}

/// Write each algorithm name followed by its summary to `stream`.
///
/// # Arguments
///
/// * `stream` - The [`Write`] object that receives the list.
/// * `width` - The page width that summaries flow within.
fn display_simple_algorithm_list(stream: &mut dyn Write, width: usize) {
    let mut printer = PrettyPrinter::new(1, width);
    let descriptions = all_algorithm_descriptions();
    let name_width = algorithm_name_width();

    let algorithms = get_all_mutation_algorithms();
    for (i, mutation_type) in algorithms.iter().enumerate() {
        let algorithm_name = mutation_type.to_string();
        let description = &descriptions[mutation_type];

        write_token(&mut printer, stream, &algorithm_name);
        write_spaces(&mut printer, stream, name_width - algorithm_name.len());
        write_space(&mut printer, stream);

        printer.increase_indent_by(name_width + 1);
        write_flowable_text(&mut printer, stream, description.summary, "");
        printer.decrease_indent_by(name_width + 1);

        if i < algorithms.len() - 1 {
            write_newline(&mut printer, stream);
            write_newline(&mut printer, stream);
        }
    }

    write_newline(&mut printer, stream);
}

/// Write the summary, details, operators and examples of each algorithm to `stream`.
///
/// # Arguments
///
/// * `stream` - The [`Write`] object that receives the descriptions.
/// * `width` - The page width that the text flows within.
fn display_algorithm_descriptions(stream: &mut dyn Write, width: usize) {
    let mut printer = PrettyPrinter::new(1, width);
    let descriptions = all_algorithm_descriptions();
    let name_width = algorithm_name_width();

    let algorithms = get_all_mutation_algorithms();
    for (i, mutation_type) in algorithms.iter().enumerate() {
        let algorithm_name = mutation_type.to_string();
        let description = &descriptions[mutation_type];

        write_token(&mut printer, stream, &algorithm_name);
        write_spaces(&mut printer, stream, name_width - algorithm_name.len());
        write_space(&mut printer, stream);
        write_lines(&mut printer, stream, "", description.summary, name_width, false);

        if !description.extra_details.is_empty() {
            write_newline(&mut printer, stream);
            write_newline(&mut printer, stream);
            write_lines(
                &mut printer,
                stream,
                "",
                description.extra_details,
                name_width,
                true,
            );
        }

        if !description.operators.is_empty() {
            write_newline(&mut printer, stream);
            write_newline(&mut printer, stream);
            let operators_string = description.operators.join(" ");
            write_lines(
                &mut printer,
                stream,
                OPERATORS_TEXT,
                &operators_string,
                name_width,
                true,
            );
        }

        if !description.examples.is_empty() {
            write_newline(&mut printer, stream);
            write_newline(&mut printer, stream);
            write_lines(
                &mut printer,
                stream,
                EXAMPLES_TEXT,
                description.examples,
                name_width,
                true,
            );
        }

        if i < algorithms.len() - 1 {
            write_newline(&mut printer, stream);
            write_newline(&mut printer, stream);
            write_newline(&mut printer, stream);
        }
    }

    write_newline(&mut printer, stream);
}

/// Helper function to write out one section of an algorithm description.
///
/// # Arguments
///
/// * `printer` - The [`PrettyPrinter`] object that will write formatted text to `stream`.
/// * `stream` - The [`Write`] object that will receive the formatted text.
/// * `category_text` - The section heading. This may be an empty string.
/// * `text` - The content of the section.
/// * `name_width` - The width of the algorithm name column.
/// * `do_indent` - True if the section starts on a line without an algorithm name.
fn write_lines(
    printer: &mut PrettyPrinter,
    stream: &mut dyn Write,
    category_text: &str,
    text: &str,
    name_width: usize,
    do_indent: bool,
) {
    printer.increase_indent_by(name_width);
    if do_indent {
        write_indent(printer, stream);
        write_space(printer, stream);
    }

    if !category_text.is_empty() {
        write_token(printer, stream, category_text);

        write_newline(printer, stream);
        write_indent(printer, stream);
        write_space(printer, stream);

        write_tokens(printer, stream, "-", category_text.len());

        write_newline(printer, stream);
        write_newline(printer, stream);
        write_indent(printer, stream);
        write_space(printer, stream);
    }

    printer.increase_indent();
    write_flowable_text(printer, stream, text, "");
    printer.decrease_indent_by(name_width + 1);
}
