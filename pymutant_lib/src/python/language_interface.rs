//! The `python::language_interface` module provides [`PythonLanguageInterface`], the
//! [`MutableLanguage`] implementation for Python.

use crate::ast::ASTTraverser;
use crate::error::PyMutantError;
use crate::id::{Id, JSONIDMaker};
use crate::interpreter_details::*;
use crate::json::load_json_from_file_with_name;
use crate::language_interface::{MutableLanguage, MutateASTResult};
use crate::mutation::{get_all_mutation_algorithms, MutationType};
use crate::mutation_visitor::*;
use crate::mutator::*;
use crate::preferences::Preferences;
use crate::pretty_print_visitor::PrettyPrintVisitor;
use crate::pretty_printer::PrettyPrinter;
use crate::python::ast::{is_python_module, PythonAST, PythonNode};
use crate::python::mutators::PythonMutatorFactory;
use crate::python::node_finder::check_printable;
use crate::python::parser::parse_python_source;
use crate::python::pretty_printer::PythonNodePrinterFactory;
use crate::recognizer::FileType;
use std::io::Write;
use std::path::Path;

/// The extension of Python source files.
static PYTHON_EXTENSION: &str = "py";

/// Return the object that reads parser-assigned node ids.
fn node_id_maker<'a>() -> Box<dyn Id<PythonAST> + 'a> {
    Box::new(JSONIDMaker::new(|n: &PythonAST| n.node_id()))
}

/// Check that `ast` is a module tree.
fn check_module(ast: PythonAST, file_name: &str) -> Result<PythonAST, PyMutantError> {
    if is_python_module(&ast) {
        Ok(ast)
    } else {
        Err(PyMutantError::UnrecognizedJSON(format!(
            "{file_name} does not contain a Python module"
        )))
    }
}

/// The interface object for Python programs.
pub struct PythonLanguageInterface {
    /// One mutator for every mutation algorithm.  Nodes monitored by a disabled algorithm still
    /// take a site identity.
    mutators: Vec<Box<dyn Mutator<PythonAST>>>,

    /// The algorithms whose eligible nodes become candidate sites.
    enabled: Vec<MutationType>,

    /// The factory that prints trees.
    printer_factory: PythonNodePrinterFactory,
}

impl PythonLanguageInterface {
    /// Create a new interface with every mutation algorithm enabled.
    pub fn new() -> PythonLanguageInterface {
        PythonLanguageInterface {
            mutators: PythonMutatorFactory {}.all_mutators(),
            enabled: get_all_mutation_algorithms(),
            printer_factory: PythonNodePrinterFactory::default(),
        }
    }

    /// Parse `source` with the interpreter named in `prefs`.
    ///
    /// # Arguments
    ///
    /// * `source` - The program text.
    /// * `file_name` - The name of the program, for error messages.
    /// * `prefs` - The [`Preferences`] object that may name the interpreter.
    pub fn parse_source(
        &self,
        source: &[u8],
        file_name: &str,
        prefs: &Preferences,
    ) -> Result<PythonAST, PyMutantError> {
        let interpreter = get_interpreter_from_preferences(prefs);
        parse_python_source(source, file_name, &interpreter)
    }
}

impl Default for PythonLanguageInterface {
    fn default() -> Self {
        Self::new()
    }
}

impl MutableLanguage for PythonLanguageInterface {
    fn load_ast_from_file(
        &mut self,
        file_name: &str,
        file_type: &FileType,
        prefs: &Preferences,
    ) -> Result<PythonAST, PyMutantError> {
        match file_type {
            FileType::Source => {
                let source = std::fs::read(file_name)?;
                self.parse_source(&source, file_name, prefs)
            }
            FileType::AST => check_module(load_json_from_file_with_name(file_name)?, file_name),
            FileType::Config => Err(PyMutantError::ConfigFileNotSupported(String::from(
                file_name,
            ))),
        }
    }

    fn load_ast_from_text(
        &mut self,
        text: &[u8],
        file_name: &str,
        file_type: &FileType,
        prefs: &Preferences,
    ) -> Result<PythonAST, PyMutantError> {
        match file_type {
            FileType::Source => self.parse_source(text, file_name, prefs),
            FileType::AST => check_module(serde_json::from_slice(text)?, file_name),
            FileType::Config => Err(PyMutantError::ConfigFileNotSupported(String::from(
                file_name,
            ))),
        }
    }

    fn select_mutators_for_mutation_types(
        &mut self,
        mutation_types: &[MutationType],
    ) -> Result<(), PyMutantError> {
        let factory = PythonMutatorFactory {};
        for mutation_type in mutation_types {
            if factory.mutator_for(mutation_type).is_none() {
                return Err(PyMutantError::MutationAlgorithmNotSupported(
                    mutation_type.to_string(),
                ));
            }
        }

        self.enabled = mutation_types.to_vec();
        self.enabled.sort();
        self.enabled.dedup();
        Ok(())
    }

    fn enumerate_candidate_sites(
        &mut self,
        ast: &PythonAST,
    ) -> Result<Vec<CandidateSite>, PyMutantError> {
        let mut enumerator = SiteEnumerator::new(&self.mutators, &self.enabled, node_id_maker());
        ASTTraverser::traverse(ast, &mut enumerator);

        log::debug!(
            "Found {} candidate sites among {} monitored nodes",
            enumerator.candidates.len(),
            enumerator.next_identity
        );

        Ok(enumerator.candidates)
    }

    fn mutate_ast(
        &mut self,
        ast: PythonAST,
        site: &CandidateSite,
    ) -> Result<MutateASTResult, PyMutantError> {
        let mut mutated_ast = ast;

        let (result, error) = {
            let mut mutation_maker =
                MutationMaker::new(&mut self.mutators, site, node_id_maker());

            // Traverse the tree, only rewriting the node at the site identity.
            ASTTraverser::traverse_mut(&mut mutated_ast, &mut mutation_maker);
            (mutation_maker.result, mutation_maker.error)
        };

        if let Some(e) = error {
            return Err(e);
        }

        Ok(MutateASTResult {
            ast: mutated_ast,
            mutator_result: result,
        })
    }

    fn check_ast_is_printable(&self, ast: &PythonAST) -> Result<(), PyMutantError> {
        check_printable(ast, &self.printer_factory)
    }

    fn pretty_print_ast_to_file(
        &mut self,
        ast: &PythonAST,
        file_name: &str,
        pretty_printer: &mut PrettyPrinter,
    ) -> Result<(), PyMutantError> {
        let mut contents: Vec<u8> = Vec::new();
        self.pretty_print_ast_to_stream(ast, &mut contents, pretty_printer)?;
        std::fs::write(file_name, contents)?;
        Ok(())
    }

    fn pretty_print_ast_to_stream(
        &mut self,
        ast: &PythonAST,
        stream: &mut dyn Write,
        pretty_printer: &mut PrettyPrinter,
    ) -> Result<(), PyMutantError> {
        self.check_ast_is_printable(ast)?;

        let mut pretty_print_visitor =
            PrettyPrintVisitor::new(stream, pretty_printer, &self.printer_factory);

        // Traverse each node of the tree, process the node, and recover the original program.
        ASTTraverser::traverse(ast, &mut pretty_print_visitor);

        Ok(())
    }

    fn get_extension_for_output_file(&self) -> &str {
        PYTHON_EXTENSION
    }

    fn file_is_language_source_file(&self, file_name: &str) -> bool {
        Path::new(file_name)
            .extension()
            .map_or(false, |e| e == PYTHON_EXTENSION)
    }

    fn file_is_language_ast_file(&self, file_name: &str) -> bool {
        match load_json_from_file_with_name(file_name) {
            Ok(ast_candidate) => is_python_module(&ast_candidate),
            Err(_) => false,
        }
    }

    fn default_interpreter_settings(&self) -> Preferences {
        let mut prefs = Preferences::new();
        prefs.set_string_for_key(INTERPRETER_KEY, DEFAULT_INTERPRETER);
        prefs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operators::python_operator_token;
    use crate::python::parser::python_is_available;
    use crate::python::sample_trees::*;

    fn print(language: &mut PythonLanguageInterface, ast: &PythonAST) -> String {
        let mut contents = Vec::new();
        let mut printer = PrettyPrinter::new_for_source(4);
        language
            .pretty_print_ast_to_stream(ast, &mut contents, &mut printer)
            .unwrap();
        String::from_utf8(contents).unwrap()
    }

    #[test]
    fn test_scenario_candidates() {
        let mut language = PythonLanguageInterface::new();
        let sites = language.enumerate_candidate_sites(&scenario_tree()).unwrap();

        let ids: Vec<usize> = sites.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);

        let node_ids: Vec<Option<u64>> = sites.iter().map(|s| s.node_id).collect();
        assert_eq!(node_ids, vec![Some(1), Some(6), Some(14), Some(11), Some(5)]);

        let kinds: Vec<MutationType> = sites.iter().map(|s| s.mutation_type).collect();
        assert_eq!(
            kinds,
            vec![
                MutationType::Assignment,
                MutationType::Comparison,
                MutationType::BinaryOp,
                MutationType::Assignment,
                MutationType::IfStatement
            ]
        );
    }

    #[test]
    fn test_ineligible_nodes_take_an_identity() {
        let mut language = PythonLanguageInterface::new();
        let sites = language.enumerate_candidate_sites(&loop_tree()).unwrap();
        let ids: Vec<usize> = sites.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 4, 5]);
        assert_eq!(sites[3].mutation_type, MutationType::Assignment);
        assert_eq!(sites[4].mutation_type, MutationType::WhileStatement);
    }

    #[test]
    fn test_disabled_types_keep_identities() {
        let mut language = PythonLanguageInterface::new();
        language
            .select_mutators_for_mutation_types(&[MutationType::Comparison, MutationType::BooleanOp])
            .unwrap();
        let sites = language.enumerate_candidate_sites(&loop_tree()).unwrap();
        let ids: Vec<usize> = sites.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2]);

        language.select_mutators_for_mutation_types(&[]).unwrap();
        assert!(language
            .enumerate_candidate_sites(&loop_tree())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_scenario_binary_op_mutant() {
        let mut language = PythonLanguageInterface::new();
        let sites = language.enumerate_candidate_sites(&scenario_tree()).unwrap();

        let result = language.mutate_ast(scenario_tree(), &sites[2]).unwrap();
        assert!(result.mutated());
        let mutator_result = result.mutator_result.clone().unwrap();
        assert_eq!(mutator_result.index, Some(2));
        assert_eq!(mutator_result.mutated_node_id, Some(14));
        assert_eq!(mutator_result.note.as_deref(), Some("replacing Add with Sub"));

        assert_eq!(
            print(&mut language, &result.ast),
            "x = 1\nif x > 0:\n    y = x - 1\n"
        );
    }

    #[test]
    fn test_scenario_condition_and_assignment_mutants() {
        let mut language = PythonLanguageInterface::new();
        let sites = language.enumerate_candidate_sites(&scenario_tree()).unwrap();

        let if_mutant = language.mutate_ast(scenario_tree(), &sites[4]).unwrap();
        assert_eq!(
            print(&mut language, &if_mutant.ast),
            "x = 1\nif True:\n    y = x + 1\n"
        );
        assert_eq!(if_mutant.mutator_result.unwrap().note, None);

        let assign_mutant = language.mutate_ast(scenario_tree(), &sites[3]).unwrap();
        assert_eq!(
            print(&mut language, &assign_mutant.ast),
            "x = 1\nif x > 0:\n    y = None\n"
        );

        let compare_mutant = language.mutate_ast(scenario_tree(), &sites[1]).unwrap();
        assert_eq!(
            print(&mut language, &compare_mutant.ast),
            "x = 1\nif x <= 0:\n    y = x + 1\n"
        );
    }

    #[test]
    fn test_mutants_differ_in_one_line() {
        let mut language = PythonLanguageInterface::new();
        let original = print(&mut language, &loop_tree());
        let sites = language.enumerate_candidate_sites(&loop_tree()).unwrap();

        for site in &sites {
            let result = language.mutate_ast(loop_tree(), site).unwrap();
            assert!(result.mutated());
            let mutant = print(&mut language, &result.ast);
            let changed = original
                .lines()
                .zip(mutant.lines())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(changed, 1, "site {} changed {} lines", site.id, changed);
        }
    }

    /// Collect the paths at which `a` and `b` differ.
    fn differences(a: &PythonAST, b: &PythonAST, path: String, found: &mut Vec<String>) {
        match (a, b) {
            (PythonAST::Object(x), PythonAST::Object(y)) if x.len() == y.len() => {
                for (key, value) in x {
                    match y.get(key) {
                        Some(other) => differences(value, other, format!("{path}/{key}"), found),
                        None => found.push(path.clone()),
                    }
                }
            }
            (PythonAST::Array(x), PythonAST::Array(y)) if x.len() == y.len() => {
                for (i, (value, other)) in x.iter().zip(y.iter()).enumerate() {
                    differences(value, other, format!("{path}/{i}"), found);
                }
            }
            _ if a != b => found.push(path),
            _ => {}
        }
    }

    fn operator_sites(language: &mut PythonLanguageInterface) -> Vec<CandidateSite> {
        language
            .select_mutators_for_mutation_types(&[
                MutationType::BinaryOp,
                MutationType::BooleanOp,
                MutationType::Comparison,
            ])
            .unwrap();
        language.enumerate_candidate_sites(&operator_tree()).unwrap()
    }

    #[test]
    fn test_operator_tree_sites() {
        let mut language = PythonLanguageInterface::new();
        let sites = operator_sites(&mut language);
        let ids: Vec<usize> = sites.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_operator_mutation_is_an_involution() {
        let mut language = PythonLanguageInterface::new();
        for site in operator_sites(&mut language) {
            let once = language.mutate_ast(operator_tree(), &site).unwrap();
            assert!(once.mutated(), "site {} was not mutated", site.id);
            assert_ne!(once.ast, operator_tree());

            let twice = language.mutate_ast(once.ast, &site).unwrap();
            assert!(twice.mutated());
            assert_eq!(twice.ast, operator_tree(), "site {} did not flip back", site.id);
        }
    }

    #[test]
    fn test_operator_mutation_changes_one_operator() {
        let mut language = PythonLanguageInterface::new();
        let original = operator_tree();
        for site in operator_sites(&mut language) {
            let result = language.mutate_ast(operator_tree(), &site).unwrap();

            let mut found = Vec::new();
            differences(&original, &result.ast, String::new(), &mut found);
            assert_eq!(found.len(), 1, "site {} changed {:?}", site.id, found);
            assert!(found[0].ends_with("/ast_type"), "site {} changed {}", site.id, found[0]);

            let operator_path = found[0].trim_end_matches("/ast_type");
            let before = original.pointer(operator_path).and_then(|n| n.ast_type());
            let after = result.ast.pointer(operator_path).and_then(|n| n.ast_type());
            assert!(before.and_then(python_operator_token).is_some());
            assert!(after.and_then(python_operator_token).is_some());
            assert_ne!(before, after);
        }
    }

    #[test]
    fn test_parsed_operator_source_matches_sample_tree() {
        if !python_is_available() {
            return;
        }
        let mut language = PythonLanguageInterface::new();
        let prefs = language.default_interpreter_settings();
        let ast = language
            .load_ast_from_text(OPERATOR_SOURCE.as_bytes(), "o.py", &FileType::Source, &prefs)
            .unwrap();
        assert_eq!(
            language.enumerate_candidate_sites(&ast).unwrap(),
            language.enumerate_candidate_sites(&operator_tree()).unwrap()
        );
    }

    #[test]
    fn test_out_of_range_site_leaves_tree_unchanged() {
        let mut language = PythonLanguageInterface::new();
        let site = CandidateSite {
            id: 9,
            node_id: None,
            mutation_type: MutationType::BinaryOp,
        };
        let result = language.mutate_ast(scenario_tree(), &site).unwrap();
        assert!(!result.mutated());
        assert_eq!(result.ast, scenario_tree());
    }

    #[test]
    fn test_site_of_another_kind_leaves_tree_unchanged() {
        let mut language = PythonLanguageInterface::new();
        let site = CandidateSite {
            id: 0,
            node_id: None,
            mutation_type: MutationType::BinaryOp,
        };
        let result = language.mutate_ast(scenario_tree(), &site).unwrap();
        assert!(!result.mutated());
        assert_eq!(result.ast, scenario_tree());
    }

    #[test]
    fn test_diverged_site_is_reported() {
        let mut language = PythonLanguageInterface::new();
        let site = CandidateSite {
            id: 2,
            node_id: Some(99),
            mutation_type: MutationType::BinaryOp,
        };
        match language.mutate_ast(scenario_tree(), &site) {
            Err(PyMutantError::SiteDiverged(id, expected, found)) => {
                assert_eq!((id, expected, found), (2, 99, 14));
            }
            other => panic!("expected a diverged site, got {other:?}"),
        }
    }

    #[test]
    fn test_unsupported_tree_writes_no_file() {
        let mut language = PythonLanguageInterface::new();
        let mut ast = scenario_tree();
        ast["body"][0]["ast_type"] = serde_json::json!("TypeAlias");

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("0.py");
        let mut printer = PrettyPrinter::new_for_source(4);
        let result = language.pretty_print_ast_to_file(&ast, out.to_str().unwrap(), &mut printer);
        assert!(matches!(result, Err(PyMutantError::UnsupportedNode(t)) if t == "TypeAlias"));
        assert!(!out.exists());
    }

    #[test]
    fn test_check_ast_is_printable() {
        let language = PythonLanguageInterface::new();
        assert!(language.check_ast_is_printable(&operator_tree()).is_ok());

        let mut ast = loop_tree();
        ast["body"][1]["ast_type"] = serde_json::json!("Match");
        assert!(matches!(
            language.check_ast_is_printable(&ast),
            Err(PyMutantError::UnsupportedNode(t)) if t == "Match"
        ));
    }

    #[test]
    fn test_load_ast_from_text() {
        let mut language = PythonLanguageInterface::new();
        let prefs = language.default_interpreter_settings();
        let text = scenario_tree().to_string();
        let ast = language
            .load_ast_from_text(text.as_bytes(), "s.json", &FileType::AST, &prefs)
            .unwrap();
        assert_eq!(ast, scenario_tree());

        let not_a_module = language.load_ast_from_text(b"[1, 2]", "s.json", &FileType::AST, &prefs);
        assert!(matches!(not_a_module, Err(PyMutantError::UnrecognizedJSON(_))));
    }

    #[test]
    fn test_parsed_source_matches_sample_tree() {
        if !python_is_available() {
            return;
        }
        let mut language = PythonLanguageInterface::new();
        let prefs = language.default_interpreter_settings();
        let ast = language
            .load_ast_from_text(SCENARIO_SOURCE.as_bytes(), "s.py", &FileType::Source, &prefs)
            .unwrap();
        assert_eq!(
            language.enumerate_candidate_sites(&ast).unwrap(),
            language.enumerate_candidate_sites(&scenario_tree()).unwrap()
        );
    }
}
