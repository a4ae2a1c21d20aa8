//! The `emitter` module turns a [`MutationPlan`] into mutant programs.
//!
//! Every plan entry is generated from a fresh load of the input, so no two mutants share a tree.
//! A failure while generating or writing one entry is logged and recorded in the
//! [`EmissionReport`], and the remaining entries are still generated.

use crate::error::PyMutantError;
use crate::language_interface::MutableLanguage;
use crate::mutation_visitor::CandidateSite;
use crate::planner::MutationPlan;
use crate::preferences::Preferences;
use crate::pretty_printer::PrettyPrinter;
use crate::recognizer::FileType;
use serde::Serialize;
use serde_json::Value;
use std::io::Write;
use std::path::Path;

/// The name of the manifest written next to the mutant files.
pub static MANIFEST_FILE_NAME: &str = "mutants.json";

/// The indentation width of printed programs.
static TAB_WIDTH: usize = 4;

/// The outcome of one plan entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmissionRecord {
    /// The position of the entry in the plan.  A successful entry is written to `<index>.py`.
    pub index: usize,

    /// The site identity.
    pub site: usize,

    /// The parser-assigned id of the site node.
    pub node_id: Option<u64>,

    /// The name of the mutation algorithm.
    pub mutation_type: String,

    /// The file holding the mutant, relative to the output directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// The diagnostic note of the rewrite.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// The error that stopped the entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EmissionRecord {
    fn new(index: usize, site: &CandidateSite) -> EmissionRecord {
        EmissionRecord {
            index,
            site: site.id,
            node_id: site.node_id,
            mutation_type: site.mutation_type.to_string(),
            file: None,
            note: None,
            error: None,
        }
    }
}

/// The manifest of one emission run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmissionReport {
    /// The input the mutants were generated from.
    pub source: String,

    /// The planner seed.
    pub seed: u64,

    /// The planner cap.
    pub cap: usize,

    /// The number of candidate sites in the input.
    pub candidate_count: usize,

    /// One record per plan entry, in plan order.
    pub mutants: Vec<EmissionRecord>,
}

impl EmissionReport {
    fn new(source: &str, plan: &MutationPlan) -> EmissionReport {
        EmissionReport {
            source: String::from(source),
            seed: plan.settings.seed,
            cap: plan.settings.cap,
            candidate_count: plan.candidate_count,
            mutants: Vec::new(),
        }
    }

    /// Return the number of entries that produced a mutant.
    pub fn succeeded(&self) -> usize {
        self.mutants.iter().filter(|r| r.error.is_none()).count()
    }

    /// Return the number of entries that failed.
    pub fn failed(&self) -> usize {
        self.mutants.len() - self.succeeded()
    }
}

/// A generated mutant: the printed program with exactly one site rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutant {
    /// The site that was rewritten.
    pub site: CandidateSite,

    /// The printed program.
    pub text: Vec<u8>,

    /// The diagnostic note of the rewrite.
    pub note: Option<String>,
}

/// Object that generates and writes the mutants of one input.
pub struct MutantEmitter<'a> {
    /// The language object that loads, mutates and prints trees.
    language: &'a mut dyn MutableLanguage,

    /// The name of the input.
    source_name: String,

    /// The contents of the input, loaded again for every mutant.
    source_text: Vec<u8>,

    /// The kind of input.
    file_type: FileType,

    /// Interpreter settings for loading source.
    prefs: Preferences,
}

impl<'a> MutantEmitter<'a> {
    /// Create a new emitter.
    ///
    /// # Arguments
    ///
    /// * `language` - The language object.  Its mutation algorithm selection must match the one
    /// used to enumerate the sites of the plan.
    /// * `source_name` - The name of the input, for messages and the manifest.
    /// * `source_text` - The contents of the input.
    /// * `file_type` - Either [`FileType::Source`] or [`FileType::AST`].
    /// * `prefs` - Interpreter settings.
    pub fn new(
        language: &'a mut dyn MutableLanguage,
        source_name: &str,
        source_text: Vec<u8>,
        file_type: FileType,
        prefs: Preferences,
    ) -> MutantEmitter<'a> {
        MutantEmitter {
            language,
            source_name: String::from(source_name),
            source_text,
            file_type,
            prefs,
        }
    }

    /// Load a fresh tree, rewrite `site` and print the result.
    ///
    /// # Arguments
    ///
    /// * `site` - The site to rewrite.
    ///
    /// # Errors
    ///
    /// Returns [`PyMutantError::SiteNotReached`] when the pass rewrote nothing.
    pub fn generate(&mut self, site: &CandidateSite) -> Result<Mutant, PyMutantError> {
        let ast: Value = self.language.load_ast_from_text(
            &self.source_text,
            &self.source_name,
            &self.file_type,
            &self.prefs,
        )?;

        let mutate_ast_result = self.language.mutate_ast(ast, site)?;
        let Some(result) = mutate_ast_result.mutator_result else {
            return Err(PyMutantError::SiteNotReached(site.id));
        };

        let mut text: Vec<u8> = Vec::new();
        let mut pretty_printer = PrettyPrinter::new_for_source(TAB_WIDTH);
        self.language
            .pretty_print_ast_to_stream(&mutate_ast_result.ast, &mut text, &mut pretty_printer)?;

        Ok(Mutant {
            site: *site,
            text,
            note: result.note,
        })
    }

    /// Record a successful entry and write its note to `diagnostics`.
    fn record_success(
        record: &mut EmissionRecord,
        mutant: Mutant,
        diagnostics: &mut dyn Write,
    ) -> Result<(), PyMutantError> {
        if let Some(note) = &mutant.note {
            writeln!(diagnostics, "{note}")?;
        }
        record.note = mutant.note;
        Ok(())
    }

    /// Record a failed entry.
    fn record_failure(&self, record: &mut EmissionRecord, e: PyMutantError) {
        log::error!(
            "Unable to generate mutant {} of {} (site {}, {}): {}",
            record.index,
            self.source_name,
            record.site,
            record.mutation_type,
            e
        );
        record.error = Some(e.to_string());
    }

    /// Generate every mutant of `plan` and write mutant `i` to `<output_directory>/<i>.py`,
    /// followed by the manifest.
    ///
    /// # Arguments
    ///
    /// * `plan` - The plan to emit.
    /// * `output_directory` - The directory that receives the files.  It is created if needed.
    /// * `diagnostics` - The stream that receives the operator replacement notes.
    pub fn emit_to_directory(
        &mut self,
        plan: &MutationPlan,
        output_directory: &Path,
        diagnostics: &mut dyn Write,
    ) -> Result<EmissionReport, PyMutantError> {
        std::fs::create_dir_all(output_directory)?;

        let extension = String::from(self.language.get_extension_for_output_file());
        let mut report = EmissionReport::new(&self.source_name, plan);

        for (index, site) in plan.iter().enumerate() {
            let mut record = EmissionRecord::new(index, site);
            let file_name = format!("{index}.{extension}");
            let file_path = output_directory.join(&file_name);

            match self
                .generate(site)
                .and_then(|m| std::fs::write(&file_path, &m.text).map(|_| m).map_err(|e| e.into()))
            {
                Ok(mutant) => {
                    log::info!(
                        "{} used to create mutant written to {}",
                        site.mutation_type,
                        file_path.display()
                    );
                    record.file = Some(file_name);
                    Self::record_success(&mut record, mutant, diagnostics)?;
                }
                Err(e) => self.record_failure(&mut record, e),
            }

            report.mutants.push(record);
        }

        let manifest = serde_json::to_string_pretty(&report)?;
        std::fs::write(output_directory.join(MANIFEST_FILE_NAME), manifest + "\n")?;

        Ok(report)
    }

    /// Generate every mutant of `plan` and write them to `stream`, each preceded by a comment
    /// line naming the plan position and site.
    ///
    /// # Arguments
    ///
    /// * `plan` - The plan to emit.
    /// * `stream` - The stream that receives the mutants.
    /// * `diagnostics` - The stream that receives the operator replacement notes.
    pub fn emit_to_stream(
        &mut self,
        plan: &MutationPlan,
        stream: &mut dyn Write,
        diagnostics: &mut dyn Write,
    ) -> Result<EmissionReport, PyMutantError> {
        let mut report = EmissionReport::new(&self.source_name, plan);

        for (index, site) in plan.iter().enumerate() {
            let mut record = EmissionRecord::new(index, site);

            match self.generate(site) {
                Ok(mutant) => {
                    writeln!(
                        stream,
                        "# mutant {}: {} at site {}",
                        index, site.mutation_type, site.id
                    )?;
                    stream.write_all(&mutant.text)?;
                    Self::record_success(&mut record, mutant, diagnostics)?;
                }
                Err(e) => self.record_failure(&mut record, e),
            }

            report.mutants.push(record);
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutation::MutationType;
    use crate::planner::PlannerSettings;
    use crate::python::sample_trees::*;
    use crate::python::PythonLanguageInterface;
    use std::fs;

    fn scenario_plan(
        language: &mut PythonLanguageInterface,
        settings: &PlannerSettings,
    ) -> MutationPlan {
        let candidates = language.enumerate_candidate_sites(&scenario_tree()).unwrap();
        MutationPlan::new(&candidates, settings)
    }

    #[test]
    fn test_emit_every_candidate_to_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut language = PythonLanguageInterface::new();
        let plan = scenario_plan(&mut language, &PlannerSettings::default());
        let prefs = language.default_interpreter_settings();

        let mut diagnostics = Vec::new();
        let mut emitter = MutantEmitter::new(
            &mut language,
            "scenario.json",
            scenario_tree().to_string().into_bytes(),
            FileType::AST,
            prefs,
        );
        let report = emitter
            .emit_to_directory(&plan, dir.path(), &mut diagnostics)
            .unwrap();

        assert_eq!(report.succeeded(), 5);
        assert_eq!(report.failed(), 0);
        for (index, site) in plan.iter().enumerate() {
            let text = fs::read_to_string(dir.path().join(format!("{index}.py"))).unwrap();
            assert_ne!(text, SCENARIO_SOURCE);
            assert_eq!(report.mutants[index].site, site.id);
        }

        // Only operator flips write a note.
        let diagnostics = String::from_utf8(diagnostics).unwrap();
        let mut notes: Vec<&str> = diagnostics.lines().collect();
        notes.sort();
        assert_eq!(notes, vec!["replacing Add with Sub", "replacing Gt with LtE"]);

        let manifest: Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join(MANIFEST_FILE_NAME)).unwrap())
                .unwrap();
        assert_eq!(manifest["candidate_count"], 5);
        assert_eq!(manifest["seed"], 38473);
        assert_eq!(manifest["mutants"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_cap_limits_the_mutants() {
        let dir = tempfile::tempdir().unwrap();
        let mut language = PythonLanguageInterface::new();
        let plan = scenario_plan(&mut language, &PlannerSettings { seed: 11, cap: 2 });
        let prefs = language.default_interpreter_settings();

        let mut emitter = MutantEmitter::new(
            &mut language,
            "scenario.json",
            scenario_tree().to_string().into_bytes(),
            FileType::AST,
            prefs,
        );
        let report = emitter
            .emit_to_directory(&plan, dir.path(), &mut std::io::sink())
            .unwrap();

        assert_eq!(report.mutants.len(), 2);
        assert!(dir.path().join("0.py").exists());
        assert!(dir.path().join("1.py").exists());
        assert!(!dir.path().join("2.py").exists());
    }

    #[test]
    fn test_failed_entry_leaves_a_gap() {
        let dir = tempfile::tempdir().unwrap();
        let mut language = PythonLanguageInterface::new();
        let prefs = language.default_interpreter_settings();
        let plan = MutationPlan {
            settings: PlannerSettings::default(),
            candidate_count: 5,
            sites: vec![
                CandidateSite {
                    id: 2,
                    node_id: Some(14),
                    mutation_type: MutationType::BinaryOp,
                },
                CandidateSite {
                    id: 2,
                    node_id: Some(99),
                    mutation_type: MutationType::BinaryOp,
                },
                CandidateSite {
                    id: 4,
                    node_id: Some(5),
                    mutation_type: MutationType::IfStatement,
                },
            ],
        };

        let mut emitter = MutantEmitter::new(
            &mut language,
            "scenario.json",
            scenario_tree().to_string().into_bytes(),
            FileType::AST,
            prefs,
        );
        let report = emitter
            .emit_to_directory(&plan, dir.path(), &mut std::io::sink())
            .unwrap();

        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failed(), 1);
        assert_eq!(
            fs::read_to_string(dir.path().join("0.py")).unwrap(),
            "x = 1\nif x > 0:\n    y = x - 1\n"
        );
        assert!(!dir.path().join("1.py").exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("2.py")).unwrap(),
            "x = 1\nif True:\n    y = x + 1\n"
        );
        assert!(report.mutants[1].error.is_some());
        assert_eq!(report.mutants[1].file, None);
    }

    #[test]
    fn test_emit_to_stream() {
        let mut language = PythonLanguageInterface::new();
        let prefs = language.default_interpreter_settings();
        let plan = MutationPlan {
            settings: PlannerSettings::default(),
            candidate_count: 5,
            sites: vec![
                CandidateSite {
                    id: 3,
                    node_id: Some(11),
                    mutation_type: MutationType::Assignment,
                },
                CandidateSite {
                    id: 7,
                    node_id: None,
                    mutation_type: MutationType::Comparison,
                },
            ],
        };

        let mut out = Vec::new();
        let mut emitter = MutantEmitter::new(
            &mut language,
            "scenario.json",
            scenario_tree().to_string().into_bytes(),
            FileType::AST,
            prefs,
        );
        let report = emitter
            .emit_to_stream(&plan, &mut out, &mut std::io::sink())
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "# mutant 0: Assignment at site 3\nx = 1\nif x > 0:\n    y = None\n"
        );
        assert_eq!(report.succeeded(), 1);
        assert_eq!(
            report.mutants[1].error.as_deref(),
            Some("Site 7 was not reached or could not be rewritten")
        );
    }
}
