//! The Static Code Analyzer.
//!
//! `analyze` is total: malformed or unsupported input degrades to the text-signature
//! path and is recorded as an issue. The analyzer holds only thresholds and a reference
//! to the shared Pattern Library, so one instance can serve any number of threads.

use std::collections::BTreeSet;

use mentor_core::config::AnalysisConfig;
use mentor_core::ComplexityClass;
use rayon::prelude::*;
use tracing::{debug, instrument, warn};

use crate::complexity;
use crate::language::Language;
use crate::parsing::{self, NodeKinds};
use crate::patterns::{AlgorithmCategory, CodingPattern, DataStructureKind, PatternLibrary};
use crate::scoring;
use crate::structural;
use crate::suggestions;
use crate::types::{AnalysisPath, CodeAnalysisResult};

/// One submission for batch analysis.
#[derive(Debug, Clone, Copy)]
pub struct Submission<'a> {
    pub source: &'a str,
    pub language: &'a str,
}

pub struct StaticAnalyzer {
    long_function_lines: u32,
    max_conditional_nesting: u32,
    library: &'static PatternLibrary,
}

impl Default for StaticAnalyzer {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

/// Everything but the scores and suggestions.
struct Findings {
    path: AnalysisPath,
    function_count: u32,
    loop_count: u32,
    conditional_count: u32,
    exception_handler_count: u32,
    cyclomatic_complexity: u32,
    max_nesting_depth: u32,
    time: ComplexityClass,
    space: ComplexityClass,
    issues: Vec<String>,
    long_functions: bool,
    deep_nesting: bool,
}

impl Findings {
    fn empty(path: AnalysisPath) -> Self {
        Self {
            path,
            function_count: 0,
            loop_count: 0,
            conditional_count: 0,
            exception_handler_count: 0,
            cyclomatic_complexity: 0,
            max_nesting_depth: 0,
            time: ComplexityClass::O1,
            space: ComplexityClass::O1,
            issues: Vec::new(),
            long_functions: false,
            deep_nesting: false,
        }
    }
}

impl StaticAnalyzer {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            long_function_lines: config.effective_long_function_lines(),
            max_conditional_nesting: config.effective_max_conditional_nesting(),
            library: PatternLibrary::global(),
        }
    }

    #[instrument(skip(self, source), fields(bytes = source.len()))]
    pub fn analyze(&self, source: &str, language: &str) -> CodeAnalysisResult {
        let resolved = Language::from_tag(language);
        let lines_of_code = count_lines(source);

        if source.trim().is_empty() {
            let path = match resolved {
                Some(_) => AnalysisPath::Structural,
                None => AnalysisPath::TextSignature,
            };
            return self.assemble(
                language,
                lines_of_code,
                Findings::empty(path),
                BTreeSet::new(),
                BTreeSet::new(),
                BTreeSet::new(),
            );
        }

        let mut patterns = self.library.detect_coding_patterns(source);
        let algorithms = self.library.detect_algorithms(source);
        let data_structures = self.library.detect_data_structures(source);

        let findings = match resolved {
            Some(lang) => {
                let prepared = parsing::prepare_source(source, lang);
                match parsing::parse(&prepared, lang) {
                    Ok(tree) => {
                        let metrics =
                            structural::measure(&tree, &prepared, NodeKinds::for_language(lang));
                        if metrics.has_recursion() {
                            patterns.insert(CodingPattern::Recursion);
                        }
                        self.structural_findings(&metrics, source)
                    }
                    Err(e) => {
                        warn!(language = %lang, error = %e, "structural parse failed, using text signatures");
                        self.textual_findings(source, e.to_string())
                    }
                }
            }
            None => {
                debug!(language, "no structural parser, using text signatures");
                self.textual_findings(
                    source,
                    format!(
                        "No structural parser for language '{language}'; used text-signature analysis"
                    ),
                )
            }
        };

        let result = self.assemble(
            language,
            lines_of_code,
            findings,
            patterns,
            algorithms,
            data_structures,
        );
        debug!(
            path = ?result.analysis_path,
            time = %result.time_complexity,
            issues = result.issues.len(),
            complexity_score = result.complexity_score,
            quality_score = result.quality_score,
            "analysis complete"
        );
        result
    }

    /// Analyze submissions in parallel. Output order matches input order.
    pub fn analyze_batch(&self, submissions: &[Submission<'_>]) -> Vec<CodeAnalysisResult> {
        submissions
            .par_iter()
            .map(|s| self.analyze(s.source, s.language))
            .collect()
    }

    fn structural_findings(&self, metrics: &structural::StructuralMetrics, source: &str) -> Findings {
        let mut issues = Vec::new();

        let mut long_functions = false;
        for function in &metrics.functions {
            if function.line_span > self.long_function_lines as usize {
                long_functions = true;
                issues.push(format!(
                    "Function '{}' is too long ({} lines)",
                    function.name, function.line_span
                ));
            }
        }

        let deep_nesting = metrics.max_conditional_depth > self.max_conditional_nesting;
        if deep_nesting {
            issues.push(format!(
                "Deep nesting detected (level {})",
                metrics.max_conditional_depth
            ));
        }

        if metrics.has_single_letter_identifier {
            issues.push("Single letter variable names detected".to_string());
        }

        let (time, space) = complexity::estimate_structural(metrics, source, self.library);

        Findings {
            path: AnalysisPath::Structural,
            function_count: metrics.function_count,
            loop_count: metrics.loop_count,
            conditional_count: metrics.conditional_count,
            exception_handler_count: metrics.exception_handler_count,
            cyclomatic_complexity: metrics.cyclomatic_complexity(),
            max_nesting_depth: metrics.max_loop_depth,
            time,
            space,
            issues,
            long_functions,
            deep_nesting,
        }
    }

    fn textual_findings(&self, source: &str, reason: String) -> Findings {
        let (time, space) = complexity::estimate_textual(source, self.library);
        Findings {
            time,
            space,
            issues: vec![reason],
            ..Findings::empty(AnalysisPath::TextSignature)
        }
    }

    fn assemble(
        &self,
        language: &str,
        lines_of_code: u32,
        findings: Findings,
        patterns: BTreeSet<CodingPattern>,
        algorithms: BTreeSet<AlgorithmCategory>,
        data_structures: BTreeSet<DataStructureKind>,
    ) -> CodeAnalysisResult {
        let complexity_score = scoring::complexity_score(
            findings.time,
            findings.cyclomatic_complexity,
            findings.issues.len(),
        );
        let quality_score =
            scoring::quality_score(findings.issues.len(), patterns.len(), algorithms.len());

        let mut result = CodeAnalysisResult {
            language: language.to_string(),
            analysis_path: findings.path,
            lines_of_code,
            function_count: findings.function_count,
            loop_count: findings.loop_count,
            conditional_count: findings.conditional_count,
            exception_handler_count: findings.exception_handler_count,
            cyclomatic_complexity: findings.cyclomatic_complexity,
            max_nesting_depth: findings.max_nesting_depth,
            patterns,
            algorithms,
            data_structures,
            time_complexity: findings.time,
            space_complexity: findings.space,
            issues: findings.issues,
            suggestions: Vec::new(),
            complexity_score,
            quality_score,
        };
        result.suggestions =
            suggestions::suggest(&result, findings.long_functions, findings.deep_nesting);
        result
    }
}

/// Non-blank lines.
fn count_lines(source: &str) -> u32 {
    let lines = source.lines().filter(|l| !l.trim().is_empty()).count();
    u32::try_from(lines).unwrap_or(u32::MAX)
}
