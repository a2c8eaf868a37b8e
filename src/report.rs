//! Report model shared by the output writers.

use crate::classifier::analyzer::Prediction;
use crate::classifier::ComplexityClass;
use crate::explain::Explanation;
use crate::features::AlgorithmHints;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SnippetOutcome {
    Analyzed {
        prediction: Prediction,
        hints: AlgorithmHints,
        explanation: Explanation,
    },
    Rejected {
        reason: String,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct SnippetReport {
    /// File path, or `<stdin>`
    pub source: String,
    #[serde(flatten)]
    pub outcome: SnippetOutcome,
}

impl SnippetReport {
    pub fn class(&self) -> Option<ComplexityClass> {
        match &self.outcome {
            SnippetOutcome::Analyzed { prediction, .. } => Some(prediction.result.class),
            SnippetOutcome::Rejected { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportSummary {
    pub analyzed: usize,
    pub rejected: usize,
    /// Snippet count per class label, in table order
    pub by_class: BTreeMap<ComplexityClass, usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub version: &'static str,
    pub snippets: Vec<SnippetReport>,
    pub summary: ReportSummary,
}

impl AnalysisReport {
    pub fn new(snippets: Vec<SnippetReport>) -> Self {
        let summary = snippets
            .iter()
            .fold(ReportSummary::default(), |mut summary, snippet| {
                match snippet.class() {
                    Some(class) => {
                        summary.analyzed += 1;
                        *summary.by_class.entry(class).or_insert(0) += 1;
                    }
                    None => summary.rejected += 1,
                }
                summary
            });

        Self {
            version: env!("CARGO_PKG_VERSION"),
            snippets,
            summary,
        }
    }
}
