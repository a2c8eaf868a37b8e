//! Heuristic time-complexity estimation for JavaScript-style snippets.
//!
//! Source text is reduced to a fixed 20-field [`FeatureVector`] of lexical
//! counts, and a first-match rule cascade maps that vector to one of seven
//! [`ComplexityClass`] labels with a confidence in `[0.65, 0.98]`.
//!
//! ```rust
//! use bigo::{ComplexityAnalyzer, ComplexityClass, JitterMode};
//!
//! let analyzer = ComplexityAnalyzer::ready(JitterMode::Disabled);
//! let prediction = analyzer.predict("let total = a + b;").unwrap();
//! assert_eq!(prediction.result.class, ComplexityClass::Constant);
//! assert_eq!(prediction.result.confidence, 0.95);
//! ```

// Export modules for library usage
pub mod classifier;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod explain;
pub mod features;
pub mod io;
pub mod report;
pub mod validation;

// Re-export commonly used types
pub use crate::classifier::{
    classify, classify_without_jitter, ClassificationResult, ComplexityAnalyzer, ComplexityClass,
    JitterMode, RuleId,
};
pub use crate::errors::{AnalysisError, Result};
pub use crate::explain::{explain, DominantFactor, Explanation};
pub use crate::features::{detect_hints, extract_features, AlgorithmHints, FeatureVector};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::report::{AnalysisReport, SnippetOutcome, SnippetReport};
pub use crate::validation::validate_script;
