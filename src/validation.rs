//! Front-end check that a snippet looks like JavaScript-style script code.
//!
//! The check is a keyword heuristic, not a parser. Snippets carrying
//! obvious markers of another language are rejected first; the rest must
//! show a minimum number of script-syntax patterns.

use crate::errors::{AnalysisError, Result};
use crate::features::patterns::compile;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForeignLanguage {
    Python,
    Java,
    CFamily,
}

impl fmt::Display for ForeignLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Python => write!(f, "Python"),
            Self::Java => write!(f, "Java"),
            Self::CFamily => write!(f, "C/C++"),
        }
    }
}

const PYTHON_MARKERS: &[&str] = &["def ", "__name__", "self."];
const JAVA_MARKERS: &[&str] = &[
    "public class",
    "public static",
    "System.out",
    "@Override",
    "@Deprecated",
    "import java",
];
const C_FAMILY_MARKERS: &[&str] = &[
    "#include", "std::", "cout", "cin", "int main", "printf", "scanf",
];

static PYTHON_DEF: Lazy<Regex> = Lazy::new(|| compile(r"\bdef\s+\w+\s*\("));

static SCRIPT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\bfunction\s+\w+\s*\(",
        r"\bconst\s+\w+\s*=",
        r"\blet\s+\w+\s*=",
        r"\bvar\s+\w+\s*=",
        r"=>",
        r"\bfor\s*\(",
        r"\bwhile\s*\(",
        r"\bif\s*\(",
        r"\breturn\s+",
        r"\.map\s*\(",
        r"\.filter\s*\(",
        r"\.forEach\s*\(",
    ]
    .iter()
    .map(|p| compile(p))
    .collect()
});

/// Language whose markers appear in `code`, checked Python, Java, C-family.
pub fn detect_foreign_language(code: &str) -> Option<ForeignLanguage> {
    let has_any = |markers: &[&str]| markers.iter().any(|m| code.contains(m));

    if has_any(PYTHON_MARKERS) || PYTHON_DEF.is_match(code) {
        Some(ForeignLanguage::Python)
    } else if has_any(JAVA_MARKERS) {
        Some(ForeignLanguage::Java)
    } else if has_any(C_FAMILY_MARKERS) {
        Some(ForeignLanguage::CFamily)
    } else {
        None
    }
}

/// Number of distinct script-syntax patterns present in `code`.
pub fn script_pattern_hits(code: &str) -> usize {
    SCRIPT_PATTERNS.iter().filter(|p| p.is_match(code)).count()
}

/// Accepts `code` when it is non-blank, free of foreign-language markers and
/// shows at least `min_patterns` script patterns.
pub fn validate_script(code: &str, min_patterns: usize) -> Result<()> {
    if code.trim().is_empty() {
        return Err(AnalysisError::validation("snippet is empty"));
    }

    if let Some(language) = detect_foreign_language(code) {
        return Err(AnalysisError::validation(format!(
            "snippet looks like {language}, only JavaScript-style code is supported"
        )));
    }

    let hits = script_pattern_hits(code);
    if hits < min_patterns {
        return Err(AnalysisError::validation(format!(
            "snippet matched {hits} script pattern(s), at least {min_patterns} required"
        )));
    }

    Ok(())
}
