//! Name- and idiom-based hints about well-known algorithms.
//!
//! Hints are reported alongside a classification but never feed the rule
//! cascade.

use super::patterns::compile;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static FIBONACCI_NAME: Lazy<Regex> = Lazy::new(|| compile(r"(?i)fib|fibonacci"));
static DOUBLE_RECURRENCE: Lazy<Regex> =
    Lazy::new(|| compile(r"return\s+\w+\s*[-+]\s*\d+\s*\+\s*\w+"));
static BINARY_SEARCH_NAMES: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)left.*right|binarySearch|binary"));
static MIDPOINT: Lazy<Regex> = Lazy::new(|| compile(r"mid.*=.*Math\.floor.*\(\s*\("));
static SORT_NAMES: Lazy<Regex> = Lazy::new(|| compile(r"(?i)sort|linearSearch"));
static LENGTH_BOUNDED_FOR: Lazy<Regex> =
    Lazy::new(|| compile(r"for\s*\([^)]*<\s*\w*\.length"));

/// Weighted votes per growth family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AlgorithmHints {
    pub exponential: u32,
    pub polynomial: u32,
    pub logarithmic: u32,
    pub linear: u32,
}

impl AlgorithmHints {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Family with the most votes, earliest family first on ties.
    pub fn strongest(&self) -> Option<(&'static str, u32)> {
        [
            ("exponential", self.exponential),
            ("polynomial", self.polynomial),
            ("logarithmic", self.logarithmic),
            ("linear", self.linear),
        ]
        .into_iter()
        .filter(|(_, votes)| *votes > 0)
        .fold(None, |best, candidate| match best {
            Some((_, top)) if top >= candidate.1 => best,
            _ => Some(candidate),
        })
    }
}

pub fn detect_hints(code: &str) -> AlgorithmHints {
    let mut hints = AlgorithmHints::default();

    if FIBONACCI_NAME.is_match(code) {
        hints.exponential += 2;
    }
    if DOUBLE_RECURRENCE.is_match(code) {
        hints.exponential += 1;
    }
    if BINARY_SEARCH_NAMES.is_match(code) {
        hints.logarithmic += 2;
    }
    if MIDPOINT.is_match(code) {
        hints.logarithmic += 1;
    }
    if SORT_NAMES.is_match(code) {
        hints.polynomial += 1;
    }
    if LENGTH_BOUNDED_FOR.is_match(code) {
        hints.linear += 1;
    }

    hints
}
