//! Human-readable explanation of a classification.

use crate::classifier::ComplexityClass;
use crate::features::FeatureVector;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DominantFactor {
    NoLoops,
    TripleNesting { depth: u64 },
    DoubleNesting { depth: u64 },
    IndependentLoops { count: u64 },
    SingleLoop,
}

impl fmt::Display for DominantFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLoops => write!(f, "no loops -> O(1)"),
            Self::TripleNesting { depth } => write!(f, "{depth} nested levels -> O(n³)"),
            Self::DoubleNesting { depth } => write!(f, "{depth} nested levels -> O(n²)"),
            Self::IndependentLoops { count } => {
                write!(f, "{count} independent (non-nested) loops -> O(n)")
            }
            Self::SingleLoop => write!(f, "a single loop -> O(n)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub for_loops: u64,
    pub while_loops: u64,
    pub max_nesting: u64,
    pub has_recursion: bool,
    pub container_calls: u64,
    pub search_calls: u64,
    pub dominant: DominantFactor,
    pub notes: Vec<String>,
    pub interpretation: String,
}

pub fn explain(features: &FeatureVector, class: ComplexityClass) -> Explanation {
    let loops = features.total_loops();
    let nesting = features.max_loop_nesting;

    let dominant = match (loops, nesting) {
        (0, _) => DominantFactor::NoLoops,
        (_, depth) if depth >= 3 => DominantFactor::TripleNesting { depth },
        (_, 2) => DominantFactor::DoubleNesting { depth: 2 },
        (count, _) if count >= 2 => DominantFactor::IndependentLoops { count },
        _ => DominantFactor::SingleLoop,
    };

    let mut notes = Vec::new();
    if features.for_loops > nesting + 1 {
        notes.push(format!(
            "{} for loops in total but only {} nesting level(s); some loops are independent",
            features.for_loops, nesting
        ));
    }
    if features.recursive_functions > 0 && nesting == 0 {
        notes.push("recursion detected; may be O(2ⁿ)".to_string());
    }

    Explanation {
        for_loops: features.for_loops,
        while_loops: features.while_loops,
        max_nesting: nesting,
        has_recursion: features.recursive_functions > 0,
        container_calls: features.container_method_calls,
        search_calls: features.search_method_calls,
        dominant,
        notes,
        interpretation: class.description().to_string(),
    }
}
