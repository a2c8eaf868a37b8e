//! Complexity classes and their canonical scores.
//!
//! The label table is bijective: every class owns one score in `[0, 1]`.
//! Mapping a score back to a class picks the closest canonical score.

use crate::errors::AnalysisError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComplexityClass {
    Constant,
    Logarithmic,
    Linear,
    Linearithmic,
    Quadratic,
    Cubic,
    Exponential,
}

impl ComplexityClass {
    /// Table order. Ties in [`ComplexityClass::from_score`] resolve to the
    /// earliest entry.
    pub const ALL: [ComplexityClass; 7] = [
        Self::Constant,
        Self::Logarithmic,
        Self::Linear,
        Self::Linearithmic,
        Self::Quadratic,
        Self::Cubic,
        Self::Exponential,
    ];

    pub const fn score(self) -> f64 {
        match self {
            Self::Constant => 0.10,
            Self::Logarithmic => 0.30,
            Self::Linear => 0.50,
            Self::Linearithmic => 0.65,
            Self::Quadratic => 0.75,
            Self::Cubic => 0.85,
            Self::Exponential => 0.95,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Constant => "O(1)",
            Self::Logarithmic => "O(log n)",
            Self::Linear => "O(n)",
            Self::Linearithmic => "O(n log n)",
            Self::Quadratic => "O(n²)",
            Self::Cubic => "O(n³)",
            Self::Exponential => "O(2ⁿ)",
        }
    }

    /// Plain-language reading of the class.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Constant => "Constant time. Does not depend on the input size.",
            Self::Logarithmic => "Logarithmic. Halves the problem each step, like binary search.",
            Self::Linear => "Linear. A single pass over the input.",
            Self::Linearithmic => "Linearithmic. Efficient sorting such as merge sort or quick sort.",
            Self::Quadratic => "Quadratic. Nested loops, as in bubble or insertion sort.",
            Self::Cubic => "Cubic. Three nested loops, typical of naive matrix operations.",
            Self::Exponential => "Exponential. Very inefficient, like naive recursive Fibonacci.",
        }
    }

    /// Nearest class for an arbitrary score.
    ///
    /// The score is clamped to `[0, 1]` first. A NaN score matches nothing
    /// and falls back to linear.
    pub fn from_score(score: f64) -> Self {
        let score = score.clamp(0.0, 1.0);
        let mut closest = Self::Linear;
        let mut min_diff = f64::INFINITY;

        for class in Self::ALL {
            let diff = (score - class.score()).abs();
            if diff < min_diff {
                min_diff = diff;
                closest = class;
            }
        }

        closest
    }
}

impl fmt::Display for ComplexityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ComplexityClass {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let class = match normalized.as_str() {
            "O(1)" => Self::Constant,
            "O(logn)" => Self::Logarithmic,
            "O(n)" => Self::Linear,
            "O(nlogn)" => Self::Linearithmic,
            "O(n²)" | "O(n^2)" => Self::Quadratic,
            "O(n³)" | "O(n^3)" => Self::Cubic,
            "O(2ⁿ)" | "O(2^n)" => Self::Exponential,
            _ => return Err(AnalysisError::UnknownLabel(s.to_string())),
        };
        Ok(class)
    }
}

impl Serialize for ComplexityClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ComplexityClass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}
