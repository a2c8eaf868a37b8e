use crate::errors::AnalysisError;
use serde::{Deserialize, Serialize};

/// Number of scalars in every feature vector.
pub const FEATURE_COUNT: usize = 20;

/// Field names in vector order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "line_count",
    "for_loops",
    "while_loops",
    "max_loop_nesting",
    "recursive_functions",
    "container_method_calls",
    "search_method_calls",
    "sort_method_calls",
    "max_indent_depth",
    "variable_declarations",
    "if_statements",
    "switch_statements",
    "char_length",
    "function_definitions",
    "string_method_calls",
    "object_method_calls",
    "json_method_calls",
    "try_blocks",
    "async_markers",
    "complexity_multiplier",
];

/// Structural summary of one source snippet.
///
/// Field order is fixed and mirrors [`FEATURE_NAMES`]; `as_array` and
/// `TryFrom<&[u64]>` convert to and from the positional form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FeatureVector {
    pub line_count: u64,
    pub for_loops: u64,
    pub while_loops: u64,
    pub max_loop_nesting: u64,
    pub recursive_functions: u64,
    pub container_method_calls: u64,
    pub search_method_calls: u64,
    pub sort_method_calls: u64,
    pub max_indent_depth: u64,
    pub variable_declarations: u64,
    pub if_statements: u64,
    pub switch_statements: u64,
    pub char_length: u64,
    pub function_definitions: u64,
    pub string_method_calls: u64,
    pub object_method_calls: u64,
    pub json_method_calls: u64,
    pub try_blocks: u64,
    pub async_markers: u64,
    pub complexity_multiplier: u64,
}

impl FeatureVector {
    /// Total loop headers (`for` plus `while`).
    pub fn total_loops(&self) -> u64 {
        self.for_loops + self.while_loops
    }

    /// Derived multiplier: loops scaled by nesting, or 1 when loop-free.
    pub fn multiplier_for(total_loops: u64, nesting: u64) -> u64 {
        if total_loops > 0 {
            total_loops * nesting.max(1)
        } else {
            1
        }
    }

    pub fn as_array(&self) -> [u64; FEATURE_COUNT] {
        [
            self.line_count,
            self.for_loops,
            self.while_loops,
            self.max_loop_nesting,
            self.recursive_functions,
            self.container_method_calls,
            self.search_method_calls,
            self.sort_method_calls,
            self.max_indent_depth,
            self.variable_declarations,
            self.if_statements,
            self.switch_statements,
            self.char_length,
            self.function_definitions,
            self.string_method_calls,
            self.object_method_calls,
            self.json_method_calls,
            self.try_blocks,
            self.async_markers,
            self.complexity_multiplier,
        ]
    }

    /// Always [`FEATURE_COUNT`].
    pub fn len(&self) -> usize {
        FEATURE_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// `(name, value)` pairs in vector order.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, u64)> {
        FEATURE_NAMES.into_iter().zip(self.as_array())
    }
}

impl From<[u64; FEATURE_COUNT]> for FeatureVector {
    fn from(v: [u64; FEATURE_COUNT]) -> Self {
        Self {
            line_count: v[0],
            for_loops: v[1],
            while_loops: v[2],
            max_loop_nesting: v[3],
            recursive_functions: v[4],
            container_method_calls: v[5],
            search_method_calls: v[6],
            sort_method_calls: v[7],
            max_indent_depth: v[8],
            variable_declarations: v[9],
            if_statements: v[10],
            switch_statements: v[11],
            char_length: v[12],
            function_definitions: v[13],
            string_method_calls: v[14],
            object_method_calls: v[15],
            json_method_calls: v[16],
            try_blocks: v[17],
            async_markers: v[18],
            complexity_multiplier: v[19],
        }
    }
}

impl TryFrom<&[u64]> for FeatureVector {
    type Error = AnalysisError;

    fn try_from(values: &[u64]) -> Result<Self, Self::Error> {
        let array: [u64; FEATURE_COUNT] = values
            .try_into()
            .map_err(|_| AnalysisError::invalid_vector(values.len()))?;
        Ok(Self::from(array))
    }
}

impl From<FeatureVector> for Vec<u64> {
    fn from(features: FeatureVector) -> Self {
        features.as_array().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_conversion_preserves_positions() {
        let mut values = [0u64; FEATURE_COUNT];
        for (i, v) in values.iter_mut().enumerate() {
            *v = i as u64 * 3;
        }
        let features = FeatureVector::from(values);
        assert_eq!(features.max_loop_nesting, 9);
        assert_eq!(features.string_method_calls, 42);
        assert_eq!(features.as_array(), values);
    }

    #[test]
    fn test_try_from_rejects_wrong_length() {
        let short = [1u64; 19];
        let err = FeatureVector::try_from(&short[..]).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InvalidFeatureVector { actual: 19, .. }
        ));
    }

    #[test]
    fn test_multiplier_defaults_to_one_without_loops() {
        assert_eq!(FeatureVector::multiplier_for(0, 4), 1);
        assert_eq!(FeatureVector::multiplier_for(3, 0), 3);
        assert_eq!(FeatureVector::multiplier_for(3, 2), 6);
    }

    #[test]
    fn test_named_pairs_follow_vector_order() {
        let features = FeatureVector {
            line_count: 7,
            complexity_multiplier: 2,
            ..Default::default()
        };
        let named: Vec<_> = features.named().collect();
        assert_eq!(named.len(), FEATURE_COUNT);
        assert_eq!(named[0], ("line_count", 7));
        assert_eq!(named[19], ("complexity_multiplier", 2));
    }
}
