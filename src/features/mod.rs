//! Feature extraction: source text to a fixed 20-field [`FeatureVector`].
//!
//! Extraction is a pure, total function of its input. Empty or unrecognised
//! text yields a vector of (mostly) zero counts rather than an error.
//!
//! ```
//! use bigo::features::extract_features;
//!
//! let features = extract_features("function suma(a,b){ return a+b; }");
//! assert_eq!(features.total_loops(), 0);
//! assert_eq!(features.function_definitions, 1);
//! assert_eq!(features.as_array().len(), 20);
//! ```

pub mod hints;
pub mod nesting;
pub(crate) mod patterns;
pub mod recursion;
pub mod vector;

pub use hints::{detect_hints, AlgorithmHints};
pub use nesting::{count_nested_loops, count_top_level_loops};
pub use recursion::count_recursion_calls;
pub use vector::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};

use patterns::*;

/// Extracts the full feature vector from `code`.
pub fn extract_features(code: &str) -> FeatureVector {
    let for_loops = count_matches(&FOR_LOOP, code);
    let while_loops = count_matches(&WHILE_LOOP, code);
    let max_loop_nesting = count_nested_loops(code);

    FeatureVector {
        line_count: code.split('\n').count() as u64,
        for_loops,
        while_loops,
        max_loop_nesting,
        recursive_functions: count_recursion_calls(code),
        container_method_calls: count_matches(&CONTAINER_METHODS, code),
        search_method_calls: count_matches(&SEARCH_METHODS, code),
        sort_method_calls: count_matches(&SORT_METHODS, code),
        max_indent_depth: nesting::max_indent_depth(code),
        variable_declarations: count_matches(&VARIABLE_DECLARATION, code),
        if_statements: count_matches(&IF_STATEMENT, code),
        switch_statements: count_matches(&SWITCH_STATEMENT, code),
        char_length: code.chars().count() as u64,
        function_definitions: count_matches(&FUNCTION_DEFINITION, code),
        string_method_calls: count_matches(&STRING_METHODS, code),
        object_method_calls: count_matches(&OBJECT_METHODS, code),
        json_method_calls: count_matches(&JSON_METHODS, code),
        try_blocks: count_matches(&TRY_BLOCK, code),
        async_markers: count_matches(&ASYNC_MARKER, code),
        complexity_multiplier: FeatureVector::multiplier_for(
            for_loops + while_loops,
            max_loop_nesting,
        ),
    }
}
