//! Line-based loop nesting estimation.
//!
//! Nesting is tracked with a single counter: loop openers on a line push it
//! up, every closing brace on the line pulls it down. Braces are not matched
//! to the construct that opened them, so closing an `if` block also closes a
//! "loop". The classifier thresholds are calibrated against this
//! approximation, so it must stay this way.

use super::patterns::{count_matches, NESTING_OPENERS, TOP_LEVEL_LOOP};

/// Maximum value the running loop counter reaches across all lines.
pub fn count_nested_loops(code: &str) -> u64 {
    let mut max_nesting = 0u64;
    let mut current = 0u64;

    for line in code.split('\n') {
        let opened: u64 = NESTING_OPENERS
            .iter()
            .map(|pattern| count_matches(pattern, line))
            .sum();
        let closed = line.matches('}').count() as u64;

        current = (current + opened).saturating_sub(closed);
        max_nesting = max_nesting.max(current);
    }

    max_nesting
}

/// Lines that start at column zero and open a `for`/`while` loop.
pub fn count_top_level_loops(code: &str) -> u64 {
    code.split('\n')
        .filter(|line| {
            let stripped = line.trim_start();
            !stripped.is_empty() && stripped.len() == line.len() && TOP_LEVEL_LOOP.is_match(line)
        })
        .count() as u64
}

/// Deepest indentation of any non-blank line, in 4-column units.
pub(crate) fn max_indent_depth(code: &str) -> u64 {
    code.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let stripped = line.trim_start();
            (line.chars().count() - stripped.chars().count()) as u64
        })
        .max()
        .map_or(0, |indent| indent / 4)
}
