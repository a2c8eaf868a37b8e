//! Compiled pattern library for lexical feature extraction.
//!
//! Every pattern is compiled once per process and shared read-only between
//! threads. Counts use non-overlapping, leftmost-first matching.

use once_cell::sync::Lazy;
use regex::Regex;

/// Compiles a built-in pattern. Only for string literals in this crate.
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}

// Loop headers
pub(crate) static FOR_LOOP: Lazy<Regex> = Lazy::new(|| compile(r"\bfor\s*\("));
pub(crate) static WHILE_LOOP: Lazy<Regex> = Lazy::new(|| compile(r"\bwhile\s*\("));

/// Loop openers used by the line-based nesting scan. `do` only counts when
/// followed by a paren or an opening brace.
pub(crate) static NESTING_OPENERS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        compile(r"\bfor\s*[\(\{]"),
        compile(r"\bwhile\s*[\(\{]"),
        compile(r"\bdo\s*[\(\{]"),
    ]
});

pub(crate) static TOP_LEVEL_LOOP: Lazy<Regex> = Lazy::new(|| compile(r"\b(for|while)\s*\("));

// Recursion
pub(crate) static FIB_SHORTCUT: Lazy<Regex> = Lazy::new(|| compile(r"fib\s*\(\s*\w+\s*[-+]"));

/// Named function with its body. The body stops at the first closing brace,
/// so nested blocks truncate it.
pub(crate) static FUNCTION_WITH_BODY: Lazy<Regex> =
    Lazy::new(|| compile(r"(?s)function\s+(\w+)\s*\([^)]*\)\s*\{([^}]*)\}"));

// Method families
pub(crate) static CONTAINER_METHODS: Lazy<Regex> = Lazy::new(|| {
    compile(r"\.(push|pop|map|filter|reduce|forEach|find|some|every)\s*\(")
});
pub(crate) static SEARCH_METHODS: Lazy<Regex> =
    Lazy::new(|| compile(r"\.(indexOf|includes|findIndex)\s*\("));
pub(crate) static SORT_METHODS: Lazy<Regex> = Lazy::new(|| compile(r"\.(sort|reverse)\s*\("));
pub(crate) static STRING_METHODS: Lazy<Regex> =
    Lazy::new(|| compile(r"\.(substring|slice|split|replace|charAt|charCodeAt)\s*\("));
pub(crate) static OBJECT_METHODS: Lazy<Regex> =
    Lazy::new(|| compile(r"Object\.(keys|values|entries|assign)"));
pub(crate) static JSON_METHODS: Lazy<Regex> = Lazy::new(|| compile(r"JSON\.(parse|stringify)"));

// Statements and declarations
pub(crate) static VARIABLE_DECLARATION: Lazy<Regex> =
    Lazy::new(|| compile(r"\b(let|const|var)\s+\w+"));
pub(crate) static IF_STATEMENT: Lazy<Regex> = Lazy::new(|| compile(r"\bif\s*\("));
pub(crate) static SWITCH_STATEMENT: Lazy<Regex> = Lazy::new(|| compile(r"\bswitch\s*\("));
pub(crate) static FUNCTION_DEFINITION: Lazy<Regex> =
    Lazy::new(|| compile(r"\bfunction\s+\w+|\w+\s*:\s*function|\w+\s*=\s*\(\s*\)"));
pub(crate) static TRY_BLOCK: Lazy<Regex> = Lazy::new(|| compile(r"\btry\s*\{"));
pub(crate) static ASYNC_MARKER: Lazy<Regex> =
    Lazy::new(|| compile(r"\basync\s*\(|Promise|\.then\(|\.catch\("));

/// Number of non-overlapping matches of `pattern` in `text`.
pub(crate) fn count_matches(pattern: &Regex, text: &str) -> u64 {
    pattern.find_iter(text).count() as u64
}

/// Builds the self-call matcher for a captured function name.
pub(crate) fn self_call_pattern(name: &str) -> Option<Regex> {
    Regex::new(&format!(r"\b{}\s*\(", regex::escape(name))).ok()
}
