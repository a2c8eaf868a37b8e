//! The ordered rule cascade.
//!
//! Rules are evaluated top to bottom and the first predicate that holds
//! decides the score and base confidence. Several predicates overlap (rule 2
//! and rule 3, rule 4 and rule 8), so table order is part of the semantics.

use crate::features::FeatureVector;
use serde::{Deserialize, Serialize};

/// The subset of the feature vector the cascade reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signals {
    pub for_loops: u64,
    pub while_loops: u64,
    pub total_loops: u64,
    pub nested: u64,
    pub recursion: u64,
    pub arrays: u64,
    pub strings: u64,
    pub vars: u64,
    pub funcs: u64,
    pub lines: u64,
    pub length: u64,
}

impl From<&FeatureVector> for Signals {
    fn from(f: &FeatureVector) -> Self {
        Self {
            for_loops: f.for_loops,
            while_loops: f.while_loops,
            total_loops: f.total_loops(),
            nested: f.max_loop_nesting,
            recursion: f.recursive_functions,
            arrays: f.container_method_calls,
            strings: f.string_method_calls,
            vars: f.variable_declarations,
            funcs: f.function_definitions,
            lines: f.line_count,
            length: f.char_length,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    NoLoopsNoRecursion,
    TripleNestedFor,
    DoubleNestedLoops,
    DivideAndConquerRecursion,
    ShortBranchingRecursion,
    ShrinkingWhile,
    SingleFor,
    RecursionWithoutLoops,
    Fallback,
}

impl RuleId {
    /// 1-based position in the cascade.
    pub fn position(self) -> usize {
        RULES
            .iter()
            .position(|rule| rule.id == self)
            .map_or(RULES.len(), |i| i + 1)
    }

    /// Plain-language summary of the pattern the rule recognizes.
    pub fn description(self) -> &'static str {
        RULES[self.position() - 1].description
    }
}

pub struct Rule {
    pub id: RuleId,
    pub description: &'static str,
    pub score: f64,
    pub base_confidence: f64,
    pub matches: fn(&Signals) -> bool,
}

pub static RULES: [Rule; 9] = [
    Rule {
        id: RuleId::NoLoopsNoRecursion,
        description: "no loops, no recursion, no nesting",
        score: 0.10,
        base_confidence: 0.95,
        matches: |s| s.total_loops == 0 && s.recursion == 0 && s.nested == 0,
    },
    Rule {
        id: RuleId::TripleNestedFor,
        description: "three or more for loops nested three deep",
        score: 0.85,
        base_confidence: 0.95,
        matches: |s| s.for_loops >= 3 && s.nested >= 3,
    },
    Rule {
        id: RuleId::DoubleNestedLoops,
        description: "two or more loops nested two deep",
        score: 0.75,
        base_confidence: 0.92,
        matches: |s| s.nested >= 2 && s.total_loops >= 2,
    },
    Rule {
        id: RuleId::DivideAndConquerRecursion,
        description: "loop-free recursion that slices or splits its input",
        score: 0.65,
        base_confidence: 0.90,
        matches: |s| {
            s.recursion > 0
                && s.for_loops == 0
                && s.while_loops == 0
                && (s.arrays >= 1 || s.strings >= 1)
                && s.lines > 5
        },
    },
    Rule {
        id: RuleId::ShortBranchingRecursion,
        description: "short single-function recursion without loops",
        score: 0.95,
        base_confidence: 0.88,
        matches: |s| {
            s.recursion > 0
                && s.total_loops == 0
                && s.nested == 0
                && s.funcs <= 1
                && s.lines <= 5
                && s.length < 150
        },
    },
    Rule {
        id: RuleId::ShrinkingWhile,
        description: "short while loop with few variables",
        score: 0.30,
        base_confidence: 0.85,
        matches: |s| {
            s.while_loops >= 1 && s.for_loops == 0 && s.nested <= 1 && s.vars <= 5 && s.lines <= 12
        },
    },
    Rule {
        id: RuleId::SingleFor,
        description: "for loops without while loops or nesting",
        score: 0.50,
        base_confidence: 0.83,
        matches: |s| s.for_loops >= 1 && s.while_loops == 0 && s.nested <= 1,
    },
    Rule {
        id: RuleId::RecursionWithoutLoops,
        description: "recursion without loops",
        score: 0.30,
        base_confidence: 0.82,
        matches: |s| s.total_loops == 0 && s.recursion >= 1,
    },
    Rule {
        id: RuleId::Fallback,
        description: "no specific pattern matched",
        score: 0.50,
        base_confidence: 0.75,
        matches: |_| true,
    },
];

/// First rule whose predicate holds. The fallback guarantees a match.
pub fn select_rule(signals: &Signals) -> &'static Rule {
    RULES
        .iter()
        .find(|rule| (rule.matches)(signals))
        .unwrap_or(&RULES[RULES.len() - 1])
}
