//! Rule-based complexity classification.
//!
//! [`classify`] maps a [`FeatureVector`] to a [`ClassificationResult`] by
//! running the ordered cascade in [`rules`], converting the winning rule's
//! score through the label table and jittering its base confidence with the
//! caller's random source.
//!
//! ```
//! use bigo::classifier::{classify, ComplexityClass};
//! use bigo::features::extract_features;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let features = extract_features("function suma(a,b){ return a+b; }");
//! let result = classify(&features, &mut StdRng::seed_from_u64(1));
//! assert_eq!(result.class, ComplexityClass::Constant);
//! assert!(result.confidence >= 0.90);
//! ```

pub mod analyzer;
pub mod jitter;
pub mod labels;
pub mod rules;

pub use analyzer::{ComplexityAnalyzer, JitterMode};
pub use labels::ComplexityClass;
pub use rules::{RuleId, Signals, RULES};

use crate::features::FeatureVector;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub class: ComplexityClass,
    /// Jittered confidence in `[0.65, 0.98]`.
    pub confidence: f64,
    /// Cascade rule that produced the class.
    pub rule: RuleId,
}

impl ClassificationResult {
    pub fn into_pair(self) -> (ComplexityClass, f64) {
        (self.class, self.confidence)
    }

    /// Whole percent, truncated toward zero.
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).floor() as u32
    }
}

/// Classifies `features` with confidence jitter drawn from `rng`.
pub fn classify<R: Rng + ?Sized>(features: &FeatureVector, rng: &mut R) -> ClassificationResult {
    let (rule, class) = decide(features);
    ClassificationResult {
        class,
        confidence: jitter::jitter_confidence(rule.base_confidence, rng),
        rule: rule.id,
    }
}

/// Classifies `features` keeping the rule's base confidence untouched
/// (still clamped to the confidence bounds).
pub fn classify_without_jitter(features: &FeatureVector) -> ClassificationResult {
    let (rule, class) = decide(features);
    ClassificationResult {
        class,
        confidence: jitter::clamp_confidence(rule.base_confidence),
        rule: rule.id,
    }
}

fn decide(features: &FeatureVector) -> (&'static rules::Rule, ComplexityClass) {
    let signals = Signals::from(features);
    let rule = rules::select_rule(&signals);
    let class = ComplexityClass::from_score(rule.score);
    debug!(
        rule = ?rule.id,
        position = rule.id.position(),
        class = %class,
        "rule cascade matched"
    );
    (rule, class)
}
