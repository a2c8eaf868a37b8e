//! Stateful facade over extraction and classification.
//!
//! The analyzer starts out not ready; front-ends call
//! [`ComplexityAnalyzer::initialize`] once before classifying, and any
//! request made earlier fails with [`AnalysisError::NotReady`] instead of
//! producing a result.

use super::{classify, classify_without_jitter, ClassificationResult};
use crate::errors::{AnalysisError, Result};
use crate::features::{extract_features, FeatureVector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Where confidence jitter comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JitterMode {
    /// Thread-local system generator.
    #[default]
    System,
    /// Fresh `StdRng` from this seed for every call, so identical input
    /// always gets identical confidence regardless of call order.
    Seeded(u64),
    /// Base confidence only.
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub features: FeatureVector,
    #[serde(flatten)]
    pub result: ClassificationResult,
}

#[derive(Debug, Clone, Default)]
pub struct ComplexityAnalyzer {
    jitter: JitterMode,
    ready: bool,
}

impl ComplexityAnalyzer {
    pub fn new(jitter: JitterMode) -> Self {
        Self {
            jitter,
            ready: false,
        }
    }

    /// Convenience constructor returning an initialised analyzer.
    pub fn ready(jitter: JitterMode) -> Self {
        let mut analyzer = Self::new(jitter);
        analyzer.initialize();
        analyzer
    }

    /// Marks the analyzer ready. The rule table is static, so there is
    /// nothing to load.
    pub fn initialize(&mut self) {
        debug!(jitter = ?self.jitter, "complexity analyzer initialised");
        self.ready = true;
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn jitter_mode(&self) -> JitterMode {
        self.jitter
    }

    pub fn classify(&self, features: &FeatureVector) -> Result<ClassificationResult> {
        self.ensure_ready()?;
        Ok(match self.jitter {
            JitterMode::System => classify(features, &mut rand::rng()),
            JitterMode::Seeded(seed) => classify(features, &mut StdRng::seed_from_u64(seed)),
            JitterMode::Disabled => classify_without_jitter(features),
        })
    }

    /// Classifies with an explicit random source, ignoring the configured
    /// jitter mode.
    pub fn classify_with_rng<R: Rng + ?Sized>(
        &self,
        features: &FeatureVector,
        rng: &mut R,
    ) -> Result<ClassificationResult> {
        self.ensure_ready()?;
        Ok(classify(features, rng))
    }

    /// Extracts features from `code` and classifies them.
    pub fn predict(&self, code: &str) -> Result<Prediction> {
        self.ensure_ready()?;
        let features = extract_features(code);
        let result = self.classify(&features)?;
        Ok(Prediction { features, result })
    }

    fn ensure_ready(&self) -> Result<()> {
        if self.ready {
            Ok(())
        } else {
            Err(AnalysisError::NotReady)
        }
    }
}
