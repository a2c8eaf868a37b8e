use crate::classifier::JitterMode;
use crate::io::output::OutputFormat;
use serde::{Deserialize, Serialize};

/// Root configuration structure, read from `.bigo.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BigoConfig {
    /// Confidence jitter settings
    #[serde(default)]
    pub classifier: Option<ClassifierConfig>,

    /// Script syntax pre-check
    #[serde(default)]
    pub validation: Option<ValidationConfig>,

    /// Which files a directory walk picks up
    #[serde(default)]
    pub discovery: Option<DiscoveryConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl BigoConfig {
    pub fn classifier(&self) -> ClassifierConfig {
        self.classifier.clone().unwrap_or_default()
    }

    pub fn validation(&self) -> ValidationConfig {
        self.validation.clone().unwrap_or_default()
    }

    pub fn discovery(&self) -> DiscoveryConfig {
        self.discovery.clone().unwrap_or_default()
    }

    pub fn output(&self) -> OutputConfig {
        self.output.clone().unwrap_or_default()
    }

    /// Checks value constraints, returning every problem found.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();

        if let Some(validation) = &self.validation {
            if validation.min_script_patterns == 0 {
                problems.push("validation.min_script_patterns must be at least 1".to_string());
            }
        }
        if let Some(discovery) = &self.discovery {
            if discovery.extensions.is_empty() {
                problems.push("discovery.extensions must list at least one extension".to_string());
            }
            if let Some(bad) = discovery
                .ignore
                .iter()
                .find(|pattern| glob::Pattern::new(pattern).is_err())
            {
                problems.push(format!("discovery.ignore has an invalid glob: {bad}"));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Add bounded random noise to confidences
    #[serde(default = "default_jitter")]
    pub jitter: bool,
    /// Reseed the jitter source with this value on every classification
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            jitter: default_jitter(),
            seed: None,
        }
    }
}

impl ClassifierConfig {
    pub fn jitter_mode(&self) -> JitterMode {
        match (self.jitter, self.seed) {
            (false, _) => JitterMode::Disabled,
            (true, Some(seed)) => JitterMode::Seeded(seed),
            (true, None) => JitterMode::System,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default = "default_validation_enabled")]
    pub enabled: bool,
    #[serde(default = "default_min_script_patterns")]
    pub min_script_patterns: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enabled: default_validation_enabled(),
            min_script_patterns: default_min_script_patterns(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Glob patterns excluded from directory walks
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            ignore: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    pub default_format: Option<OutputFormat>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}

// Default values
fn default_jitter() -> bool {
    true
}
fn default_validation_enabled() -> bool {
    true
}
fn default_min_script_patterns() -> usize {
    2
}
fn default_extensions() -> Vec<String> {
    vec!["js".to_string(), "mjs".to_string(), "cjs".to_string()]
}
