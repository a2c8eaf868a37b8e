use crate::classifier::{ComplexityAnalyzer, JitterMode};
use crate::config::{load_config, load_config_file, BigoConfig};
use crate::explain::explain;
use crate::features::detect_hints;
use crate::io::{self, create_writer, find_snippet_files, OutputFormat, STDIN_SOURCE};
use crate::report::{AnalysisReport, SnippetOutcome, SnippetReport};
use crate::validation::validate_script;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span};

/// Options for one `bigo analyze` run, as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeConfig {
    pub paths: Vec<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub seed: Option<u64>,
    pub no_jitter: bool,
    pub skip_validation: bool,
    pub config: Option<PathBuf>,
}

/// One unit of input: a snippet's display name and its text.
#[derive(Debug, Clone)]
pub struct SnippetInput {
    pub source: String,
    pub code: String,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let _span = info_span!("analyze", paths = config.paths.len()).entered();

    let settings = match &config.config {
        Some(path) => load_config_file(path)?,
        None => load_config(),
    };
    apply_color_preference(&settings, config.output.as_deref());

    let analyzer = ComplexityAnalyzer::ready(resolve_jitter(&config, &settings));
    let min_patterns = if config.skip_validation || !settings.validation().enabled {
        None
    } else {
        Some(settings.validation().min_script_patterns)
    };

    let inputs = collect_inputs(&config.paths, &settings)?;
    info!(snippets = inputs.len(), "analyzing snippets");

    let snippets = analyze_inputs(&analyzer, &inputs, min_patterns);
    let report = AnalysisReport::new(snippets);

    let format = config
        .format
        .or(settings.output().default_format)
        .unwrap_or(OutputFormat::Terminal);
    write_report(&report, format, config.output.as_deref())
}

/// `--no-jitter` beats `--seed`, which beats the config file.
pub fn resolve_jitter(config: &AnalyzeConfig, settings: &BigoConfig) -> JitterMode {
    if config.no_jitter {
        JitterMode::Disabled
    } else if let Some(seed) = config.seed {
        JitterMode::Seeded(seed)
    } else {
        settings.classifier().jitter_mode()
    }
}

fn apply_color_preference(settings: &BigoConfig, output: Option<&Path>) {
    match settings.output().use_color {
        Some(enabled) => colored::control::set_override(enabled),
        None if output.is_some() => colored::control::set_override(false),
        None => {}
    }
}

/// Expands command-line paths into snippet texts, in argument order.
/// Directories contribute their matching files in sorted order; `-` reads
/// standard input once.
pub fn collect_inputs(paths: &[PathBuf], settings: &BigoConfig) -> Result<Vec<SnippetInput>> {
    let discovery = settings.discovery();
    let mut inputs = Vec::new();
    let mut stdin_read = false;

    for path in paths {
        if path.as_os_str() == "-" {
            if !stdin_read {
                inputs.push(SnippetInput {
                    source: STDIN_SOURCE.to_string(),
                    code: io::read_stdin()?,
                });
                stdin_read = true;
            }
        } else if path.is_dir() {
            let files = find_snippet_files(path, &discovery)
                .with_context(|| format!("Failed to walk {}", path.display()))?;
            debug!(dir = %path.display(), files = files.len(), "discovered snippet files");
            for file in files {
                inputs.push(read_input(&file)?);
            }
        } else {
            inputs.push(read_input(path)?);
        }
    }

    Ok(inputs)
}

fn read_input(path: &Path) -> Result<SnippetInput> {
    Ok(SnippetInput {
        source: path.display().to_string(),
        code: io::read_file(path)?,
    })
}

pub fn analyze_inputs(
    analyzer: &ComplexityAnalyzer,
    inputs: &[SnippetInput],
    min_patterns: Option<usize>,
) -> Vec<SnippetReport> {
    inputs
        .par_iter()
        .map(|input| analyze_source(analyzer, &input.source, &input.code, min_patterns))
        .collect()
}

/// Validates (when `min_patterns` is set), classifies and explains one
/// snippet. Rejections and analyzer errors become a rejected entry.
pub fn analyze_source(
    analyzer: &ComplexityAnalyzer,
    source: &str,
    code: &str,
    min_patterns: Option<usize>,
) -> SnippetReport {
    let _span = info_span!("snippet", source).entered();

    if let Some(min) = min_patterns {
        if let Err(e) = validate_script(code, min) {
            debug!(reason = %e, "snippet rejected");
            return rejected(source, e.to_string());
        }
    }

    match analyzer.predict(code) {
        Ok(prediction) => SnippetReport {
            source: source.to_string(),
            outcome: SnippetOutcome::Analyzed {
                hints: detect_hints(code),
                explanation: explain(&prediction.features, prediction.result.class),
                prediction,
            },
        },
        Err(e) => rejected(source, e.to_string()),
    }
}

fn rejected(source: &str, reason: String) -> SnippetReport {
    SnippetReport {
        source: source.to_string(),
        outcome: SnippetOutcome::Rejected { reason },
    }
}

pub(crate) fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(std::io::stdout().lock()),
    })
}

fn write_report(report: &AnalysisReport, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    write_report_to(report, format, open_output(output)?)?;
    if let Some(path) = output {
        info!(path = %path.display(), "report written");
    }
    Ok(())
}

/// Renders `report` into `sink` and flushes it, so a failed final write is
/// reported instead of lost when the sink is dropped.
pub(crate) fn write_report_to<'a>(
    report: &AnalysisReport,
    format: OutputFormat,
    sink: Box<dyn Write + 'a>,
) -> Result<()> {
    let mut writer = create_writer(format, sink);
    writer.write_report(report)?;
    writer.flush()
}
