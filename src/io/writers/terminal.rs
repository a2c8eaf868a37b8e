use crate::classifier::ComplexityClass;
use crate::features::FeatureVector;
use crate::io::output::OutputWriter;
use crate::report::{AnalysisReport, SnippetOutcome, SnippetReport};
use colored::*;
use std::io::Write;

const RULE: &str = "═══════════════════════════════════════════";
const DIVIDER: &str = "───────────────────────────────────────────";

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let printers: Vec<fn(&mut Self, &AnalysisReport) -> anyhow::Result<()>> = vec![
            |w, _| w.print_header(),
            |w, r| {
                r.snippets
                    .iter()
                    .try_for_each(|snippet| w.print_snippet(snippet))
            },
            |w, r| w.print_summary(r),
        ];

        printers.iter().try_for_each(|printer| printer(self, report))
    }

    fn write_features(&mut self, source: &str, features: &FeatureVector) -> anyhow::Result<()> {
        writeln!(self.writer, "{} {}", "Features:".bold(), source)?;
        writeln!(self.writer, "{DIVIDER}")?;
        let width = features
            .named()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0);
        for (i, (name, value)) in features.named().enumerate() {
            let value = if value > 0 {
                value.to_string().bold()
            } else {
                value.to_string().dimmed()
            };
            writeln!(self.writer, "  [{i:>2}] {name:<width$}  {value}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn print_header(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", RULE.blue())?;
        writeln!(self.writer, "{}", "           BIGO ANALYSIS REPORT".bold().blue())?;
        writeln!(self.writer, "{}", RULE.blue())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_snippet(&mut self, snippet: &SnippetReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{} {}", "▶".cyan(), snippet.source.bold())?;
        match &snippet.outcome {
            SnippetOutcome::Rejected { reason } => {
                writeln!(self.writer, "  {} {}", "rejected:".red().bold(), reason)?;
            }
            SnippetOutcome::Analyzed {
                prediction,
                hints,
                explanation,
            } => {
                let result = &prediction.result;
                writeln!(
                    self.writer,
                    "  Complexity: {} ({}% confidence)",
                    paint_class(result.class),
                    result.confidence_percent()
                )?;
                writeln!(
                    self.writer,
                    "  Rule:       #{} {:?} ({})",
                    result.rule.position(),
                    result.rule,
                    result.rule.description()
                )?;
                writeln!(
                    self.writer,
                    "  Loops:      for {}, while {}, max nesting {}",
                    explanation.for_loops, explanation.while_loops, explanation.max_nesting
                )?;
                writeln!(self.writer, "  Dominant:   {}", explanation.dominant)?;
                for note in &explanation.notes {
                    writeln!(self.writer, "  {} {}", "note:".yellow(), note)?;
                }
                if let Some((family, votes)) = hints.strongest() {
                    writeln!(self.writer, "  Hint:       {family} ({votes})")?;
                }
                writeln!(self.writer, "  {}", explanation.interpretation.italic())?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_summary(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let summary = &report.summary;
        writeln!(self.writer, "📊 {}", "Summary".bold())?;
        writeln!(self.writer, "{DIVIDER}")?;
        writeln!(
            self.writer,
            "  Analyzed: {}   Rejected: {}",
            summary.analyzed,
            if summary.rejected > 0 {
                summary.rejected.to_string().red()
            } else {
                summary.rejected.to_string().normal()
            }
        )?;
        for (class, count) in &summary.by_class {
            writeln!(self.writer, "  {:<10} {}", paint_class(*class), count)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

fn paint_class(class: ComplexityClass) -> ColoredString {
    let label = class.label();
    match class {
        ComplexityClass::Constant | ComplexityClass::Logarithmic => label.green(),
        ComplexityClass::Linear | ComplexityClass::Linearithmic => label.normal(),
        ComplexityClass::Quadratic => label.yellow(),
        ComplexityClass::Cubic | ComplexityClass::Exponential => label.red(),
    }
}
