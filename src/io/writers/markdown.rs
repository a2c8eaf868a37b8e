use crate::features::FeatureVector;
use crate::io::output::OutputWriter;
use crate::report::{AnalysisReport, SnippetOutcome, SnippetReport};
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let writers: Vec<fn(&mut Self, &AnalysisReport) -> anyhow::Result<()>> = vec![
            |w, r| w.write_header(r),
            |w, r| w.write_summary(r),
            |w, r| w.write_snippets(r),
        ];

        writers.iter().try_for_each(|writer| writer(self, report))
    }

    fn write_features(&mut self, source: &str, features: &FeatureVector) -> anyhow::Result<()> {
        writeln!(self.writer, "## Features: `{source}`")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| # | Feature | Value |")?;
        writeln!(self.writer, "|---|---------|-------|")?;
        for (i, (name, value)) in features.named().enumerate() {
            writeln!(self.writer, "| {i} | {name} | {value} |")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Complexity Estimation Report")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Version: {}", report.version)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Class | Snippets |")?;
        writeln!(self.writer, "|-------|----------|")?;
        for (class, count) in &report.summary.by_class {
            writeln!(self.writer, "| {class} | {count} |")?;
        }
        if report.summary.rejected > 0 {
            writeln!(self.writer, "| rejected | {} |", report.summary.rejected)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_snippets(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Snippets")?;
        writeln!(self.writer)?;
        report
            .snippets
            .iter()
            .try_for_each(|snippet| self.write_snippet(snippet))
    }

    fn write_snippet(&mut self, snippet: &SnippetReport) -> anyhow::Result<()> {
        writeln!(self.writer, "### `{}`", snippet.source)?;
        writeln!(self.writer)?;
        match &snippet.outcome {
            SnippetOutcome::Rejected { reason } => {
                writeln!(self.writer, "Rejected: {reason}")?;
            }
            SnippetOutcome::Analyzed {
                prediction,
                hints,
                explanation,
            } => {
                let result = &prediction.result;
                writeln!(
                    self.writer,
                    "- **Complexity:** {} ({}% confidence)",
                    result.class,
                    result.confidence_percent()
                )?;
                writeln!(
                    self.writer,
                    "- **Rule:** #{} `{:?}` ({})",
                    result.rule.position(),
                    result.rule,
                    result.rule.description()
                )?;
                writeln!(
                    self.writer,
                    "- **Loops:** for {}, while {}, max nesting {}",
                    explanation.for_loops, explanation.while_loops, explanation.max_nesting
                )?;
                writeln!(self.writer, "- **Dominant factor:** {}", explanation.dominant)?;
                for note in &explanation.notes {
                    writeln!(self.writer, "- Note: {note}")?;
                }
                if let Some((family, votes)) = hints.strongest() {
                    writeln!(self.writer, "- **Hint:** {family} ({votes})")?;
                }
                writeln!(self.writer)?;
                writeln!(self.writer, "> {}", explanation.interpretation)?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }
}
