use crate::features::FeatureVector;
use crate::io::output::OutputWriter;
use crate::report::AnalysisReport;
use serde::Serialize;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

#[derive(Serialize)]
struct FeatureDump<'a> {
    source: &'a str,
    features: &'a FeatureVector,
    vector: Vec<u64>,
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_features(&mut self, source: &str, features: &FeatureVector) -> anyhow::Result<()> {
        let dump = FeatureDump {
            source,
            features,
            vector: features.as_array().to_vec(),
        };
        let json = serde_json::to_string_pretty(&dump)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::extract_features;

    #[test]
    fn test_feature_dump_has_named_and_positional_forms() {
        let mut buf = Vec::new();
        JsonWriter::new(&mut buf)
            .write_features("inline", &extract_features("while (x) {}"))
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["features"]["while_loops"], 1);
        assert_eq!(value["vector"].as_array().unwrap().len(), 20);
    }
}
