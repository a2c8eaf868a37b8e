use crate::commands::analyze::open_output;
use crate::features::extract_features;
use crate::io::{self, create_writer, OutputFormat, STDIN_SOURCE};
use anyhow::Result;
use std::path::Path;
use tracing::debug;

/// Prints the raw feature vector of a single snippet.
pub fn show_features(path: &Path, format: OutputFormat) -> Result<()> {
    let (source, code) = if path.as_os_str() == "-" {
        (STDIN_SOURCE.to_string(), io::read_stdin()?)
    } else {
        (path.display().to_string(), io::read_file(path)?)
    };

    let features = extract_features(&code);
    debug!(source = %source, lines = features.line_count, "features extracted");

    let mut writer = create_writer(format, open_output(None)?);
    writer.write_features(&source, &features)?;
    writer.flush()
}
