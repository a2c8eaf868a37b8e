pub mod output;
pub mod walker;
pub mod writers;

pub use output::{create_writer, OutputFormat, OutputWriter};
pub use walker::{find_snippet_files, FileWalker};

use crate::errors::{AnalysisError, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Pseudo-path naming standard input on the command line and in reports.
pub const STDIN_SOURCE: &str = "<stdin>";

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| AnalysisError::io_with_path(path, e))
}

pub fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| AnalysisError::io(format!("failed to read {STDIN_SOURCE}: {e}")))?;
    Ok(buffer)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| AnalysisError::io_with_path(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_file_keeps_path() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("absent.js");
        let err = read_file(&missing).unwrap_err();
        assert!(err.to_string().contains("absent.js"));
    }

    #[test]
    fn test_write_then_read() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("snippet.js");
        write_file(&path, "let x = 1;").unwrap();
        assert_eq!(read_file(&path).unwrap(), "let x = 1;");
    }
}
