use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::BigoConfig;
use crate::errors::{AnalysisError, Result};

pub const CONFIG_FILE_NAME: &str = ".bigo.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a TOML string into a config and check its values.
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<BigoConfig, String> {
    let config = toml::from_str::<BigoConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))?;

    config
        .validate()
        .map_err(|problems| problems.join("; "))?;

    Ok(config)
}

/// Try loading config from a specific path, logging and skipping anything
/// unusable.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<BigoConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{} ({}). Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // "not found" is the normal case while walking up the tree
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` followed by its ancestors, at most `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.bigo.toml`.
pub fn load_config_from(start: PathBuf) -> BigoConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            BigoConfig::default()
        })
}

/// Search the current directory and its ancestors for `.bigo.toml`.
pub fn load_config() -> BigoConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            BigoConfig::default()
        }
    }
}

/// Load an explicitly named config file. Unlike discovery, problems here
/// are errors.
pub fn load_config_file(path: &Path) -> Result<BigoConfig> {
    let contents =
        read_config_file(path).map_err(|e| AnalysisError::io_with_path(path, e))?;
    parse_and_validate_config(&contents).map_err(|e| AnalysisError::config_with_path(e, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::JitterMode;
    use crate::io::output::OutputFormat;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_and_validate_config(indoc! {r#"
            [classifier]
            jitter = true
            seed = 42

            [validation]
            enabled = false
            min_script_patterns = 3

            [discovery]
            extensions = ["js", "ts"]
            ignore = ["node_modules/**"]

            [output]
            default_format = "json"
            use_color = false
        "#})
        .unwrap();

        assert_eq!(config.classifier().jitter_mode(), JitterMode::Seeded(42));
        assert!(!config.validation().enabled);
        assert_eq!(config.validation().min_script_patterns, 3);
        assert_eq!(config.discovery().extensions, vec!["js", "ts"]);
        assert_eq!(config.output().default_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config.classifier().jitter_mode(), JitterMode::System);
        assert!(config.validation().enabled);
        assert_eq!(config.validation().min_script_patterns, 2);
        assert_eq!(config.discovery().extensions, vec!["js", "mjs", "cjs"]);
    }

    #[test]
    fn test_jitter_off_wins_over_seed() {
        let config = parse_and_validate_config("[classifier]\njitter = false\nseed = 1\n").unwrap();
        assert_eq!(config.classifier().jitter_mode(), JitterMode::Disabled);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = parse_and_validate_config(indoc! {r#"
            [validation]
            min_script_patterns = 0

            [discovery]
            extensions = []
        "#})
        .unwrap_err();
        assert!(err.contains("min_script_patterns"));
        assert!(err.contains("extensions"));
    }

    #[test]
    fn test_directory_ancestors_stops_at_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }

    #[test]
    fn test_load_config_from_finds_parent_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[classifier]\njitter = false\n",
        )
        .unwrap();
        let nested = temp.path().join("src").join("algorithms");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config_from(nested);
        assert_eq!(config.classifier().jitter_mode(), JitterMode::Disabled);
    }

    #[test]
    fn test_load_config_file_reports_bad_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.toml");
        fs::write(&path, "[classifier\n").unwrap();
        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, AnalysisError::Config { .. }));
    }
}
