use bigo::classifier::JitterMode;
use bigo::config::{load_config_from, CONFIG_FILE_NAME};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_nearest_config_wins() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(CONFIG_FILE_NAME), "[classifier]\nseed = 1\n").unwrap();
    let project = temp.path().join("project");
    fs::create_dir_all(project.join("lib")).unwrap();
    fs::write(project.join(CONFIG_FILE_NAME), "[classifier]\nseed = 2\n").unwrap();

    let config = load_config_from(project.join("lib"));
    assert_eq!(config.classifier().jitter_mode(), JitterMode::Seeded(2));
}

#[test]
fn test_invalid_discovered_config_is_skipped() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(CONFIG_FILE_NAME), "[classifier]\njitter = false\n").unwrap();
    let project = temp.path().join("project");
    fs::create_dir_all(&project).unwrap();
    fs::write(
        project.join(CONFIG_FILE_NAME),
        "[validation]\nmin_script_patterns = 0\n",
    )
    .unwrap();

    // The broken file is logged and skipped; the search keeps going upward.
    let config = load_config_from(project);
    assert_eq!(config.classifier().jitter_mode(), JitterMode::Disabled);
}

#[test]
fn test_no_config_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let config = load_config_from(temp.path().to_path_buf());
    assert!(config.validation().enabled);
    assert_eq!(config.validation().min_script_patterns, 2);
    assert!(config.discovery().ignore.is_empty());
}
