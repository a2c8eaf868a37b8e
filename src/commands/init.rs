use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# bigo configuration

[classifier]
# Add bounded random noise to reported confidences
jitter = true
# Uncomment for reproducible confidences
# seed = 42

[validation]
# Reject input that does not look like JavaScript
enabled = true
min_script_patterns = 2

[discovery]
extensions = ["js", "mjs", "cjs"]
ignore = [
    "node_modules/**",
    "*.min.js"
]

[output]
default_format = "terminal"
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    write_default_config(&config_path, force)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");
    Ok(())
}

pub fn write_default_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(config_path, DEFAULT_CONFIG)?;
    Ok(())
}
