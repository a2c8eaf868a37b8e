//! `.bigo.toml` configuration: types, discovery and validation.

mod core;
mod loader;

pub use self::core::{BigoConfig, ClassifierConfig, DiscoveryConfig, OutputConfig, ValidationConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_file, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
