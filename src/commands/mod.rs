//! CLI command implementations.
//!
//! - **analyze**: estimate complexity for files, directories or stdin
//! - **features**: dump the raw feature vector of one snippet
//! - **init**: write a default `.bigo.toml`

pub mod analyze;
pub mod features;
pub mod init;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use features::show_features;
pub use init::init_config;
