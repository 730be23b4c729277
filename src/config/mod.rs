//! `.edgelint.toml` configuration.
//!
//! Precedence is CLI flags, then the config file, then builtin defaults. The
//! file is looked up from the current directory upward unless `--config`
//! names one explicitly.

pub mod settings;
pub mod loader;

pub use settings::{AnalysisSettings, EdgelintConfig, KnowledgeBaseConfig, OutputConfig};
pub use loader::{discover_config, load_config, load_config_from, parse_config, CONFIG_FILE_NAME};
