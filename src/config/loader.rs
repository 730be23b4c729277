use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::settings::EdgelintConfig;
use crate::core::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".edgelint.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from a TOML string
pub fn parse_config(contents: &str) -> std::result::Result<EdgelintConfig, String> {
    toml::from_str::<EdgelintConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
}

/// Load a config file named explicitly by the user. Any failure is an error.
pub fn load_config_from(path: &Path) -> Result<EdgelintConfig> {
    let contents = read_config_file(path).map_err(|e| {
        Error::Configuration(format!("failed to read {}: {}", path.display(), e))
    })?;
    let config = parse_config(&contents).map_err(Error::Configuration)?;
    Ok(config.resolve_paths(config_dir(path)))
}

/// Try a discovered config path. Missing files are silent, broken ones warn.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<EdgelintConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config.resolve_paths(config_dir(config_path)))
        }
        Err(e) => {
            tracing::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
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

/// Search `start` and its ancestors for `.edgelint.toml`
pub fn discover_config(start: PathBuf) -> Option<EdgelintConfig> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
}

/// Config from the current directory upward, or defaults
pub fn load_config() -> EdgelintConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return EdgelintConfig::default();
        }
    };

    discover_config(current).unwrap_or_else(|| {
        tracing::debug!(
            "No config found after checking {} directories. Using default config.",
            MAX_TRAVERSAL_DEPTH
        );
        EdgelintConfig::default()
    })
}

fn config_dir(config_path: &Path) -> &Path {
    config_path.parent().unwrap_or_else(|| Path::new("."))
}
