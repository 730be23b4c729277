use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# edgelint configuration

[knowledge_base]
# Replace the builtin tables. Relative paths resolve against this file.
# patterns = "edge-cases/patterns.json"
# components = "edge-cases/components.json"

[analysis]
parallel = true
# Reject design trees nested deeper than this. Unlimited when unset.
# max_tree_depth = 1024

[output]
default_format = "terminal"
"#;

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

pub fn init_config_in(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, EdgelintConfig};
    use crate::io::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_parses() {
        let config: EdgelintConfig = parse_config(DEFAULT_CONFIG).unwrap();
        assert!(config.analysis.parallel);
        assert_eq!(config.analysis.max_tree_depth, None);
        assert_eq!(config.output.default_format, Some(OutputFormat::Terminal));
        assert!(config.knowledge_base.patterns.is_none());
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        init_config_in(dir.path(), false).unwrap();
        assert!(init_config_in(dir.path(), false).is_err());
        init_config_in(dir.path(), true).unwrap();
    }
}
