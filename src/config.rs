use crate::constants::CONFIG_FILENAME;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub source_dir: Option<String>,
    pub old_extension: Option<String>,
    pub new_extension: Option<String>,
    pub source_extensions: Option<Vec<String>>,
    pub respect_gitignore: Option<bool>,
}

pub fn load_config(current_dir: &Path) -> Result<Option<Config>> {
    let config_path = current_dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config_content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

    let config: Config = serde_yaml::from_str(&config_content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

    tracing::debug!("loaded config from {}", config_path.display());
    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_config_file(temp_dir: &Path, content: &str) {
        fs::write(temp_dir.join(".header-rename.yaml"), content).unwrap();
    }

    #[test]
    fn test_load_config_no_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_config(temp_dir.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_load_config_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_content = r#"
source_dir: src
old_extension: .hxx
new_extension: .hh
source_extensions: [".cxx", ".hh"]
respect_gitignore: true
"#;
        create_config_file(temp_dir.path(), config_content);

        let config = load_config(temp_dir.path()).unwrap().unwrap();

        assert_eq!(config.source_dir.as_deref(), Some("src"));
        assert_eq!(config.old_extension.as_deref(), Some(".hxx"));
        assert_eq!(config.new_extension.as_deref(), Some(".hh"));
        assert_eq!(
            config.source_extensions,
            Some(vec![".cxx".to_string(), ".hh".to_string()])
        );
        assert_eq!(config.respect_gitignore, Some(true));
    }

    #[test]
    fn test_load_config_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        create_config_file(temp_dir.path(), "new_extension: .hh\n");

        let config = load_config(temp_dir.path()).unwrap().unwrap();

        assert_eq!(config.new_extension.as_deref(), Some(".hh"));
        assert!(config.old_extension.is_none());
        assert!(config.source_dir.is_none());
        assert!(config.respect_gitignore.is_none());
    }

    #[test]
    fn test_load_config_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        create_config_file(temp_dir.path(), "invalid: yaml: content: [");

        let result = load_config(temp_dir.path());
        assert!(result.is_err());
    }
}
