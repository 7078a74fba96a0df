//! Locating and reading tagline config files

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{ConfigError, Result};

use super::defaults::config_file_names;
use super::types::Config;
use super::validation::validate_config;

/// Serialization used by a config file, chosen from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Yaml,
}

impl ConfigFormat {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }

    fn parse(self, content: &str) -> std::result::Result<Config, ConfigError> {
        match self {
            Self::Toml => Ok(toml::from_str(content)?),
            Self::Yaml => Ok(serde_yaml::from_str(content)?),
        }
    }
}

/// Read, parse and validate a single config file
pub fn load_config(path: &Path) -> Result<Config> {
    let format = ConfigFormat::of(path);
    info!(path = %path.display(), ?format, "reading tagline config");

    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = format.parse(&content)?;
    validate_config(&config)?;

    debug!(path = %path.display(), "tagline config accepted");
    Ok(config)
}

/// Find configuration file in directory or parent directories.
///
/// The first name from [`config_file_names`] found while walking up from
/// `start_dir` wins.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let found = start_dir.ancestors().find_map(|dir| {
        config_file_names()
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    });

    match &found {
        Some(path) => debug!(path = %path.display(), "config file located"),
        None => debug!(start_dir = %start_dir.display(), "no config file above directory"),
    }
    found
}

/// Like [`load_config`], for the nearest config file above `dir`
pub fn load_config_from_dir(dir: &Path) -> Result<(Config, PathBuf)> {
    let path = find_config(dir).ok_or_else(|| ConfigError::NotFound(dir.to_path_buf()))?;
    Ok((load_config(&path)?, path))
}

/// Load configuration or use defaults when no file exists.
///
/// A file that exists but fails to parse or validate is still an error.
pub fn load_config_or_default(dir: &Path) -> Result<(Config, Option<PathBuf>)> {
    let Some(path) = find_config(dir) else {
        warn!(dir = %dir.display(), "falling back to default tagline config");
        return Ok((Config::default(), None));
    };
    Ok((load_config(&path)?, Some(path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaglineError;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_toml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("tagline.toml");
        std::fs::write(&config_path, "[changelog]\nsort = \"asc\"").unwrap();

        let found = find_config(temp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_prefers_toml_over_yaml() {
        let temp = TempDir::new().unwrap();
        let toml_path = temp.path().join("tagline.toml");
        let yaml_path = temp.path().join("tagline.yaml");
        std::fs::write(&toml_path, "[changelog]\nsort = \"asc\"").unwrap();
        std::fs::write(&yaml_path, "changelog:\n  sort: desc").unwrap();

        let found = find_config(temp.path()).unwrap();
        assert_eq!(found, toml_path);
    }

    #[test]
    fn test_find_config_in_parent() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(".tagline.yaml");
        std::fs::write(&config_path, "changelog:\n  multiline: true").unwrap();
        let nested = temp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_config(&nested), Some(config_path));
    }

    #[test]
    fn test_load_config_toml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("tagline.toml");
        std::fs::write(
            &config_path,
            "[versioning]\nstrip_prefix = true\n\n[changelog]\nsort = \"ASC\"\nexclude = [\"^ci\"]\n",
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert!(config.versioning.strip_prefix);
        assert_eq!(config.changelog.sort, "ASC");
        assert_eq!(config.changelog.exclude, vec!["^ci".to_string()]);
        assert!(config.changelog.enabled);
    }

    #[test]
    fn test_load_config_yaml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("tagline.yaml");
        std::fs::write(
            &config_path,
            "changelog:\n  trim_header: true\n  include:\n    - '^feat'\n",
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert!(config.changelog.trim_header);
        assert_eq!(config.changelog.include, vec!["^feat".to_string()]);
    }

    #[test]
    fn test_load_config_rejects_bad_sort() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("tagline.toml");
        std::fs::write(&config_path, "[changelog]\nsort = \"sideways\"\n").unwrap();

        let result = load_config(&config_path);
        assert!(matches!(
            result,
            Err(TaglineError::Config(ConfigError::InvalidValue { .. }))
        ));
    }

    #[test]
    fn test_load_or_default_without_file() {
        let temp = TempDir::new().unwrap();
        let (config, path) = load_config_or_default(temp.path()).unwrap();
        assert!(path.is_none());
        assert!(config.changelog.enabled);
    }
}
