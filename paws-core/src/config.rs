//! Shell configuration: optional TOML file.
//!
//! Lookup order: an explicit path, then `<config_dir>/paws/config.toml`,
//! then built-in defaults. A missing default file is not an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{Catalog, CatalogError};
use crate::domain::UserProfile;

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "PAWS_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter used when `PAWS_LOG` is unset.
    pub level: String,
    /// Log file for the terminal shell. Logs are discarded when unset.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PawsConfig {
    /// Catalog TOML file; the built-in catalog is used when unset.
    pub catalog: Option<PathBuf>,
    pub profile: UserProfile,
    pub log: LogConfig,
}

impl PawsConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml(&content)?;
        // Relative catalog paths are relative to the config file.
        if let (Some(catalog), Some(dir)) = (config.catalog.as_mut(), path.parent()) {
            if catalog.is_relative() {
                *catalog = dir.join(&*catalog);
            }
        }
        Ok(config)
    }

    /// `<config_dir>/paws/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("paws").join("config.toml"))
    }

    /// Resolve the configuration from an explicit path or the default location.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load the configured catalog, or the built-in one.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog {
            Some(path) => Catalog::from_file(path),
            None => Ok(Catalog::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = PawsConfig::from_toml("").unwrap();
        assert_eq!(config, PawsConfig::default());
        assert_eq!(config.log.level, "info");
        assert_eq!(config.profile.name, "Emma Johnson");
    }

    #[test]
    fn partial_sections_merge_with_defaults() {
        let config = PawsConfig::from_toml(
            r#"
            [profile]
            name = "Ravi Patel"

            [log]
            file = "paws.log"
            "#,
        )
        .unwrap();
        assert_eq!(config.profile.name, "Ravi Patel");
        assert_eq!(config.profile.title, "Plant Enthusiast");
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.file, Some(PathBuf::from("paws.log")));
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let err = PawsConfig::from_toml("catalog = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let err = PawsConfig::load(Some(Path::new("/nonexistent/paws.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn catalog_path_is_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "catalog = \"garden.toml\"\n").unwrap();
        let config = PawsConfig::from_file(&path).unwrap();
        assert_eq!(config.catalog, Some(dir.path().join("garden.toml")));
    }

    #[test]
    fn builtin_catalog_without_path() {
        let catalog = PawsConfig::default().load_catalog().unwrap();
        assert_eq!(catalog.plants().len(), 4);
    }
}
