//! # Board Configuration
//!
//! The column set and the containers that display it are fixed at start-up. A
//! configuration is read once from TOML, validated, and never changed afterwards.
//!
//! ```toml
//! [store]
//! channel_capacity = 32
//!
//! [[columns]]
//! column = "ordered"
//! container = "ordered"
//! heading = "Ordered"
//!
//! [[columns]]
//! column = "preparing"
//! container = "preparing"
//! heading = "Preparing"
//!
//! [[columns]]
//! column = "serving"
//! container = "serving"
//! heading = "Served"
//! ```
//!
//! Every column must appear exactly once, container names must be non-empty and
//! unique, and the store channel needs room for at least one request. A column name
//! outside the known set fails to parse.

use crate::model::Column;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid board configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Column {0} has no container")]
    MissingColumn(Column),
    #[error("Column {0} is configured more than once")]
    DuplicateColumn(Column),
    #[error("Column {0} has an empty container name")]
    EmptyContainer(Column),
    #[error("Container {0:?} is used by more than one column")]
    DuplicateContainer(String),
    #[error("Store channel capacity must be at least 1")]
    ZeroCapacity,
}

/// One column and the container that shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub column: Column,
    pub container: String,
    pub heading: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Requests that may queue for the order store before senders wait.
    pub channel_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub store: StoreConfig,
    pub columns: Vec<ColumnConfig>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        let columns = Column::ALL
            .into_iter()
            .map(|column| ColumnConfig {
                column,
                container: column.as_str().to_string(),
                heading: match column {
                    Column::Ordered => "Ordered",
                    Column::Preparing => "Preparing",
                    Column::Serving => "Served",
                }
                .to_string(),
            })
            .collect();

        Self {
            store: StoreConfig::default(),
            columns,
        }
    }
}

impl BoardConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.channel_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }

        let mut columns = HashSet::new();
        let mut containers = HashSet::new();
        for entry in &self.columns {
            if !columns.insert(entry.column) {
                return Err(ConfigError::DuplicateColumn(entry.column));
            }
            if entry.container.trim().is_empty() {
                return Err(ConfigError::EmptyContainer(entry.column));
            }
            if !containers.insert(entry.container.as_str()) {
                return Err(ConfigError::DuplicateContainer(entry.container.clone()));
            }
        }

        match Column::ALL.into_iter().find(|c| !columns.contains(c)) {
            Some(missing) => Err(ConfigError::MissingColumn(missing)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
        [store]
        channel_capacity = 8

        [[columns]]
        column = "ordered"
        container = "col-ordered"
        heading = "Ordered"

        [[columns]]
        column = "preparing"
        container = "col-preparing"
        heading = "Preparing"

        [[columns]]
        column = "serving"
        container = "col-serving"
        heading = "Served"
    "#;

    #[test]
    fn test_default_is_valid() {
        let config = BoardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.columns.len(), Column::ALL.len());
    }

    #[test]
    fn test_parse_full_document() {
        let config = BoardConfig::from_toml_str(FULL).unwrap();
        assert_eq!(config.store.channel_capacity, 8);
        assert_eq!(config.columns[1].container, "col-preparing");
    }

    #[test]
    fn test_store_section_is_optional() {
        let text = FULL.replace("[store]", "").replace("channel_capacity = 8", "");
        let config = BoardConfig::from_toml_str(&text).unwrap();
        assert_eq!(config.store, StoreConfig::default());
    }

    #[test]
    fn test_missing_column_rejected() {
        let mut config = BoardConfig::default();
        config.columns.retain(|c| c.column != Column::Serving);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingColumn(Column::Serving))
        ));
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let mut config = BoardConfig::default();
        let mut extra = config.columns[0].clone();
        extra.container = "elsewhere".into();
        config.columns.push(extra);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateColumn(Column::Ordered))
        ));
    }

    #[test]
    fn test_shared_or_blank_container_rejected() {
        let mut config = BoardConfig::default();
        config.columns[1].container = "ordered".into();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateContainer(name)) if name == "ordered"
        ));

        let mut config = BoardConfig::default();
        config.columns[2].container = "  ".into();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyContainer(Column::Serving))
        ));
    }

    #[test]
    fn test_unknown_column_name_fails_to_parse() {
        let text = FULL.replace("column = \"serving\"", "column = \"archived\"");
        assert!(matches!(
            BoardConfig::from_toml_str(&text),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let mut config = BoardConfig::default();
        config.store.channel_capacity = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroCapacity)));
    }
}
