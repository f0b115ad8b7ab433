//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the tax
//! scheme and year-keyed rate tables from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{RateTable, SchemeConfig, TaxConfig};

/// Loads and provides access to the tax configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// exposes the aggregate [`TaxConfig`] the engine consumes.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/gh_paye/
/// ├── scheme.yaml      # Scheme metadata and SSNIT rates
/// └── rates/
///     ├── 2023.yaml    # Rate table registered under year "2023"
///     └── 2024.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use paye_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/gh_paye").unwrap();
///
/// let table = loader.config().table_for_year("2024");
/// println!("{} brackets effective {}", table.brackets.len(), table.effective_from);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TaxConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g. "./config/gh_paye")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any rate table violates the bracket invariants
    /// - The configured default year has no rate table
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load scheme.yaml
        let scheme_path = path.join("scheme.yaml");
        let scheme = Self::load_yaml::<SchemeConfig>(&scheme_path)?;
        scheme
            .ssnit
            .validate()
            .map_err(|message| EngineError::ConfigParseError {
                path: scheme_path.display().to_string(),
                message,
            })?;

        // Load all rate tables from the rates directory
        let rates_dir = path.join("rates");
        let tables = Self::load_tables(&rates_dir)?;

        let config = TaxConfig::new(scheme, tables)?;

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all rate table files from the rates directory.
    fn load_tables(rates_dir: &Path) -> EngineResult<Vec<RateTable>> {
        let rates_dir_str = rates_dir.display().to_string();

        if !rates_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: rates_dir_str,
            });
        }

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut tables = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let table = Self::load_yaml::<RateTable>(&path)?;
                tables.push(table);
            }
        }

        if tables.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        Ok(tables)
    }

    /// Returns the underlying tax configuration.
    pub fn config(&self) -> &TaxConfig {
        &self.config
    }
}
