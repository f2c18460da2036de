//! Store configuration file support.
//!
//! Reads which worksheet backend to use, and the Google Sheets settings,
//! from a `stockbook.toml` file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::error::StoreError;
use super::factory::StoreType;
#[cfg(feature = "sheets-store")]
use super::stores::SheetsConfig;
#[cfg(not(feature = "sheets-store"))]
use super::SheetsConfig;

/// Store configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub store: StoreSettings,
    #[serde(default)]
    pub sheets: SheetsSettings,
}

/// Store backend selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(rename = "type")]
    pub store_type: String,
}

/// Google Sheets connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetsSettings {
    /// Spreadsheet ID from the sheet's URL.
    #[serde(default)]
    pub spreadsheet_id: String,
    /// Environment variable holding the OAuth bearer token. The token itself
    /// never lives in the config file.
    #[serde(default = "default_token_env")]
    pub token_env: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Label rows at the top of every worksheet, skipped on reads.
    #[serde(default = "default_header_rows")]
    pub header_rows: usize,
}

impl Default for SheetsSettings {
    fn default() -> Self {
        Self {
            spreadsheet_id: String::new(),
            token_env: default_token_env(),
            api_base: default_api_base(),
            header_rows: default_header_rows(),
        }
    }
}

fn default_token_env() -> String {
    "STOCKBOOK_SHEETS_TOKEN".to_string()
}

fn default_api_base() -> String {
    "https://sheets.googleapis.com/v4/spreadsheets".to_string()
}

fn default_header_rows() -> usize {
    1
}

impl StoreConfig {
    /// Configuration for the in-memory store, used when no config file is
    /// present.
    pub fn local() -> Self {
        Self {
            store: StoreSettings {
                store_type: "local".to_string(),
            },
            sheets: SheetsSettings::default(),
        }
    }

    /// Load store configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            StoreError::configuration(format!("failed to read config file: {}", e))
        })?;

        let config: StoreConfig = toml::from_str(&content).map_err(|e| {
            StoreError::configuration(format!("failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load store configuration from the default location.
    ///
    /// Searches for `stockbook.toml` in the current directory, a `config/`
    /// subdirectory, then the parent directory.
    pub fn from_default_location() -> Result<Self, StoreError> {
        let search_paths = [
            PathBuf::from("stockbook.toml"),
            PathBuf::from("config/stockbook.toml"),
            PathBuf::from("../stockbook.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(StoreError::configuration(
            "no stockbook.toml found in standard locations",
        ))
    }

    /// Get the store type from configuration.
    pub fn store_type(&self) -> Result<StoreType, String> {
        StoreType::from_str(&self.store.store_type)
    }

    /// Convert to SheetsConfig if this selects the Sheets backend.
    #[cfg(feature = "sheets-store")]
    pub fn to_sheets_config(&self) -> Result<Option<SheetsConfig>, StoreError> {
        let store_type = self.store_type().map_err(|e| {
            StoreError::configuration(format!("invalid store type: {}", e))
        })?;

        if store_type != StoreType::Sheets {
            return Ok(None);
        }

        if self.sheets.spreadsheet_id.is_empty() {
            return Err(StoreError::configuration(
                "sheets store requires 'sheets.spreadsheet_id' setting",
            ));
        }

        Ok(Some(SheetsConfig {
            spreadsheet_id: self.sheets.spreadsheet_id.clone(),
            token_env: self.sheets.token_env.clone(),
            api_base: self.sheets.api_base.clone(),
            header_rows: self.sheets.header_rows,
        }))
    }

    /// Convert to SheetsConfig when the feature is disabled.
    #[cfg(not(feature = "sheets-store"))]
    pub fn to_sheets_config(&self) -> Result<Option<SheetsConfig>, StoreError> {
        let store_type = self.store_type().map_err(|e| {
            StoreError::configuration(format!("invalid store type: {}", e))
        })?;

        if store_type == StoreType::Sheets {
            return Err(StoreError::configuration(
                "sheets store feature not enabled",
            ));
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_local_config() {
        let toml = r#"
[store]
type = "local"
"#;

        let config: StoreConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.store.store_type, "local");
        assert_eq!(config.store_type().unwrap(), StoreType::Local);
    }

    #[cfg(feature = "sheets-store")]
    #[test]
    fn test_parse_sheets_config() {
        let toml = r#"
[store]
type = "sheets"

[sheets]
spreadsheet_id = "1AbC"
token_env = "MY_TOKEN"
header_rows = 2
"#;

        let config: StoreConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.store_type().unwrap(), StoreType::Sheets);

        let sheets = config.to_sheets_config().unwrap().unwrap();
        assert_eq!(sheets.spreadsheet_id, "1AbC");
        assert_eq!(sheets.token_env, "MY_TOKEN");
        assert_eq!(sheets.header_rows, 2);
        assert_eq!(
            sheets.api_base,
            "https://sheets.googleapis.com/v4/spreadsheets"
        );
    }

    #[cfg(feature = "sheets-store")]
    #[test]
    fn test_sheets_requires_spreadsheet_id() {
        let toml = r#"
[store]
type = "sheets"
"#;

        let config: StoreConfig = toml::from_str(toml).unwrap();
        assert!(config.to_sheets_config().is_err());
    }

    #[test]
    fn test_local_config_has_no_sheets_config() {
        let config = StoreConfig::local();
        assert!(config.to_sheets_config().unwrap().is_none());
    }

    #[test]
    fn test_unknown_store_type_rejected() {
        let toml = r#"
[store]
type = "csv"
"#;

        let config: StoreConfig = toml::from_str(toml).unwrap();
        assert!(config.store_type().is_err());
    }
}
