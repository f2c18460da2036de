//! Store factory for dependency injection.
//!
//! Creates worksheet store instances from runtime configuration so the
//! session controller only ever sees `dyn WorksheetStore`.

use std::str::FromStr;
use std::sync::Arc;

use tracing::warn;

use super::config::StoreConfig;
use super::error::{StoreError, StoreResult};
#[cfg(feature = "local-store")]
use super::stores::LocalWorksheet;
#[cfg(feature = "sheets-store")]
use super::stores::{SheetsConfig, SheetsStore};
#[cfg(not(feature = "sheets-store"))]
use super::SheetsConfig;
use super::worksheet::WorksheetStore;

/// Worksheet store backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreType {
    /// In-memory store
    Local,
    /// Google Sheets REST backend
    Sheets,
}

impl FromStr for StoreType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" | "memory" => Ok(Self::Local),
            "sheets" | "google" | "gsheets" => Ok(Self::Sheets),
            _ => Err(format!("unknown store type: {}", s)),
        }
    }
}

impl StoreType {
    /// Backend override from the `STOCKBOOK_STORE` environment variable.
    /// Returns `None` when unset; an unrecognized value is ignored with a
    /// warning rather than killing the session.
    pub fn env_override() -> Option<Self> {
        let value = std::env::var("STOCKBOOK_STORE").ok()?;
        match value.parse() {
            Ok(store_type) => Some(store_type),
            Err(e) => {
                warn!("ignoring STOCKBOOK_STORE: {}", e);
                None
            }
        }
    }
}

/// Factory for creating worksheet store instances.
pub struct StoreFactory;

impl StoreFactory {
    /// Create a store instance based on type.
    ///
    /// `sheets_config` is required for the Sheets backend and ignored
    /// otherwise.
    pub async fn create(
        store_type: StoreType,
        sheets_config: Option<&SheetsConfig>,
    ) -> StoreResult<Arc<dyn WorksheetStore>> {
        match store_type {
            StoreType::Sheets => {
                #[cfg(feature = "sheets-store")]
                {
                    let config = sheets_config.ok_or_else(|| {
                        StoreError::configuration("sheets store requires SheetsConfig")
                    })?;
                    let store = Self::create_sheets(config)?;
                    Ok(store as Arc<dyn WorksheetStore>)
                }
                #[cfg(not(feature = "sheets-store"))]
                {
                    let _ = sheets_config;
                    Err(StoreError::configuration(
                        "sheets store feature not enabled",
                    ))
                }
            }
            StoreType::Local => {
                #[cfg(feature = "local-store")]
                {
                    Ok(Self::create_local())
                }
                #[cfg(not(feature = "local-store"))]
                {
                    Err(StoreError::configuration(
                        "local store feature not enabled",
                    ))
                }
            }
        }
    }

    /// Create an in-memory store with empty tables.
    #[cfg(feature = "local-store")]
    pub fn create_local() -> Arc<dyn WorksheetStore> {
        Arc::new(LocalWorksheet::new())
    }

    /// Create a Google Sheets store.
    #[cfg(feature = "sheets-store")]
    pub fn create_sheets(config: &SheetsConfig) -> StoreResult<Arc<SheetsStore>> {
        let store = SheetsStore::new(config.clone())?;
        Ok(Arc::new(store))
    }

    /// Create a store from file configuration, honoring the
    /// `STOCKBOOK_STORE` environment override.
    pub async fn from_config(config: &StoreConfig) -> StoreResult<Arc<dyn WorksheetStore>> {
        let store_type = match StoreType::env_override() {
            Some(override_type) => override_type,
            None => config
                .store_type()
                .map_err(StoreError::configuration)?,
        };

        let sheets_config = config.to_sheets_config()?;
        Self::create(store_type, sheets_config.as_ref()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_type_from_str() {
        assert_eq!("local".parse::<StoreType>().unwrap(), StoreType::Local);
        assert_eq!("Sheets".parse::<StoreType>().unwrap(), StoreType::Sheets);
        assert_eq!("google".parse::<StoreType>().unwrap(), StoreType::Sheets);
        assert!("csv".parse::<StoreType>().is_err());
    }

    #[cfg(feature = "local-store")]
    #[tokio::test]
    async fn test_create_local_from_config() {
        let config = StoreConfig::local();
        let store = StoreFactory::from_config(&config).await;
        assert!(store.is_ok());
    }

    #[cfg(feature = "sheets-store")]
    #[tokio::test]
    async fn test_sheets_without_config_rejected() {
        let result = StoreFactory::create(StoreType::Sheets, None).await;
        assert!(result.is_err());
    }
}
