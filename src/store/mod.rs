//! Worksheet store abstraction and backends.
//!
//! The spreadsheet is the program's only persistent state. This module keeps
//! it behind the [`WorksheetStore`] trait so the session pipeline never knows
//! which backend it is talking to:
//!
//! - `stores::local`: in-memory implementation for unit testing and local
//!   development
//! - `stores::sheets`: Google Sheets REST implementation (feature
//!   `sheets-store`)
//!
//! The store handle is an explicit dependency passed into the session
//! controller; there is no process-wide singleton.

#[cfg(not(any(feature = "local-store", feature = "sheets-store")))]
compile_error!("Enable at least one worksheet store backend feature.");

pub mod config;
pub mod error;
pub mod factory;
pub mod stores;
pub mod worksheet;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use factory::{StoreFactory, StoreType};
#[cfg(feature = "local-store")]
pub use stores::LocalWorksheet;
#[cfg(feature = "sheets-store")]
pub use stores::{SheetsConfig, SheetsStore};
pub use worksheet::{Table, WorksheetStore};

// Sheets config is colocated with the store implementation.
#[cfg(not(feature = "sheets-store"))]
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    _private: (),
}
