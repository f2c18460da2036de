//! Worksheet store implementations.
//!
//! - `local`: in-memory implementation for unit testing and local development
//! - `sheets`: Google Sheets REST implementation

#[cfg(feature = "local-store")]
pub mod local;
#[cfg(feature = "sheets-store")]
pub mod sheets;

#[cfg(feature = "local-store")]
pub use local::LocalWorksheet;
#[cfg(feature = "sheets-store")]
pub use sheets::{SheetsConfig, SheetsStore};
