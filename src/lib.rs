//! # stockbook
//!
//! Market-stall sales entry and stock forecasting backed by a hosted
//! spreadsheet.
//!
//! One run of the tool captures a single market day: the operator types the
//! day's sales figures (six integers, one per item type), the figures are
//! appended to the `sales` worksheet, a surplus row is derived against the
//! latest `stock` row, and a recommended stock level for the next market is
//! computed from the last five sales entries per item and appended to the
//! `stock` worksheet.
//!
//! ## Architecture
//!
//! - [`models`]: fixed-width record types shared across the pipeline
//! - [`input`]: operator input validation and conversion
//! - [`services`]: surplus derivation, stock forecasting, and session
//!   orchestration
//! - [`store`]: the worksheet store abstraction and its backends (in-memory
//!   and Google Sheets)
//!
//! The store is an explicit dependency injected into the session controller,
//! so the whole pipeline runs against the in-memory backend in tests without
//! a live spreadsheet.

pub mod input;
pub mod models;
pub mod services;
pub mod store;
