//! In-memory worksheet store.
//!
//! Backs unit and integration tests, and lets the tool run end to end
//! without a live spreadsheet. Rows are stored exactly as the remote store
//! would hand them back: as strings.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::super::error::{StoreError, StoreResult};
use super::super::worksheet::{Table, WorksheetStore};
use crate::models::ITEM_COUNT;

/// In-memory implementation of [`WorksheetStore`].
pub struct LocalWorksheet {
    tables: RwLock<HashMap<Table, Vec<Vec<String>>>>,
}

impl LocalWorksheet {
    /// Create a store with all three tables present and empty.
    pub fn new() -> Self {
        let mut tables = HashMap::new();
        for table in Table::ALL {
            tables.insert(table, Vec::new());
        }
        Self {
            tables: RwLock::new(tables),
        }
    }

    // The seed/inspect helpers below exist for test setup and assertions,
    // outside the gateway contract. A poisoned lock there means a test
    // already panicked mid-write, so they panic too; only the trait methods
    // translate poisoning into StoreError for the session pipeline.

    /// Append integer rows directly, bypassing the trait. Test setup helper.
    pub fn seed_rows(&self, table: Table, rows: &[[i64; ITEM_COUNT]]) {
        let mut tables = self.tables.write().expect("table lock poisoned");
        let entry = tables.entry(table).or_default();
        for row in rows {
            entry.push(row.iter().map(|v| v.to_string()).collect());
        }
    }

    /// Append one row of raw cells. Test setup helper for rows the remote
    /// store could hand back but the trait can never write, such as
    /// non-numeric cells.
    pub fn seed_raw_row(&self, table: Table, cells: &[&str]) {
        let mut tables = self.tables.write().expect("table lock poisoned");
        tables
            .entry(table)
            .or_default()
            .push(cells.iter().map(|c| c.to_string()).collect());
    }

    /// Snapshot of a table's rows, for assertions.
    pub fn rows(&self, table: Table) -> Vec<Vec<String>> {
        self.tables
            .read()
            .expect("table lock poisoned")
            .get(&table)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of rows currently in a table.
    pub fn row_count(&self, table: Table) -> usize {
        self.tables
            .read()
            .expect("table lock poisoned")
            .get(&table)
            .map(Vec::len)
            .unwrap_or(0)
    }

    fn lock_error() -> StoreError {
        StoreError::internal("worksheet table lock poisoned")
    }
}

impl Default for LocalWorksheet {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WorksheetStore for LocalWorksheet {
    async fn append_row(&self, table: Table, row: &[i64; ITEM_COUNT]) -> StoreResult<()> {
        let mut tables = self.tables.write().map_err(|_| Self::lock_error())?;
        tables
            .entry(table)
            .or_default()
            .push(row.iter().map(|v| v.to_string()).collect());
        Ok(())
    }

    async fn read_all_rows(&self, table: Table) -> StoreResult<Vec<Vec<String>>> {
        let tables = self.tables.read().map_err(|_| Self::lock_error())?;
        Ok(tables.get(&table).cloned().unwrap_or_default())
    }

    async fn read_column_tail(
        &self,
        table: Table,
        column: usize,
        n: usize,
    ) -> StoreResult<Vec<String>> {
        let tables = self.tables.read().map_err(|_| Self::lock_error())?;
        let values: Vec<String> = tables
            .get(&table)
            .map(|rows| {
                rows.iter()
                    .filter_map(|row| row.get(column).cloned())
                    .collect()
            })
            .unwrap_or_default();

        let start = values.len().saturating_sub(n);
        Ok(values[start..].to_vec())
    }
}
