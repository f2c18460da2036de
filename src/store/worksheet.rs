//! The worksheet store trait and table names.

use std::fmt;

use async_trait::async_trait;

use super::error::StoreResult;
use crate::models::ITEM_COUNT;

/// The three worksheets this program touches. All are append-only from the
/// program's point of view; history is never rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    /// One row per market day, as entered by the operator.
    Sales,
    /// One row per market day, the recommended stock level.
    Stock,
    /// One row per market day, `stock - sales` per item.
    Surplus,
}

impl Table {
    pub const ALL: [Table; 3] = [Table::Sales, Table::Stock, Table::Surplus];

    /// Worksheet name as it appears in the spreadsheet.
    pub fn name(&self) -> &'static str {
        match self {
            Table::Sales => "sales",
            Table::Stock => "stock",
            Table::Surplus => "surplus",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Abstract interface over the hosted spreadsheet.
///
/// Cells come back as strings because that is what the spreadsheet hands
/// out; coercion to integers is the caller's job
/// (see [`crate::models::coerce_row`]).
#[async_trait]
pub trait WorksheetStore: Send + Sync {
    /// Append one six-integer row to a worksheet.
    async fn append_row(&self, table: Table, row: &[i64; ITEM_COUNT]) -> StoreResult<()>;

    /// Read every row of a worksheet in sheet order.
    async fn read_all_rows(&self, table: Table) -> StoreResult<Vec<Vec<String>>>;

    /// Read the last `n` values of one column, in sheet order. Returns fewer
    /// when the column is shorter than `n`.
    async fn read_column_tail(
        &self,
        table: Table,
        column: usize,
        n: usize,
    ) -> StoreResult<Vec<String>>;
}
