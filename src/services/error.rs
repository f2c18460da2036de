//! Error type for a data-entry session.

use crate::models::RowError;
use crate::store::{StoreError, Table};

/// Fatal session failures. Invalid operator input is not represented here;
/// it is recovered by the re-prompt loop and never escapes the validator.
///
/// A session error aborts the run where it happened. Rows appended by
/// earlier stages stay in the spreadsheet; there is no rollback.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The stock worksheet has no data rows, so there is nothing to compute
    /// a surplus against.
    #[error("no stock rows recorded yet; cannot compute surplus")]
    NoStockRows,

    /// A sales-history column came back empty, so its average is undefined.
    #[error("no sales history for item column {column}; cannot forecast stock")]
    EmptyHistory { column: usize },

    /// A worksheet row did not coerce into six integers.
    #[error("malformed row in {table} worksheet: {source}")]
    MalformedRow { table: Table, source: RowError },

    #[error(transparent)]
    Store(#[from] StoreError),

    /// Console read or write failure.
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SessionError {
    pub fn malformed_row(table: Table, source: RowError) -> Self {
        Self::MalformedRow { table, source }
    }
}
