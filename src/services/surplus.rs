//! Surplus derivation against the latest stock row.
//!
//! The surplus is the sales figure subtracted from the stock figure, per
//! item: positive means waste (overstocked), negative means the stall ran
//! out and could have sold more.

use crate::models::{coerce_row, SalesRecord, StockRow, SurplusRecord, ITEM_COUNT};
use crate::store::{Table, WorksheetStore};

use super::error::SessionError;

/// Element-wise `stock - sales`. Exact integer subtraction, no clamping.
pub fn surplus(stock: &StockRow, sales: &SalesRecord) -> SurplusRecord {
    let mut values = [0i64; ITEM_COUNT];
    for (index, slot) in values.iter_mut().enumerate() {
        *slot = stock.values()[index] - sales.values()[index];
    }
    SurplusRecord::new(values)
}

/// Read the most recent stock row from the store.
///
/// An empty stock table is a [`SessionError::NoStockRows`] condition, not an
/// index panic.
pub async fn latest_stock_row(store: &dyn WorksheetStore) -> Result<StockRow, SessionError> {
    let rows = store.read_all_rows(Table::Stock).await?;
    let last = rows.last().ok_or(SessionError::NoStockRows)?;
    let values =
        coerce_row(last).map_err(|e| SessionError::malformed_row(Table::Stock, e))?;
    Ok(StockRow::new(values))
}
