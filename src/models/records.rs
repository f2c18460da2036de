//! Fixed-width record types and worksheet cell coercion.

use thiserror::Error;

use crate::define_row_type;

/// Number of item types tracked per market day. Every worksheet row is
/// exactly this wide, and column `i` means the same item in every table.
pub const ITEM_COUNT: usize = 6;

define_row_type!(
    /// One market day's sales figures as entered by the operator.
    /// Captured once, appended to the `sales` worksheet, never mutated.
    SalesRecord
);

define_row_type!(
    /// The most recently recorded stock level per item, read from the last
    /// row of the `stock` worksheet.
    StockRow
);

define_row_type!(
    /// Element-wise `stock - sales` for one market day. Positive values are
    /// waste (overstocked), negative values are stockouts.
    SurplusRecord
);

define_row_type!(
    /// Recommended stock level per item for the next market.
    StockForecast
);

/// Per-column tails of the `sales` worksheet used for forecasting.
///
/// Each column holds at most the forecast window's worth of entries, fewer
/// when the sheet is young. Ordering within a column does not matter to the
/// average.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesHistory {
    columns: [Vec<i64>; ITEM_COUNT],
}

impl SalesHistory {
    pub fn new(columns: [Vec<i64>; ITEM_COUNT]) -> Self {
        Self { columns }
    }

    pub fn column(&self, index: usize) -> &[i64] {
        &self.columns[index]
    }

    /// Iterate the item columns in worksheet order.
    pub fn columns(&self) -> impl Iterator<Item = &[i64]> {
        self.columns.iter().map(Vec::as_slice)
    }
}

/// A worksheet row that cannot be coerced into six integers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("expected {ITEM_COUNT} columns, found {found}")]
    WrongWidth { found: usize },
    #[error("cell '{value}' is not a whole number")]
    BadCell { value: String },
}

/// Coerce a single worksheet cell into an integer.
pub fn parse_cell(cell: &str) -> Result<i64, RowError> {
    cell.parse::<i64>().map_err(|_| RowError::BadCell {
        value: cell.to_string(),
    })
}

/// Coerce a row of worksheet cells into a fixed-width integer row.
///
/// The store hands cells back as strings; this is the single place they are
/// turned into the integers the calculators work with.
pub fn coerce_row(cells: &[String]) -> Result<[i64; ITEM_COUNT], RowError> {
    if cells.len() != ITEM_COUNT {
        return Err(RowError::WrongWidth { found: cells.len() });
    }

    let mut values = [0i64; ITEM_COUNT];
    for (slot, cell) in values.iter_mut().zip(cells) {
        *slot = parse_cell(cell)?;
    }
    Ok(values)
}
