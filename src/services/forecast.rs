//! Stock forecasting from recent sales history.
//!
//! For each item column, the forecast is the arithmetic mean of the last few
//! sales entries with a 10% safety margin on top, rounded to a whole number
//! of items.

use crate::models::{parse_cell, SalesHistory, StockForecast, ITEM_COUNT};
use crate::store::{Table, WorksheetStore};

use super::error::SessionError;

/// How many recent sales entries feed each item's forecast. Younger sheets
/// contribute however many entries they have.
pub const FORECAST_WINDOW: usize = 5;

/// Safety margin applied on top of the average.
pub const SAFETY_MARGIN: f64 = 1.10;

/// Read the per-item tails of the sales worksheet.
pub async fn sales_history(store: &dyn WorksheetStore) -> Result<SalesHistory, SessionError> {
    let mut columns: [Vec<i64>; ITEM_COUNT] = std::array::from_fn(|_| Vec::new());

    for (index, column) in columns.iter_mut().enumerate() {
        let cells = store
            .read_column_tail(Table::Sales, index, FORECAST_WINDOW)
            .await?;
        for cell in &cells {
            let value =
                parse_cell(cell).map_err(|e| SessionError::malformed_row(Table::Sales, e))?;
            column.push(value);
        }
    }

    Ok(SalesHistory::new(columns))
}

/// Compute the recommended stock level per item.
///
/// The mean is taken over the entries actually present, so a sheet with
/// fewer than [`FORECAST_WINDOW`] rows still forecasts correctly. A column
/// with no entries at all has no defined average and fails with
/// [`SessionError::EmptyHistory`].
///
/// Rounding is `f64::round`, half away from zero. Item counts are discrete
/// and ties are rare, so the exact tie rule is not load-bearing, but it is
/// fixed here so forecasts are reproducible.
pub fn forecast(history: &SalesHistory) -> Result<StockForecast, SessionError> {
    let mut values = [0i64; ITEM_COUNT];

    for (index, slot) in values.iter_mut().enumerate() {
        let column = history.column(index);
        if column.is_empty() {
            return Err(SessionError::EmptyHistory { column: index });
        }

        let sum: i64 = column.iter().sum();
        let mean = sum as f64 / column.len() as f64;
        *slot = (mean * SAFETY_MARGIN).round() as i64;
    }

    Ok(StockForecast::new(values))
}
