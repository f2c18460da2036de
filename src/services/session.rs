//! One market day's data-entry session, end to end.
//!
//! The controller owns the sequencing: prompt until the operator enters a
//! valid sales line, append it, derive and append the surplus, then forecast
//! and append the next stock row. Every store call is awaited before the
//! next begins, and any failure past the prompt aborts the run with the rows
//! appended so far left in place.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::input;
use crate::models::{SalesRecord, StockForecast, SurplusRecord, ITEM_COUNT};
use crate::store::{Table, WorksheetStore};

use super::error::SessionError;
use super::{forecast, surplus};

/// What one completed session produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub sales: SalesRecord,
    pub surplus: SurplusRecord,
    pub forecast: StockForecast,
}

/// Drives one data-entry session against an injected store.
///
/// Input and output are generic so tests can run the whole pipeline with
/// in-memory cursors instead of a console.
pub struct SessionController<'a, R, W> {
    store: &'a dyn WorksheetStore,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> SessionController<'a, R, W> {
    pub fn new(store: &'a dyn WorksheetStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Run the session: prompt, validate, persist, derive, persist.
    pub async fn run(&mut self) -> Result<SessionSummary, SessionError> {
        let sales = self.prompt_sales()?;
        info!(%sales, "sales figures captured");
        self.update_worksheet(Table::Sales, sales.values()).await?;

        writeln!(self.output, "Calculating surplus data...")?;
        let stock = surplus::latest_stock_row(self.store).await?;
        let surplus_row = surplus::surplus(&stock, &sales);
        debug!(%surplus_row, "surplus derived");
        self.update_worksheet(Table::Surplus, surplus_row.values())
            .await?;

        writeln!(self.output, "Calculating stock data...")?;
        let history = forecast::sales_history(self.store).await?;
        let forecast_row = forecast::forecast(&history)?;
        debug!(%forecast_row, "stock forecast computed");
        self.update_worksheet(Table::Stock, forecast_row.values())
            .await?;

        Ok(SessionSummary {
            sales,
            surplus: surplus_row,
            forecast: forecast_row,
        })
    }

    /// Prompt until the operator enters a valid sales line.
    ///
    /// An explicit loop, not recursion: a persistent operator can retry
    /// forever without growing the stack. End of input before a valid line
    /// is a hard error rather than a spin.
    fn prompt_sales(&mut self) -> Result<SalesRecord, SessionError> {
        loop {
            writeln!(self.output, "Please enter sales data from the last market.")?;
            writeln!(
                self.output,
                "Data should be six numbers, separated by commas."
            )?;
            writeln!(self.output, "Example: 10,20,30,40,50,60")?;
            writeln!(self.output, "Enter your data here:")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(SessionError::Io(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "input closed before valid sales data was entered",
                )));
            }

            let tokens = input::split_tokens(&line);
            let reason = match input::validate(&tokens) {
                // Conversion re-derives the integers; validation handed
                // nothing back.
                Ok(()) => match input::parse_record(&tokens) {
                    Ok(record) => {
                        writeln!(self.output, "Data is valid!")?;
                        return Ok(record);
                    }
                    Err(reason) => reason,
                },
                Err(reason) => reason,
            };

            debug!(%reason, "rejected sales input");
            writeln!(self.output, "Invalid data: {}, please try again.", reason)?;
            writeln!(self.output)?;
        }
    }

    async fn update_worksheet(
        &mut self,
        table: Table,
        row: &[i64; ITEM_COUNT],
    ) -> Result<(), SessionError> {
        writeln!(self.output, "Updating {} worksheet...", table)?;
        self.store.append_row(table, row).await?;
        info!(%table, "worksheet row appended");
        writeln!(self.output, "{} worksheet updated successfully.", table)?;
        Ok(())
    }
}
