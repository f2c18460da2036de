//! Google Sheets REST backend.
//!
//! Talks to the Sheets v4 `values` endpoints with a bearer token supplied
//! through the environment. Appends use `valueInputOption=RAW` so the sheet
//! stores the integers verbatim instead of re-interpreting them.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::super::error::{StoreError, StoreResult};
use super::super::worksheet::{Table, WorksheetStore};
use crate::models::ITEM_COUNT;

/// Google Sheets connection settings.
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    /// Spreadsheet ID from the sheet's URL.
    pub spreadsheet_id: String,
    /// Environment variable holding the OAuth bearer token.
    pub token_env: String,
    /// API base, overridable so tests can point at a stub server.
    pub api_base: String,
    /// Label rows at the top of every worksheet, skipped on reads.
    pub header_rows: usize,
}

/// Response shape of the `values.get` endpoint. Cells can come back as any
/// JSON scalar depending on the sheet's formatting, so they are normalized
/// to strings here.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

fn cell_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Google Sheets implementation of [`WorksheetStore`].
pub struct SheetsStore {
    client: reqwest::Client,
    config: SheetsConfig,
    token: String,
}

impl SheetsStore {
    /// Create a store, resolving the bearer token from the configured
    /// environment variable.
    pub fn new(config: SheetsConfig) -> StoreResult<Self> {
        let token = std::env::var(&config.token_env).map_err(|_| {
            StoreError::configuration(format!(
                "bearer token environment variable '{}' is not set",
                config.token_env
            ))
        })?;

        Ok(Self {
            client: reqwest::Client::new(),
            config,
            token,
        })
    }

    fn values_url(&self, range: &str) -> String {
        format!(
            "{}/{}/values/{}",
            self.config.api_base, self.config.spreadsheet_id, range
        )
    }

    async fn check_status(response: reqwest::Response, what: &str) -> StoreResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(StoreError::api(format!(
            "{} failed with {}: {}",
            what, status, body
        )))
    }

    async fn get_values(&self, range: &str) -> StoreResult<Vec<Vec<String>>> {
        debug!(%range, "fetching worksheet values");
        let response = self
            .client
            .get(self.values_url(range))
            .bearer_auth(&self.token)
            .send()
            .await?;
        let response = Self::check_status(response, "values.get").await?;

        let value_range: ValueRange = response.json().await?;
        Ok(value_range
            .values
            .iter()
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect())
    }
}

#[async_trait]
impl WorksheetStore for SheetsStore {
    async fn append_row(&self, table: Table, row: &[i64; ITEM_COUNT]) -> StoreResult<()> {
        debug!(%table, "appending worksheet row");
        let url = self.values_url(&format!("{}!A1:append", table.name()));
        let body = json!({ "values": [row] });

        let response = self
            .client
            .post(url)
            .query(&[("valueInputOption", "RAW")])
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;
        Self::check_status(response, "values.append").await?;
        Ok(())
    }

    async fn read_all_rows(&self, table: Table) -> StoreResult<Vec<Vec<String>>> {
        let rows = self.get_values(table.name()).await?;
        Ok(rows
            .into_iter()
            .skip(self.config.header_rows)
            .collect())
    }

    async fn read_column_tail(
        &self,
        table: Table,
        column: usize,
        n: usize,
    ) -> StoreResult<Vec<String>> {
        if column >= 26 {
            return Err(StoreError::internal(format!(
                "column index {} out of range for A1 notation",
                column
            )));
        }
        let letter = (b'A' + column as u8) as char;
        let range = format!("{}!{}:{}", table.name(), letter, letter);

        let rows = self.get_values(&range).await?;
        let values: Vec<String> = rows
            .into_iter()
            .skip(self.config.header_rows)
            .filter_map(|row| row.into_iter().next())
            .collect();

        let start = values.len().saturating_sub(n);
        Ok(values[start..].to_vec())
    }
}
