//! Google Sheets v4 client for the values endpoints.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use super::service::{SheetService, ValueUpdate};

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Thin client over the two values endpoints this tool needs:
/// `values/{range}` for reads and `values:batchUpdate` for the write-back.
///
/// Expects an already-established OAuth access token with spreadsheet scope;
/// obtaining one is the operator's problem, not this client's.
pub struct SheetsClient {
    http: reqwest::Client,
    spreadsheet_id: String,
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    // Absent entirely when the requested range is blank.
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl SheetsClient {
    pub fn new(spreadsheet_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        SheetsClient {
            http: reqwest::Client::new(),
            spreadsheet_id: spreadsheet_id.into(),
            access_token: access_token.into(),
        }
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("Sheets API returned {status}: {body}");
    }
}

#[async_trait]
impl SheetService for SheetsClient {
    async fn read_range(&self, range: &str) -> Result<Vec<Vec<String>>> {
        let url = format!(
            "{}/{}/values/{}",
            SHEETS_API_BASE, self.spreadsheet_id, range
        );
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .with_context(|| format!("Failed to fetch range {range}"))?;
        let body: ValueRange = Self::check(response)
            .await?
            .json()
            .await
            .context("Failed to decode values response")?;
        Ok(body.values)
    }

    async fn batch_update(&self, updates: &[ValueUpdate]) -> Result<()> {
        let url = format!(
            "{}/{}/values:batchUpdate",
            SHEETS_API_BASE, self.spreadsheet_id
        );
        let body = serde_json::json!({
            "valueInputOption": "RAW",
            "data": updates,
        });
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await
            .context("Failed to send batch update")?;
        Self::check(response).await?;
        Ok(())
    }
}
