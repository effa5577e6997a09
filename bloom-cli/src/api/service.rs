//! Read/write seam over the remote spreadsheet.

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

/// One target cell range plus the 2D block of values to write there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueUpdate {
    pub range: String,
    pub values: Vec<Vec<String>>,
}

impl ValueUpdate {
    /// Update writing a single value into a single cell.
    pub fn cell(range: impl Into<String>, value: impl Into<String>) -> Self {
        ValueUpdate {
            range: range.into(),
            values: vec![vec![value.into()]],
        }
    }
}

/// Access to one spreadsheet. Implemented by [`super::SheetsClient`] in
/// production and by recording fakes in tests.
#[async_trait]
pub trait SheetService {
    /// Fetch the rows of an A1 range. Each row is the ordered cell values of
    /// that row; the service may omit trailing blank cells entirely.
    async fn read_range(&self, range: &str) -> Result<Vec<Vec<String>>>;

    /// Write all updates in one batch request, values taken literally
    /// (no formula or locale interpretation).
    async fn batch_update(&self, updates: &[ValueUpdate]) -> Result<()>;
}
