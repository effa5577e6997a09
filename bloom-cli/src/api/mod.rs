//! Remote spreadsheet access.

pub mod client;
pub mod service;

pub use client::SheetsClient;
pub use service::{SheetService, ValueUpdate};
