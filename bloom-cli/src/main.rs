//! One-shot updater that fills the flower catalog's season column from the
//! built-in species table.

use anyhow::{Context, Result};
use colored::*;

mod api;
mod config;
mod seasons;
mod updater;

use api::SheetsClient;
use config::SheetTarget;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    if let Err(err) = run().await {
        eprintln!("{} {:#}", "Update failed:".red().bold(), err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let token = std::env::var("SHEETS_ACCESS_TOKEN").context(
        "SHEETS_ACCESS_TOKEN is not set; export an OAuth access token with spreadsheet scope",
    )?;

    let target = SheetTarget::default();
    log::info!(
        "Updating spreadsheet {} (tab {})",
        target.spreadsheet_id,
        target.sheet_gid
    );

    let client = SheetsClient::new(target.spreadsheet_id.clone(), token);
    match updater::run(&client, &target).await? {
        0 => println!("{}", "Nothing to update.".yellow()),
        written => println!("{} {} rows updated", "Done:".green().bold(), written),
    }
    Ok(())
}
