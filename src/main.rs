//! Airtable records exporter
//!
//! Pulls every record of one table from a paginated record-listing API and
//! prints the result as indented JSON.
//!
//! # Flow
//!
//! 1. Load configuration from the environment (`AIRTABLE_*`, `COLLECTOR_*`,
//!    `EXPORT_*`, `LOG_LEVEL`).
//! 2. Fetch pages sequentially, following the `offset` continuation token
//!    until the server stops returning one.
//! 3. Print `Successfully retrieved {N} records` and the records, or
//!    `Error: {message}` with a non-zero exit status.
//!
//! Logs go to stderr so stdout carries only the report.

mod config;
mod error;
mod model;
mod output;
mod source;

#[cfg(test)]
mod test_utils;

use crate::config::{CollectorConfig, SourceConfig};
use crate::error::FetchError;
use crate::model::Collection;
use crate::source::{Client, Paginator};
use anyhow::{Context, Result};
use std::io::Write;
use std::process::ExitCode;

/// Application entry point.
///
/// Runs a single export on a current-thread runtime; pages are fetched one
/// after another, never in parallel.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let app_config = match config::load_app_config() {
        Ok(config) => config,
        Err(err) => {
            println!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(app_config.log_level())
        .with_writer(std::io::stderr)
        .init();

    match run(&mut std::io::stdout()).await {
        Ok(count) => {
            tracing::info!("Export finished with {} records", count);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("Export failed: {:#}", err);
            println!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Loads configuration, collects every record and writes the report.
///
/// Returns the number of exported records.
async fn run<W: Write>(writer: &mut W) -> Result<usize> {
    let source_config = config::load_source_config()?;
    let collector_config = config::load_collector_config()?;
    let export_config = config::load_export_config()?;

    let collection = collect_records(source_config, &collector_config)
        .await
        .context("failed to retrieve records")?;
    output::export(writer, &collection, &export_config)?;
    Ok(collection.len())
}

/// Fetches all records of the configured table.
async fn collect_records(
    source_config: SourceConfig,
    collector_config: &CollectorConfig,
) -> Result<Collection, FetchError> {
    tracing::info!(
        "Collecting records from {} (max {} pages)",
        source_config.records_url(),
        collector_config.max_pages
    );
    let client = Client::new(source_config, collector_config)?;
    Paginator::new(client, collector_config.max_pages)
        .fetch_all()
        .await
}
