pub mod coerce;
pub mod prices;
pub mod select;
pub mod sink;

use std::path::Path;

use serde::Serialize;
use tracing::{info, instrument};

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::reader;

/// Result of a complete cleaning run
#[derive(Debug, Serialize)]
pub struct PipelineSummary {
    pub rows_read: usize,
    pub dropped_price_on_request: usize,
    pub dropped_missing_bedroom: usize,
    pub rows_written: usize,
    pub output_file: String,
}

/// Runs the full cleaning pipeline: load, select, price, coerce, persist.
#[instrument(skip(config), fields(input = %config.input_path))]
pub fn run(config: &PipelineConfig) -> Result<PipelineSummary> {
    info!("🚀 Starting cleaning pipeline for {}", config.input_path);
    println!("🚀 Starting cleaning pipeline for {}", config.input_path);

    // Step 1: Load the raw export and drop the unusable rows
    info!("📡 Loading raw listings...");
    println!("📡 Loading raw listings...");
    let raw = reader::read_listings(Path::new(&config.input_path))?;
    let rows_read = raw.len();
    info!("✅ Loaded {} raw listings", rows_read);
    println!("✅ Loaded {} raw listings", rows_read);

    let (selected, dropped_price_on_request) = select::drop_price_on_request(raw);

    // Step 2: Normalize prices and enforce the bedroom requirement
    info!("🔧 Normalizing prices...");
    println!("🔧 Normalizing prices...");
    let (priced, dropped_missing_bedroom) = prices::normalize_prices(selected);

    // Step 3: Coerce the free-text columns into typed ones
    let listings = coerce::coerce_types(priced);
    info!(
        "✅ Cleaned {} listings ({} priced on request, {} without bedroom count)",
        listings.len(),
        dropped_price_on_request,
        dropped_missing_bedroom
    );
    println!(
        "✅ Cleaned {} listings ({} priced on request, {} without bedroom count)",
        listings.len(),
        dropped_price_on_request,
        dropped_missing_bedroom
    );

    // Step 4: Persist the cleaned table
    let output_file = sink::write_listings(&listings, &config.output_dir, &config.output_file)?;
    info!("💾 Saved cleaned listings to {}", output_file);
    println!("💾 Saved cleaned listings to {}", output_file);

    Ok(PipelineSummary {
        rows_read,
        dropped_price_on_request,
        dropped_missing_bedroom,
        rows_written: listings.len(),
        output_file,
    })
}
