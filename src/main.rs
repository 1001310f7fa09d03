use tracing::{error, info};

use flats_cleaner::{logging, pipeline, PipelineConfig};

fn main() {
    logging::init_logging();

    let config = PipelineConfig::default();

    println!("🧹 Cleaning the flats export...");
    match pipeline::run(&config) {
        Ok(summary) => {
            info!("Pipeline finished");
            println!("\n📊 Cleaning results:");
            println!("   Rows read: {}", summary.rows_read);
            println!("   Priced on request: {}", summary.dropped_price_on_request);
            println!(
                "   Missing bedroom count: {}",
                summary.dropped_missing_bedroom
            );
            println!("   Rows written: {}", summary.rows_written);
            println!("   Output file: {}", summary.output_file);
            println!("✅ Cleaning completed successfully");
        }
        Err(e) => {
            // A failed run is reported, never propagated as a crash
            error!("Pipeline failed: {}", e);
            println!("❌ Cleaning failed: {}", e);
        }
    }
}
