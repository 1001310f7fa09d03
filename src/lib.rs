//! Cleaning pipeline for scraped flat listings.
//!
//! Turns the raw CSV export produced by the listings scraper into a typed,
//! analysis-ready table: canonical crore prices, numeric room counts, a
//! derived built-up area and a stable column order.

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod reader;
pub mod records;

// Re-export the types a pipeline run touches
pub use config::PipelineConfig;
pub use error::{CleanerError, Result};
pub use pipeline::{run, PipelineSummary};
