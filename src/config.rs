use crate::constants;

/// Locations the pipeline reads from and writes to.
///
/// The cleaning job runs against a fixed on-disk layout, so the default
/// configuration is the production one; tests point the paths elsewhere.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Raw export produced by the listings scraper.
    pub input_path: String,
    /// Directory the cleaned table is written into (created if missing).
    pub output_dir: String,
    /// File name of the cleaned table inside `output_dir`.
    pub output_file: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: constants::RAW_FLATS_CSV.to_string(),
            output_dir: constants::CLEAN_OUTPUT_DIR.to_string(),
            output_file: constants::CLEAN_OUTPUT_FILE.to_string(),
        }
    }
}
