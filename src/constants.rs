/// Fixed locations and cleaning constants shared across the pipeline.

// Source export and destination (relative to the working directory)
pub const RAW_FLATS_CSV: &str = "data/raw/flats.csv";
pub const CLEAN_OUTPUT_DIR: &str = "data/flat_clean";
pub const CLEAN_OUTPUT_FILE: &str = "flat_cleaned.csv";

// Every record in this dataset is a flat
pub const PROPERTY_TYPE_FLAT: &str = "flat";

// Sentinel for listings that advertise no additional room
pub const NO_ADDITIONAL_ROOM: &str = "not available";

// Price scales: lakh per crore, and crore in the currency base unit
pub const LAKH_PER_CRORE: f64 = 100.0;
pub const RUPEES_PER_CRORE: f64 = 10_000_000.0;
