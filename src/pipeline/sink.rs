use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::records::{Listing, OUTPUT_HEADERS};

/// Writes the cleaned listings as a headered CSV under `output_dir`.
///
/// The directory is created if needed; rerunning over an existing one is
/// fine. Returns the path of the written file.
pub fn write_listings(listings: &[Listing], output_dir: &str, file_name: &str) -> Result<String> {
    fs::create_dir_all(output_dir)?;

    let filepath = Path::new(output_dir).join(file_name);
    let mut writer = csv::Writer::from_path(&filepath)?;

    // Serde only emits the header row alongside the first record
    if listings.is_empty() {
        writer.write_record(OUTPUT_HEADERS)?;
    }
    for listing in listings {
        writer.serialize(listing)?;
    }
    writer.flush()?;

    Ok(filepath.to_string_lossy().to_string())
}
