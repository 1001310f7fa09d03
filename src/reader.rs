use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{CleanerError, Result};
use crate::pipeline::select;
use crate::records::RawListing;

/// Column positions resolved once from the CSV header row.
///
/// Every known column except the price-per-unit one may be absent, in
/// which case its cells read as absent for the whole file. `link` and
/// `property_id` are never resolved; the typed record does not carry them.
#[derive(Debug)]
pub struct ColumnLayout {
    pub society: Option<usize>,
    pub price: Option<usize>,
    pub price_per_sqft: usize,
    pub bed_room: Option<usize>,
    pub bathroom: Option<usize>,
    pub balcony: Option<usize>,
    pub additional_room: Option<usize>,
    pub floor_num: Option<usize>,
}

impl ColumnLayout {
    /// Resolves column positions from the header row.
    ///
    /// The raw export labels the per-unit price column `area`; it is read
    /// here under its real meaning. When both spellings are present the
    /// legacy `area` column wins.
    pub fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let position = |name: &str| headers.iter().position(|h| h == name);

        let price_per_sqft = position("area")
            .or_else(|| position("price_per_sqft"))
            .ok_or_else(|| {
                CleanerError::Schema(
                    "missing price-per-unit column: expected `area` or `price_per_sqft`"
                        .to_string(),
                )
            })?;

        Ok(Self {
            society: position("society"),
            price: position("price"),
            price_per_sqft,
            bed_room: position("bedRoom"),
            bathroom: position("bathroom"),
            balcony: position("balcony"),
            additional_room: position("additionalRoom"),
            floor_num: position("floorNum"),
        })
    }
}

/// Reads the raw export and materializes one `RawListing` per row.
///
/// Empty cells come out as `None`; `society` is normalized on the way in.
pub fn read_listings(path: &Path) -> Result<Vec<RawListing>> {
    info!("Reading raw listings from {}", path.display());

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let layout = ColumnLayout::from_headers(reader.headers()?)?;
    debug!("Resolved column layout: {:?}", layout);

    let mut listings = Vec::new();
    let mut read_errors = 0;

    for (idx, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                listings.push(RawListing {
                    society: select::normalize_society(
                        layout.society.and_then(|i| record.get(i)),
                    ),
                    price: cell(&record, layout.price),
                    price_per_sqft: cell(&record, Some(layout.price_per_sqft)),
                    bed_room: cell(&record, layout.bed_room),
                    bathroom: cell(&record, layout.bathroom),
                    balcony: cell(&record, layout.balcony),
                    additional_room: cell(&record, layout.additional_room),
                    floor_num: cell(&record, layout.floor_num),
                });
            }
            Err(e) => {
                read_errors += 1;
                if read_errors <= 10 {
                    // Only log first 10 errors
                    warn!("Failed to read row {}: {}", idx, e);
                }
            }
        }
    }

    info!(
        "Read {} listings ({} unreadable rows)",
        listings.len(),
        read_errors
    );

    Ok(listings)
}

fn cell(record: &csv::StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| record.get(i))
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}
