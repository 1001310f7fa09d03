use serde::{Deserialize, Serialize};

/// A listing as materialized from the raw export.
///
/// Scraped cells are free text and frequently empty, so every field except
/// `society` (normalized during the load) is value-or-absent.
#[derive(Debug, Clone, Default)]
pub struct RawListing {
    pub society: String,
    pub price: Option<String>,
    pub price_per_sqft: Option<String>,
    pub bed_room: Option<String>,
    pub bathroom: Option<String>,
    pub balcony: Option<String>,
    pub additional_room: Option<String>,
    pub floor_num: Option<String>,
}

/// A listing with canonical prices and a guaranteed bedroom count.
///
/// Rows without a usable bedroom count never reach this shape.
#[derive(Debug, Clone, Default)]
pub struct PricedListing {
    pub society: String,
    /// Price in crore, rounded to two decimals.
    pub price: Option<f64>,
    pub price_per_sqft: Option<f64>,
    pub bed_room: u32,
    pub bathroom: Option<String>,
    pub balcony: Option<String>,
    pub additional_room: Option<String>,
    pub floor_num: Option<String>,
}

/// A fully cleaned listing. Field order is the output column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub society: String,
    pub property_type: String,
    pub price: Option<f64>,
    pub price_per_sqft: Option<f64>,
    pub area: Option<i64>,
    #[serde(rename = "bedRoom")]
    pub bed_room: u32,
    pub bathroom: u32,
    pub balcony: u32,
    #[serde(rename = "additionalRoom")]
    pub additional_room: String,
    #[serde(rename = "floorNum")]
    pub floor_num: i32,
}

/// Output column order. Downstream notebooks index on `property_type`
/// being the second column and `area` the fifth, so this order is fixed.
pub const OUTPUT_HEADERS: [&str; 10] = [
    "society",
    "property_type",
    "price",
    "price_per_sqft",
    "area",
    "bedRoom",
    "bathroom",
    "balcony",
    "additionalRoom",
    "floorNum",
];
