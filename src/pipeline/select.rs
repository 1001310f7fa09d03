use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::records::RawListing;

/// Rating badge the source site glues onto society names, e.g. "4.5 ★".
static RATING_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(\.\d+)?\s?★").unwrap());

const PRICE_ON_REQUEST: &str = "price on request";

/// Strips rating markers from a scraped society name and canonicalizes it.
///
/// Absent values come out as the empty string, never as an error.
pub fn normalize_society(raw: Option<&str>) -> String {
    match raw {
        Some(name) => RATING_MARKER.replace_all(name, "").trim().to_lowercase(),
        None => String::new(),
    }
}

/// True when the price cell carries the "Price on Request" placeholder.
///
/// Only the explicit placeholder marks a row as unusable here; listings
/// without any price cell pass through.
pub fn is_price_on_request(price: Option<&str>) -> bool {
    price.is_some_and(|p| p.eq_ignore_ascii_case(PRICE_ON_REQUEST))
}

/// Drops rows priced on request. Returns the survivors and the drop count.
pub fn drop_price_on_request(listings: Vec<RawListing>) -> (Vec<RawListing>, usize) {
    let before = listings.len();
    let kept: Vec<RawListing> = listings
        .into_iter()
        .filter(|listing| !is_price_on_request(listing.price.as_deref()))
        .collect();
    let dropped = before - kept.len();
    if dropped > 0 {
        info!("Dropped {} listings priced on request", dropped);
    }
    (kept, dropped)
}
