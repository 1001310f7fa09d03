use tracing::info;

use crate::constants::LAKH_PER_CRORE;
use crate::pipeline::coerce;
use crate::records::{PricedListing, RawListing};

/// Parses a tokenized price expression into crore.
///
/// The first token is the amount (thousands separators allowed), the
/// optional second token its unit: `Lac`/`Lakh` scales down by 100,
/// anything else already is crore. An unrecognized unit therefore reads
/// as crore; the raw exports only ever carry `Lac` and `Cr`.
pub fn treat_price(tokens: &[&str]) -> Option<f64> {
    let amount = tokens.first()?.replace(',', "").parse::<f64>().ok()?;
    let value = match tokens.get(1) {
        Some(unit) if is_lakh_unit(unit) => amount / LAKH_PER_CRORE,
        _ => amount,
    };
    Some(round2(value))
}

fn is_lakh_unit(unit: &str) -> bool {
    let unit = unit.to_lowercase();
    unit.starts_with("lac") || unit.starts_with("lakh")
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Parses a per-square-foot price cell such as "₹5,400 /sqft".
pub fn parse_price_per_sqft(raw: &str) -> Option<f64> {
    let amount = raw.split('/').next()?;
    amount
        .replace('₹', "")
        .replace(',', "")
        .trim()
        .parse::<f64>()
        .ok()
}

/// Prices every listing and enforces the bedroom requirement.
///
/// Rows whose bedroom cell is missing or carries no count are dropped
/// here; together with the price-on-request filter these are the only two
/// places where rows leave the set.
pub fn normalize_prices(listings: Vec<RawListing>) -> (Vec<PricedListing>, usize) {
    let before = listings.len();
    let priced: Vec<PricedListing> = listings
        .into_iter()
        .filter_map(|listing| {
            let bed_room = listing.bed_room.as_deref().and_then(coerce::leading_count)?;
            let price = listing.price.as_deref().and_then(|cell| {
                let tokens: Vec<&str> = cell.split_whitespace().collect();
                treat_price(&tokens)
            });
            let price_per_sqft = listing
                .price_per_sqft
                .as_deref()
                .and_then(parse_price_per_sqft);
            Some(PricedListing {
                society: listing.society,
                price,
                price_per_sqft,
                bed_room,
                bathroom: listing.bathroom,
                balcony: listing.balcony,
                additional_room: listing.additional_room,
                floor_num: listing.floor_num,
            })
        })
        .collect();
    let dropped = before - priced.len();
    if dropped > 0 {
        info!("Dropped {} listings without a usable bedroom count", dropped);
    }
    (priced, dropped)
}
