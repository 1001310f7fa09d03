use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{NO_ADDITIONAL_ROOM, PROPERTY_TYPE_FLAT, RUPEES_PER_CRORE};
use crate::records::{Listing, PricedListing};

/// First run of digits in a token.
static COUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// First run of digits in a token, with an optional sign.
static SIGNED_COUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"-?\d+").unwrap());

/// Extracts the leading count from a free-text cell, e.g. "3 Bedrooms" into 3.
pub fn leading_count(cell: &str) -> Option<u32> {
    let token = first_token(cell)?;
    COUNT.find(token)?.as_str().parse().ok()
}

fn first_token(cell: &str) -> Option<&str> {
    cell.split_whitespace().next()
}

/// Textual floor labels used by the source site. Ground and lower-ground
/// floors count as 0, basements as -1.
fn floor_label_value(token: &str) -> Option<&str> {
    if token.eq_ignore_ascii_case("ground") || token.eq_ignore_ascii_case("lower") {
        Some("0")
    } else if token.eq_ignore_ascii_case("basement") {
        Some("-1")
    } else {
        None
    }
}

fn bathroom_count(cell: Option<&str>) -> u32 {
    cell.and_then(leading_count).unwrap_or(0)
}

/// Balcony counts come as digits or as the phrase "No Balcony".
fn balcony_count(cell: Option<&str>) -> u32 {
    let token = match cell.and_then(first_token) {
        Some(token) => token,
        None => return 0,
    };
    let token = if token.eq_ignore_ascii_case("no") { "0" } else { token };
    COUNT
        .find(token)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Floor numbers: textual labels first, then the signed count, default 0.
fn floor_number(cell: Option<&str>) -> i32 {
    let token = match cell.and_then(first_token) {
        Some(token) => token,
        None => return 0,
    };
    let token = floor_label_value(token).unwrap_or(token);
    SIGNED_COUNT
        .find(token)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

fn additional_room(cell: Option<&str>) -> String {
    match cell {
        Some(room) => room.to_lowercase(),
        None => NO_ADDITIONAL_ROOM.to_string(),
    }
}

/// Built-up area derived from the crore price and the per-sqft rate.
///
/// Absent whenever either side is missing or the rate is zero.
fn derived_area(price: Option<f64>, price_per_sqft: Option<f64>) -> Option<i64> {
    let price = price?;
    let rate = price_per_sqft.filter(|r| *r != 0.0)?;
    Some((price * RUPEES_PER_CRORE / rate).round() as i64)
}

/// Coerces the remaining free-text columns, derives `area` and tags every
/// listing with the constant property type.
pub fn coerce_types(listings: Vec<PricedListing>) -> Vec<Listing> {
    listings
        .into_iter()
        .map(|listing| Listing {
            society: listing.society,
            property_type: PROPERTY_TYPE_FLAT.to_string(),
            price: listing.price,
            price_per_sqft: listing.price_per_sqft,
            area: derived_area(listing.price, listing.price_per_sqft),
            bed_room: listing.bed_room,
            bathroom: bathroom_count(listing.bathroom.as_deref()),
            balcony: balcony_count(listing.balcony.as_deref()),
            additional_room: additional_room(listing.additional_room.as_deref()),
            floor_num: floor_number(listing.floor_num.as_deref()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_count() {
        assert_eq!(leading_count("3 Bedrooms"), Some(3));
        assert_eq!(leading_count("2"), Some(2));
        assert_eq!(leading_count("Studio Apartment"), None);
        assert_eq!(leading_count(""), None);
    }

    #[test]
    fn test_leading_count_reads_only_first_token() {
        assert_eq!(leading_count("Tower 4"), None);
    }

    #[test]
    fn test_bathroom_defaults_to_zero() {
        assert_eq!(bathroom_count(Some("2 Bathrooms")), 2);
        assert_eq!(bathroom_count(Some("shared")), 0);
        assert_eq!(bathroom_count(None), 0);
    }

    #[test]
    fn test_balcony_no_means_zero() {
        assert_eq!(balcony_count(Some("No Balcony")), 0);
        assert_eq!(balcony_count(Some("no")), 0);
        assert_eq!(balcony_count(Some("3 Balconies")), 3);
        assert_eq!(balcony_count(None), 0);
    }

    #[test]
    fn test_floor_number_labels() {
        assert_eq!(floor_number(Some("Ground")), 0);
        assert_eq!(floor_number(Some("Lower Ground")), 0);
        assert_eq!(floor_number(Some("Basement 2")), -1);
        assert_eq!(floor_number(Some("12 out of 22")), 12);
        assert_eq!(floor_number(Some("Penthouse")), 0);
        assert_eq!(floor_number(None), 0);
    }

    #[test]
    fn test_derived_area() {
        assert_eq!(derived_area(Some(1.25), Some(5000.0)), Some(2500));
        // Never divide by a zero or missing rate
        assert_eq!(derived_area(Some(1.25), Some(0.0)), None);
        assert_eq!(derived_area(Some(1.25), None), None);
        assert_eq!(derived_area(None, Some(5000.0)), None);
    }

    #[test]
    fn test_coerce_types_fills_defaults() {
        let priced = PricedListing {
            society: "meadows".to_string(),
            price: Some(1.25),
            price_per_sqft: Some(5000.0),
            bed_room: 3,
            bathroom: Some("2 Bathrooms".to_string()),
            balcony: Some("No Balcony".to_string()),
            additional_room: None,
            floor_num: Some("Ground".to_string()),
        };

        let cleaned = coerce_types(vec![priced]);

        assert_eq!(cleaned.len(), 1);
        let listing = &cleaned[0];
        assert_eq!(listing.property_type, "flat");
        assert_eq!(listing.area, Some(2500));
        assert_eq!(listing.bed_room, 3);
        assert_eq!(listing.bathroom, 2);
        assert_eq!(listing.balcony, 0);
        assert_eq!(listing.additional_room, "not available");
        assert_eq!(listing.floor_num, 0);
    }
}
