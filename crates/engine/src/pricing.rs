//! Price resolution for a single item.
//!
//! Resolution is total: whatever shape the stored fields are in, the result
//! is a non-negative amount, falling back to zero instead of erroring.

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::{CategoryKey, Item, PriceCents, StandardCategory};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Resolves the amount one item contributes when selected.
///
/// - Hotels with a usable nightly rate and both stay dates cost
///   `pricePerNight * nights`, where a stay of zero or negative length still
///   counts as one night.
/// - Restaurants use their `budgetEstimate`.
/// - Everything else, custom categories included, uses `price`.
///
/// Missing or malformed fields resolve to zero, and the result is clamped
/// to be non-negative.
pub fn resolve_price(item: &Item, key: &CategoryKey) -> PriceCents {
    let amount = match key {
        CategoryKey::Standard(StandardCategory::Hotels) => hotel_price(item),
        CategoryKey::Standard(StandardCategory::Restaurants) => {
            field_amount(item.field("budgetEstimate"))
        }
        _ => field_amount(item.field("price")),
    };
    amount.max(PriceCents::ZERO)
}

fn hotel_price(item: &Item) -> PriceCents {
    let rate = field_amount(item.field("pricePerNight"));
    let stay = item
        .field("checkIn")
        .and_then(parse_when)
        .zip(item.field("checkOut").and_then(parse_when));

    match (rate.is_positive(), stay) {
        (true, Some((check_in, check_out))) => rate * stay_nights(check_in, check_out),
        // Incomplete hotel data falls back to a plain price, if any.
        _ => field_amount(item.field("price")),
    }
}

/// Number of billable nights between two stay bounds.
///
/// Partial days round up; a zero or negative stay still bills one night.
fn stay_nights(check_in: NaiveDateTime, check_out: NaiveDateTime) -> i64 {
    let seconds = (check_out - check_in).num_seconds();
    if seconds <= 0 {
        return 1;
    }
    (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY
}

fn field_amount(value: Option<&Value>) -> PriceCents {
    value.map(PriceCents::from_field).unwrap_or(PriceCents::ZERO)
}

/// Parses the date shapes clients actually send: plain dates, HTML
/// datetime-local values (with or without seconds) and RFC 3339 timestamps.
fn parse_when(value: &Value) -> Option<NaiveDateTime> {
    let text = value.as_str()?.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    if let Ok(when) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Some(when);
    }
    if let Ok(when) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M") {
        return Some(when);
    }
    chrono::DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|when| when.naive_utc())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn item(value: serde_json::Value) -> Item {
        match value {
            Value::Object(map) => Item::with_id("x", map),
            _ => unreachable!("test item fields must be an object"),
        }
    }

    fn hotels() -> CategoryKey {
        CategoryKey::Standard(StandardCategory::Hotels)
    }

    #[test]
    fn hotel_price_multiplies_nights() {
        let hotel = item(json!({
            "pricePerNight": 100,
            "checkIn": "2026-01-01",
            "checkOut": "2026-01-04",
        }));
        assert_eq!(resolve_price(&hotel, &hotels()).cents(), 30_000);
    }

    #[test]
    fn hotel_stay_bills_at_least_one_night() {
        let hotel = item(json!({
            "pricePerNight": 100,
            "checkIn": "2026-01-04",
            "checkOut": "2026-01-04",
        }));
        assert_eq!(resolve_price(&hotel, &hotels()).cents(), 10_000);

        let inverted = item(json!({
            "pricePerNight": 100,
            "checkIn": "2026-01-04",
            "checkOut": "2026-01-01",
        }));
        assert_eq!(resolve_price(&inverted, &hotels()).cents(), 10_000);
    }

    #[test]
    fn hotel_partial_days_round_up() {
        let under_a_day = item(json!({
            "pricePerNight": 100,
            "checkIn": "2026-01-01T15:00",
            "checkOut": "2026-01-02T11:00",
        }));
        assert_eq!(resolve_price(&under_a_day, &hotels()).cents(), 10_000);

        let just_over = item(json!({
            "pricePerNight": 100,
            "checkIn": "2026-01-01T10:00",
            "checkOut": "2026-01-02T11:00",
        }));
        assert_eq!(resolve_price(&just_over, &hotels()).cents(), 20_000);
    }

    #[test]
    fn hotel_without_stay_dates_falls_back_to_price() {
        let hotel = item(json!({"pricePerNight": 100, "price": 250}));
        assert_eq!(resolve_price(&hotel, &hotels()).cents(), 25_000);

        let bare = item(json!({"pricePerNight": 100}));
        assert_eq!(resolve_price(&bare, &hotels()).cents(), 0);
    }

    #[test]
    fn restaurants_use_the_budget_estimate() {
        let key = CategoryKey::Standard(StandardCategory::Restaurants);
        let restaurant = item(json!({"budgetEstimate": "45.50", "price": 999}));
        assert_eq!(resolve_price(&restaurant, &key).cents(), 4_550);

        let without_estimate = item(json!({"name": "Sushi Dai"}));
        assert_eq!(resolve_price(&without_estimate, &key).cents(), 0);
    }

    #[test]
    fn custom_categories_use_the_price_field() {
        let key = CategoryKey::custom("Visas");
        let visa = item(json!({"name": "Visa", "price": "50"}));
        assert_eq!(resolve_price(&visa, &key).cents(), 5_000);
    }

    #[test]
    fn malformed_amounts_resolve_to_zero() {
        let key = CategoryKey::Standard(StandardCategory::Flights);
        assert_eq!(resolve_price(&item(json!({"price": "TBD"})), &key).cents(), 0);
        assert_eq!(resolve_price(&item(json!({})), &key).cents(), 0);
    }

    #[test]
    fn negative_amounts_clamp_to_zero() {
        let key = CategoryKey::Standard(StandardCategory::Flights);
        assert_eq!(resolve_price(&item(json!({"price": -20})), &key).cents(), 0);
    }
}
