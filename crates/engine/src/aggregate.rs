//! Selection-aware cost aggregation.
//!
//! The summary is a pure function of the current document: it walks every
//! category, resolves the selected item (if any) and sums the resolved
//! prices. Nothing is cached or maintained incrementally, so recomputing on
//! unchanged state always yields the same result.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{CategoryKey, PriceCents, StandardCategory, Vacation, pricing::resolve_price};

/// Total cost of a vacation's current selections plus the per-category
/// contributions.
///
/// Categories with no selection, or whose selection no longer resolves to a
/// live item, are absent from `breakdown` rather than recorded as zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSummary {
    pub total_cents: i64,
    pub breakdown: BTreeMap<CategoryKey, i64>,
}

/// Computes the cost summary for a vacation snapshot.
pub fn cost_summary(vacation: &Vacation) -> CostSummary {
    let mut total = PriceCents::ZERO;
    let mut breakdown = BTreeMap::new();

    for category in StandardCategory::ALL {
        let key = CategoryKey::Standard(category);
        if let Some(item) = vacation.selected_item(&key) {
            let amount = resolve_price(item, &key);
            total += amount;
            breakdown.insert(key, amount.cents());
        }
    }

    for name in vacation.custom_categories.keys() {
        let key = CategoryKey::custom(name.clone());
        if let Some(item) = vacation.selected_item(&key) {
            let amount = resolve_price(item, &key);
            total += amount;
            breakdown.insert(key, amount.cents());
        }
    }

    CostSummary {
        total_cents: total.cents(),
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Map, Value, json};

    use crate::Item;

    use super::*;

    fn vacation() -> Vacation {
        Vacation::new(
            "ws-1",
            String::from("Japan"),
            String::from("Tokyo"),
            "alice",
        )
    }

    fn item(id: &str, value: Value) -> Item {
        match value {
            Value::Object(map) => Item::with_id(id, map),
            _ => unreachable!("test item fields must be an object"),
        }
    }

    fn hotels() -> CategoryKey {
        CategoryKey::Standard(StandardCategory::Hotels)
    }

    #[test]
    fn empty_vacation_sums_to_zero() {
        let summary = cost_summary(&vacation());
        assert_eq!(summary.total_cents, 0);
        assert!(summary.breakdown.is_empty());
    }

    #[test]
    fn selected_hotel_counts_nights() {
        let mut vacation = vacation();
        vacation
            .add_item(
                &hotels(),
                item(
                    "h1",
                    json!({
                        "pricePerNight": 100,
                        "checkIn": "2026-01-01",
                        "checkOut": "2026-01-04",
                    }),
                ),
            )
            .unwrap();
        vacation.select_item(&hotels(), Some("h1")).unwrap();

        let summary = cost_summary(&vacation);
        assert_eq!(summary.total_cents, 30_000);
        assert_eq!(summary.breakdown.get(&hotels()), Some(&30_000));
    }

    #[test]
    fn unselected_items_do_not_count() {
        let mut vacation = vacation();
        vacation
            .add_item(&hotels(), item("h1", json!({"pricePerNight": 100})))
            .unwrap();

        let summary = cost_summary(&vacation);
        assert_eq!(summary.total_cents, 0);
        assert!(!summary.breakdown.contains_key(&hotels()));
    }

    #[test]
    fn custom_selections_appear_under_their_prefixed_key() {
        let mut vacation = vacation();
        let visas = CategoryKey::custom("Visas");
        vacation
            .add_item(&visas, item("v1", json!({"name": "Visa", "price": "50"})))
            .unwrap();
        vacation.select_item(&visas, Some("v1")).unwrap();

        let summary = cost_summary(&vacation);
        assert_eq!(summary.total_cents, 5_000);
        assert_eq!(summary.breakdown.get(&visas), Some(&5_000));

        let raw = serde_json::to_value(&summary).unwrap();
        assert_eq!(raw["breakdown"]["custom_Visas"], json!(5_000));
    }

    #[test]
    fn dangling_selection_contributes_nothing() {
        let mut vacation = vacation();
        vacation
            .selected_options
            .insert(hotels(), "gone".to_string());

        let summary = cost_summary(&vacation);
        assert_eq!(summary.total_cents, 0);
        assert!(summary.breakdown.is_empty());
    }

    #[test]
    fn zero_priced_selection_is_still_recorded() {
        let mut vacation = vacation();
        vacation
            .add_item(&hotels(), item("h1", Value::Object(Map::new())))
            .unwrap();
        vacation.select_item(&hotels(), Some("h1")).unwrap();

        let summary = cost_summary(&vacation);
        assert_eq!(summary.breakdown.get(&hotels()), Some(&0));
    }

    #[test]
    fn recomputation_is_idempotent() {
        let mut vacation = vacation();
        vacation
            .add_item(
                &hotels(),
                item(
                    "h1",
                    json!({
                        "pricePerNight": 100,
                        "checkIn": "2026-01-01",
                        "checkOut": "2026-01-04",
                    }),
                ),
            )
            .unwrap();
        vacation.select_item(&hotels(), Some("h1")).unwrap();

        assert_eq!(cost_summary(&vacation), cost_summary(&vacation));
    }
}
