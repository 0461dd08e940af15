//! The `Vacation` document: one ordered option list per category, the
//! selection map, and the reconciliation rules that keep the two consistent.
//!
//! Every selection entry must point at an item that currently exists in the
//! matching category list. The mutating methods below uphold that invariant
//! inside a single call, so no caller ever observes a half-updated document;
//! a reference broken by an outside merge is treated as "no selection" and
//! swept by [`Vacation::prune_dangling_selections`].

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::{
    CategoryKey, EngineError, Item, ResultEngine, StandardCategory, util::normalize_name,
};

/// A vacation being planned inside a workspace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vacation {
    pub id: String,
    pub workspace_id: String,
    pub name: String,
    pub destination: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub flights: Vec<Item>,
    #[serde(default)]
    pub hotels: Vec<Item>,
    #[serde(default)]
    pub car_rentals: Vec<Item>,
    #[serde(default)]
    pub activities: Vec<Item>,
    #[serde(default)]
    pub transportation: Vec<Item>,
    #[serde(default)]
    pub insurance: Vec<Item>,
    #[serde(default)]
    pub restaurants: Vec<Item>,
    /// Custom comparison sections, keyed by their display name.
    #[serde(default)]
    pub custom_categories: BTreeMap<String, Vec<Item>>,
    /// The chosen item per category. Absent key means nothing selected.
    #[serde(default)]
    pub selected_options: BTreeMap<CategoryKey, String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vacation {
    pub fn new(workspace_id: &str, name: String, destination: String, created_by: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            workspace_id: workspace_id.to_string(),
            name,
            destination,
            start_date: None,
            end_date: None,
            flights: Vec::new(),
            hotels: Vec::new(),
            car_rentals: Vec::new(),
            activities: Vec::new(),
            transportation: Vec::new(),
            insurance: Vec::new(),
            restaurants: Vec::new(),
            custom_categories: BTreeMap::new(),
            selected_options: BTreeMap::new(),
            created_by: created_by.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn standard_items(&self, category: StandardCategory) -> &[Item] {
        match category {
            StandardCategory::Flights => &self.flights,
            StandardCategory::Hotels => &self.hotels,
            StandardCategory::CarRentals => &self.car_rentals,
            StandardCategory::Activities => &self.activities,
            StandardCategory::Transportation => &self.transportation,
            StandardCategory::Insurance => &self.insurance,
            StandardCategory::Restaurants => &self.restaurants,
        }
    }

    /// Returns the item list behind `key`, or `None` for a custom category
    /// that does not exist. Standard categories always exist.
    pub fn category_items(&self, key: &CategoryKey) -> Option<&[Item]> {
        match key {
            CategoryKey::Standard(category) => Some(self.standard_items(*category)),
            CategoryKey::Custom(name) => self.custom_categories.get(name).map(Vec::as_slice),
        }
    }

    fn category_items_mut(&mut self, key: &CategoryKey) -> Option<&mut Vec<Item>> {
        match key {
            CategoryKey::Standard(category) => Some(match category {
                StandardCategory::Flights => &mut self.flights,
                StandardCategory::Hotels => &mut self.hotels,
                StandardCategory::CarRentals => &mut self.car_rentals,
                StandardCategory::Activities => &mut self.activities,
                StandardCategory::Transportation => &mut self.transportation,
                StandardCategory::Insurance => &mut self.insurance,
                StandardCategory::Restaurants => &mut self.restaurants,
            }),
            CategoryKey::Custom(name) => self.custom_categories.get_mut(name),
        }
    }

    /// Resolves the current selection for `key` to a live item.
    ///
    /// A selection pointing at a removed item (possible after a last-write-
    /// wins merge) resolves to `None`, never to an error.
    pub fn selected_item(&self, key: &CategoryKey) -> Option<&Item> {
        let selected_id = self.selected_options.get(key)?;
        self.category_items(key)?
            .iter()
            .find(|item| &item.id == selected_id)
    }

    /// Appends an item to a category list.
    ///
    /// A blank id gets a fresh UUID. Custom lists are created on demand,
    /// subject to the same name rules as an explicit create. The selection
    /// map is untouched.
    pub fn add_item(&mut self, key: &CategoryKey, mut item: Item) -> ResultEngine<&Item> {
        if item.id.trim().is_empty() {
            item.id = Uuid::new_v4().to_string();
        }

        if let CategoryKey::Custom(name) = key
            && !self.custom_categories.contains_key(name.as_str())
        {
            self.add_custom_category(name)?;
        }

        let items = self
            .category_items_mut(key)
            .ok_or_else(|| EngineError::KeyNotFound(key.to_string()))?;
        if items.iter().any(|existing| existing.id == item.id) {
            return Err(EngineError::ExistingKey(item.id));
        }
        items.push(item);

        Ok(&items[items.len() - 1])
    }

    /// Merges `updates` into the item with the given id, preserving list
    /// order. The selection map is untouched.
    pub fn update_item(
        &mut self,
        key: &CategoryKey,
        item_id: &str,
        updates: Map<String, Value>,
    ) -> ResultEngine<&Item> {
        let items = self
            .category_items_mut(key)
            .ok_or_else(|| EngineError::KeyNotFound(key.to_string()))?;
        match items.iter().position(|item| item.id == item_id) {
            Some(index) => {
                let item = &mut items[index];
                item.merge_fields(updates);
                Ok(&items[index])
            }
            None => Err(EngineError::KeyNotFound(item_id.to_string())),
        }
    }

    /// Removes an item. If it is the current selection for `key`, the
    /// selection entry is cleared in the same call.
    pub fn remove_item(&mut self, key: &CategoryKey, item_id: &str) -> ResultEngine<Item> {
        let items = self
            .category_items_mut(key)
            .ok_or_else(|| EngineError::KeyNotFound(key.to_string()))?;
        let index = items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or_else(|| EngineError::KeyNotFound(item_id.to_string()))?;
        let item = items.remove(index);

        if self
            .selected_options
            .get(key)
            .is_some_and(|selected| selected == item_id)
        {
            self.selected_options.remove(key);
        }

        Ok(item)
    }

    /// Sets, toggles or clears the selection for a category.
    ///
    /// `None` clears. Selecting the already-selected item clears as well
    /// (tap-to-deselect). The item must exist in the category list.
    ///
    /// Returns the selection state after the call.
    pub fn select_item(
        &mut self,
        key: &CategoryKey,
        item_id: Option<&str>,
    ) -> ResultEngine<Option<String>> {
        let Some(item_id) = item_id else {
            self.selected_options.remove(key);
            return Ok(None);
        };

        let exists = self
            .category_items(key)
            .is_some_and(|items| items.iter().any(|item| item.id == item_id));
        if !exists {
            return Err(EngineError::KeyNotFound(item_id.to_string()));
        }

        if self
            .selected_options
            .get(key)
            .is_some_and(|selected| selected == item_id)
        {
            self.selected_options.remove(key);
            return Ok(None);
        }

        self.selected_options
            .insert(key.clone(), item_id.to_string());
        Ok(Some(item_id.to_string()))
    }

    /// Creates an empty custom category.
    ///
    /// The trimmed name must be non-empty, must not shadow a standard
    /// category, and must be unique among custom categories (compared
    /// NFC-normalized, case-insensitive).
    pub fn add_custom_category(&mut self, name: &str) -> ResultEngine<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::InvalidName(
                "category name required".to_string(),
            ));
        }

        let normalized = normalize_name(name);
        if StandardCategory::ALL.iter().any(|category| {
            normalize_name(category.as_key()) == normalized
                || normalize_name(category.display_name()) == normalized
        }) {
            return Err(EngineError::InvalidName(format!(
                "'{name}' is a standard category"
            )));
        }
        if self
            .custom_categories
            .keys()
            .any(|existing| normalize_name(existing) == normalized)
        {
            return Err(EngineError::ExistingKey(name.to_string()));
        }

        self.custom_categories.insert(name.to_string(), Vec::new());
        Ok(name.to_string())
    }

    /// Removes a custom category, its items, and its selection entry in the
    /// same call.
    pub fn remove_custom_category(&mut self, name: &str) -> ResultEngine<Vec<Item>> {
        match self.custom_categories.remove(name) {
            Some(items) => {
                self.selected_options.remove(&CategoryKey::custom(name));
                Ok(items)
            }
            None => Err(EngineError::KeyNotFound(name.to_string())),
        }
    }

    /// Drops every selection entry that no longer resolves to a live item.
    ///
    /// Fine-grained mutations never leave such entries behind; this sweep
    /// exists for documents merged in from elsewhere (last-write-wins).
    pub fn prune_dangling_selections(&mut self) {
        let dangling: Vec<CategoryKey> = self
            .selected_options
            .iter()
            .filter(|&(key, selected_id)| {
                !self
                    .category_items(key)
                    .is_some_and(|items| items.iter().any(|item| &item.id == selected_id))
            })
            .map(|(key, _)| key.clone())
            .collect();

        for key in dangling {
            self.selected_options.remove(&key);
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

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
    fn add_assigns_missing_ids() {
        let mut vacation = vacation();
        let id = vacation
            .add_item(&hotels(), Item::new(Map::new()))
            .unwrap()
            .id
            .clone();
        assert!(!id.is_empty());
        assert_eq!(vacation.hotels.len(), 1);
    }

    #[test]
    #[should_panic(expected = "ExistingKey(\"h1\")")]
    fn fail_add_duplicate_id() {
        let mut vacation = vacation();
        vacation
            .add_item(&hotels(), item("h1", json!({"pricePerNight": 100})))
            .unwrap();
        vacation
            .add_item(&hotels(), item("h1", json!({"pricePerNight": 90})))
            .unwrap();
    }

    #[test]
    fn update_merges_in_place() {
        let mut vacation = vacation();
        vacation
            .add_item(&hotels(), item("h1", json!({"pricePerNight": 100})))
            .unwrap();
        vacation
            .add_item(&hotels(), item("h2", json!({"pricePerNight": 90})))
            .unwrap();

        let updates = match json!({"pricePerNight": 80, "rating": 4.5}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        vacation.update_item(&hotels(), "h1", updates).unwrap();

        // Order preserved, fields merged.
        assert_eq!(vacation.hotels[0].id, "h1");
        assert_eq!(vacation.hotels[0].field("pricePerNight"), Some(&json!(80)));
        assert_eq!(vacation.hotels[0].field("rating"), Some(&json!(4.5)));
    }

    #[test]
    fn select_and_toggle() {
        let mut vacation = vacation();
        vacation
            .add_item(&hotels(), item("h1", json!({"pricePerNight": 100})))
            .unwrap();

        let selected = vacation.select_item(&hotels(), Some("h1")).unwrap();
        assert_eq!(selected, Some("h1".to_string()));
        assert_eq!(vacation.selected_item(&hotels()).unwrap().id, "h1");

        // Selecting the same item again deselects it.
        let selected = vacation.select_item(&hotels(), Some("h1")).unwrap();
        assert_eq!(selected, None);
        assert!(vacation.selected_item(&hotels()).is_none());
    }

    #[test]
    #[should_panic(expected = "KeyNotFound(\"nope\")")]
    fn fail_select_unknown_item() {
        let mut vacation = vacation();
        vacation.select_item(&hotels(), Some("nope")).unwrap();
    }

    #[test]
    fn delete_clears_the_selection_in_the_same_call() {
        let mut vacation = vacation();
        vacation
            .add_item(&hotels(), item("h1", json!({"pricePerNight": 100})))
            .unwrap();
        vacation.select_item(&hotels(), Some("h1")).unwrap();

        vacation.remove_item(&hotels(), "h1").unwrap();

        assert!(vacation.hotels.is_empty());
        assert!(!vacation.selected_options.contains_key(&hotels()));
    }

    #[test]
    fn delete_keeps_unrelated_selection() {
        let mut vacation = vacation();
        vacation
            .add_item(&hotels(), item("h1", json!({"pricePerNight": 100})))
            .unwrap();
        vacation
            .add_item(&hotels(), item("h2", json!({"pricePerNight": 90})))
            .unwrap();
        vacation.select_item(&hotels(), Some("h2")).unwrap();

        vacation.remove_item(&hotels(), "h1").unwrap();

        assert_eq!(
            vacation.selected_options.get(&hotels()),
            Some(&"h2".to_string())
        );
    }

    #[test]
    fn custom_categories_are_created_on_demand() {
        let mut vacation = vacation();
        let visas = CategoryKey::custom("Visas");
        vacation
            .add_item(&visas, item("v1", json!({"name": "Visa", "price": "50"})))
            .unwrap();

        assert_eq!(vacation.custom_categories["Visas"].len(), 1);
    }

    #[test]
    #[should_panic(expected = "InvalidName(\"category name required\")")]
    fn fail_create_custom_category_without_name() {
        let mut vacation = vacation();
        vacation.add_custom_category("   ").unwrap();
    }

    #[test]
    #[should_panic(expected = "ExistingKey(\"visas\")")]
    fn fail_create_duplicate_custom_category() {
        let mut vacation = vacation();
        vacation.add_custom_category("Visas").unwrap();
        vacation.add_custom_category("visas").unwrap();
    }

    #[test]
    #[should_panic(expected = "is a standard category")]
    fn fail_create_custom_category_shadowing_standard() {
        let mut vacation = vacation();
        vacation.add_custom_category("Hotels").unwrap();
    }

    #[test]
    fn remove_custom_category_clears_its_selection() {
        let mut vacation = vacation();
        let visas = CategoryKey::custom("Visas");
        vacation
            .add_item(&visas, item("v1", json!({"price": "50"})))
            .unwrap();
        vacation.select_item(&visas, Some("v1")).unwrap();

        vacation.remove_custom_category("Visas").unwrap();

        assert!(!vacation.custom_categories.contains_key("Visas"));
        assert!(!vacation.selected_options.contains_key(&visas));
    }

    #[test]
    fn prune_drops_dangling_references() {
        let mut vacation = vacation();
        vacation
            .add_item(&hotels(), item("h1", json!({"pricePerNight": 100})))
            .unwrap();
        // Simulate a merge that left the selection behind.
        vacation
            .selected_options
            .insert(hotels(), "gone".to_string());
        vacation
            .selected_options
            .insert(CategoryKey::custom("Visas"), "v1".to_string());

        vacation.prune_dangling_selections();

        assert!(vacation.selected_options.is_empty());
    }

    #[test]
    fn document_round_trips_with_wire_field_names() {
        let mut vacation = vacation();
        vacation
            .add_item(&hotels(), item("h1", json!({"pricePerNight": 100})))
            .unwrap();
        vacation.select_item(&hotels(), Some("h1")).unwrap();

        let raw = serde_json::to_value(&vacation).unwrap();
        assert!(raw.get("carRentals").is_some());
        assert_eq!(raw["selectedOptions"]["hotels"], json!("h1"));

        let back: Vacation = serde_json::from_value(raw).unwrap();
        assert_eq!(back, vacation);
    }
}
