//! The module contains the standard category registry and the category key
//! space.
//!
//! Standard categories carry a fixed field schema; custom categories are
//! free-form lists created per vacation. A [`CategoryKey`] is the tagged
//! union of the two, so nothing downstream has to parse the `custom_` wire
//! prefix to tell them apart.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::EngineError;

/// The fixed set of comparison sections every vacation starts with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StandardCategory {
    Flights,
    Hotels,
    CarRentals,
    Activities,
    Transportation,
    Insurance,
    Restaurants,
}

impl StandardCategory {
    pub const ALL: [StandardCategory; 7] = [
        StandardCategory::Flights,
        StandardCategory::Hotels,
        StandardCategory::CarRentals,
        StandardCategory::Activities,
        StandardCategory::Transportation,
        StandardCategory::Insurance,
        StandardCategory::Restaurants,
    ];

    /// Returns the canonical wire key (`"carRentals"`, `"hotels"`, ...).
    pub fn as_key(self) -> &'static str {
        match self {
            Self::Flights => "flights",
            Self::Hotels => "hotels",
            Self::CarRentals => "carRentals",
            Self::Activities => "activities",
            Self::Transportation => "transportation",
            Self::Insurance => "insurance",
            Self::Restaurants => "restaurants",
        }
    }

    /// Human-readable section title.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Flights => "Flights",
            Self::Hotels => "Hotels",
            Self::CarRentals => "Car Rentals",
            Self::Activities => "Activities",
            Self::Transportation => "Transportation",
            Self::Insurance => "Insurance",
            Self::Restaurants => "Restaurants",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_key() == key)
    }

    /// The input schema clients should render for this category.
    pub fn field_specs(self) -> &'static [FieldSpec] {
        match self {
            Self::Flights => FLIGHT_FIELDS,
            Self::Hotels => HOTEL_FIELDS,
            Self::CarRentals => CAR_RENTAL_FIELDS,
            Self::Activities => ACTIVITY_FIELDS,
            Self::Transportation => TRANSPORTATION_FIELDS,
            Self::Insurance => INSURANCE_FIELDS,
            Self::Restaurants => RESTAURANT_FIELDS,
        }
    }
}

/// Input widget kind for a schema field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Number,
    Date,
    DateTime,
    Time,
    Url,
    TextArea,
}

impl FieldKind {
    /// Canonical wire name, matching the serde encoding.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::DateTime => "date_time",
            Self::Time => "time",
            Self::Url => "url",
            Self::TextArea => "text_area",
        }
    }
}

/// One field of a standard category schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

const fn field(name: &'static str, label: &'static str, kind: FieldKind, required: bool) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind,
        required,
    }
}

const FLIGHT_FIELDS: &[FieldSpec] = &[
    field("airline", "Airline", FieldKind::Text, true),
    field("departureTime", "Departure", FieldKind::DateTime, true),
    field("arrivalTime", "Arrival", FieldKind::DateTime, true),
    field("duration", "Duration", FieldKind::Text, false),
    field("price", "Price", FieldKind::Number, true),
    field("link", "Link", FieldKind::Url, false),
    field("notes", "Notes", FieldKind::TextArea, false),
];

const HOTEL_FIELDS: &[FieldSpec] = &[
    field("name", "Hotel Name", FieldKind::Text, true),
    field("checkIn", "Check-in", FieldKind::Date, true),
    field("checkOut", "Check-out", FieldKind::Date, true),
    field("rating", "Rating", FieldKind::Number, false),
    field("pricePerNight", "Price per Night", FieldKind::Number, true),
    field("link", "Link", FieldKind::Url, false),
    field("notes", "Notes", FieldKind::TextArea, false),
];

const CAR_RENTAL_FIELDS: &[FieldSpec] = &[
    field("company", "Rental Company", FieldKind::Text, true),
    field("pickupTime", "Pickup", FieldKind::DateTime, true),
    field("returnTime", "Return", FieldKind::DateTime, true),
    field("carType", "Car Type", FieldKind::Text, false),
    field("price", "Total Price", FieldKind::Number, true),
    field("link", "Link", FieldKind::Url, false),
    field("notes", "Notes", FieldKind::TextArea, false),
];

const ACTIVITY_FIELDS: &[FieldSpec] = &[
    field("name", "Activity Name", FieldKind::Text, true),
    field("dateTime", "Date & Time", FieldKind::DateTime, true),
    field("duration", "Duration", FieldKind::Text, false),
    field("price", "Price", FieldKind::Number, true),
    field("link", "Link", FieldKind::Url, false),
    field("notes", "Notes", FieldKind::TextArea, false),
];

const TRANSPORTATION_FIELDS: &[FieldSpec] = &[
    field("type", "Type", FieldKind::Text, true),
    field("date", "Date", FieldKind::Date, true),
    field("route", "Route", FieldKind::Text, true),
    field("time", "Time", FieldKind::Time, false),
    field("price", "Price", FieldKind::Number, true),
    field("link", "Link", FieldKind::Url, false),
    field("notes", "Notes", FieldKind::TextArea, false),
];

const INSURANCE_FIELDS: &[FieldSpec] = &[
    field("provider", "Provider", FieldKind::Text, true),
    field("coverageType", "Coverage Type", FieldKind::Text, true),
    field("price", "Price", FieldKind::Number, true),
    field("link", "Link", FieldKind::Url, false),
    field("notes", "Notes", FieldKind::TextArea, false),
];

const RESTAURANT_FIELDS: &[FieldSpec] = &[
    field("name", "Restaurant Name", FieldKind::Text, true),
    field("cuisine", "Cuisine", FieldKind::Text, false),
    field("date", "Reservation Date", FieldKind::Date, false),
    field("time", "Reservation Time", FieldKind::Time, false),
    field("budgetEstimate", "Budget Estimate", FieldKind::Number, false),
    field("link", "Reservation Link", FieldKind::Url, false),
    field("notes", "Notes", FieldKind::TextArea, false),
];

/// A reference to a category inside one vacation.
///
/// The wire encoding keeps the historical convention: standard categories
/// use their key as-is, custom categories are prefixed (`custom_Visas`). A
/// custom category that happens to be named like a standard key therefore
/// never collides with it.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CategoryKey {
    Standard(StandardCategory),
    Custom(String),
}

impl CategoryKey {
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }

    /// Human-readable name for breakdown rows and section titles.
    ///
    /// Custom names keep their stored spelling, with the first letter
    /// upper-cased for display.
    pub fn display_name(&self) -> String {
        match self {
            Self::Standard(category) => category.display_name().to_string(),
            Self::Custom(name) => {
                let mut chars = name.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            }
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard(category) => f.write_str(category.as_key()),
            Self::Custom(name) => write!(f, "custom_{name}"),
        }
    }
}

impl FromStr for CategoryKey {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(name) = s.strip_prefix("custom_") {
            let name = name.trim();
            if name.is_empty() {
                return Err(EngineError::InvalidName(
                    "custom category name must not be empty".to_string(),
                ));
            }
            return Ok(Self::Custom(name.to_string()));
        }
        StandardCategory::from_key(s)
            .map(Self::Standard)
            .ok_or_else(|| EngineError::InvalidName(format!("unknown category key: {s}")))
    }
}

impl Serialize for CategoryKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CategoryKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_strings() {
        for category in StandardCategory::ALL {
            let key = CategoryKey::Standard(category);
            assert_eq!(key.to_string().parse::<CategoryKey>().unwrap(), key);
        }
        let visas = CategoryKey::custom("Visas");
        assert_eq!(visas.to_string(), "custom_Visas");
        assert_eq!("custom_Visas".parse::<CategoryKey>().unwrap(), visas);
    }

    #[test]
    fn custom_named_after_standard_key_stays_custom() {
        let key = "custom_hotels".parse::<CategoryKey>().unwrap();
        assert_eq!(key, CategoryKey::custom("hotels"));
        assert_ne!(key, CategoryKey::Standard(StandardCategory::Hotels));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!("boats".parse::<CategoryKey>().is_err());
        assert!("custom_".parse::<CategoryKey>().is_err());
    }

    #[test]
    fn display_names() {
        assert_eq!(
            CategoryKey::Standard(StandardCategory::CarRentals).display_name(),
            "Car Rentals"
        );
        assert_eq!(CategoryKey::custom("visas").display_name(), "Visas");
    }

    #[test]
    fn every_standard_category_has_a_schema() {
        for category in StandardCategory::ALL {
            assert!(!category.field_specs().is_empty());
        }
    }
}
