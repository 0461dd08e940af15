use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod workspace {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct WorkspaceNew {
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct WorkspaceView {
        pub id: String,
        pub name: String,
        pub owner_id: String,
        pub members: Vec<String>,
        pub created_at: DateTime<Utc>,
    }

    /// Response body for listing members.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct MembersResponse {
        pub members: Vec<String>,
    }
}

pub mod vacation {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct VacationNew {
        pub name: String,
        pub destination: String,
        pub start_date: Option<NaiveDate>,
        pub end_date: Option<NaiveDate>,
    }

    /// Partial update; absent fields are left unchanged.
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct VacationUpdate {
        pub name: Option<String>,
        pub destination: Option<String>,
        pub start_date: Option<NaiveDate>,
        pub end_date: Option<NaiveDate>,
    }

    /// Compact row for vacation listings (cards), with the running total
    /// already computed server-side.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct VacationListRow {
        pub id: String,
        pub name: String,
        pub destination: String,
        pub start_date: Option<NaiveDate>,
        pub end_date: Option<NaiveDate>,
        pub total_cents: i64,
    }
}

pub mod item {
    use super::*;

    /// Request body for adding an item.
    ///
    /// `category` is the wire key (`"hotels"`, `"custom_Visas"`, ...); the
    /// remaining fields are carried verbatim into the item.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ItemNew {
        pub category: String,
        pub id: Option<String>,
        #[serde(flatten)]
        pub fields: Map<String, Value>,
    }

    /// Request body for merging fields into an existing item. A JSON `null`
    /// removes the field.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ItemUpdate {
        pub category: String,
        #[serde(flatten)]
        pub fields: Map<String, Value>,
    }

    /// Query/body selector for operations addressing one category.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategorySelector {
        pub category: String,
    }

    /// Request body for setting the selection of a category.
    ///
    /// `item_id: None` clears the selection; re-selecting the current item
    /// toggles it off.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SelectionSet {
        pub category: String,
        pub item_id: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SelectionView {
        pub category: String,
        pub item_id: Option<String>,
    }
}

pub mod category {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CustomCategoryNew {
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CustomCategoryCreated {
        pub name: String,
    }

    /// One schema field of a standard category, as rendered by clients.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct FieldSpecView {
        pub name: String,
        pub label: String,
        pub kind: String,
        pub required: bool,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryView {
        pub key: String,
        pub name: String,
        pub fields: Vec<FieldSpecView>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoriesResponse {
        pub categories: Vec<CategoryView>,
    }
}
