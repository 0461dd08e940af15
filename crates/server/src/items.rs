//! Item API endpoints
//!
//! Items always travel with their category key (`"hotels"`,
//! `"custom_Visas"`, ...): in the body for writes, in the query string for
//! deletes.

use api_types::item::{CategorySelector, ItemNew, ItemUpdate, SelectionSet, SelectionView};
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use engine::{CategoryKey, Item};

use crate::{
    ServerError,
    server::{AuthUser, ServerState},
};

fn parse_category(raw: &str) -> Result<CategoryKey, ServerError> {
    raw.parse::<CategoryKey>().map_err(ServerError::from)
}

/// Handle requests for adding an item to a category.
pub async fn create(
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    State(state): State<ServerState>,
    Path((workspace_id, vacation_id)): Path<(String, String)>,
    Json(payload): Json<ItemNew>,
) -> Result<(StatusCode, Json<Item>), ServerError> {
    let key = parse_category(&payload.category)?;
    let item = Item::with_id(payload.id.unwrap_or_default(), payload.fields);

    let added = state
        .engine
        .add_item(&workspace_id, &vacation_id, &user_id, &key, item)?;
    Ok((StatusCode::CREATED, Json(added)))
}

/// Handle requests for merging fields into an existing item.
pub async fn update(
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    State(state): State<ServerState>,
    Path((workspace_id, vacation_id, item_id)): Path<(String, String, String)>,
    Json(payload): Json<ItemUpdate>,
) -> Result<Json<Item>, ServerError> {
    let key = parse_category(&payload.category)?;

    let updated = state.engine.update_item(
        &workspace_id,
        &vacation_id,
        &user_id,
        &key,
        &item_id,
        payload.fields,
    )?;
    Ok(Json(updated))
}

/// Handle requests for deleting an item.
///
/// Deleting the currently selected item clears the category's selection in
/// the same document write.
pub async fn remove(
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    State(state): State<ServerState>,
    Path((workspace_id, vacation_id, item_id)): Path<(String, String, String)>,
    Query(selector): Query<CategorySelector>,
) -> Result<StatusCode, ServerError> {
    let key = parse_category(&selector.category)?;

    state
        .engine
        .delete_item(&workspace_id, &vacation_id, &user_id, &key, &item_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handle requests for setting a category's selection.
pub async fn select(
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    State(state): State<ServerState>,
    Path((workspace_id, vacation_id)): Path<(String, String)>,
    Json(payload): Json<SelectionSet>,
) -> Result<Json<SelectionView>, ServerError> {
    let key = parse_category(&payload.category)?;

    let item_id = state.engine.select_item(
        &workspace_id,
        &vacation_id,
        &user_id,
        &key,
        payload.item_id.as_deref(),
    )?;
    Ok(Json(SelectionView {
        category: payload.category,
        item_id,
    }))
}
