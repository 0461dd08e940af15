//! Category API endpoints: the static registry and custom categories.

use api_types::category::{
    CategoriesResponse, CategoryView, CustomCategoryCreated, CustomCategoryNew, FieldSpecView,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

use engine::StandardCategory;

use crate::{
    ServerError,
    server::{AuthUser, ServerState},
};

/// Handle requests for the standard category registry.
pub async fn registry() -> Json<CategoriesResponse> {
    let categories = StandardCategory::ALL
        .into_iter()
        .map(|category| CategoryView {
            key: category.as_key().to_string(),
            name: category.display_name().to_string(),
            fields: category
                .field_specs()
                .iter()
                .map(|spec| FieldSpecView {
                    name: spec.name.to_string(),
                    label: spec.label.to_string(),
                    kind: spec.kind.as_str().to_string(),
                    required: spec.required,
                })
                .collect(),
        })
        .collect();

    Json(CategoriesResponse { categories })
}

/// Handle requests for creating a custom category.
pub async fn create_custom(
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    State(state): State<ServerState>,
    Path((workspace_id, vacation_id)): Path<(String, String)>,
    Json(payload): Json<CustomCategoryNew>,
) -> Result<(StatusCode, Json<CustomCategoryCreated>), ServerError> {
    let name =
        state
            .engine
            .add_custom_category(&workspace_id, &vacation_id, &user_id, &payload.name)?;
    Ok((StatusCode::CREATED, Json(CustomCategoryCreated { name })))
}

/// Handle requests for removing a custom category.
pub async fn remove_custom(
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    State(state): State<ServerState>,
    Path((workspace_id, vacation_id, name)): Path<(String, String, String)>,
) -> Result<StatusCode, ServerError> {
    state
        .engine
        .remove_custom_category(&workspace_id, &vacation_id, &user_id, &name)?;
    Ok(StatusCode::NO_CONTENT)
}
