//! Cost summary API endpoint

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use engine::CostSummary;

use crate::{
    ServerError,
    server::{AuthUser, ServerState},
};

/// Handle requests for a vacation's cost summary.
///
/// The summary is recomputed from the current document on every call; it is
/// never cached.
pub async fn get(
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    State(state): State<ServerState>,
    Path((workspace_id, vacation_id)): Path<(String, String)>,
) -> Result<Json<CostSummary>, ServerError> {
    let summary = state
        .engine
        .cost_summary(&workspace_id, &vacation_id, &user_id)?;
    Ok(Json(summary))
}
