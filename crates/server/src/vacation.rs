//! Vacation API endpoints

use api_types::vacation::{VacationListRow, VacationNew, VacationUpdate};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

use engine::{Vacation, VacationDraft, VacationPatch, cost_summary};

use crate::{
    ServerError,
    server::{AuthUser, ServerState},
};

/// Handle requests for creating a new vacation.
pub async fn create(
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    State(state): State<ServerState>,
    Path(workspace_id): Path<String>,
    Json(payload): Json<VacationNew>,
) -> Result<(StatusCode, Json<Vacation>), ServerError> {
    let vacation = state.engine.new_vacation(
        &workspace_id,
        &user_id,
        VacationDraft {
            name: payload.name,
            destination: payload.destination,
            start_date: payload.start_date,
            end_date: payload.end_date,
        },
    )?;
    Ok((StatusCode::CREATED, Json(vacation)))
}

/// Handle requests for listing a workspace's vacations.
///
/// Returns compact rows with the running total already resolved, ready for
/// card rendering.
pub async fn list(
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    State(state): State<ServerState>,
    Path(workspace_id): Path<String>,
) -> Result<Json<Vec<VacationListRow>>, ServerError> {
    let rows = state
        .engine
        .vacations(&workspace_id, &user_id)?
        .into_iter()
        .map(|vacation| {
            let total_cents = cost_summary(&vacation).total_cents;
            VacationListRow {
                id: vacation.id,
                name: vacation.name,
                destination: vacation.destination,
                start_date: vacation.start_date,
                end_date: vacation.end_date,
                total_cents,
            }
        })
        .collect();
    Ok(Json(rows))
}

/// Handle requests for fetching one vacation document.
pub async fn get(
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    State(state): State<ServerState>,
    Path((workspace_id, vacation_id)): Path<(String, String)>,
) -> Result<Json<Vacation>, ServerError> {
    let vacation = state
        .engine
        .vacation(&workspace_id, &vacation_id, &user_id)?;
    Ok(Json(vacation))
}

/// Handle requests for merge-updating a vacation's own fields.
pub async fn update(
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    State(state): State<ServerState>,
    Path((workspace_id, vacation_id)): Path<(String, String)>,
    Json(payload): Json<VacationUpdate>,
) -> Result<Json<Vacation>, ServerError> {
    let vacation = state.engine.update_vacation(
        &workspace_id,
        &vacation_id,
        &user_id,
        VacationPatch {
            name: payload.name,
            destination: payload.destination,
            start_date: payload.start_date,
            end_date: payload.end_date,
        },
    )?;
    Ok(Json(vacation))
}

pub async fn remove(
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    State(state): State<ServerState>,
    Path((workspace_id, vacation_id)): Path<(String, String)>,
) -> Result<StatusCode, ServerError> {
    state
        .engine
        .delete_vacation(&workspace_id, &vacation_id, &user_id)?;
    Ok(StatusCode::NO_CONTENT)
}
