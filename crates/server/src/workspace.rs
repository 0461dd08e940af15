//! Workspace API endpoints

use api_types::workspace::{MembersResponse, WorkspaceNew, WorkspaceView};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    ServerError,
    server::{AuthUser, ServerState},
};

fn view(workspace: engine::Workspace) -> WorkspaceView {
    WorkspaceView {
        id: workspace.id,
        name: workspace.name,
        owner_id: workspace.owner_id,
        members: workspace.members,
        created_at: workspace.created_at,
    }
}

/// Handle requests for creating a new workspace.
pub async fn create(
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    State(state): State<ServerState>,
    Json(payload): Json<WorkspaceNew>,
) -> Result<(StatusCode, Json<WorkspaceView>), ServerError> {
    let workspace = state.engine.new_workspace(&payload.name, &user_id)?;
    Ok((StatusCode::CREATED, Json(view(workspace))))
}

/// Handle requests for fetching a workspace.
pub async fn get(
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    State(state): State<ServerState>,
    Path(workspace_id): Path<String>,
) -> Result<Json<WorkspaceView>, ServerError> {
    let workspace = state.engine.workspace(&workspace_id, &user_id)?;
    Ok(Json(view(workspace)))
}

/// Handle requests for joining a workspace by id (the invite code).
pub async fn join(
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    State(state): State<ServerState>,
    Path(workspace_id): Path<String>,
) -> Result<Json<WorkspaceView>, ServerError> {
    let workspace = state.engine.join_workspace(&workspace_id, &user_id)?;
    Ok(Json(view(workspace)))
}

pub async fn list_members(
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    State(state): State<ServerState>,
    Path(workspace_id): Path<String>,
) -> Result<Json<MembersResponse>, ServerError> {
    let members = state
        .engine
        .list_workspace_members(&workspace_id, &user_id)?;
    Ok(Json(MembersResponse { members }))
}

pub async fn remove_member(
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    State(state): State<ServerState>,
    Path((workspace_id, member_id)): Path<(String, String)>,
) -> Result<StatusCode, ServerError> {
    state
        .engine
        .remove_workspace_member(&workspace_id, &member_id, &user_id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn remove(
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    State(state): State<ServerState>,
    Path(workspace_id): Path<String>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_workspace(&workspace_id, &user_id)?;
    Ok(StatusCode::NO_CONTENT)
}
