//! Handlers for the `/api/projects` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_db::models::project::{CreateProject, Project};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = state.store.list_projects().await?;
    Ok(Json(projects))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = state.store.insert_project(input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}
