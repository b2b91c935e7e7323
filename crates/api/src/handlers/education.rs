//! Handlers for the `/api/education` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_db::models::education::{CreateEducation, Education};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/education
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Education>>> {
    let education = state.store.list_education().await?;
    Ok(Json(education))
}

/// POST /api/education
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEducation>,
) -> AppResult<(StatusCode, Json<Education>)> {
    let education = state.store.insert_education(input).await?;
    Ok((StatusCode::CREATED, Json(education)))
}
