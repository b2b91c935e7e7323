//! Handlers for the `/api/stats` singleton.

use axum::extract::State;
use axum::Json;
use folio_db::models::stats::{Stats, StatsInput};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/stats
///
/// Returns the singleton, creating it with defaults on first access.
pub async fn get(State(state): State<AppState>) -> AppResult<Json<Stats>> {
    let stats = state.store.fetch_stats().await?;
    Ok(Json(stats))
}

/// POST /api/stats
///
/// Overwrites the singleton with the caller's values in one atomic
/// upsert; concurrent writers are last-writer-wins.
pub async fn set(
    State(state): State<AppState>,
    Json(input): Json<StatsInput>,
) -> AppResult<Json<Stats>> {
    let stats = state.store.replace_stats(input).await?;
    Ok(Json(stats))
}
