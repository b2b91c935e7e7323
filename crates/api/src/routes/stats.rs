//! Route definitions for the `/api/stats` singleton.

use axum::routing::get;
use axum::Router;

use crate::handlers::stats;
use crate::state::AppState;

/// Routes mounted at `/stats`.
///
/// ```text
/// GET    /   -> get (creates defaults if absent)
/// POST   /   -> set (atomic overwrite)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(stats::get).post(stats::set))
}
