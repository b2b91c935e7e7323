//! Route definitions for the `/api/education` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::education;
use crate::state::AppState;

/// Routes mounted at `/education`.
///
/// ```text
/// GET    /   -> list
/// POST   /   -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(education::list).post(education::create))
}
