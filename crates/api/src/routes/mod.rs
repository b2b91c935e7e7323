pub mod education;
pub mod health;
pub mod project;
pub mod stats;

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects        GET list, POST create
/// /education       GET list, POST create
/// /stats           GET fetch-or-init, POST overwrite
/// /upload-cv       POST multipart résumé replacement
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Portfolio project cards.
        .nest("/projects", project::router())
        // Education timeline entries.
        .nest("/education", education::router())
        // Stats singleton.
        .nest("/stats", stats::router())
        // Résumé upload. Body limit disabled: uploads may be any size.
        .route(
            "/upload-cv",
            post(handlers::resume::upload_cv).layer(DefaultBodyLimit::disable()),
        )
}
