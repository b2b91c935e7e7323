use std::sync::Arc;

use folio_core::resume::ResumeStore;
use folio_db::PortfolioStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Document store backing the collection endpoints.
    pub store: Arc<dyn PortfolioStore>,
    /// Résumé file store (fixed-path `cv.pdf` replacement).
    pub resume: Arc<ResumeStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
