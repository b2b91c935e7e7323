//! The storage interface consumed by the HTTP layer.
//!
//! Handlers depend on [`PortfolioStore`] rather than a concrete driver,
//! so the API can be exercised against [`crate::memory::MemoryStore`]
//! without a live database. [`crate::mongo::MongoStore`] is the
//! production backend.

use async_trait::async_trait;

use crate::models::education::{CreateEducation, Education};
use crate::models::project::{CreateProject, Project};
use crate::models::stats::{Stats, StatsInput};

/// Error raised by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("{0}")]
    Internal(String),
}

/// Document-store operations backing the portfolio endpoints.
#[async_trait]
pub trait PortfolioStore: Send + Sync {
    /// All project records in the store's natural (insertion) order.
    async fn list_projects(&self) -> Result<Vec<Project>, StoreError>;

    /// Persist a new project, returning the stored record with its
    /// assigned identity and defaulted `image`.
    async fn insert_project(&self, input: CreateProject) -> Result<Project, StoreError>;

    /// All education records in the store's natural (insertion) order.
    async fn list_education(&self) -> Result<Vec<Education>, StoreError>;

    /// Persist a new education record.
    async fn insert_education(&self, input: CreateEducation) -> Result<Education, StoreError>;

    /// The stats singleton, created with defaults if absent.
    async fn fetch_stats(&self) -> Result<Stats, StoreError>;

    /// Overwrite the stats singleton with the caller's values, creating
    /// it if absent. Returns the resulting record.
    async fn replace_stats(&self, input: StatsInput) -> Result<Stats, StoreError>;

    /// Cheap reachability probe for health reporting.
    async fn ping(&self) -> Result<(), StoreError>;
}
