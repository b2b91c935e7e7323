//! In-memory implementation of [`PortfolioStore`].
//!
//! Backs the API integration tests and lets the server run without a
//! database during development. Identities are fresh ObjectIds, so
//! records round-trip exactly like the Mongo backend's.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::models::education::{CreateEducation, Education};
use crate::models::project::{CreateProject, Project};
use crate::models::stats::{Stats, StatsInput};
use crate::store::{PortfolioStore, StoreError};

#[derive(Debug, Default)]
pub struct MemoryStore {
    projects: RwLock<Vec<Project>>,
    education: RwLock<Vec<Education>>,
    stats: RwLock<Option<Stats>>,
}

#[async_trait]
impl PortfolioStore for MemoryStore {
    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        Ok(self.projects.read().await.clone())
    }

    async fn insert_project(&self, input: CreateProject) -> Result<Project, StoreError> {
        let project = input.into_project(ObjectId::new());
        self.projects.write().await.push(project.clone());
        Ok(project)
    }

    async fn list_education(&self) -> Result<Vec<Education>, StoreError> {
        Ok(self.education.read().await.clone())
    }

    async fn insert_education(&self, input: CreateEducation) -> Result<Education, StoreError> {
        let education = input.into_education(ObjectId::new());
        self.education.write().await.push(education.clone());
        Ok(education)
    }

    async fn fetch_stats(&self) -> Result<Stats, StoreError> {
        let mut slot = self.stats.write().await;
        Ok(slot.get_or_insert_with(Stats::default).clone())
    }

    async fn replace_stats(&self, input: StatsInput) -> Result<Stats, StoreError> {
        let stats = Stats::from(input);
        *self.stats.write().await = Some(stats.clone());
        Ok(stats)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
