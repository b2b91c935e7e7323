//! MongoDB implementation of [`PortfolioStore`].

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use crate::models::education::{CreateEducation, Education};
use crate::models::project::{CreateProject, Project};
use crate::models::stats::{Stats, StatsInput, STATS_KEY};
use crate::store::{PortfolioStore, StoreError};

/// Production store over the `projects`, `education`, and `stats`
/// collections of one database.
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
    projects: Collection<Project>,
    education: Collection<Education>,
    stats: Collection<Stats>,
}

impl MongoStore {
    pub fn new(db: Database) -> Self {
        let projects = db.collection("projects");
        let education = db.collection("education");
        let stats = db.collection("stats");
        Self {
            db,
            projects,
            education,
            stats,
        }
    }
}

#[async_trait]
impl PortfolioStore for MongoStore {
    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        let cursor = self.projects.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert_project(&self, mut input: CreateProject) -> Result<Project, StoreError> {
        input.apply_defaults();
        let result = self
            .projects
            .clone_with_type::<CreateProject>()
            .insert_one(&input)
            .await?;
        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            StoreError::Internal("store assigned a non-ObjectId identity".to_string())
        })?;
        Ok(input.into_project(id))
    }

    async fn list_education(&self) -> Result<Vec<Education>, StoreError> {
        let cursor = self.education.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert_education(&self, input: CreateEducation) -> Result<Education, StoreError> {
        let result = self
            .education
            .clone_with_type::<CreateEducation>()
            .insert_one(&input)
            .await?;
        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            StoreError::Internal("store assigned a non-ObjectId identity".to_string())
        })?;
        Ok(input.into_education(id))
    }

    async fn fetch_stats(&self) -> Result<Stats, StoreError> {
        // Atomic create-if-absent at the fixed key; no sort-by-recency.
        let stats = self
            .stats
            .find_one_and_update(
                doc! { "_id": STATS_KEY },
                doc! { "$setOnInsert": {
                    "projects": 0_i64,
                    "tech": 0_i64,
                    "years": 0_i64,
                    "commit": 100_i64,
                } },
            )
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?;
        stats.ok_or_else(|| StoreError::Internal("stats upsert returned no document".to_string()))
    }

    async fn replace_stats(&self, input: StatsInput) -> Result<Stats, StoreError> {
        // Single upsert-replace: concurrent writers degrade to clean
        // last-writer-wins instead of interleaved read-modify-write.
        let stats = self
            .stats
            .find_one_and_replace(doc! { "_id": STATS_KEY }, Stats::from(input))
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?;
        stats.ok_or_else(|| StoreError::Internal("stats upsert returned no document".to_string()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
