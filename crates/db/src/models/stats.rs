//! Portfolio stats singleton model.
//!
//! The stats document lives under a fixed well-known key instead of
//! "latest row wins", so there is exactly one document ever and writes
//! are a single atomic upsert.

use serde::{Deserialize, Serialize};

/// Fixed `_id` of the stats singleton document.
pub const STATS_KEY: &str = "stats";

/// The stats singleton from the `stats` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stats {
    #[serde(rename = "_id")]
    pub id: String,
    pub projects: i64,
    pub tech: i64,
    pub years: i64,
    pub commit: i64,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            id: STATS_KEY.to_string(),
            projects: 0,
            tech: 0,
            years: 0,
            commit: 100,
        }
    }
}

/// Caller-supplied values overwriting the stats singleton. All four
/// fields are required and typed; malformed input is rejected at
/// deserialization instead of being stored as given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsInput {
    pub projects: i64,
    pub tech: i64,
    pub years: i64,
    pub commit: i64,
}

impl From<StatsInput> for Stats {
    fn from(input: StatsInput) -> Self {
        Self {
            id: STATS_KEY.to_string(),
            projects: input.projects,
            tech: input.tech,
            years: input.years,
            commit: input.commit,
        }
    }
}
