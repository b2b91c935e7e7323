//! Storage layer for the folio backend: document models, the
//! [`PortfolioStore`] interface, and its MongoDB and in-memory backends.

pub mod memory;
pub mod models;
pub mod mongo;
pub mod store;

pub use store::{PortfolioStore, StoreError};

use mongodb::bson::doc;
use mongodb::{Client, Database};

/// Connect to MongoDB and select the named database.
pub async fn connect(uri: &str, db_name: &str) -> Result<Database, StoreError> {
    let client = Client::with_uri_str(uri).await?;
    Ok(client.database(db_name))
}

/// Round-trip a `ping` command to verify the database is reachable.
pub async fn health_check(db: &Database) -> Result<(), StoreError> {
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}
