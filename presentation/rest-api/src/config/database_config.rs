use mongodb::Database;
use persistence::db::{DatabaseConfig, create_mongo_database};
use std::env;

/// Initialize the document database handle from environment variables
///
/// Environment variables:
/// - MONGODB_URI: MongoDB connection string (required)
/// - MONGODB_DATABASE: Database name (default: "store")
///
/// # Errors
/// Returns error if MONGODB_URI is not set or the connection string is invalid
pub async fn init_database() -> anyhow::Result<Database> {
    let uri = env::var("MONGODB_URI").expect("MONGODB_URI must be set");
    let name = env::var("MONGODB_DATABASE").unwrap_or_else(|_| "store".to_string());
    let database = create_mongo_database(&DatabaseConfig::new(uri, name)).await?;
    Ok(database)
}
