use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
}

/// Configuration for the database connection
pub struct DatabaseConfig {
    pub connection_string: String,
    pub database: String,
    pub server_selection_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String, database: String) -> Self {
        Self {
            connection_string,
            database,
            server_selection_timeout: Duration::from_secs(30),
        }
    }
}

/// Creates a handle to the MongoDB database
pub async fn create_mongo_database(config: &DatabaseConfig) -> Result<Database, DatabaseError> {
    let mut options = ClientOptions::parse(&config.connection_string)
        .await
        .map_err(|_| DatabaseError::ConnectionError)?;
    options.server_selection_timeout = Some(config.server_selection_timeout);

    let client = Client::with_options(options).map_err(|_| DatabaseError::ConnectionError)?;

    Ok(client.database(&config.database))
}
