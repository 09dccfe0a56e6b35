use std::time::Duration;

use mongodb::{Client, Database, bson::doc, options::ClientOptions};
use thiserror::Error;

/// Database used when the connection string does not name one.
pub const DEFAULT_DATABASE: &str = "productsdb";

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.invalid_uri")]
    InvalidUri,
    #[error("database.connection_error")]
    ConnectionError,
}

/// Configuration for the document store connection
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_pool_size: u32,
    pub connect_timeout: Duration,
    pub server_selection_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_pool_size: 10,
            connect_timeout: Duration::from_secs(10),
            server_selection_timeout: Duration::from_secs(30),
        }
    }
}

/// Opens a MongoDB client and returns the database named in the connection
/// string (or [`DEFAULT_DATABASE`]). The server is pinged once so a bad
/// address fails at startup instead of on the first request.
pub async fn connect(config: &DatabaseConfig) -> Result<Database, DatabaseError> {
    let mut options = ClientOptions::parse(config.connection_string.as_str())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Invalid MongoDB connection string");
            DatabaseError::InvalidUri
        })?;
    options.max_pool_size = Some(config.max_pool_size);
    options.connect_timeout = Some(config.connect_timeout);
    options.server_selection_timeout = Some(config.server_selection_timeout);

    let client = Client::with_options(options).map_err(|e| {
        tracing::error!(error = %e, "Failed to build MongoDB client");
        DatabaseError::ConnectionError
    })?;
    let database = client
        .default_database()
        .unwrap_or_else(|| client.database(DEFAULT_DATABASE));

    database
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "MongoDB connection error");
            DatabaseError::ConnectionError
        })?;

    tracing::info!(database = %database.name(), "Connected to MongoDB");
    Ok(database)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_apply_pool_defaults() {
        let config = DatabaseConfig::new("mongodb://localhost:27017/productsdb".to_string());

        assert_eq!(config.max_pool_size, 10);
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }

    #[tokio::test]
    async fn should_reject_malformed_connection_string() {
        let config = DatabaseConfig::new("not a uri".to_string());

        let result = connect(&config).await;

        assert!(matches!(result, Err(DatabaseError::InvalidUri)));
    }
}
