// src/shared/db/mongo_connection.rs
use std::fmt;

use bson::doc;
use mongodb::{Client, Database};
use tokio::sync::OnceCell;
use tracing::info;

/// Owned, lazily connected MongoDB handle.
///
/// The first call to [`MongoConnection::database`] builds the client; every
/// later call (including concurrent ones racing the first) reuses it. The
/// driver's client owns the pool, so cloning the returned `Database` is cheap.
pub struct MongoConnection {
    uri: String,
    database_name: String,
    database: OnceCell<Database>,
}

impl MongoConnection {
    pub fn new(uri: impl Into<String>, database_name: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database_name: database_name.into(),
            database: OnceCell::new(),
        }
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn is_connected(&self) -> bool {
        self.database.initialized()
    }

    pub async fn database(&self) -> Result<Database, mongodb::error::Error> {
        let database = self
            .database
            .get_or_try_init(|| async {
                let client = Client::with_uri_str(&self.uri).await?;
                info!(database = %self.database_name, "MongoDB client initialized");
                Ok::<_, mongodb::error::Error>(client.database(&self.database_name))
            })
            .await?;

        Ok(database.clone())
    }

    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        self.database()
            .await?
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }
}

// The URI can carry credentials, so it never shows up in logs.
impl fmt::Debug for MongoConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MongoConnection")
            .field("database_name", &self.database_name)
            .field("connected", &self.is_connected())
            .finish()
    }
}
