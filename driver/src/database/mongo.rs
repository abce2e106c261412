mod publication;
mod writer;

pub use self::{publication::*, writer::*};

use std::ops::Deref;
use std::time::Duration;

use bson::doc;
use error_stack::Report;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

use kernel::interface::database::{DatabaseConnection, Session};
use kernel::KernelError;

use crate::env;
use crate::error::{mask_credentials, ConvertError};

static MONGODB_URI: &str = "MONGODB_URI";

pub const DEFAULT_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE: &str = "library";

pub(in crate::database) const WRITER_COLLECTION: &str = "authors";
pub(in crate::database) const PUBLICATION_COLLECTION: &str = "books";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

impl MongoConfig {
    pub fn new(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
        }
    }

    /// Reads `MONGODB_URI`, falling back to a local server.
    pub fn from_env() -> Result<Self, Report<KernelError>> {
        let uri = env(MONGODB_URI)?.unwrap_or_else(|| DEFAULT_URI.to_string());
        Ok(Self::new(uri, DEFAULT_DATABASE))
    }
}

/// Handle to the catalog database. Cheap to clone; every clone shares the
/// same connection pool.
#[derive(Clone)]
pub struct MongoDatabase {
    database: Database,
}

impl MongoDatabase {
    pub async fn new() -> Result<Self, Report<KernelError>> {
        let config = MongoConfig::from_env()?;
        Self::connect(&config).await
    }

    pub async fn connect(config: &MongoConfig) -> Result<Self, Report<KernelError>> {
        let masked = mask_credentials(&config.uri);
        tracing::info!(uri = %masked, database = %config.database, "connecting to MongoDB");

        let mut options = ClientOptions::parse(&config.uri)
            .await
            .convert_connection_error()?;
        options.connect_timeout = Some(CONNECT_TIMEOUT);
        options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);

        let client = Client::with_options(options).convert_connection_error()?;
        let database = client.database(&config.database);
        database
            .run_command(doc! { "ping": 1 }, None)
            .await
            .convert_connection_error()?;

        tracing::info!(uri = %masked, "connected to MongoDB");
        Ok(Self { database })
    }
}

pub struct MongoSession(Database);

impl Deref for MongoSession {
    type Target = Database;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Session for MongoSession {}

#[async_trait::async_trait]
impl DatabaseConnection for MongoDatabase {
    type Session = MongoSession;
    async fn session(&self) -> error_stack::Result<Self::Session, KernelError> {
        Ok(MongoSession(self.database.clone()))
    }
}

#[cfg(test)]
pub(in crate::database) mod test {
    use error_stack::Report;
    use kernel::KernelError;
    use rand::Rng;

    use super::{MongoConfig, MongoDatabase, DEFAULT_URI};

    pub async fn database() -> Result<MongoDatabase, Report<KernelError>> {
        let uri = dotenvy::var("MONGODB_URI").unwrap_or_else(|_| DEFAULT_URI.to_string());
        MongoDatabase::connect(&MongoConfig::new(uri, "library_test")).await
    }

    pub fn random_isbn() -> String {
        let mut rng = rand::thread_rng();
        (0..13).map(|_| char::from(b'0' + rng.gen_range(0..10))).collect()
    }

    #[test_with::env(MONGODB_TEST)]
    #[tokio::test]
    async fn unreachable_server_is_a_connection_failure() {
        let config = MongoConfig::new("mongodb://127.0.0.1:1", "library_test");
        let report = MongoDatabase::connect(&config).await.err();
        assert!(matches!(
            report.map(|report| *report.current_context()),
            Some(KernelError::Connection(_))
        ));
    }
}
