use std::ops::Deref;
use std::sync::Arc;

use driver::database::MongoDatabase;
use kernel::interface::database::DatabaseConnection;
use kernel::interface::update::{DependOnPublicationModifier, PublicationModifier};
use kernel::KernelError;
use vodca::References;

use crate::schema::{build_schema, CatalogSchema};

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init().await?)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    database: MongoDatabase,
    schema: CatalogSchema,
}

impl Handler {
    pub async fn init() -> error_stack::Result<Self, KernelError> {
        let database = MongoDatabase::new().await?;

        let mut con = database.session().await?;
        if let Err(report) = database
            .publication_modifier()
            .ensure_identifier_index(&mut con)
            .await
        {
            tracing::warn!(error = ?report, "identifier constraint not created at startup");
        }

        let schema = build_schema(database.clone());
        Ok(Self { database, schema })
    }
}
