mod mutation;
mod query;

pub use self::{mutation::*, query::*};

use async_graphql::{EmptySubscription, Schema};
use driver::database::MongoDatabase;

pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(database: MongoDatabase) -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(database)
        .finish()
}
