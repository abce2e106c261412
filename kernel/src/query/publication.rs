use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Session};
use crate::entity::{Category, Isbn, Publication, PublicationId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait PublicationQuery: 'static + Sync + Send {
    type Session: Session;
    async fn find_all(
        &self,
        con: &mut Self::Session,
    ) -> error_stack::Result<Vec<Publication>, KernelError>;
    async fn find_by_id(
        &self,
        con: &mut Self::Session,
        id: &PublicationId,
    ) -> error_stack::Result<Option<Publication>, KernelError>;
    async fn find_by_category(
        &self,
        con: &mut Self::Session,
        category: &Category,
    ) -> error_stack::Result<Vec<Publication>, KernelError>;
    async fn find_by_identifier(
        &self,
        con: &mut Self::Session,
        identifier: &Isbn,
    ) -> error_stack::Result<Option<Publication>, KernelError>;
    /// Distinct categories among stored publications, each reported once.
    async fn find_categories(
        &self,
        con: &mut Self::Session,
    ) -> error_stack::Result<Vec<Category>, KernelError>;
}

pub trait DependOnPublicationQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type PublicationQuery: PublicationQuery<
        Session = <Self::DatabaseConnection as DatabaseConnection>::Session,
    >;
    fn publication_query(&self) -> &Self::PublicationQuery;
}
