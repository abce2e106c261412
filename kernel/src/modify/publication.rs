use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Session};
use crate::entity::{Publication, PublicationId, PublicationPatch};
use crate::KernelError;

#[async_trait::async_trait]
pub trait PublicationModifier: 'static + Sync + Send {
    type Session: Session;
    /// Fails with `DuplicateIdentifier` when storage rejects the identifier.
    async fn create(
        &self,
        con: &mut Self::Session,
        publication: &Publication,
    ) -> error_stack::Result<(), KernelError>;
    async fn update(
        &self,
        con: &mut Self::Session,
        id: &PublicationId,
        patch: &PublicationPatch,
    ) -> error_stack::Result<(), KernelError>;
    async fn create_many(
        &self,
        con: &mut Self::Session,
        publications: &[Publication],
    ) -> error_stack::Result<(), KernelError>;
    /// Returns the number of removed publications.
    async fn delete_all(&self, con: &mut Self::Session) -> error_stack::Result<u64, KernelError>;
    async fn ensure_identifier_index(
        &self,
        con: &mut Self::Session,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnPublicationModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type PublicationModifier: PublicationModifier<
        Session = <Self::DatabaseConnection as DatabaseConnection>::Session,
    >;
    fn publication_modifier(&self) -> &Self::PublicationModifier;
}
