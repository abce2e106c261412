use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Session};
use crate::entity::Writer;
use crate::KernelError;

#[async_trait::async_trait]
pub trait WriterModifier: 'static + Sync + Send {
    type Session: Session;
    async fn create_many(
        &self,
        con: &mut Self::Session,
        writers: &[Writer],
    ) -> error_stack::Result<(), KernelError>;
    /// Returns the number of removed writers.
    async fn delete_all(&self, con: &mut Self::Session) -> error_stack::Result<u64, KernelError>;
}

pub trait DependOnWriterModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type WriterModifier: WriterModifier<
        Session = <Self::DatabaseConnection as DatabaseConnection>::Session,
    >;
    fn writer_modifier(&self) -> &Self::WriterModifier;
}
