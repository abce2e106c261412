use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Session};
use crate::entity::{Writer, WriterId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait WriterQuery: 'static + Sync + Send {
    type Session: Session;
    async fn find_all(&self, con: &mut Self::Session)
        -> error_stack::Result<Vec<Writer>, KernelError>;
    async fn find_by_id(
        &self,
        con: &mut Self::Session,
        id: &WriterId,
    ) -> error_stack::Result<Option<Writer>, KernelError>;
}

pub trait DependOnWriterQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type WriterQuery: WriterQuery<
        Session = <Self::DatabaseConnection as DatabaseConnection>::Session,
    >;
    fn writer_query(&self) -> &Self::WriterQuery;
}
