use crate::KernelError;

#[async_trait::async_trait]
pub trait DatabaseConnection: 'static + Sync + Send {
    type Session: Session;
    async fn session(&self) -> error_stack::Result<Self::Session, KernelError>;
}

pub trait DependOnDatabaseConnection: 'static + Sync + Send {
    type DatabaseConnection: DatabaseConnection;
    fn database_connection(&self) -> &Self::DatabaseConnection;
}

impl<T> DependOnDatabaseConnection for T
where
    T: DatabaseConnection,
{
    type DatabaseConnection = T;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        self
    }
}

/// Handle used by repositories for a single logical operation.
///
/// Document stores used here give single-document atomicity only, so a
/// session carries no commit or rollback.
pub trait Session: 'static + Sync + Send {}
