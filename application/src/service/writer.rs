use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{DependOnWriterQuery, WriterQuery};
use kernel::KernelError;

use crate::transfer::WriterDto;

#[async_trait::async_trait]
pub trait GetWriterService: 'static + Sync + Send + DependOnWriterQuery {
    async fn get_all_writers(&self) -> error_stack::Result<Vec<WriterDto>, KernelError> {
        let mut connection = self.database_connection().session().await?;
        let writers = self.writer_query().find_all(&mut connection).await?;
        Ok(writers.into_iter().map(WriterDto::from).collect())
    }
}

impl<T> GetWriterService for T where T: DependOnWriterQuery {}
