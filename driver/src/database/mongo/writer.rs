use bson::doc;
use bson::oid::ObjectId;
use futures::TryStreamExt;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use kernel::interface::query::{DependOnWriterQuery, WriterQuery};
use kernel::interface::update::{DependOnWriterModifier, WriterModifier};
use kernel::prelude::entity::{
    DestructWriter, Writer, WriterBirthYear, WriterId, WriterName, WriterNationality,
};
use kernel::KernelError;

use crate::database::mongo::{MongoDatabase, MongoSession, WRITER_COLLECTION};
use crate::error::ConvertError;

pub struct MongoWriterRepository;

#[async_trait::async_trait]
impl WriterQuery for MongoWriterRepository {
    type Session = MongoSession;

    async fn find_all(
        &self,
        con: &mut MongoSession,
    ) -> error_stack::Result<Vec<Writer>, KernelError> {
        MongoWriterInternal::find_all(con).await
    }

    async fn find_by_id(
        &self,
        con: &mut MongoSession,
        id: &WriterId,
    ) -> error_stack::Result<Option<Writer>, KernelError> {
        MongoWriterInternal::find_by_id(con, id).await
    }
}

#[async_trait::async_trait]
impl WriterModifier for MongoWriterRepository {
    type Session = MongoSession;

    async fn create_many(
        &self,
        con: &mut MongoSession,
        writers: &[Writer],
    ) -> error_stack::Result<(), KernelError> {
        MongoWriterInternal::create_many(con, writers).await
    }

    async fn delete_all(&self, con: &mut MongoSession) -> error_stack::Result<u64, KernelError> {
        MongoWriterInternal::delete_all(con).await
    }
}

impl DependOnWriterQuery for MongoDatabase {
    type WriterQuery = MongoWriterRepository;
    fn writer_query(&self) -> &Self::WriterQuery {
        &MongoWriterRepository
    }
}

impl DependOnWriterModifier for MongoDatabase {
    type WriterModifier = MongoWriterRepository;
    fn writer_modifier(&self) -> &Self::WriterModifier {
        &MongoWriterRepository
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthorDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birth_year: Option<i32>,
}

impl From<AuthorDocument> for Writer {
    fn from(value: AuthorDocument) -> Self {
        Writer::new(
            WriterId::new(value.id),
            WriterName::new(value.name),
            value.nationality.map(WriterNationality::new),
            value.birth_year.map(WriterBirthYear::new),
        )
    }
}

impl From<&Writer> for AuthorDocument {
    fn from(value: &Writer) -> Self {
        let DestructWriter {
            id,
            name,
            nationality,
            birth_year,
        } = value.clone().into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            nationality: nationality.map(Into::into),
            birth_year: birth_year.map(Into::into),
        }
    }
}

pub(in crate::database) struct MongoWriterInternal;

impl MongoWriterInternal {
    fn collection(con: &Database) -> Collection<AuthorDocument> {
        con.collection(WRITER_COLLECTION)
    }

    async fn find_all(con: &Database) -> error_stack::Result<Vec<Writer>, KernelError> {
        let documents: Vec<AuthorDocument> = Self::collection(con)
            .find(None, None)
            .await
            .convert_error()?
            .try_collect()
            .await
            .convert_error()?;
        Ok(documents.into_iter().map(Writer::from).collect())
    }

    async fn find_by_id(
        con: &Database,
        id: &WriterId,
    ) -> error_stack::Result<Option<Writer>, KernelError> {
        let found = Self::collection(con)
            .find_one(doc! { "_id": *id.as_ref() }, None)
            .await
            .convert_error()?;
        Ok(found.map(Writer::from))
    }

    async fn create_many(
        con: &Database,
        writers: &[Writer],
    ) -> error_stack::Result<(), KernelError> {
        if writers.is_empty() {
            return Ok(());
        }
        let documents = writers.iter().map(AuthorDocument::from).collect::<Vec<_>>();
        Self::collection(con)
            .insert_many(documents, None)
            .await
            .convert_error()?;
        Ok(())
    }

    async fn delete_all(con: &Database) -> error_stack::Result<u64, KernelError> {
        let result = Self::collection(con)
            .delete_many(doc! {}, None)
            .await
            .convert_error()?;
        Ok(result.deleted_count)
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::WriterQuery;
    use kernel::interface::update::WriterModifier;
    use kernel::prelude::entity::{Writer, WriterId, WriterName, WriterNationality};
    use kernel::KernelError;

    use crate::database::mongo::test::database;
    use crate::database::mongo::MongoWriterRepository;

    #[test_with::env(MONGODB_TEST)]
    #[tokio::test]
    async fn create_then_find() -> error_stack::Result<(), KernelError> {
        let db = database().await?;
        let mut con = db.session().await?;
        let writer = Writer::new(
            WriterId::generate(),
            WriterName::new("Ursula K. Le Guin"),
            Some(WriterNationality::new("American")),
            None,
        );
        MongoWriterRepository
            .create_many(&mut con, std::slice::from_ref(&writer))
            .await?;

        let found = MongoWriterRepository.find_by_id(&mut con, writer.id()).await?;
        assert_eq!(found, Some(writer.clone()));

        let all = MongoWriterRepository.find_all(&mut con).await?;
        assert!(all.contains(&writer));
        Ok(())
    }

    #[test_with::env(MONGODB_TEST)]
    #[tokio::test]
    async fn unknown_id_is_none() -> error_stack::Result<(), KernelError> {
        let db = database().await?;
        let mut con = db.session().await?;
        let found = MongoWriterRepository
            .find_by_id(&mut con, &WriterId::generate())
            .await?;
        assert!(found.is_none());
        Ok(())
    }
}
