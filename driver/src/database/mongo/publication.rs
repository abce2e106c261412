use bson::oid::ObjectId;
use bson::{doc, Bson, Document};
use futures::TryStreamExt;
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};
use serde::{Deserialize, Serialize};

use kernel::interface::query::{DependOnPublicationQuery, PublicationQuery};
use kernel::interface::update::{DependOnPublicationModifier, PublicationModifier};
use kernel::prelude::entity::{
    Category, DestructPublication, DestructPublicationPatch, Isbn, Publication, PublicationId,
    PublicationPatch, PublicationTitle, ReleaseYear, WriterId,
};
use kernel::KernelError;

use crate::database::mongo::{MongoDatabase, MongoSession, PUBLICATION_COLLECTION};
use crate::error::ConvertError;

pub struct MongoPublicationRepository;

#[async_trait::async_trait]
impl PublicationQuery for MongoPublicationRepository {
    type Session = MongoSession;

    async fn find_all(
        &self,
        con: &mut MongoSession,
    ) -> error_stack::Result<Vec<Publication>, KernelError> {
        MongoPublicationInternal::find_many(con, doc! {}).await
    }

    async fn find_by_id(
        &self,
        con: &mut MongoSession,
        id: &PublicationId,
    ) -> error_stack::Result<Option<Publication>, KernelError> {
        MongoPublicationInternal::find_one(con, doc! { "_id": *id.as_ref() }).await
    }

    async fn find_by_category(
        &self,
        con: &mut MongoSession,
        category: &Category,
    ) -> error_stack::Result<Vec<Publication>, KernelError> {
        let category = category.as_ref().as_str();
        MongoPublicationInternal::find_many(con, doc! { "genre": category }).await
    }

    async fn find_by_identifier(
        &self,
        con: &mut MongoSession,
        identifier: &Isbn,
    ) -> error_stack::Result<Option<Publication>, KernelError> {
        let identifier = identifier.as_ref().as_str();
        MongoPublicationInternal::find_one(con, doc! { "isbn": identifier }).await
    }

    async fn find_categories(
        &self,
        con: &mut MongoSession,
    ) -> error_stack::Result<Vec<Category>, KernelError> {
        MongoPublicationInternal::find_categories(con).await
    }
}

#[async_trait::async_trait]
impl PublicationModifier for MongoPublicationRepository {
    type Session = MongoSession;

    async fn create(
        &self,
        con: &mut MongoSession,
        publication: &Publication,
    ) -> error_stack::Result<(), KernelError> {
        MongoPublicationInternal::create(con, publication).await
    }

    async fn update(
        &self,
        con: &mut MongoSession,
        id: &PublicationId,
        patch: &PublicationPatch,
    ) -> error_stack::Result<(), KernelError> {
        MongoPublicationInternal::update(con, id, patch).await
    }

    async fn create_many(
        &self,
        con: &mut MongoSession,
        publications: &[Publication],
    ) -> error_stack::Result<(), KernelError> {
        MongoPublicationInternal::create_many(con, publications).await
    }

    async fn delete_all(&self, con: &mut MongoSession) -> error_stack::Result<u64, KernelError> {
        MongoPublicationInternal::delete_all(con).await
    }

    async fn ensure_identifier_index(
        &self,
        con: &mut MongoSession,
    ) -> error_stack::Result<(), KernelError> {
        MongoPublicationInternal::ensure_identifier_index(con).await
    }
}

impl DependOnPublicationQuery for MongoDatabase {
    type PublicationQuery = MongoPublicationRepository;
    fn publication_query(&self) -> &Self::PublicationQuery {
        &MongoPublicationRepository
    }
}

impl DependOnPublicationModifier for MongoDatabase {
    type PublicationModifier = MongoPublicationRepository;
    fn publication_modifier(&self) -> &Self::PublicationModifier {
        &MongoPublicationRepository
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    title: String,
    author_id: ObjectId,
    genre: String,
    publication_year: i32,
    isbn: String,
}

impl From<BookDocument> for Publication {
    fn from(value: BookDocument) -> Self {
        Publication::new(
            PublicationId::new(value.id),
            PublicationTitle::new(value.title),
            WriterId::new(value.author_id),
            Category::new(value.genre),
            ReleaseYear::new(value.publication_year),
            Isbn::new(value.isbn),
        )
    }
}

impl From<&Publication> for BookDocument {
    fn from(value: &Publication) -> Self {
        let DestructPublication {
            id,
            title,
            writer_id,
            category,
            release_year,
            identifier,
        } = value.clone().into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            author_id: writer_id.into(),
            genre: category.into(),
            publication_year: release_year.into(),
            isbn: identifier.into(),
        }
    }
}

/// `$set` document holding only the supplied fields.
fn patch_document(patch: &PublicationPatch) -> Document {
    let DestructPublicationPatch {
        title,
        writer_id,
        category,
        release_year,
        identifier,
    } = patch.clone().into_destruct();
    let mut set = Document::new();
    if let Some(title) = title {
        set.insert("title", String::from(title));
    }
    if let Some(writer_id) = writer_id {
        set.insert("authorId", ObjectId::from(writer_id));
    }
    if let Some(category) = category {
        set.insert("genre", String::from(category));
    }
    if let Some(release_year) = release_year {
        set.insert("publicationYear", i32::from(release_year));
    }
    if let Some(identifier) = identifier {
        set.insert("isbn", String::from(identifier));
    }
    set
}

pub(in crate::database) struct MongoPublicationInternal;

impl MongoPublicationInternal {
    fn collection(con: &Database) -> Collection<BookDocument> {
        con.collection(PUBLICATION_COLLECTION)
    }

    async fn find_many(
        con: &Database,
        filter: Document,
    ) -> error_stack::Result<Vec<Publication>, KernelError> {
        let documents: Vec<BookDocument> = Self::collection(con)
            .find(filter, None)
            .await
            .convert_error()?
            .try_collect()
            .await
            .convert_error()?;
        Ok(documents.into_iter().map(Publication::from).collect())
    }

    async fn find_one(
        con: &Database,
        filter: Document,
    ) -> error_stack::Result<Option<Publication>, KernelError> {
        let found = Self::collection(con)
            .find_one(filter, None)
            .await
            .convert_error()?;
        Ok(found.map(Publication::from))
    }

    async fn find_categories(con: &Database) -> error_stack::Result<Vec<Category>, KernelError> {
        let values = Self::collection(con)
            .distinct("genre", None, None)
            .await
            .convert_error()?;
        let categories = values
            .into_iter()
            .filter_map(|value| match value {
                Bson::String(genre) => Some(Category::new(genre)),
                _ => None,
            })
            .collect();
        Ok(categories)
    }

    #[tracing::instrument(skip(con))]
    async fn create(
        con: &Database,
        publication: &Publication,
    ) -> error_stack::Result<(), KernelError> {
        Self::collection(con)
            .insert_one(BookDocument::from(publication), None)
            .await
            .convert_error()?;
        Ok(())
    }

    #[tracing::instrument(skip(con))]
    async fn update(
        con: &Database,
        id: &PublicationId,
        patch: &PublicationPatch,
    ) -> error_stack::Result<(), KernelError> {
        let set = patch_document(patch);
        if set.is_empty() {
            return Ok(());
        }
        Self::collection(con)
            .update_one(doc! { "_id": *id.as_ref() }, doc! { "$set": set }, None)
            .await
            .convert_error()?;
        Ok(())
    }

    #[tracing::instrument(skip(con, publications))]
    async fn create_many(
        con: &Database,
        publications: &[Publication],
    ) -> error_stack::Result<(), KernelError> {
        if publications.is_empty() {
            return Ok(());
        }
        let documents = publications
            .iter()
            .map(BookDocument::from)
            .collect::<Vec<_>>();
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

    async fn ensure_identifier_index(con: &Database) -> error_stack::Result<(), KernelError> {
        let index = IndexModel::builder()
            .keys(doc! { "isbn": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        Self::collection(con)
            .create_index(index, None)
            .await
            .convert_error()?;
        Ok(())
    }
}
