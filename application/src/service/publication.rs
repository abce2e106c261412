use std::collections::HashMap;

use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{
    DependOnPublicationQuery, DependOnWriterQuery, PublicationQuery, WriterQuery,
};
use kernel::interface::update::{DependOnPublicationModifier, PublicationModifier};
use kernel::prelude::entity::{
    Category, Isbn, Publication, PublicationId, PublicationPatch, PublicationTitle, ReleaseYear,
    Writer, WriterId,
};
use kernel::{ClientMessage, KernelError};

use crate::transfer::{
    CreatePublicationDto, GetPublicationDto, GetPublicationsByCategoryDto, PublicationDto,
    UpdatePublicationDto,
};

type SessionOf<T> =
    <<T as DependOnDatabaseConnection>::DatabaseConnection as DatabaseConnection>::Session;

/// Resolves each publication's writer with one lookup per distinct writer.
async fn attach_writers<T>(
    module: &T,
    con: &mut SessionOf<T>,
    publications: Vec<Publication>,
) -> error_stack::Result<Vec<PublicationDto>, KernelError>
where
    T: DependOnWriterQuery + ?Sized,
{
    let mut writers: HashMap<WriterId, Option<Writer>> = HashMap::new();
    let mut resolved = Vec::with_capacity(publications.len());
    for publication in publications {
        let writer_id = *publication.writer_id();
        let writer = match writers.get(&writer_id) {
            Some(writer) => writer.clone(),
            None => {
                let found = module.writer_query().find_by_id(con, &writer_id).await?;
                if found.is_none() {
                    tracing::warn!(
                        writer = %writer_id,
                        publication = %publication.id(),
                        "dangling writer reference"
                    );
                }
                writers.insert(writer_id, found.clone());
                found
            }
        };
        resolved.push(PublicationDto::new(publication, writer));
    }
    Ok(resolved)
}

#[async_trait::async_trait]
pub trait GetPublicationService:
    'static + Sync + Send + DependOnPublicationQuery + DependOnWriterQuery
{
    async fn get_all_publications(&self) -> error_stack::Result<Vec<PublicationDto>, KernelError> {
        let mut connection = self.database_connection().session().await?;
        let publications = self.publication_query().find_all(&mut connection).await?;
        attach_writers(self, &mut connection, publications).await
    }

    async fn get_publication(
        &self,
        dto: GetPublicationDto,
    ) -> error_stack::Result<Option<PublicationDto>, KernelError> {
        let id = PublicationId::parse(&dto.id)?;
        let mut connection = self.database_connection().session().await?;
        let publication = self
            .publication_query()
            .find_by_id(&mut connection, &id)
            .await?;
        match publication {
            None => Ok(None),
            Some(publication) => {
                let mut found = attach_writers(self, &mut connection, vec![publication]).await?;
                Ok(found.pop())
            }
        }
    }

    async fn get_publications_by_category(
        &self,
        dto: GetPublicationsByCategoryDto,
    ) -> error_stack::Result<Vec<PublicationDto>, KernelError> {
        let mut connection = self.database_connection().session().await?;
        let category = Category::new(dto.category);
        let publications = self
            .publication_query()
            .find_by_category(&mut connection, &category)
            .await?;
        attach_writers(self, &mut connection, publications).await
    }

    async fn get_categories(&self) -> error_stack::Result<Vec<String>, KernelError> {
        let mut connection = self.database_connection().session().await?;
        let categories = self
            .publication_query()
            .find_categories(&mut connection)
            .await?;
        Ok(categories.into_iter().map(String::from).collect())
    }
}

impl<T> GetPublicationService for T where T: DependOnPublicationQuery + DependOnWriterQuery {}

#[async_trait::async_trait]
pub trait CreatePublicationService:
    'static
    + Sync
    + Send
    + DependOnPublicationQuery
    + DependOnPublicationModifier
    + DependOnWriterQuery
{
    #[tracing::instrument(skip(self))]
    async fn create_publication(
        &self,
        dto: CreatePublicationDto,
    ) -> error_stack::Result<PublicationDto, KernelError> {
        let mut connection = self.database_connection().session().await?;

        let identifier = Isbn::canonicalize(&dto.identifier);
        let duplicate = self
            .publication_query()
            .find_by_identifier(&mut connection, &identifier)
            .await?;
        if duplicate.is_some() {
            return Err(Report::new(KernelError::DuplicateIdentifier)
                .attach_printable(format!("identifier: {}", identifier.as_ref())));
        }

        let writer_id = WriterId::parse(&dto.writer_id)?;
        let writer = self
            .writer_query()
            .find_by_id(&mut connection, &writer_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::WriterNotFound)
                    .attach_printable(format!("writer: {writer_id}"))
            })?;

        let publication = Publication::new(
            PublicationId::generate(),
            PublicationTitle::new(dto.title),
            writer_id,
            Category::new(dto.category),
            ReleaseYear::new(dto.release_year),
            identifier,
        );
        self.publication_modifier()
            .create(&mut connection, &publication)
            .await?;
        tracing::info!(id = %publication.id(), "publication registered");

        Ok(PublicationDto::new(publication, Some(writer)))
    }
}

impl<T> CreatePublicationService for T where
    T: DependOnPublicationQuery + DependOnPublicationModifier + DependOnWriterQuery
{
}

#[async_trait::async_trait]
pub trait UpdatePublicationService:
    'static
    + Sync
    + Send
    + DependOnPublicationQuery
    + DependOnPublicationModifier
    + DependOnWriterQuery
{
    #[tracing::instrument(skip(self))]
    async fn update_publication(
        &self,
        dto: UpdatePublicationDto,
    ) -> error_stack::Result<PublicationDto, KernelError> {
        let id = PublicationId::parse(&dto.id)?;
        let mut connection = self.database_connection().session().await?;

        let current = self
            .publication_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::PublicationNotFound).attach_printable(format!("id: {id}"))
            })?;

        let identifier = dto.identifier.as_deref().map(Isbn::canonicalize);
        if let Some(identifier) = identifier.as_ref() {
            if identifier != current.identifier() {
                let conflict = self
                    .publication_query()
                    .find_by_identifier(&mut connection, identifier)
                    .await?;
                if conflict.is_some_and(|other| other.id() != &id) {
                    return Err(Report::new(KernelError::DuplicateIdentifier)
                        .attach_printable(ClientMessage::new(
                            "Another publication already uses this identifier.",
                        ))
                        .attach_printable(format!("identifier: {}", identifier.as_ref())));
                }
            }
        }

        let writer_id = match dto.writer_id {
            None => None,
            Some(raw) => {
                let writer_id = WriterId::parse(&raw)?;
                if &writer_id != current.writer_id() {
                    let exists = self
                        .writer_query()
                        .find_by_id(&mut connection, &writer_id)
                        .await?;
                    if exists.is_none() {
                        return Err(Report::new(KernelError::WriterNotFound)
                            .attach_printable(ClientMessage::new(
                                "Selected writer not found in database.",
                            ))
                            .attach_printable(format!("writer: {writer_id}")));
                    }
                }
                Some(writer_id)
            }
        };

        let patch = PublicationPatch::new(
            dto.title.map(PublicationTitle::new),
            writer_id,
            dto.category.map(Category::new),
            dto.release_year.map(ReleaseYear::new),
            identifier,
        );
        if !patch.is_empty() {
            self.publication_modifier()
                .update(&mut connection, &id, &patch)
                .await?;
            tracing::info!(id = %id, "publication modified");
        }

        let updated = self
            .publication_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::PublicationNotFound)
                    .attach_printable(format!("id: {id} vanished during update"))
            })?;
        let mut resolved = attach_writers(self, &mut connection, vec![updated]).await?;
        resolved.pop().ok_or_else(|| Report::new(KernelError::Internal))
    }
}

impl<T> UpdatePublicationService for T where
    T: DependOnPublicationQuery + DependOnPublicationModifier + DependOnWriterQuery
{
}
