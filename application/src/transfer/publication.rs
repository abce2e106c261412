use kernel::prelude::entity::{DestructPublication, Publication, Writer};

use crate::transfer::WriterDto;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PublicationDto {
    pub id: String,
    pub title: String,
    /// `None` when the referenced writer no longer exists.
    pub writer: Option<WriterDto>,
    pub category: String,
    pub release_year: i32,
    pub identifier: String,
}

impl PublicationDto {
    pub fn new(publication: Publication, writer: Option<Writer>) -> Self {
        let DestructPublication {
            id,
            title,
            category,
            release_year,
            identifier,
            ..
        } = publication.into_destruct();
        Self {
            id: id.to_string(),
            title: title.into(),
            writer: writer.map(WriterDto::from),
            category: category.into(),
            release_year: release_year.into(),
            identifier: identifier.into(),
        }
    }
}

#[derive(Debug)]
pub struct GetPublicationDto {
    pub id: String,
}

#[derive(Debug)]
pub struct GetPublicationsByCategoryDto {
    pub category: String,
}

#[derive(Debug, Clone)]
pub struct CreatePublicationDto {
    pub title: String,
    pub writer_id: String,
    pub category: String,
    pub release_year: i32,
    pub identifier: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePublicationDto {
    pub id: String,
    pub title: Option<String>,
    pub writer_id: Option<String>,
    pub category: Option<String>,
    pub release_year: Option<i32>,
    pub identifier: Option<String>,
}
