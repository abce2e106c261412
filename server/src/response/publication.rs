use async_graphql::{SimpleObject, ID};

use application::transfer::PublicationDto;

use crate::controller::Exhaust;
use crate::response::WriterObject;

#[derive(Debug, SimpleObject)]
#[graphql(name = "Publication")]
pub struct PublicationObject {
    id: ID,
    book_title: String,
    /// Null when the referenced writer was removed.
    writer: Option<WriterObject>,
    category: String,
    release_year: i32,
    identifier: String,
}

impl From<PublicationDto> for PublicationObject {
    fn from(value: PublicationDto) -> Self {
        Self {
            id: ID(value.id),
            book_title: value.title,
            writer: value.writer.map(WriterObject::from),
            category: value.category,
            release_year: value.release_year,
            identifier: value.identifier,
        }
    }
}

pub struct PublicationPresenter;

impl Exhaust<PublicationDto> for PublicationPresenter {
    type To = PublicationObject;
    fn emit(&self, input: PublicationDto) -> Self::To {
        PublicationObject::from(input)
    }
}

impl Exhaust<Option<PublicationDto>> for PublicationPresenter {
    type To = Option<PublicationObject>;
    fn emit(&self, input: Option<PublicationDto>) -> Self::To {
        input.map(PublicationObject::from)
    }
}

impl Exhaust<Vec<PublicationDto>> for PublicationPresenter {
    type To = Vec<PublicationObject>;
    fn emit(&self, input: Vec<PublicationDto>) -> Self::To {
        input.into_iter().map(PublicationObject::from).collect()
    }
}

pub struct CategoryPresenter;

impl Exhaust<Vec<String>> for CategoryPresenter {
    type To = Vec<String>;
    fn emit(&self, input: Vec<String>) -> Self::To {
        input
    }
}
