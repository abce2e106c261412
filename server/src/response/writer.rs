use async_graphql::{SimpleObject, ID};

use application::transfer::WriterDto;

use crate::controller::Exhaust;

#[derive(Debug, SimpleObject)]
#[graphql(name = "Writer")]
pub struct WriterObject {
    id: ID,
    full_name: String,
    country: Option<String>,
    year_of_birth: Option<i32>,
}

impl From<WriterDto> for WriterObject {
    fn from(value: WriterDto) -> Self {
        Self {
            id: ID(value.id),
            full_name: value.full_name,
            country: value.country,
            year_of_birth: value.year_of_birth,
        }
    }
}

pub struct WriterPresenter;

impl Exhaust<Vec<WriterDto>> for WriterPresenter {
    type To = Vec<WriterObject>;
    fn emit(&self, input: Vec<WriterDto>) -> Self::To {
        input.into_iter().map(WriterObject::from).collect()
    }
}
