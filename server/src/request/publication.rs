use application::form::{FormErrors, PublicationForm, PublicationPatchForm};
use application::transfer::{
    CreatePublicationDto, GetPublicationDto, GetPublicationsByCategoryDto, UpdatePublicationDto,
};

use crate::controller::{Intake, TryIntake};

#[derive(Debug)]
pub struct GetPublicationRequest {
    id: String,
}

impl GetPublicationRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[derive(Debug)]
pub struct GetPublicationsByCategoryRequest {
    category: String,
}

impl GetPublicationsByCategoryRequest {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }
}

#[derive(Debug)]
pub struct CreatePublicationRequest {
    pub book_title: String,
    pub writer_id: String,
    pub category: String,
    pub release_year: i32,
    pub identifier: String,
}

#[derive(Debug, Default)]
pub struct ModifyPublicationRequest {
    pub id: String,
    pub book_title: Option<String>,
    pub writer_id: Option<String>,
    pub category: Option<String>,
    pub release_year: Option<i32>,
    pub identifier: Option<String>,
}

pub struct PublicationTransformer;

impl Intake<GetPublicationRequest> for PublicationTransformer {
    type To = GetPublicationDto;
    fn emit(&self, input: GetPublicationRequest) -> Self::To {
        GetPublicationDto { id: input.id }
    }
}

impl Intake<GetPublicationsByCategoryRequest> for PublicationTransformer {
    type To = GetPublicationsByCategoryDto;
    fn emit(&self, input: GetPublicationsByCategoryRequest) -> Self::To {
        GetPublicationsByCategoryDto {
            category: input.category,
        }
    }
}

impl TryIntake<CreatePublicationRequest> for PublicationTransformer {
    type To = CreatePublicationDto;
    type Error = FormErrors;
    fn emit(&self, input: CreatePublicationRequest) -> Result<Self::To, Self::Error> {
        PublicationForm {
            title: input.book_title,
            writer_id: input.writer_id,
            category: input.category,
            release_year: input.release_year.to_string(),
            identifier: input.identifier,
        }
        .validate()
    }
}

impl TryIntake<ModifyPublicationRequest> for PublicationTransformer {
    type To = UpdatePublicationDto;
    type Error = FormErrors;
    fn emit(&self, input: ModifyPublicationRequest) -> Result<Self::To, Self::Error> {
        PublicationPatchForm {
            id: input.id,
            title: input.book_title,
            writer_id: input.writer_id,
            category: input.category,
            release_year: input.release_year,
            identifier: input.identifier,
        }
        .validate()
    }
}

#[cfg(test)]
mod test {
    use application::form::FormField;

    use super::{CreatePublicationRequest, ModifyPublicationRequest, PublicationTransformer};
    use crate::controller::TryIntake;

    #[test]
    fn create_request_is_canonicalized() {
        let dto = PublicationTransformer
            .emit(CreatePublicationRequest {
                book_title: "Dune".to_string(),
                writer_id: "65a1f0c2e4b0a1b2c3d4e5f6".to_string(),
                category: "Sci-Fi".to_string(),
                release_year: 1965,
                identifier: "978-0-441-01359-3".to_string(),
            })
            .expect("request is valid");
        assert_eq!(dto.identifier, "9780441013593");
    }

    #[test]
    fn future_year_never_reaches_service() {
        let errors = PublicationTransformer
            .emit(CreatePublicationRequest {
                book_title: "Dune".to_string(),
                writer_id: "65a1f0c2e4b0a1b2c3d4e5f6".to_string(),
                category: "Sci-Fi".to_string(),
                release_year: 3000,
                identifier: "9780441013593".to_string(),
            })
            .expect_err("year is out of range");
        assert!(errors
            .get(FormField::ReleaseYear)
            .is_some_and(|message| message.starts_with("Release year must be between 1000 and")));
    }

    #[test]
    fn modify_request_without_fields_is_accepted() {
        let dto = PublicationTransformer
            .emit(ModifyPublicationRequest {
                id: "65a1f0c2e4b0a1b2c3d4e5f6".to_string(),
                ..Default::default()
            })
            .expect("nothing to reject");
        assert!(dto.title.is_none() && dto.identifier.is_none());
    }
}
