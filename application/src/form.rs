//! Field-level checks run before anything is submitted to the catalog.
//!
//! The same rules back the create and edit forms and gate the mutations of the
//! API, so a rejected form never reaches the database.

use std::collections::BTreeMap;
use std::fmt::Display;

use kernel::prelude::entity::{Category, Isbn, ReleaseYear};

use crate::transfer::{CreatePublicationDto, UpdatePublicationDto};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub enum FormField {
    Title,
    WriterId,
    Category,
    ReleaseYear,
    Identifier,
}

impl FormField {
    /// Name of the field as clients submit it.
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Title => "bookTitle",
            FormField::WriterId => "writerId",
            FormField::Category => "category",
            FormField::ReleaseYear => "releaseYear",
            FormField::Identifier => "identifier",
        }
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct FormErrors(BTreeMap<FormField, String>);

impl FormErrors {
    fn check<T>(&mut self, field: FormField, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(message) => {
                self.0.insert(field, message);
                None
            }
        }
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {message}", field.name())?;
            first = false;
        }
        Ok(())
    }
}

pub fn check_title(title: &str) -> Result<String, String> {
    if title.trim().is_empty() {
        return Err("Publication title cannot be empty.".to_string());
    }
    Ok(title.to_string())
}

pub fn check_writer(writer_id: &str) -> Result<String, String> {
    if writer_id.is_empty() {
        return Err("Please select a writer from the list.".to_string());
    }
    Ok(writer_id.to_string())
}

pub fn check_category(category: &str) -> Result<String, String> {
    if category.is_empty() {
        return Err("Literary category must be specified.".to_string());
    }
    if !Category::new(category).is_available() {
        return Err(format!("\"{category}\" is not a known literary category."));
    }
    Ok(category.to_string())
}

pub fn check_release_year(year: i32, latest: i32) -> Result<i32, String> {
    if !ReleaseYear::new(year).is_within(latest) {
        return Err(format!(
            "Release year must be between {} and {latest}.",
            ReleaseYear::EARLIEST
        ));
    }
    Ok(year)
}

fn parse_release_year(raw: &str, latest: i32) -> Result<i32, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Release year is mandatory.".to_string());
    }
    let year = raw.parse::<i32>().map_err(|_| {
        format!(
            "Release year must be between {} and {latest}.",
            ReleaseYear::EARLIEST
        )
    })?;
    check_release_year(year, latest)
}

/// Returns the identifier without separators.
pub fn check_identifier(identifier: &str) -> Result<String, String> {
    if identifier.trim().is_empty() {
        return Err("Publication identifier is required.".to_string());
    }
    let isbn = Isbn::canonicalize(identifier);
    if !isbn.is_well_formed() {
        return Err(
            "Identifier must contain exactly 13 digits (formatting characters will be removed)."
                .to_string(),
        );
    }
    Ok(isbn.into())
}

/// Registration form, with every field as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct PublicationForm {
    pub title: String,
    pub writer_id: String,
    pub category: String,
    pub release_year: String,
    pub identifier: String,
}

impl PublicationForm {
    pub fn validate(&self) -> Result<CreatePublicationDto, FormErrors> {
        self.validate_until(ReleaseYear::latest())
    }

    pub fn validate_until(&self, latest: i32) -> Result<CreatePublicationDto, FormErrors> {
        let mut errors = FormErrors::default();
        let title = errors.check(FormField::Title, check_title(&self.title));
        let writer_id = errors.check(FormField::WriterId, check_writer(&self.writer_id));
        let category = errors.check(FormField::Category, check_category(&self.category));
        let release_year = errors.check(
            FormField::ReleaseYear,
            parse_release_year(&self.release_year, latest),
        );
        let identifier = errors.check(FormField::Identifier, check_identifier(&self.identifier));

        match (title, writer_id, category, release_year, identifier) {
            (Some(title), Some(writer_id), Some(category), Some(release_year), Some(identifier))
                if errors.is_empty() =>
            {
                Ok(CreatePublicationDto {
                    title,
                    writer_id,
                    category,
                    release_year,
                    identifier,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Edit form: only the supplied fields are checked.
#[derive(Debug, Clone, Default)]
pub struct PublicationPatchForm {
    pub id: String,
    pub title: Option<String>,
    pub writer_id: Option<String>,
    pub category: Option<String>,
    pub release_year: Option<i32>,
    pub identifier: Option<String>,
}

impl PublicationPatchForm {
    pub fn validate(&self) -> Result<UpdatePublicationDto, FormErrors> {
        self.validate_until(ReleaseYear::latest())
    }

    pub fn validate_until(&self, latest: i32) -> Result<UpdatePublicationDto, FormErrors> {
        let mut errors = FormErrors::default();
        let title = self
            .title
            .as_deref()
            .and_then(|title| errors.check(FormField::Title, check_title(title)));
        let writer_id = self
            .writer_id
            .as_deref()
            .and_then(|writer_id| errors.check(FormField::WriterId, check_writer(writer_id)));
        let category = self
            .category
            .as_deref()
            .and_then(|category| errors.check(FormField::Category, check_category(category)));
        let release_year = self.release_year.and_then(|year| {
            errors.check(FormField::ReleaseYear, check_release_year(year, latest))
        });
        let identifier = self.identifier.as_deref().and_then(|identifier| {
            errors.check(FormField::Identifier, check_identifier(identifier))
        });

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(UpdatePublicationDto {
            id: self.id.clone(),
            title,
            writer_id,
            category,
            release_year,
            identifier,
        })
    }
}

#[cfg(test)]
mod test {
    use super::{FormField, PublicationForm, PublicationPatchForm};

    fn dune() -> PublicationForm {
        PublicationForm {
            title: "Dune".to_string(),
            writer_id: "65a1f0c2e4b0a1b2c3d4e5f6".to_string(),
            category: "Sci-Fi".to_string(),
            release_year: "1965".to_string(),
            identifier: "978-0-441-01359-3".to_string(),
        }
    }

    #[test]
    fn valid_form_yields_canonical_identifier() {
        let dto = dune().validate_until(2024).expect("form is valid");
        assert_eq!(dto.identifier, "9780441013593");
        assert_eq!(dto.release_year, 1965);
    }

    #[test]
    fn future_release_year_is_rejected() {
        let mut form = dune();
        form.release_year = "3000".to_string();
        let errors = form.validate_until(2024).unwrap_err();
        assert_eq!(
            errors.get(FormField::ReleaseYear),
            Some("Release year must be between 1000 and 2024.")
        );
        assert_eq!(errors.iter().count(), 1);
    }

    #[test]
    fn every_failing_field_is_reported() {
        let form = PublicationForm {
            title: "   ".to_string(),
            writer_id: String::new(),
            category: String::new(),
            release_year: String::new(),
            identifier: "12-34".to_string(),
        };
        let errors = form.validate_until(2024).unwrap_err();
        assert_eq!(
            errors.get(FormField::Title),
            Some("Publication title cannot be empty.")
        );
        assert_eq!(
            errors.get(FormField::WriterId),
            Some("Please select a writer from the list.")
        );
        assert_eq!(
            errors.get(FormField::Category),
            Some("Literary category must be specified.")
        );
        assert_eq!(
            errors.get(FormField::ReleaseYear),
            Some("Release year is mandatory.")
        );
        assert_eq!(
            errors.get(FormField::Identifier),
            Some("Identifier must contain exactly 13 digits (formatting characters will be removed).")
        );
    }

    #[test]
    fn non_numeric_year_is_out_of_range() {
        let mut form = dune();
        form.release_year = "nineteen".to_string();
        let errors = form.validate_until(2024).unwrap_err();
        assert!(errors.get(FormField::ReleaseYear).is_some());
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut form = dune();
        form.category = "Cookbooks".to_string();
        let errors = form.validate_until(2024).unwrap_err();
        assert!(errors.get(FormField::Category).is_some());
    }

    #[test]
    fn patch_checks_only_supplied_fields() {
        let patch = PublicationPatchForm {
            id: "65a1f0c2e4b0a1b2c3d4e5f6".to_string(),
            category: Some("Horror".to_string()),
            ..Default::default()
        };
        let dto = patch.validate_until(2024).expect("patch is valid");
        assert_eq!(dto.category.as_deref(), Some("Horror"));
        assert!(dto.title.is_none());
        assert!(dto.identifier.is_none());

        let patch = PublicationPatchForm {
            identifier: Some("978 0 441 01359 3".to_string()),
            release_year: Some(999),
            ..Default::default()
        };
        let errors = patch.validate_until(2024).unwrap_err();
        assert!(errors.get(FormField::ReleaseYear).is_some());
        assert!(errors.get(FormField::Identifier).is_none());
    }
}
