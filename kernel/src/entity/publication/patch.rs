use destructure::Destructure;
use vodca::References;

use crate::entity::{Category, Isbn, PublicationTitle, ReleaseYear, WriterId};

/// Partial update: `None` means "leave unchanged".
#[derive(Debug, Clone, Default, Eq, PartialEq, References, Destructure)]
pub struct PublicationPatch {
    title: Option<PublicationTitle>,
    writer_id: Option<WriterId>,
    category: Option<Category>,
    release_year: Option<ReleaseYear>,
    identifier: Option<Isbn>,
}

impl PublicationPatch {
    pub fn new(
        title: Option<PublicationTitle>,
        writer_id: Option<WriterId>,
        category: Option<Category>,
        release_year: Option<ReleaseYear>,
        identifier: Option<Isbn>,
    ) -> Self {
        Self {
            title,
            writer_id,
            category,
            release_year,
            identifier,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.writer_id.is_none()
            && self.category.is_none()
            && self.release_year.is_none()
            && self.identifier.is_none()
    }
}
