mod id;
mod identifier;
mod patch;
mod release_year;
mod title;

pub use self::{id::*, identifier::*, patch::*, release_year::*, title::*};
use crate::entity::{Category, WriterId};
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Publication {
    id: PublicationId,
    title: PublicationTitle,
    writer_id: WriterId,
    category: Category,
    release_year: ReleaseYear,
    identifier: Isbn,
}

impl Publication {
    pub fn new(
        id: PublicationId,
        title: PublicationTitle,
        writer_id: WriterId,
        category: Category,
        release_year: ReleaseYear,
        identifier: Isbn,
    ) -> Self {
        Self {
            id,
            title,
            writer_id,
            category,
            release_year,
            identifier,
        }
    }

    /// Overwrites the fields present in `patch`, leaving the others untouched.
    pub fn apply(&mut self, patch: PublicationPatch) {
        let DestructPublicationPatch {
            title,
            writer_id,
            category,
            release_year,
            identifier,
        } = patch.into_destruct();
        self.substitute(|publication| {
            if let Some(title) = title {
                *publication.title = title;
            }
            if let Some(writer_id) = writer_id {
                *publication.writer_id = writer_id;
            }
            if let Some(category) = category {
                *publication.category = category;
            }
            if let Some(release_year) = release_year {
                *publication.release_year = release_year;
            }
            if let Some(identifier) = identifier {
                *publication.identifier = identifier;
            }
        });
    }
}
