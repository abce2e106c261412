mod birth_year;
mod id;
mod name;
mod nationality;

pub use self::{birth_year::*, id::*, name::*, nationality::*};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Writer {
    id: WriterId,
    name: WriterName,
    nationality: Option<WriterNationality>,
    birth_year: Option<WriterBirthYear>,
}

impl Writer {
    pub fn new(
        id: WriterId,
        name: WriterName,
        nationality: Option<WriterNationality>,
        birth_year: Option<WriterBirthYear>,
    ) -> Self {
        Self {
            id,
            name,
            nationality,
            birth_year,
        }
    }
}
