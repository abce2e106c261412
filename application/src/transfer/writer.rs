use kernel::prelude::entity::{DestructWriter, Writer};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct WriterDto {
    pub id: String,
    pub full_name: String,
    pub country: Option<String>,
    pub year_of_birth: Option<i32>,
}

impl From<Writer> for WriterDto {
    fn from(value: Writer) -> Self {
        let DestructWriter {
            id,
            name,
            nationality,
            birth_year,
        } = value.into_destruct();
        Self {
            id: id.to_string(),
            full_name: name.into(),
            country: nationality.map(Into::into),
            year_of_birth: birth_year.map(Into::into),
        }
    }
}
