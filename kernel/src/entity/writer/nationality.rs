use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct WriterNationality(String);

impl WriterNationality {
    pub fn new(nationality: impl Into<String>) -> Self {
        Self(nationality.into())
    }
}
