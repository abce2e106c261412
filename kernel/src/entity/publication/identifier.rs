use vodca::{AsRefln, Fromln};

pub const ISBN_LENGTH: usize = 13;

/// ISBN-13 stored without separators.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct Isbn(String);

impl Isbn {
    pub fn new(isbn: impl Into<String>) -> Self {
        Self(isbn.into())
    }

    /// Drops hyphens and whitespace. Does not check the length.
    pub fn canonicalize(raw: &str) -> Self {
        Self(
            raw.chars()
                .filter(|c| *c != '-' && !c.is_whitespace())
                .collect(),
        )
    }

    pub fn is_well_formed(&self) -> bool {
        self.0.len() == ISBN_LENGTH && self.0.bytes().all(|b| b.is_ascii_digit())
    }
}
