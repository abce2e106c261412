use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct PublicationTitle(String);

impl PublicationTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }
}
