use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct WriterName(String);

impl WriterName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}
