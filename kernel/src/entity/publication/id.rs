use std::fmt::Display;

use bson::oid::ObjectId;
use error_stack::{Report, ResultExt};
use vodca::{AsRefln, Fromln};

use crate::{ClientMessage, KernelError};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Fromln, AsRefln)]
pub struct PublicationId(ObjectId);

impl PublicationId {
    pub fn new(id: impl Into<ObjectId>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    pub fn parse(raw: &str) -> Result<Self, Report<KernelError>> {
        ObjectId::parse_str(raw)
            .map(Self)
            .change_context(KernelError::InvalidIdentifier)
            .attach_printable(ClientMessage::new("Publication identifier format is invalid"))
            .attach_printable_lazy(|| format!("identifier: {raw}"))
    }
}

impl Display for PublicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}
