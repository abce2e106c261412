use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln)]
pub struct WriterBirthYear(i32);

impl WriterBirthYear {
    pub fn new(year: impl Into<i32>) -> Self {
        Self(year.into())
    }
}
