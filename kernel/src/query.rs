mod publication;
mod writer;

pub use self::{publication::*, writer::*};
