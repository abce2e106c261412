mod category;
mod publication;
mod writer;

pub use self::{category::*, publication::*, writer::*};
