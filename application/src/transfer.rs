mod publication;
mod seed;
mod writer;

pub use self::{publication::*, seed::*, writer::*};
