mod hint;
mod publication;
mod seed;
mod writer;

pub use self::{hint::*, publication::*, seed::*, writer::*};
