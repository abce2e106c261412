mod graphql;
mod seed;

pub use self::{graphql::*, seed::*};
