mod publication;

pub use self::publication::*;
