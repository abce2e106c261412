mod mongo;

pub use self::mongo::*;
