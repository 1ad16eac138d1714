pub mod photos;

pub use self::photos::*;
