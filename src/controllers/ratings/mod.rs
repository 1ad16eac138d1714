pub mod ratings;

pub use self::ratings::*;
