pub mod error;
pub mod ratings;

pub use self::error::*;
pub use self::ratings::*;
