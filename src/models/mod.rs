pub mod grouped;
pub mod options;
pub mod ratings;
pub mod stats;

pub use self::grouped::*;
pub use self::options::*;
pub use self::ratings::*;
pub use self::stats::*;
