pub mod config;
pub mod photos;
pub mod ratings;
pub mod stats;

pub use self::config::config;
