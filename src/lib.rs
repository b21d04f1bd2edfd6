pub mod config;
pub mod observability;
pub mod query;
pub mod seed;

pub use config::Config;
