mod compliance;
mod dashboard;
mod stat;

pub use compliance::*;
pub use dashboard::*;
pub use stat::*;
