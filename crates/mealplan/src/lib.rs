mod aggregator;
mod progress;
mod week;

pub use aggregator::*;
pub use progress::*;
pub use week::*;
