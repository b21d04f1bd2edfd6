mod classify;
mod reorder;

pub use classify::*;
pub use reorder::*;
