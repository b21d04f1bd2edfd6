mod dashboard;
mod inventory;
mod plan;
mod report;

pub use dashboard::dashboard;
pub use inventory::inventory;
pub use plan::{assign, plan};
pub use report::report;
