mod date;
mod error;
pub mod inventory;
pub mod mealplan;
mod nutrition;
pub mod patient;

pub use date::*;
pub use error::*;
pub use nutrition::*;
