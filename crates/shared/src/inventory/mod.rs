use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stock row. Expired, expiring-soon and low-stock states are derived by the
/// inventory crate against a reference date and never stored here.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub expiration_date: NaiveDate,
    pub location: String,
    pub minimum_stock: f64,
    /// Unit price.
    pub cost: f64,
}
