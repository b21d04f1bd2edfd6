use foodservice_shared::{Error, Result, inventory::InventoryItem};
use foodservice_store::Store;
use serde::Serialize;

use crate::is_low_stock;

pub const DEFAULT_REORDER_QUANTITY: f64 = 20.0;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ReorderSuggestion {
    pub item_id: String,
    pub quantity: f64,
    pub estimated_cost: f64,
}

/// Order proposal for a low-stock item; `None` when stock is sufficient.
pub fn reorder_suggestion(item: &InventoryItem, quantity: f64) -> Option<ReorderSuggestion> {
    if !is_low_stock(item) {
        return None;
    }

    Some(ReorderSuggestion {
        item_id: item.id.to_owned(),
        quantity,
        estimated_cost: quantity * item.cost,
    })
}

/// Places an order by adding `quantity` to the item's stock.
#[tracing::instrument(skip(store))]
pub fn restock(store: &mut Store, item_id: &str, quantity: f64) -> Result<InventoryItem> {
    let mut item = store
        .inventory_item(item_id)
        .cloned()
        .ok_or_else(|| Error::not_found("inventory item", item_id))?;

    item.quantity += quantity;
    store.update_inventory_item(item.clone())?;

    tracing::info!(quantity = item.quantity, "Inventory item restocked");

    Ok(item)
}
