use chrono::NaiveDate;
use foodservice::{
    Config,
    query::{CategoryFilter, Direction, InventoryField, InventoryQuery, categories},
};
use foodservice_inventory::{days_until_expiration, reorder_suggestion, status, summarize};
use foodservice_store::Store;

pub fn inventory(
    store: &Store,
    config: &Config,
    today: NaiveDate,
    search: Option<String>,
    category: Option<String>,
    sort: InventoryField,
    desc: bool,
) -> anyhow::Result<()> {
    let items = store.inventory_items();

    let category: CategoryFilter = match category {
        Some(c) => c.parse()?,
        None => CategoryFilter::All,
    };
    if !categories(items).contains(&category) {
        tracing::warn!(%category, "Unknown category, no rows will match");
    }

    let query = InventoryQuery {
        search: search.unwrap_or_default(),
        category,
        sort,
        direction: if desc { Direction::Desc } else { Direction::Asc },
    };

    println!(
        "{:<20} {:<10} {:>10} {:<10} {:<12} {:>5} {:<14}",
        "Name", "Category", "Quantity", "Unit", "Expires", "Days", "Status"
    );

    for item in query.apply(items) {
        println!(
            "{:<20} {:<10} {:>10.2} {:<10} {:<12} {:>5} {:<14}",
            item.name,
            item.category,
            item.quantity,
            item.unit,
            item.expiration_date,
            days_until_expiration(item, today),
            status(item, today),
        );

        if let Some(suggestion) = reorder_suggestion(item, config.inventory.reorder_quantity) {
            println!(
                "  reorder {} {} (est. ${:.2})",
                suggestion.quantity, item.unit, suggestion.estimated_cost
            );
        }
    }

    let summary = summarize(items, today);
    println!();
    println!(
        "Expired: {}  Expiring soon: {}  Low stock: {}",
        summary.expired, summary.expiring_soon, summary.low_stock
    );

    Ok(())
}
