use chrono::NaiveDate;
use foodservice_inventory::summarize;
use foodservice_report::dashboard_stats;
use foodservice_store::Store;

pub fn dashboard(store: &Store, today: NaiveDate) -> anyhow::Result<()> {
    let stats = dashboard_stats(store, today);
    let summary = summarize(store.inventory_items(), today);

    println!("Dashboard ({today})");
    println!("  Total patients:      {}", stats.total_patients);
    println!("  Meals served:        {}", stats.meals_served);
    match stats.dietary_compliance {
        Some(pct) => println!("  Dietary compliance:  {pct}%"),
        None => println!("  Dietary compliance:  n/a"),
    }
    println!("  Inventory alerts:    {}", stats.inventory_alerts);
    println!();
    println!(
        "  Expired: {}  Expiring soon: {}  Low stock: {}",
        summary.expired, summary.expiring_soon, summary.low_stock
    );

    Ok(())
}
