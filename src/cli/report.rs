use foodservice_report::{
    NutritionMetric, dietary_restriction_distribution, inventory_valuation, metric_compliance,
    total_meals_served,
};
use foodservice_store::Store;
use strum::VariantArray;

pub fn report(store: &Store) -> anyhow::Result<()> {
    println!("Meals served:        {}", total_meals_served(store.meal_plans()));
    println!(
        "Inventory valuation: ${:.2}",
        inventory_valuation(store.inventory_items())
    );

    println!();
    println!("Dietary restrictions");
    for share in dietary_restriction_distribution(store.patients()) {
        println!(
            "  {:<18} {:>3} patients {:>4}%",
            share.restriction, share.count, share.percentage
        );
    }

    println!();
    println!("Nutrition compliance");
    for metric in NutritionMetric::VARIANTS {
        match metric_compliance(store.nutrition_series(), *metric) {
            Ok(pct) => println!("  {:<10} {pct}%", metric.as_ref()),
            Err(e) => {
                tracing::warn!(%metric, error = %e, "Compliance unavailable");
                println!("  {:<10} n/a", metric.as_ref());
            }
        }
    }

    Ok(())
}
