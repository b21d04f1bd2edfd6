use chrono::NaiveDate;
use foodservice_inventory::alert_count;
use foodservice_store::Store;
use serde::Serialize;

use crate::{NutritionMetric, metric_compliance, total_meals_served};

#[derive(Serialize, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_patients: usize,
    pub meals_served: usize,
    /// Calorie compliance over the whole nutrition series; `None` when the
    /// series has no calorie target.
    pub dietary_compliance: Option<u32>,
    pub inventory_alerts: usize,
}

pub fn dashboard_stats(store: &Store, reference: NaiveDate) -> DashboardStats {
    DashboardStats {
        total_patients: store.patients().len(),
        meals_served: total_meals_served(store.meal_plans()),
        dietary_compliance: metric_compliance(
            store.nutrition_series(),
            NutritionMetric::Calories,
        )
        .ok(),
        inventory_alerts: alert_count(store.inventory_items(), reference),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let reference = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();

        assert_eq!(
            dashboard_stats(&Store::new(), reference),
            DashboardStats::default()
        );
    }
}
