use foodservice_shared::{inventory::InventoryItem, mealplan::MealPlan, patient::Patient};
use serde::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RestrictionShare {
    pub restriction: String,
    pub count: usize,
    /// Rounded half away from zero.
    pub percentage: u32,
}

/// Patients per dietary restriction, in the order restrictions first appear.
pub fn dietary_restriction_distribution(patients: &[Patient]) -> Vec<RestrictionShare> {
    let mut restrictions: Vec<&str> = Vec::new();
    for restriction in patients.iter().flat_map(|p| &p.dietary_restrictions) {
        if !restrictions.contains(&restriction.as_str()) {
            restrictions.push(restriction);
        }
    }

    let total = patients.len();

    restrictions
        .into_iter()
        .map(|restriction| {
            let count = patients
                .iter()
                .filter(|p| p.has_restriction(restriction))
                .count();

            RestrictionShare {
                restriction: restriction.to_owned(),
                count,
                percentage: (100.0 * count as f64 / total as f64).round() as u32,
            }
        })
        .collect()
}

/// One per filled breakfast, lunch and dinner slot, plus every snack.
pub fn total_meals_served(plans: &[MealPlan]) -> usize {
    plans.iter().map(|plan| plan.meals.count()).sum()
}

pub fn inventory_valuation(items: &[InventoryItem]) -> f64 {
    items.iter().map(|item| item.quantity * item.cost).sum()
}
