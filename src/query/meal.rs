use foodservice_shared::mealplan::{Meal, MealSlot};

use super::filter_by;

/// Catalog entries offered for a planner slot.
pub fn meals_by_type(catalog: &[Meal], slot: MealSlot) -> Vec<&Meal> {
    filter_by(catalog, |meal| meal.kind == slot)
}
