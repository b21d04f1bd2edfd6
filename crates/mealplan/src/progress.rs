use foodservice_shared::{Nutrition, mealplan::MealPlan};
use serde::Serialize;

/// Percent of each daily target covered by a plan, `None` where the target is 0.
#[derive(Serialize, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct NutritionProgress {
    pub calories: Option<u32>,
    pub protein: Option<u32>,
    pub carbs: Option<u32>,
    pub fat: Option<u32>,
}

pub fn daily_progress(plan: &MealPlan, requirements: &Nutrition) -> NutritionProgress {
    let totals = &plan.nutrition_totals;

    NutritionProgress {
        calories: percent(totals.calories, requirements.calories),
        protein: percent(totals.protein, requirements.protein),
        carbs: percent(totals.carbs, requirements.carbs),
        fat: percent(totals.fat, requirements.fat),
    }
}

fn percent(actual: u32, target: u32) -> Option<u32> {
    if target == 0 {
        return None;
    }

    Some((100.0 * f64::from(actual) / f64::from(target)).round() as u32)
}
