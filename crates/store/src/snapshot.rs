use foodservice_shared::{
    NutritionPeriod, inventory::InventoryItem, mealplan::Meal, mealplan::MealPlan,
    patient::Patient,
};
use serde::{Deserialize, Serialize};

/// Initial collections handed over by the seed data provider.
///
/// Taken as-is; nothing is validated when a store is built from it.
#[derive(Serialize, Deserialize, Default, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub patients: Vec<Patient>,
    pub meals: Vec<Meal>,
    pub meal_plans: Vec<MealPlan>,
    pub inventory_items: Vec<InventoryItem>,
    pub nutrition_series: Vec<NutritionPeriod>,
}
