use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::Nutrition;

#[derive(
    Serialize,
    Deserialize,
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    /// Parses a slot from its lowercase name.
    pub fn parse(name: &str) -> crate::Result<Self> {
        name.parse()
            .map_err(|_| crate::Error::InvalidSlot(name.to_owned()))
    }
}

/// Catalog entry. Plans hold meals by value.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: MealSlot,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub ingredients: Vec<String>,
    pub dietary_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Meal {
    pub fn nutrition(&self) -> Nutrition {
        Nutrition::new(self.calories, self.protein, self.carbs, self.fat)
    }
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct PlanMeals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<Meal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch: Option<Meal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dinner: Option<Meal>,
    #[serde(default)]
    pub snacks: Vec<Meal>,
}

impl PlanMeals {
    /// Meal shown for a slot; the first snack stands for the snack slot.
    pub fn meal_in(&self, slot: MealSlot) -> Option<&Meal> {
        match slot {
            MealSlot::Breakfast => self.breakfast.as_ref(),
            MealSlot::Lunch => self.lunch.as_ref(),
            MealSlot::Dinner => self.dinner.as_ref(),
            MealSlot::Snack => self.snacks.first(),
        }
    }

    /// All populated meals, breakfast to snacks.
    pub fn iter(&self) -> impl Iterator<Item = &Meal> {
        self.breakfast
            .iter()
            .chain(self.lunch.iter())
            .chain(self.dinner.iter())
            .chain(self.snacks.iter())
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Sum of the macros of every populated slot.
    pub fn totals(&self) -> crate::Result<Nutrition> {
        Nutrition::checked_sum(self.iter().map(Meal::nutrition))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub id: String,
    pub patient_id: String,
    pub date: NaiveDate,
    pub meals: PlanMeals,
    /// Cached sum of `meals`, rewritten whenever the plan is committed to a store.
    pub nutrition_totals: Nutrition,
}
