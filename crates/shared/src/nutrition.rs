use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Macro-nutrient amounts: kcal for calories, grams for the rest.
///
/// Used both for a meal's macros and for a patient's daily targets. Addition
/// is exact integer arithmetic so a plan's cached totals can be compared with
/// a fresh recomputation; it fails instead of wrapping.
#[derive(Serialize, Deserialize, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Nutrition {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

impl Nutrition {
    pub const fn new(calories: u32, protein: u32, carbs: u32, fat: u32) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(Self {
            calories: self.calories.checked_add(rhs.calories)?,
            protein: self.protein.checked_add(rhs.protein)?,
            carbs: self.carbs.checked_add(rhs.carbs)?,
            fat: self.fat.checked_add(rhs.fat)?,
        })
    }

    /// Component-wise sum; [`Error::NutritionOverflow`] if any component
    /// exceeds `u32::MAX`.
    pub fn checked_sum(values: impl IntoIterator<Item = Nutrition>) -> Result<Self> {
        values
            .into_iter()
            .try_fold(Nutrition::default(), Nutrition::checked_add)
            .ok_or(Error::NutritionOverflow)
    }
}

/// One reporting period of the nutrition compliance series.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionPeriod {
    pub period: String,
    pub calorie_target: u32,
    pub calorie_actual: u32,
    pub protein_target: u32,
    pub protein_actual: u32,
    pub carbs_target: u32,
    pub carbs_actual: u32,
    pub fat_target: u32,
    pub fat_actual: u32,
}

impl NutritionPeriod {
    pub fn target(&self) -> Nutrition {
        Nutrition::new(
            self.calorie_target,
            self.protein_target,
            self.carbs_target,
            self.fat_target,
        )
    }

    pub fn actual(&self) -> Nutrition {
        Nutrition::new(
            self.calorie_actual,
            self.protein_actual,
            self.carbs_actual,
            self.fat_actual,
        )
    }
}
