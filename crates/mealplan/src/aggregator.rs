use chrono::NaiveDate;
use foodservice_shared::{
    Error, Nutrition, Result,
    mealplan::{Meal, MealPlan, MealSlot, PlanMeals},
};
use foodservice_store::Store;
use ulid::Ulid;

/// Assigns `meal` to `slot` of the patient's plan for `date` and commits the
/// result to the store.
///
/// - An existing plan for `(patient_id, date)` is updated in place:
///   breakfast, lunch and dinner replace whatever was there, and a snack
///   replaces the whole snack list with `[meal]`, so a plan only ever keeps
///   the most recently assigned snack.
/// - Otherwise a new plan with a fresh id is created holding only that slot.
///
/// Totals are recomputed from the slots every time. Fails with
/// [`Error::NotFound`] when the patient is unknown and with
/// [`Error::NutritionOverflow`] when the totals no longer fit, leaving the
/// store untouched.
#[tracing::instrument(skip(store, meal), fields(meal.id = %meal.id))]
pub fn assign_meal(
    store: &mut Store,
    patient_id: &str,
    date: NaiveDate,
    slot: MealSlot,
    meal: Meal,
) -> Result<MealPlan> {
    if store.patient(patient_id).is_none() {
        return Err(Error::not_found("patient", patient_id));
    }

    let plan = match store.meal_plan_for(patient_id, date).cloned() {
        Some(mut plan) => {
            place(&mut plan.meals, slot, meal);
            plan.nutrition_totals = recompute_totals(&plan.meals)?;
            store.update_meal_plan(plan.clone())?;

            tracing::info!(meal_plan.id = %plan.id, "Meal slot replaced");
            plan
        }
        None => {
            let mut meals = PlanMeals::default();
            place(&mut meals, slot, meal);

            let plan = MealPlan {
                id: Ulid::new().to_string(),
                patient_id: patient_id.to_owned(),
                date,
                nutrition_totals: recompute_totals(&meals)?,
                meals,
            };
            store.add_meal_plan(plan.clone())?;

            tracing::info!(meal_plan.id = %plan.id, "Meal plan created");
            plan
        }
    };

    debug_assert!(plan_is_consistent(&plan));

    Ok(plan)
}

/// String-typed variant of [`assign_meal`] for form and CLI input.
pub fn assign_meal_named(
    store: &mut Store,
    patient_id: &str,
    date: NaiveDate,
    slot: &str,
    meal: Meal,
) -> Result<MealPlan> {
    let slot = MealSlot::parse(slot)?;
    assign_meal(store, patient_id, date, slot, meal)
}

fn place(meals: &mut PlanMeals, slot: MealSlot, meal: Meal) {
    match slot {
        MealSlot::Breakfast => meals.breakfast = Some(meal),
        MealSlot::Lunch => meals.lunch = Some(meal),
        MealSlot::Dinner => meals.dinner = Some(meal),
        MealSlot::Snack => meals.snacks = vec![meal],
    }
}

/// Fails with [`Error::NutritionOverflow`] when a component exceeds `u32::MAX`.
pub fn recompute_totals(meals: &PlanMeals) -> Result<Nutrition> {
    meals.totals()
}

/// Whether the cached totals still match the slots.
pub fn plan_is_consistent(plan: &MealPlan) -> bool {
    recompute_totals(&plan.meals).is_ok_and(|totals| totals == plan.nutrition_totals)
}

pub fn plans_for_patient<'a>(store: &'a Store, patient_id: &str) -> Vec<&'a MealPlan> {
    store
        .meal_plans()
        .iter()
        .filter(|mp| mp.patient_id == patient_id)
        .collect()
}
