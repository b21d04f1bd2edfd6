use chrono::NaiveDate;
use foodservice_mealplan::{Week, assign_meal_named, daily_progress, week_plans};
use foodservice_shared::{
    Error,
    mealplan::{MealPlan, MealSlot},
};
use foodservice_store::Store;
use strum::VariantArray;

pub fn plan(store: &mut Store, patient_id: &str, day: NaiveDate) -> anyhow::Result<()> {
    store.select_patient(Some(patient_id))?;
    let store = &*store;
    let Some(patient) = store.focused_patient() else {
        anyhow::bail!("no patient to show");
    };

    let week = Week::containing(day);
    println!(
        "{} (room {}) week {} to {}",
        patient.name, patient.room, week.start, week.end
    );
    if !patient.dietary_restrictions.is_empty() {
        println!("  Restrictions: {}", patient.dietary_restrictions.join(", "));
    }
    if !patient.allergies.is_empty() {
        println!("  Allergies:    {}", patient.allergies.join(", "));
    }

    for cell in week_plans(store, &patient.id, week) {
        println!();
        println!("{}", cell.date.format("%a %Y-%m-%d"));

        let Some(plan) = cell.plan else {
            println!("  no meals planned");
            continue;
        };

        print_slots(plan);

        let progress = daily_progress(plan, &patient.nutritional_requirements);
        let pct = |v: Option<u32>| v.map_or_else(|| "n/a".to_owned(), |v| format!("{v}%"));
        println!(
            "  Totals: {} kcal ({}), protein {}g ({}), carbs {}g ({}), fat {}g ({})",
            plan.nutrition_totals.calories,
            pct(progress.calories),
            plan.nutrition_totals.protein,
            pct(progress.protein),
            plan.nutrition_totals.carbs,
            pct(progress.carbs),
            plan.nutrition_totals.fat,
            pct(progress.fat),
        );
    }

    Ok(())
}

pub fn assign(
    store: &mut Store,
    patient_id: &str,
    date: NaiveDate,
    slot: &str,
    meal_id: &str,
    json: bool,
) -> anyhow::Result<()> {
    let meal = store
        .meal(meal_id)
        .cloned()
        .ok_or_else(|| Error::not_found("meal", meal_id))?;

    let plan = assign_meal_named(store, patient_id, date, slot, meal)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("Plan {} for patient {} on {}", plan.id, plan.patient_id, plan.date);
    print_slots(&plan);
    println!(
        "  Totals: {} kcal, protein {}g, carbs {}g, fat {}g",
        plan.nutrition_totals.calories,
        plan.nutrition_totals.protein,
        plan.nutrition_totals.carbs,
        plan.nutrition_totals.fat,
    );

    Ok(())
}

fn print_slots(plan: &MealPlan) {
    for slot in MealSlot::VARIANTS {
        let name = plan
            .meals
            .meal_in(*slot)
            .map_or("-", |meal| meal.name.as_str());
        println!("  {:<10} {}", slot.as_ref(), name);
    }
}
