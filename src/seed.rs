//! Demo data the binary starts from.
//!
//! Meal plans sit on the first two days of `today`'s week and inventory
//! expirations are offsets from `today`, so the status view always has
//! something to show.

use chrono::{Days, NaiveDate};
use foodservice_mealplan::{recompute_totals, week_days, week_start};
use foodservice_shared::{
    Nutrition, NutritionPeriod, Result,
    inventory::InventoryItem,
    mealplan::{Meal, MealPlan, MealSlot, PlanMeals},
    patient::Patient,
};
use foodservice_store::Snapshot;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn patient(
    id: &str,
    name: &str,
    room: &str,
    restrictions: &[&str],
    allergies: &[&str],
    requirements: Nutrition,
) -> Patient {
    Patient {
        id: id.to_owned(),
        name: name.to_owned(),
        room: room.to_owned(),
        dietary_restrictions: strings(restrictions),
        allergies: strings(allergies),
        nutritional_requirements: requirements,
    }
}

pub fn patients() -> Vec<Patient> {
    vec![
        patient(
            "1",
            "John Smith",
            "101A",
            &["Gluten-Free", "Low Sodium"],
            &["Peanuts", "Shellfish"],
            Nutrition::new(2000, 75, 250, 65),
        ),
        patient(
            "2",
            "Mary Johnson",
            "102B",
            &["Diabetic", "Vegetarian"],
            &["Dairy"],
            Nutrition::new(1800, 65, 200, 60),
        ),
        patient(
            "3",
            "Robert Davis",
            "103C",
            &["Pureed", "Low Cholesterol"],
            &["Eggs", "Tree Nuts"],
            Nutrition::new(1600, 70, 180, 50),
        ),
        patient(
            "4",
            "Patricia Wilson",
            "104D",
            &["Kosher", "Low Carb"],
            &[],
            Nutrition::new(1900, 80, 150, 70),
        ),
        patient(
            "5",
            "James Brown",
            "105E",
            &["Renal Diet"],
            &["Soy"],
            Nutrition::new(2200, 60, 280, 75),
        ),
    ]
}

fn meal(
    id: &str,
    name: &str,
    kind: MealSlot,
    nutrition: Nutrition,
    ingredients: &[&str],
    tags: &[&str],
) -> Meal {
    Meal {
        id: id.to_owned(),
        name: name.to_owned(),
        kind,
        calories: nutrition.calories,
        protein: nutrition.protein,
        carbs: nutrition.carbs,
        fat: nutrition.fat,
        ingredients: strings(ingredients),
        dietary_tags: strings(tags),
        image: None,
    }
}

pub fn meals() -> Vec<Meal> {
    vec![
        meal(
            "1",
            "Scrambled Eggs with Toast",
            MealSlot::Breakfast,
            Nutrition::new(350, 15, 30, 20),
            &["Eggs", "Milk", "Butter", "Whole Wheat Bread"],
            &["High Protein"],
        ),
        meal(
            "2",
            "Oatmeal with Berries",
            MealSlot::Breakfast,
            Nutrition::new(280, 8, 45, 6),
            &["Oats", "Milk", "Mixed Berries", "Honey"],
            &["Heart Healthy", "High Fiber"],
        ),
        meal(
            "3",
            "Grilled Chicken Salad",
            MealSlot::Lunch,
            Nutrition::new(400, 35, 20, 15),
            &["Chicken Breast", "Mixed Greens", "Tomatoes", "Cucumber", "Olive Oil"],
            &["High Protein", "Low Carb"],
        ),
        meal(
            "4",
            "Vegetable Soup with Roll",
            MealSlot::Lunch,
            Nutrition::new(320, 10, 45, 8),
            &["Vegetable Broth", "Carrots", "Celery", "Onions", "Whole Grain Roll"],
            &["Vegetarian", "Low Fat"],
        ),
        meal(
            "5",
            "Baked Salmon with Roasted Vegetables",
            MealSlot::Dinner,
            Nutrition::new(450, 30, 25, 25),
            &["Salmon Fillet", "Broccoli", "Carrots", "Olive Oil", "Herbs"],
            &["Heart Healthy", "High Protein"],
        ),
        meal(
            "6",
            "Pasta Primavera",
            MealSlot::Dinner,
            Nutrition::new(380, 12, 60, 10),
            &["Whole Wheat Pasta", "Mixed Vegetables", "Olive Oil", "Parmesan"],
            &["Vegetarian"],
        ),
        meal(
            "7",
            "Greek Yogurt with Granola",
            MealSlot::Snack,
            Nutrition::new(200, 15, 25, 5),
            &["Greek Yogurt", "Granola", "Honey"],
            &["High Protein"],
        ),
        meal(
            "8",
            "Fresh Fruit Cup",
            MealSlot::Snack,
            Nutrition::new(120, 1, 30, 0),
            &["Apple", "Orange", "Grapes", "Melon"],
            &["Vegan", "Low Fat"],
        ),
    ]
}

fn plan(
    id: &str,
    patient_id: &str,
    date: NaiveDate,
    catalog: &[Meal],
    ids: [usize; 4],
) -> Result<MealPlan> {
    let [breakfast, lunch, dinner, snack] = ids.map(|i| catalog[i].clone());
    let meals = PlanMeals {
        breakfast: Some(breakfast),
        lunch: Some(lunch),
        dinner: Some(dinner),
        snacks: vec![snack],
    };

    Ok(MealPlan {
        id: id.to_owned(),
        patient_id: patient_id.to_owned(),
        date,
        nutrition_totals: recompute_totals(&meals)?,
        meals,
    })
}

pub fn meal_plans(today: NaiveDate, catalog: &[Meal]) -> Result<Vec<MealPlan>> {
    let days = week_days(week_start(today));

    Ok(vec![
        plan("mp1", "1", days[0], catalog, [0, 2, 4, 6])?,
        plan("mp2", "1", days[1], catalog, [1, 3, 5, 7])?,
        plan("mp3", "2", days[0], catalog, [1, 3, 5, 7])?,
    ])
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    name: &str,
    category: &str,
    quantity: f64,
    unit: &str,
    expiration_date: NaiveDate,
    location: &str,
    minimum_stock: f64,
    cost: f64,
) -> InventoryItem {
    InventoryItem {
        id: id.to_owned(),
        name: name.to_owned(),
        category: category.to_owned(),
        quantity,
        unit: unit.to_owned(),
        expiration_date,
        location: location.to_owned(),
        minimum_stock,
        cost,
    }
}

pub fn inventory_items(today: NaiveDate) -> Vec<InventoryItem> {
    let in_days = |days: u64| today + Days::new(days);

    vec![
        item("1", "Chicken Breast", "Protein", 25.0, "lbs", in_days(5), "Freezer 1", 20.0, 3.99),
        item("2", "Whole Wheat Bread", "Grains", 15.0, "loaves", in_days(3), "Pantry A", 10.0, 2.49),
        item("3", "Mixed Vegetables", "Produce", 8.0, "lbs", in_days(2), "Refrigerator 2", 15.0, 1.99),
        item("4", "Milk", "Dairy", 12.0, "gallons", in_days(6), "Refrigerator 1", 8.0, 3.29),
        item("5", "Salmon Fillets", "Protein", 10.0, "lbs", today - Days::new(1), "Freezer 2", 12.0, 8.99),
        item("6", "Oats", "Grains", 30.0, "lbs", in_days(60), "Pantry B", 25.0, 1.79),
        item("7", "Fresh Fruit", "Produce", 5.0, "lbs", in_days(1), "Refrigerator 2", 10.0, 2.99),
    ]
}

fn period(name: &str, actual: Nutrition) -> NutritionPeriod {
    NutritionPeriod {
        period: name.to_owned(),
        calorie_target: 10000,
        calorie_actual: actual.calories,
        protein_target: 350,
        protein_actual: actual.protein,
        carbs_target: 1200,
        carbs_actual: actual.carbs,
        fat_target: 300,
        fat_actual: actual.fat,
    }
}

pub fn nutrition_series() -> Vec<NutritionPeriod> {
    vec![
        period("Week 1", Nutrition::new(9500, 320, 1150, 290)),
        period("Week 2", Nutrition::new(9800, 340, 1180, 295)),
        period("Week 3", Nutrition::new(9900, 345, 1190, 298)),
        period("Week 4", Nutrition::new(10100, 355, 1210, 305)),
    ]
}

pub fn snapshot(today: NaiveDate) -> Result<Snapshot> {
    let meals = meals();

    Ok(Snapshot {
        patients: patients(),
        meal_plans: meal_plans(today, &meals)?,
        meals,
        inventory_items: inventory_items(today),
        nutrition_series: nutrition_series(),
    })
}
