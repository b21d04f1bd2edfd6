use chrono::NaiveDate;
use foodservice_shared::{
    Error, Nutrition,
    inventory::InventoryItem,
    mealplan::{Meal, MealPlan, MealSlot, PlanMeals},
    patient::Patient,
};
use foodservice_store::{Snapshot, Store};

fn patient(id: &str, name: &str) -> Patient {
    Patient {
        id: id.to_owned(),
        name: name.to_owned(),
        room: "101A".to_owned(),
        dietary_restrictions: vec!["Low Sodium".to_owned()],
        allergies: vec![],
        nutritional_requirements: Nutrition::new(2000, 75, 250, 65),
    }
}

fn item(id: &str, quantity: f64) -> InventoryItem {
    InventoryItem {
        id: id.to_owned(),
        name: "Milk".to_owned(),
        category: "Dairy".to_owned(),
        quantity,
        unit: "gallons".to_owned(),
        expiration_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        location: "Refrigerator 1".to_owned(),
        minimum_stock: 8.0,
        cost: 3.29,
    }
}

fn plan(id: &str, patient_id: &str) -> MealPlan {
    MealPlan {
        id: id.to_owned(),
        patient_id: patient_id.to_owned(),
        date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        meals: PlanMeals::default(),
        nutrition_totals: Nutrition::default(),
    }
}

#[test]
fn test_update_replaces_entity_with_same_id() {
    let mut store = Store::new();
    store.add_patient(patient("1", "John Smith"));
    store.add_patient(patient("2", "Mary Johnson"));

    let mut edited = patient("1", "John Smith");
    edited.room = "204B".to_owned();
    store.update_patient(edited).unwrap();

    assert_eq!(store.patients().len(), 2);
    assert_eq!(store.patient("1").unwrap().room, "204B");
    assert_eq!(store.patients()[1].name, "Mary Johnson");
}

#[test]
fn test_update_unknown_id_is_not_found() {
    let mut store = Store::new();
    store.add_inventory_item(item("1", 12.0));

    let result = store.update_inventory_item(item("99", 1.0));

    assert_eq!(
        result,
        Err(Error::NotFound {
            entity: "inventory item",
            id: "99".to_owned()
        })
    );
    assert_eq!(store.inventory_items()[0].quantity, 12.0);
}

#[test]
fn test_delete_removes_by_id() {
    let mut store = Store::new();
    store.add_meal_plan(plan("mp1", "1")).unwrap();
    store.add_meal_plan(plan("mp2", "2")).unwrap();

    store.delete_meal_plan("mp1").unwrap();

    assert_eq!(store.meal_plans().len(), 1);
    assert!(store.meal_plan("mp1").is_none());
    assert!(matches!(
        store.delete_meal_plan("mp1"),
        Err(Error::NotFound { .. })
    ));
}

#[test]
fn test_select_patient_requires_existing_patient() {
    let mut store = Store::new();
    store.add_patient(patient("1", "John Smith"));

    assert!(store.select_patient(Some("7")).is_err());
    assert_eq!(store.selected_patient_id(), None);

    store.select_patient(Some("1")).unwrap();
    assert_eq!(store.selected_patient_id(), Some("1"));

    store.select_patient(None).unwrap();
    assert_eq!(store.selected_patient_id(), None);
}

#[test]
fn test_deleting_selected_patient_clears_focus() {
    let mut store = Store::new();
    store.add_patient(patient("1", "John Smith"));
    store.add_patient(patient("2", "Mary Johnson"));
    store.select_patient(Some("2")).unwrap();

    store.delete_patient("2").unwrap();

    assert_eq!(store.selected_patient_id(), None);
    assert_eq!(store.focused_patient().map(|p| p.id.as_str()), Some("1"));
}

#[test]
fn test_from_snapshot_keeps_collections_as_given() {
    let store = Store::from_snapshot(Snapshot {
        patients: vec![patient("1", "John Smith")],
        meal_plans: vec![plan("mp1", "1")],
        inventory_items: vec![item("1", 12.0), item("1", 3.0)],
        ..Default::default()
    });

    assert_eq!(store.patients().len(), 1);
    assert_eq!(store.inventory_items().len(), 2);
    assert!(store.meals().is_empty());
    assert_eq!(
        store
            .meal_plan_for("1", NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
            .map(|mp| mp.id.as_str()),
        Some("mp1")
    );
    assert!(store.focused_patient().is_some());
}

fn lunch() -> Meal {
    Meal {
        id: "3".to_owned(),
        name: "Grilled Chicken Salad".to_owned(),
        kind: MealSlot::Lunch,
        calories: 400,
        protein: 35,
        carbs: 20,
        fat: 15,
        ingredients: vec![],
        dietary_tags: vec![],
        image: None,
    }
}

#[test]
fn test_second_plan_for_same_day_is_rejected() {
    let mut store = Store::new();
    store.add_meal_plan(plan("mp1", "1")).unwrap();

    let mut duplicate = plan("dup", "1");
    duplicate.nutrition_totals = Nutrition::new(999, 0, 0, 0);

    assert_eq!(
        store.add_meal_plan(duplicate),
        Err(Error::DuplicateMealPlan {
            patient_id: "1".to_owned(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        })
    );
    assert_eq!(store.meal_plans().len(), 1);
    assert_eq!(store.meal_plans()[0].id, "mp1");
}

#[test]
fn test_plan_id_must_be_unique() {
    let mut store = Store::new();
    store.add_meal_plan(plan("mp1", "1")).unwrap();

    assert!(matches!(
        store.add_meal_plan(plan("mp1", "2")),
        Err(Error::AlreadyExists {
            entity: "meal plan",
            ..
        })
    ));
    assert_eq!(store.meal_plans().len(), 1);
}

#[test]
fn test_update_cannot_move_plan_onto_taken_day() {
    let mut store = Store::new();
    store.add_meal_plan(plan("mp1", "1")).unwrap();
    let mut next_day = plan("mp2", "1");
    next_day.date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
    store.add_meal_plan(next_day.clone()).unwrap();

    next_day.date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

    assert!(matches!(
        store.update_meal_plan(next_day),
        Err(Error::DuplicateMealPlan { .. })
    ));
    assert_eq!(
        store.meal_plan("mp2").unwrap().date,
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    );
}

#[test]
fn test_committed_totals_follow_slots() {
    let mut store = Store::new();
    let mut stale = plan("mp1", "1");
    stale.meals.lunch = Some(lunch());
    stale.nutrition_totals = Nutrition::new(999, 0, 0, 0);

    store.add_meal_plan(stale.clone()).unwrap();
    assert_eq!(
        store.meal_plan("mp1").unwrap().nutrition_totals,
        Nutrition::new(400, 35, 20, 15)
    );

    stale.meals.lunch = None;
    store.update_meal_plan(stale).unwrap();
    assert_eq!(
        store.meal_plan("mp1").unwrap().nutrition_totals,
        Nutrition::default()
    );
}

#[test]
fn test_update_keeps_own_day() {
    let mut store = Store::new();
    store.add_meal_plan(plan("mp1", "1")).unwrap();

    let mut edited = plan("mp1", "1");
    edited.meals.lunch = Some(lunch());

    store.update_meal_plan(edited).unwrap();
    assert_eq!(store.meal_plans().len(), 1);
    assert_eq!(store.meal_plans()[0].meals.count(), 1);
}
