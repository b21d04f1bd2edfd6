mod snapshot;

pub use snapshot::*;

use chrono::NaiveDate;
use foodservice_shared::{
    Error, NutritionPeriod, Result,
    inventory::InventoryItem,
    mealplan::{Meal, MealPlan},
    not_found,
    patient::Patient,
};

/// In-memory owner of every collection.
///
/// All mutation goes through the typed methods below; callers get shared
/// slices back. `update_*` and `delete_*` report [`foodservice_shared::Error::NotFound`]
/// when the id is unknown instead of silently doing nothing. Meal plans stay
/// unique per patient and day, with totals matching their slots.
#[derive(Default, Clone, Debug)]
pub struct Store {
    patients: Vec<Patient>,
    meals: Vec<Meal>,
    meal_plans: Vec<MealPlan>,
    inventory_items: Vec<InventoryItem>,
    nutrition_series: Vec<NutritionPeriod>,
    selected_patient_id: Option<String>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        tracing::debug!(
            patients = snapshot.patients.len(),
            meals = snapshot.meals.len(),
            meal_plans = snapshot.meal_plans.len(),
            inventory_items = snapshot.inventory_items.len(),
            "Store loaded from snapshot"
        );

        Self {
            patients: snapshot.patients,
            meals: snapshot.meals,
            meal_plans: snapshot.meal_plans,
            inventory_items: snapshot.inventory_items,
            nutrition_series: snapshot.nutrition_series,
            selected_patient_id: None,
        }
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn meal_plans(&self) -> &[MealPlan] {
        &self.meal_plans
    }

    pub fn inventory_items(&self) -> &[InventoryItem] {
        &self.inventory_items
    }

    pub fn nutrition_series(&self) -> &[NutritionPeriod] {
        &self.nutrition_series
    }

    pub fn patient(&self, id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    pub fn meal(&self, id: &str) -> Option<&Meal> {
        self.meals.iter().find(|m| m.id == id)
    }

    pub fn meal_plan(&self, id: &str) -> Option<&MealPlan> {
        self.meal_plans.iter().find(|mp| mp.id == id)
    }

    pub fn inventory_item(&self, id: &str) -> Option<&InventoryItem> {
        self.inventory_items.iter().find(|i| i.id == id)
    }

    pub fn meal_plan_for(&self, patient_id: &str, date: NaiveDate) -> Option<&MealPlan> {
        self.meal_plans
            .iter()
            .find(|mp| mp.patient_id == patient_id && mp.date == date)
    }

    // Patients

    pub fn add_patient(&mut self, patient: Patient) {
        tracing::debug!(patient.id = %patient.id, "Patient added");
        self.patients.push(patient);
    }

    pub fn update_patient(&mut self, patient: Patient) -> Result<()> {
        let Some(existing) = self.patients.iter_mut().find(|p| p.id == patient.id) else {
            not_found!("patient", patient.id);
        };

        tracing::debug!(patient.id = %patient.id, "Patient updated");
        *existing = patient;

        Ok(())
    }

    pub fn delete_patient(&mut self, id: &str) -> Result<()> {
        let Some(position) = self.patients.iter().position(|p| p.id == id) else {
            not_found!("patient", id);
        };

        self.patients.remove(position);
        if self.selected_patient_id.as_deref() == Some(id) {
            self.selected_patient_id = None;
        }
        tracing::debug!(patient.id = %id, "Patient deleted");

        Ok(())
    }

    // Meal catalog

    pub fn add_meal(&mut self, meal: Meal) {
        tracing::debug!(meal.id = %meal.id, "Meal added to catalog");
        self.meals.push(meal);
    }

    // Meal plans

    /// Commits a new plan with its totals recomputed from the slots.
    ///
    /// Fails when the id is taken or the patient already has a plan that day.
    pub fn add_meal_plan(&mut self, mut meal_plan: MealPlan) -> Result<()> {
        if self.meal_plan(&meal_plan.id).is_some() {
            return Err(Error::already_exists("meal plan", meal_plan.id));
        }

        self.ensure_day_free(&meal_plan)?;
        meal_plan.nutrition_totals = meal_plan.meals.totals()?;

        tracing::debug!(
            meal_plan.id = %meal_plan.id,
            patient.id = %meal_plan.patient_id,
            date = %meal_plan.date,
            "Meal plan added"
        );
        self.meal_plans.push(meal_plan);

        Ok(())
    }

    /// Replaces the plan with the same id, recomputing its totals. Moving it
    /// onto a day the patient already has planned is rejected.
    pub fn update_meal_plan(&mut self, mut meal_plan: MealPlan) -> Result<()> {
        let Some(position) = self.meal_plans.iter().position(|mp| mp.id == meal_plan.id) else {
            not_found!("meal plan", meal_plan.id);
        };

        self.ensure_day_free(&meal_plan)?;
        meal_plan.nutrition_totals = meal_plan.meals.totals()?;

        tracing::debug!(meal_plan.id = %meal_plan.id, "Meal plan updated");
        self.meal_plans[position] = meal_plan;

        Ok(())
    }

    fn ensure_day_free(&self, meal_plan: &MealPlan) -> Result<()> {
        let taken = self.meal_plans.iter().any(|mp| {
            mp.id != meal_plan.id
                && mp.patient_id == meal_plan.patient_id
                && mp.date == meal_plan.date
        });

        if taken {
            return Err(Error::DuplicateMealPlan {
                patient_id: meal_plan.patient_id.to_owned(),
                date: meal_plan.date,
            });
        }

        Ok(())
    }

    pub fn delete_meal_plan(&mut self, id: &str) -> Result<()> {
        let Some(position) = self.meal_plans.iter().position(|mp| mp.id == id) else {
            not_found!("meal plan", id);
        };

        self.meal_plans.remove(position);
        tracing::debug!(meal_plan.id = %id, "Meal plan deleted");

        Ok(())
    }

    // Inventory

    pub fn add_inventory_item(&mut self, item: InventoryItem) {
        tracing::debug!(item.id = %item.id, "Inventory item added");
        self.inventory_items.push(item);
    }

    pub fn update_inventory_item(&mut self, item: InventoryItem) -> Result<()> {
        let Some(existing) = self.inventory_items.iter_mut().find(|i| i.id == item.id) else {
            not_found!("inventory item", item.id);
        };

        tracing::debug!(item.id = %item.id, "Inventory item updated");
        *existing = item;

        Ok(())
    }

    pub fn delete_inventory_item(&mut self, id: &str) -> Result<()> {
        let Some(position) = self.inventory_items.iter().position(|i| i.id == id) else {
            not_found!("inventory item", id);
        };

        self.inventory_items.remove(position);
        tracing::debug!(item.id = %id, "Inventory item deleted");

        Ok(())
    }

    // Patient focus

    pub fn selected_patient_id(&self) -> Option<&str> {
        self.selected_patient_id.as_deref()
    }

    pub fn select_patient(&mut self, id: Option<&str>) -> Result<()> {
        if let Some(id) = id
            && self.patient(id).is_none()
        {
            not_found!("patient", id);
        }

        self.selected_patient_id = id.map(str::to_owned);

        Ok(())
    }

    /// Selected patient, or the first patient when nothing is selected.
    pub fn focused_patient(&self) -> Option<&Patient> {
        match self.selected_patient_id.as_deref() {
            Some(id) => self.patient(id),
            None => self.patients.first(),
        }
    }
}
