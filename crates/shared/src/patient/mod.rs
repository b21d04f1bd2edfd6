use serde::{Deserialize, Serialize};

use crate::Nutrition;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub room: String,
    pub dietary_restrictions: Vec<String>,
    pub allergies: Vec<String>,
    /// Daily targets.
    pub nutritional_requirements: Nutrition,
}

impl Patient {
    pub fn has_restriction(&self, restriction: &str) -> bool {
        self.dietary_restrictions.iter().any(|r| r == restriction)
    }
}
