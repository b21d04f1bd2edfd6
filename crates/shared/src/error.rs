use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("{entity} already exists: {id}")]
    AlreadyExists { entity: &'static str, id: String },

    #[error("patient {patient_id} already has a meal plan on {date}")]
    DuplicateMealPlan { patient_id: String, date: NaiveDate },

    #[error("nutrition totals overflow")]
    NutritionOverflow,

    #[error("invalid meal slot: {0}")]
    InvalidSlot(String),

    #[error("division by zero: target sum is 0")]
    DivisionByZero,

    #[error("invalid date: {0}")]
    InvalidDate(String),
}

impl Error {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn already_exists(entity: &'static str, id: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity,
            id: id.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[macro_export]
macro_rules! not_found {
    ($entity:literal, $id:expr $(,)?) => {
        return Err($crate::Error::not_found($entity, $id))
    };
}
