use foodservice_shared::patient::Patient;
use strum::{AsRefStr, Display, EnumString};

use super::{SortField, SortKey, contains_ignore_case, filter_by};

#[derive(EnumString, Display, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum PatientField {
    #[default]
    Name,
    Room,
}

impl SortField<Patient> for PatientField {
    fn key<'a>(&self, item: &'a Patient) -> SortKey<'a> {
        match self {
            PatientField::Name => SortKey::Text(&item.name),
            PatientField::Room => SortKey::Text(&item.room),
        }
    }
}

/// Patients whose name or room contains `term`, ignoring case.
pub fn patients_matching<'a>(patients: &'a [Patient], term: &str) -> Vec<&'a Patient> {
    filter_by(patients, |p| {
        contains_ignore_case(&p.name, term) || contains_ignore_case(&p.room, term)
    })
}
