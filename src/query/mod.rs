//! List-view filtering and sorting.
//!
//! Sorting is always stable: rows with equal keys keep their input order in
//! both directions.

mod inventory;
mod meal;
mod patient;

pub use inventory::*;
pub use meal::*;
pub use patient::*;

use std::cmp::Ordering;

use chrono::NaiveDate;
use strum::{AsRefStr, Display, EnumString};

#[derive(EnumString, Display, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn flip(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

/// Comparable value extracted from a row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SortKey<'a> {
    Text(&'a str),
    Number(f64),
    Date(NaiveDate),
}

impl SortKey<'_> {
    fn rank(&self) -> u8 {
        match self {
            SortKey::Text(_) => 0,
            SortKey::Number(_) => 1,
            SortKey::Date(_) => 2,
        }
    }

    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// A column of `T` that rows can be ordered by.
pub trait SortField<T> {
    fn key<'a>(&self, item: &'a T) -> SortKey<'a>;
}

pub fn filter_by<'a, T>(items: &'a [T], predicate: impl Fn(&T) -> bool) -> Vec<&'a T> {
    items.iter().filter(|item| predicate(item)).collect()
}

pub fn sort_by<'a, T, F>(mut items: Vec<&'a T>, field: F, direction: Direction) -> Vec<&'a T>
where
    F: SortField<T>,
{
    items.sort_by(|a, b| {
        let ordering = field.key(*a).compare(&field.key(*b));
        match direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    });

    items
}

/// Case-insensitive substring match; an empty needle matches everything.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
