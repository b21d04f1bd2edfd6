use chrono::{Datelike, Days, NaiveDate};
use foodservice_shared::mealplan::MealPlan;
use foodservice_store::Store;

/// A planner week, Sunday through Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Week {
    /// The week containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let start = week_start(date);
        Self {
            start,
            end: start + Days::new(6),
        }
    }

    pub fn previous(&self) -> Self {
        Self::containing(self.start - Days::new(7))
    }

    pub fn next(&self) -> Self {
        Self::containing(self.start + Days::new(7))
    }

    pub fn days(&self) -> [NaiveDate; 7] {
        week_days(self.start)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_sunday()))
}

pub fn week_days(start: NaiveDate) -> [NaiveDate; 7] {
    std::array::from_fn(|i| start + Days::new(i as u64))
}

/// One calendar column of the planner.
#[derive(Debug, Clone, Copy)]
pub struct DayPlan<'a> {
    pub date: NaiveDate,
    pub plan: Option<&'a MealPlan>,
}

pub fn week_plans<'a>(store: &'a Store, patient_id: &str, week: Week) -> [DayPlan<'a>; 7] {
    week.days().map(|date| DayPlan {
        date,
        plan: store.meal_plan_for(patient_id, date),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_starts_on_sunday() {
        // 2025-06-04 is a Wednesday
        assert_eq!(week_start(date(2025, 6, 4)), date(2025, 6, 1));
        assert_eq!(week_start(date(2025, 6, 1)), date(2025, 6, 1));
        assert_eq!(week_start(date(2025, 6, 7)), date(2025, 6, 1));
    }

    #[test]
    fn test_week_crosses_month_boundary() {
        let week = Week::containing(date(2025, 3, 1));

        assert_eq!(week.start, date(2025, 2, 23));
        assert_eq!(week.end, date(2025, 3, 1));
        assert_eq!(week.days()[6], date(2025, 3, 1));
    }

    #[test]
    fn test_previous_and_next() {
        let week = Week::containing(date(2025, 6, 4));

        assert_eq!(week.previous().start, date(2025, 5, 25));
        assert_eq!(week.next().start, date(2025, 6, 8));
        assert_eq!(week.next().previous(), week);
        assert!(week.contains(date(2025, 6, 7)));
        assert!(!week.contains(date(2025, 6, 8)));
    }
}
