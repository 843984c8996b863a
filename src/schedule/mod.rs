mod meal;

use std::sync::OnceLock;

use chrono::{Days, NaiveDate, NaiveTime, Timelike};

pub use meal::{MealDefinition, ServingInterval};

fn hm(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).expect("meal times should be valid")
}

/// Drops seconds so the whole closing minute of a meal still counts as serving.
pub fn to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

/// The dining hall's day, in serving order.
pub fn standard_meals() -> &'static [MealDefinition] {
    static MEALS: OnceLock<[MealDefinition; 3]> = OnceLock::new();
    MEALS.get_or_init(|| {
        [
            MealDefinition::new("Breakfast", 0, ServingInterval::new(hm(7, 30), hm(10, 30))),
            MealDefinition::new("Lunch", 1, ServingInterval::new(hm(11, 30), hm(14, 0))),
            MealDefinition::new("Dinner", 2, ServingInterval::new(hm(16, 30), hm(19, 30))),
        ]
    })
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MealSelection<'a> {
    pub meal: &'a MealDefinition,
    pub next_day: bool,
}

impl MealSelection<'_> {
    /// Calendar date whose menu should be requested.
    pub fn date(&self, today: NaiveDate) -> NaiveDate {
        if self.next_day {
            today.checked_add_days(Days::new(1)).unwrap_or(today)
        } else {
            today
        }
    }
}

/// Ordered meal table. Meals are assumed to be non-overlapping and listed by
/// start time; the order is never re-sorted.
#[derive(Clone, Copy, Debug)]
pub struct MealSchedule<'a> {
    meals: &'a [MealDefinition],
}

impl Default for MealSchedule<'static> {
    fn default() -> Self {
        Self::new(standard_meals())
    }
}

impl<'a> MealSchedule<'a> {
    pub const fn new(meals: &'a [MealDefinition]) -> Self {
        Self { meals }
    }

    pub const fn meals(&self) -> &'a [MealDefinition] {
        self.meals
    }

    /// Picks the meal being served at `now`, else the next meal today, else
    /// the first meal tomorrow. `None` only for an empty table.
    pub fn select(&self, now: NaiveTime) -> Option<MealSelection<'a>> {
        self.serving_at(now)
            .or_else(|| self.next_after(now))
            .or_else(|| self.first_tomorrow())
    }

    pub fn serving_at(&self, now: NaiveTime) -> Option<MealSelection<'a>> {
        self.meals
            .iter()
            .find(|meal| meal.interval().contains(now))
            .map(|meal| MealSelection {
                meal,
                next_day: false,
            })
    }

    pub fn next_after(&self, now: NaiveTime) -> Option<MealSelection<'a>> {
        self.meals
            .iter()
            .find(|meal| meal.interval().starts_after(now))
            .map(|meal| MealSelection {
                meal,
                next_day: false,
            })
    }

    pub fn first_tomorrow(&self) -> Option<MealSelection<'a>> {
        self.meals.first().map(|meal| MealSelection {
            meal,
            next_day: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick(hour: u32, min: u32) -> (&'static str, bool) {
        let selection = MealSchedule::default()
            .select(hm(hour, min))
            .expect("the standard table is never empty");
        (selection.meal.name(), selection.next_day)
    }

    #[test]
    fn test_standard_table_order() {
        let names: Vec<_> = standard_meals().iter().map(MealDefinition::name).collect();
        assert_eq!(names, ["Breakfast", "Lunch", "Dinner"]);
        let ids: Vec<_> = standard_meals().iter().map(MealDefinition::id).collect();
        assert_eq!(ids, [0, 1, 2]);
    }

    #[test]
    fn test_select_during_meal() {
        assert_eq!(pick(12, 0), ("Lunch", false));
        assert_eq!(pick(8, 45), ("Breakfast", false));
        assert_eq!(pick(18, 0), ("Dinner", false));
    }

    #[test]
    fn test_select_on_boundaries() {
        assert_eq!(pick(7, 30), ("Breakfast", false));
        assert_eq!(pick(10, 30), ("Breakfast", false));
        assert_eq!(pick(11, 30), ("Lunch", false));
        assert_eq!(pick(14, 0), ("Lunch", false));
        assert_eq!(pick(16, 30), ("Dinner", false));
        assert_eq!(pick(19, 30), ("Dinner", false));
    }

    #[test]
    fn test_select_between_meals() {
        assert_eq!(pick(15, 0), ("Dinner", false));
        assert_eq!(pick(11, 0), ("Lunch", false));
        assert_eq!(pick(5, 0), ("Breakfast", false));
    }

    #[test]
    fn test_select_wraps_to_tomorrow() {
        assert_eq!(pick(22, 0), ("Breakfast", true));
        assert_eq!(pick(19, 31), ("Breakfast", true));
        assert_eq!(pick(23, 59), ("Breakfast", true));
    }

    #[test]
    fn test_early_morning_is_still_today() {
        // before breakfast starts the next meal is today's breakfast
        assert_eq!(pick(3, 0), ("Breakfast", false));
        assert_eq!(pick(0, 0), ("Breakfast", false));
    }

    #[test]
    fn test_rules_are_independent() {
        let schedule = MealSchedule::default();
        assert!(schedule.serving_at(hm(15, 0)).is_none());
        assert_eq!(
            schedule.next_after(hm(15, 0)).map(|s| s.meal.name()),
            Some("Dinner")
        );
        assert!(schedule.next_after(hm(20, 0)).is_none());
        let tomorrow = schedule.first_tomorrow().unwrap();
        assert_eq!(tomorrow.meal.name(), "Breakfast");
        assert!(tomorrow.next_day);
    }

    #[test]
    fn test_closing_minute_counts_after_truncation() {
        let late = NaiveTime::from_hms_opt(19, 30, 42).unwrap();
        let schedule = MealSchedule::default();
        assert!(schedule.select(late).unwrap().next_day);
        let selection = schedule.select(to_minute(late)).unwrap();
        assert_eq!(selection.meal.name(), "Dinner");
        assert!(!selection.next_day);
    }

    #[test]
    fn test_empty_schedule() {
        let schedule = MealSchedule::new(&[]);
        assert_eq!(schedule.select(hm(12, 0)), None);
    }

    #[test]
    fn test_selection_date() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let meal = &standard_meals()[0];
        let same_day = MealSelection {
            meal,
            next_day: false,
        };
        let next_day = MealSelection {
            meal,
            next_day: true,
        };
        assert_eq!(same_day.date(today), today);
        assert_eq!(
            next_day.date(today),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
    }
}
