// Property-based tests for the calendar grids and paging
// Checks the month and year grids against chrono for random inputs

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use rust_pickers::models::bounds::DateBounds;
use rust_pickers::models::calendar::YEARS_PER_BLOCK;
use rust_pickers::services::calendar::{month_grid, year_grid, CalendarConfig, CalendarEngine};
use rust_pickers::utils::date::{days_in_month, month_index};

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).unwrap()
}

fn any_day() -> impl Strategy<Value = NaiveDate> {
    (1900..2100i32, 1..=12u32, 1..=28u32)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    /// Property: the month grid holds every day of the month exactly once, in order
    #[test]
    fn prop_month_grid_lists_each_day_once(year in 1..3000i32, month in 1..=12u32) {
        let weeks = month_grid(year, month);
        let days: Vec<NaiveDate> = weeks.iter().flatten().flatten().copied().collect();

        prop_assert_eq!(days.len() as u32, days_in_month(year, month));
        for (i, day) in days.iter().enumerate() {
            prop_assert_eq!(day.day(), i as u32 + 1);
            prop_assert_eq!(day.month(), month);
        }
        prop_assert!((4..=6).contains(&weeks.len()));
    }

    /// Property: day 1 sits in the column of its weekday, Sunday first
    #[test]
    fn prop_first_day_column_matches_weekday(year in 1..3000i32, month in 1..=12u32) {
        let weeks = month_grid(year, month);
        let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let column = weeks[0].iter().position(|slot| slot.is_some()).unwrap();
        prop_assert_eq!(column as u32, first.weekday().num_days_from_sunday());
        // padding only at the edges
        prop_assert!(weeks[1..weeks.len() - 1].iter().all(|week| week.iter().all(|s| s.is_some())));
    }

    /// Property: a year block covers 18 consecutive years in rows of three
    #[test]
    fn prop_year_grid_is_contiguous(block in 0..500i32) {
        let rows = year_grid(block);
        let years: Vec<i32> = rows.iter().flatten().copied().collect();
        prop_assert_eq!(rows.len(), 6);
        prop_assert_eq!(years.first().copied(), Some(block * YEARS_PER_BLOCK));
        prop_assert!(years.windows(2).all(|pair| pair[1] == pair[0] + 1));
    }

    /// Property: without value or predicate, a day is selectable exactly when inside the bounds
    #[test]
    fn prop_day_disabled_matches_bounds(a in any_day(), b in any_day(), day in any_day()) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let bounds = DateBounds::new(Some(midnight(min)), Some(midnight(max)));
        let engine = CalendarEngine::new(CalendarConfig::new(None).with_bounds(bounds), day);
        prop_assert_eq!(engine.is_day_disabled(day), day < min || day > max);
    }

    /// Property: month paging never leaves the bounds
    #[test]
    fn prop_month_paging_stays_in_bounds(
        a in any_day(),
        b in any_day(),
        steps in proptest::collection::vec(any::<bool>(), 0..60),
    ) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let bounds = DateBounds::new(Some(midnight(min)), Some(midnight(max)));
        let mut engine = CalendarEngine::new(CalendarConfig::new(None).with_bounds(bounds), min);
        let low = month_index(min.year(), min.month());
        let high = month_index(max.year(), max.month());

        for forward in steps {
            if forward {
                engine.next_month();
            } else {
                engine.previous_month();
            }
            let index = engine.cursor().month_index();
            prop_assert!(index >= low && index <= high);
        }
    }

    /// Property: year paging never shows a block entirely outside the bounds
    #[test]
    fn prop_year_paging_stays_in_bounds(
        a in any_day(),
        b in any_day(),
        steps in proptest::collection::vec(any::<bool>(), 0..30),
    ) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let bounds = DateBounds::new(Some(midnight(min)), Some(midnight(max)));
        let mut engine = CalendarEngine::new(CalendarConfig::new(None).with_bounds(bounds), min);
        engine.show_years();

        for forward in steps {
            if forward {
                engine.next_years();
            } else {
                engine.previous_years();
            }
            let index = engine.cursor().year_index;
            let start = index * YEARS_PER_BLOCK;
            let end = start + YEARS_PER_BLOCK - 1;
            prop_assert!(end >= min.year() && start <= max.year());
        }
    }
}
