// Test fixtures - reusable test data
// Provides consistent dates, bounds and configs across the test files

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use rust_pickers::models::bounds::DateBounds;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Jan 15, 2024 (the day tests treat as "today")
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    /// Returns Jan 2, 2024 at 09:30
    pub fn morning_jan_2_2024() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    /// Returns Feb 29, 2024 at 15:45 (leap year)
    pub fn leap_day_afternoon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(15, 45, 0)
            .unwrap()
    }

    /// Returns midnight of the given day
    pub fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }
}

/// Sample bounds for testing
pub mod bounds {
    use super::*;

    /// Jan 10 - Jan 20, 2024
    pub fn mid_january_2024() -> DateBounds {
        DateBounds::new(Some(dates::midnight(2024, 1, 10)), Some(dates::midnight(2024, 1, 20)))
    }

    /// 2020-05-01 - 2030-03-01
    pub fn decade() -> DateBounds {
        DateBounds::new(Some(dates::midnight(2020, 5, 1)), Some(dates::midnight(2030, 3, 1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_fixture_dates_are_valid() {
        assert_eq!(dates::today().day(), 15);
        assert_eq!(dates::leap_day_afternoon().day(), 29);
        assert!(bounds::mid_january_2024().contains_day(dates::today()));
    }
}
