//! Selectable date range for the pickers.
//!
//! Bounds are inclusive and always compared at day granularity: a `min` of
//! `2024-01-10T15:00` still allows any time on January 10th.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Optional inclusive minimum/maximum selectable date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateBounds {
    pub min: Option<NaiveDateTime>,
    pub max: Option<NaiveDateTime>,
}

impl DateBounds {
    /// Bounds that allow every date.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn new(min: Option<NaiveDateTime>, max: Option<NaiveDateTime>) -> Self {
        Self { min, max }
    }

    pub fn min_date(&self) -> Option<NaiveDate> {
        self.min.map(|min| min.date())
    }

    pub fn max_date(&self) -> Option<NaiveDate> {
        self.max.map(|max| max.date())
    }

    pub fn min_year(&self) -> Option<i32> {
        self.min.map(|min| min.year())
    }

    pub fn max_year(&self) -> Option<i32> {
        self.max.map(|max| max.year())
    }

    /// True when `date` falls strictly before the minimum day.
    pub fn is_before_min(&self, date: NaiveDate) -> bool {
        self.min_date().is_some_and(|min| date < min)
    }

    /// True when `date` falls strictly after the maximum day.
    pub fn is_after_max(&self, date: NaiveDate) -> bool {
        self.max_date().is_some_and(|max| date > max)
    }

    pub fn contains_day(&self, date: NaiveDate) -> bool {
        !self.is_before_min(date) && !self.is_after_max(date)
    }

    pub fn contains_year(&self, year: i32) -> bool {
        self.min_year().map_or(true, |min| year >= min)
            && self.max_year().map_or(true, |max| year <= max)
    }

    /// Clamp a day into the bounds.
    pub fn clamp_day(&self, date: NaiveDate) -> NaiveDate {
        match (self.min_date(), self.max_date()) {
            (_, Some(max)) if date > max => max,
            (Some(min), _) if date < min => min,
            _ => date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        day(y, m, d).and_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn test_contains_day_is_inclusive_and_ignores_time() {
        let bounds = DateBounds::new(Some(at(2024, 1, 10, 15)), Some(at(2024, 1, 20, 9)));
        assert!(bounds.contains_day(day(2024, 1, 10)));
        assert!(bounds.contains_day(day(2024, 1, 20)));
        assert!(!bounds.contains_day(day(2024, 1, 9)));
        assert!(!bounds.contains_day(day(2024, 1, 21)));
    }

    #[test]
    fn test_unbounded_contains_everything() {
        let bounds = DateBounds::unbounded();
        assert!(bounds.contains_day(day(1, 1, 1)));
        assert!(bounds.contains_year(9999));
    }

    #[test]
    fn test_clamp_day() {
        let bounds = DateBounds::new(Some(at(2024, 1, 10, 0)), Some(at(2024, 1, 20, 0)));
        assert_eq!(bounds.clamp_day(day(2023, 5, 1)), day(2024, 1, 10));
        assert_eq!(bounds.clamp_day(day(2025, 5, 1)), day(2024, 1, 20));
        assert_eq!(bounds.clamp_day(day(2024, 1, 15)), day(2024, 1, 15));
    }

    #[test]
    fn test_contains_year() {
        let bounds = DateBounds::new(Some(at(2020, 6, 1, 0)), None);
        assert!(!bounds.contains_year(2019));
        assert!(bounds.contains_year(2020));
        assert!(bounds.contains_year(3000));
    }
}
