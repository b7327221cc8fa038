//! Calendar view position.
//!
//! The cursor is where the calendar is looking, not what is selected.

use chrono::{Datelike, NaiveDate};

/// Number of years shown on one page of the year grid.
pub const YEARS_PER_BLOCK: i32 = 18;

/// Years per row in the year grid.
pub const YEARS_PER_ROW: usize = 3;

/// One row of the month grid. Empty slots pad the first and last week.
pub type Week = [Option<NaiveDate>; 7];

/// One row of the year grid.
pub type YearRow = [i32; YEARS_PER_ROW];

/// Which grid the calendar is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarMode {
    #[default]
    Month,
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCursor {
    pub year: i32,
    /// 1-based month
    pub month: u32,
    /// Index of the 18-year block shown in year mode
    pub year_index: i32,
    pub mode: CalendarMode,
}

impl CalendarCursor {
    /// Cursor showing the month of `date`, with the year block taken from `anchor_year`.
    pub fn new(date: NaiveDate, anchor_year: i32) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            year_index: year_block_index(anchor_year),
            mode: CalendarMode::Month,
        }
    }

    /// Position on the continuous month line (`year * 12 + month - 1`).
    pub fn month_index(&self) -> i32 {
        crate::utils::date::month_index(self.year, self.month)
    }
}

/// 18-year block holding `year`.
pub fn year_block_index(year: i32) -> i32 {
    year.div_euclid(YEARS_PER_BLOCK)
}
