//! Calendar engine: month/year navigation, validity and day selection.
//!
//! The engine owns the cursor and the selection state for one open calendar.
//! It never renders; `ui_egui::calendar` draws whatever the engine reports.

pub mod grid;

use std::fmt;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::models::bounds::DateBounds;
use crate::models::calendar::{year_block_index, CalendarCursor, CalendarMode, Week, YearRow};
use crate::models::selection::CommitMode;
use crate::services::selection::{PickerListener, SelectionProtocol};
use crate::utils::date::{from_month_index, is_same_day, month_index, month_name, start_of_day};

pub use grid::{month_grid, month_grid_for_index, year_block_range, year_grid};

/// Caller-supplied predicate marking extra days as unselectable.
pub type DayPredicate = Arc<dyn Fn(NaiveDate) -> bool + Send + Sync>;

#[derive(Clone, Default)]
pub struct CalendarConfig {
    /// Externally selected value
    pub value: Option<NaiveDateTime>,
    pub bounds: DateBounds,
    pub date_disabled: Option<DayPredicate>,
    pub commit_mode: CommitMode,
}

impl fmt::Debug for CalendarConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarConfig")
            .field("value", &self.value)
            .field("bounds", &self.bounds)
            .field("date_disabled", &self.date_disabled.is_some())
            .field("commit_mode", &self.commit_mode)
            .finish()
    }
}

impl CalendarConfig {
    pub fn new(value: Option<NaiveDateTime>) -> Self {
        Self {
            value,
            ..Default::default()
        }
    }

    pub fn with_bounds(mut self, bounds: DateBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_date_disabled(
        mut self,
        predicate: impl Fn(NaiveDate) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.date_disabled = Some(Arc::new(predicate));
        self
    }

    pub fn with_commit_mode(mut self, mode: CommitMode) -> Self {
        self.commit_mode = mode;
        self
    }
}

#[derive(Debug, Clone)]
pub struct CalendarEngine {
    config: CalendarConfig,
    cursor: CalendarCursor,
    selection: SelectionProtocol,
}

impl CalendarEngine {
    /// Open a calendar on the month of the current value, or on `today`
    /// clamped into the bounds when there is no value.
    pub fn new(config: CalendarConfig, today: NaiveDate) -> Self {
        let anchor = config.bounds.clamp_day(today);
        let shown = config.value.map(|value| value.date()).unwrap_or(anchor);
        let cursor = CalendarCursor::new(shown, anchor.year());
        let selection = SelectionProtocol::new(config.commit_mode);
        Self {
            config,
            cursor,
            selection,
        }
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub fn cursor(&self) -> CalendarCursor {
        self.cursor
    }

    pub fn mode(&self) -> CalendarMode {
        self.cursor.mode
    }

    pub fn commit_mode(&self) -> CommitMode {
        self.selection.mode()
    }

    pub fn value(&self) -> Option<NaiveDateTime> {
        self.config.value
    }

    /// Replace the external value; the cursor stays where it is.
    pub fn sync_value(&mut self, value: Option<NaiveDateTime>) {
        self.config.value = value;
    }

    pub fn pending(&self) -> Option<NaiveDateTime> {
        self.selection.pending()
    }

    /// Day shown as selected: the staged day in deferred mode, else the value.
    pub fn active_day(&self) -> Option<NaiveDateTime> {
        if self.selection.is_deferred() {
            self.selection.pending().or(self.config.value)
        } else {
            self.config.value
        }
    }

    // ---- grids -------------------------------------------------------------

    pub fn current_month_grid(&self) -> Vec<Week> {
        month_grid(self.cursor.year, self.cursor.month)
    }

    pub fn current_year_grid(&self) -> Vec<YearRow> {
        year_grid(self.cursor.year_index)
    }

    /// Header for month mode, e.g. "January, 2024".
    pub fn title(&self) -> String {
        format!("{}, {}", month_name(self.cursor.month), self.cursor.year)
    }

    /// Header for year mode, e.g. "2016 - 2033".
    pub fn year_block_title(&self) -> String {
        let (start, end) = year_block_range(self.cursor.year_index);
        format!("{} - {}", start, end)
    }

    // ---- validity ----------------------------------------------------------

    pub fn is_day_disabled(&self, date: NaiveDate) -> bool {
        let is_current = self
            .config
            .value
            .is_some_and(|value| is_same_day(start_of_day(date), value));
        is_current
            || !self.config.bounds.contains_day(date)
            || self
                .config
                .date_disabled
                .as_ref()
                .is_some_and(|predicate| predicate(date))
    }

    pub fn is_year_disabled(&self, year: i32) -> bool {
        !self.config.bounds.contains_year(year) || year == self.cursor.year
    }

    fn month_index_in_bounds(&self, index: i32) -> bool {
        let bounds = &self.config.bounds;
        let after_min = bounds
            .min
            .map_or(true, |min| index >= month_index(min.year(), min.month()));
        let before_max = bounds
            .max
            .map_or(true, |max| index <= month_index(max.year(), max.month()));
        after_min && before_max
    }

    pub fn previous_month_valid(&self) -> bool {
        self.month_index_in_bounds(self.cursor.month_index() - 1)
    }

    pub fn next_month_valid(&self) -> bool {
        self.month_index_in_bounds(self.cursor.month_index() + 1)
    }

    fn year_index_in_bounds(&self, index: i32) -> bool {
        let bounds = &self.config.bounds;
        bounds.min_year().map_or(true, |min| index >= year_block_index(min))
            && bounds.max_year().map_or(true, |max| index <= year_block_index(max))
    }

    pub fn previous_years_valid(&self) -> bool {
        self.cursor.year_index >= 1 && self.year_index_in_bounds(self.cursor.year_index - 1)
    }

    pub fn next_years_valid(&self) -> bool {
        self.year_index_in_bounds(self.cursor.year_index + 1)
    }

    // ---- navigation --------------------------------------------------------

    /// Move to the previous month, rolling over January. Returns false when refused.
    pub fn previous_month(&mut self) -> bool {
        if !self.previous_month_valid() {
            return false;
        }
        self.set_month_index(self.cursor.month_index() - 1);
        true
    }

    /// Move to the next month, rolling over December. Returns false when refused.
    pub fn next_month(&mut self) -> bool {
        if !self.next_month_valid() {
            return false;
        }
        self.set_month_index(self.cursor.month_index() + 1);
        true
    }

    /// Jump straight to a month index, e.g. after a swipe.
    pub fn change_month_index(&mut self, index: i32) -> bool {
        if !self.month_index_in_bounds(index) {
            return false;
        }
        self.set_month_index(index);
        true
    }

    fn set_month_index(&mut self, index: i32) {
        let (year, month) = from_month_index(index);
        self.cursor.year = year;
        self.cursor.month = month;
        log::debug!("Calendar showing {}-{:02}", year, month);
    }

    pub fn previous_years(&mut self) -> bool {
        if !self.previous_years_valid() {
            return false;
        }
        self.cursor.year_index -= 1;
        true
    }

    pub fn next_years(&mut self) -> bool {
        if !self.next_years_valid() {
            return false;
        }
        self.cursor.year_index += 1;
        true
    }

    pub fn change_year_index(&mut self, index: i32) -> bool {
        if index < 0 || !self.year_index_in_bounds(index) {
            return false;
        }
        self.cursor.year_index = index;
        true
    }

    /// Switch to the year grid on the block holding the year in view.
    pub fn show_years(&mut self) {
        self.cursor.mode = CalendarMode::Year;
        self.cursor.year_index = year_block_index(self.cursor.year);
    }

    /// Leave the year grid. With a year, show that year, keeping the month
    /// unless the bounds force it to `min.month` or `max.month`.
    pub fn select_year(&mut self, year: Option<i32>) -> bool {
        let Some(year) = year else {
            self.cursor.mode = CalendarMode::Month;
            return true;
        };
        if self.is_year_disabled(year) {
            return false;
        }

        let bounds = &self.config.bounds;
        let mut month = self.cursor.month;
        if let Some(min) = bounds.min.filter(|min| min.year() == year && month < min.month()) {
            month = min.month();
        } else if let Some(max) = bounds
            .max
            .filter(|max| max.year() == year && month > max.month())
        {
            month = max.month();
        }

        self.cursor.year = year;
        self.cursor.month = month;
        self.cursor.mode = CalendarMode::Month;
        true
    }

    // ---- selection ---------------------------------------------------------

    /// Pick a day. Immediate mode closes and reports the day at midnight;
    /// deferred mode only stages it. Disabled days are refused.
    pub fn select_day(&mut self, date: NaiveDate, listener: &mut dyn PickerListener) -> bool {
        if self.is_day_disabled(date) {
            return false;
        }
        let value = start_of_day(date);
        if !self.selection.is_deferred() {
            listener.on_close();
        }
        self.selection.stage(value, listener);
        log::debug!("Calendar selected {}", date);
        true
    }

    pub fn confirm(&mut self, listener: &mut dyn PickerListener) {
        self.selection.confirm(listener);
    }

    pub fn cancel(&mut self, listener: &mut dyn PickerListener) {
        self.selection.cancel(listener);
    }
}
