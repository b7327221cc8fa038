//! Clock view state and time-of-day representations.
//!
//! Values are stored as 24-hour wall-clock time; the face shows 12 hours
//! with an AM/PM toggle.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Which ring of the clock face is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockMode {
    #[default]
    Hour,
    Minute,
}

/// Half of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Am,
    Pm,
}

impl Period {
    pub fn of_hour(hour: u32) -> Self {
        if hour >= 12 {
            Period::Pm
        } else {
            Period::Am
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Am => "AM",
            Period::Pm => "PM",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockCursor {
    pub mode: ClockMode,
    pub is_dragging: bool,
}

/// Time as shown on the digital readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayTime {
    /// 1..=12, midnight and noon show as 12
    pub hour12: u32,
    pub minute: u32,
    pub period: Period,
}

impl DisplayTime {
    pub fn from_value(value: NaiveDateTime) -> Self {
        let hour = value.hour();
        let hour12 = match hour % 12 {
            0 => 12,
            h => h,
        };
        Self {
            hour12,
            minute: value.minute(),
            period: Period::of_hour(hour),
        }
    }
}

/// Zero point used when a time picker has no value: 1970-02-01 00:00.
pub fn default_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1970, 2, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Convert a 12-hour face value into a 24-hour hour keeping `period`.
pub fn to_24_hour(hour12: u32, period: Period) -> u32 {
    let base = hour12 % 12;
    match period {
        Period::Am => base,
        Period::Pm => base + 12,
    }
}
