//! Rendering picker values as text for the input field.
//!
//! A format is either a chrono strftime pattern or a caller-supplied function.

use std::fmt;
use std::sync::Arc;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDateTime;

use crate::error::PickerError;
use crate::models::settings::{DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT};

/// Text shown by an input without a value, so the field keeps its height.
pub const EMPTY_VALUE: &str = "\u{a0}";

pub type FormatFn = Arc<dyn Fn(NaiveDateTime) -> String + Send + Sync>;

#[derive(Clone)]
pub enum ValueFormat {
    Pattern(String),
    Custom(FormatFn),
}

impl fmt::Debug for ValueFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueFormat::Pattern(pattern) => f.debug_tuple("Pattern").field(pattern).finish(),
            ValueFormat::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl ValueFormat {
    pub fn default_date() -> Self {
        ValueFormat::Pattern(DEFAULT_DATE_FORMAT.to_string())
    }

    pub fn default_time() -> Self {
        ValueFormat::Pattern(DEFAULT_TIME_FORMAT.to_string())
    }

    pub fn custom(f: impl Fn(NaiveDateTime) -> String + Send + Sync + 'static) -> Self {
        ValueFormat::Custom(Arc::new(f))
    }

    /// Build a pattern format, rejecting patterns chrono cannot render.
    pub fn pattern(pattern: impl Into<String>) -> Result<Self, PickerError> {
        let pattern = pattern.into();
        validate_pattern(&pattern)?;
        Ok(ValueFormat::Pattern(pattern))
    }

    pub fn format(&self, value: NaiveDateTime) -> String {
        match self {
            ValueFormat::Pattern(pattern) => value.format(pattern).to_string(),
            ValueFormat::Custom(f) => f(value),
        }
    }

    /// Field text for an optional value.
    pub fn display(&self, value: Option<NaiveDateTime>) -> String {
        value
            .map(|value| self.format(value))
            .unwrap_or_else(|| EMPTY_VALUE.to_string())
    }
}

pub fn validate_pattern(pattern: &str) -> Result<(), PickerError> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(PickerError::InvalidFormat(pattern.to_string()));
    }
    Ok(())
}

/// Parse a pattern from configuration, falling back to `fallback` when it is invalid.
pub fn pattern_or(pattern: &str, fallback: ValueFormat) -> ValueFormat {
    match ValueFormat::pattern(pattern) {
        Ok(format) => format,
        Err(e) => {
            log::warn!("{}, using default format", e);
            fallback
        }
    }
}
