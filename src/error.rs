//! Error type for picker configuration.
//!
//! Interaction never fails: out-of-range navigation is refused through the
//! validity predicates instead. Only configuration can be rejected.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    /// A date/time pattern that chrono cannot render
    #[error("Invalid format pattern: {0}")]
    InvalidFormat(String),

    /// Minute interval must be a positive number of minutes
    #[error("Minute interval must be between 1 and 60, got {0}")]
    InvalidMinuteInterval(u32),

    /// Theme name that has no preset
    #[error("Unknown theme: {0}")]
    InvalidTheme(String),
}
