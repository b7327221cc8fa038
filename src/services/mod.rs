// Service module exports

pub mod calendar;
pub mod clock;
pub mod format;
pub mod selection;
pub mod settings;
