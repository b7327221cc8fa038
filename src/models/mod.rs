// Module exports for models

pub mod bounds;
pub mod calendar;
pub mod clock;
pub mod selection;
pub mod settings;
