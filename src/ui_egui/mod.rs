pub mod calendar;
pub mod clock;
pub mod date_input;
pub mod demo;
pub mod field;
mod input;
pub mod overlay;
pub mod pointer;
pub mod theme;
pub mod time_input;

pub use date_input::DateFormatInput;
pub use demo::PickerDemoApp;
pub use input::{OverlayEngine, PickerResponse};
pub use overlay::{AnchorOrigin, HorizontalOrigin, Presentation, VerticalOrigin};
pub use theme::PickerTheme;
pub use time_input::TimeFormatInput;
