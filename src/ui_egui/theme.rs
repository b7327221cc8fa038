//! Theme module for the picker widgets
//!
//! Defines the PickerTheme structure with the colors the calendar, the clock
//! and the input fields draw with.

use egui::Color32;

use crate::error::PickerError;

/// Colors used by the picker widgets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Selected day/year background and clock hand
    pub primary: Color32,

    /// Selected day background while hovered
    pub primary_dark: Color32,

    /// Text drawn on top of `primary`
    pub primary_contrast: Color32,

    /// Clock face background
    pub face_background: Color32,

    /// Regular text
    pub text_primary: Color32,

    /// Weekday labels and inactive ring labels
    pub text_hint: Color32,

    /// Disabled days and years
    pub text_disabled: Color32,

    /// Error text under the input field
    pub error: Color32,

    /// Input field underline
    pub field_border: Color32,
}

impl PickerTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            primary: Color32::from_rgb(63, 81, 181),
            primary_dark: Color32::from_rgb(48, 63, 159),
            primary_contrast: Color32::WHITE,
            face_background: Color32::from_rgb(224, 224, 224),
            text_primary: Color32::from_rgb(33, 33, 33),
            text_hint: Color32::from_rgb(117, 117, 117),
            text_disabled: Color32::from_rgb(189, 189, 189),
            error: Color32::from_rgb(244, 67, 54),
            field_border: Color32::from_rgb(158, 158, 158),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            primary: Color32::from_rgb(121, 134, 203),
            primary_dark: Color32::from_rgb(92, 107, 192),
            primary_contrast: Color32::from_rgb(18, 18, 18),
            face_background: Color32::from_rgb(66, 66, 66),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_hint: Color32::from_rgb(170, 170, 170),
            text_disabled: Color32::from_rgb(97, 97, 97),
            error: Color32::from_rgb(239, 154, 154),
            field_border: Color32::from_rgb(117, 117, 117),
        }
    }

    /// Look up a preset by the name used in the settings file
    pub fn from_name(name: &str) -> Result<Self, PickerError> {
        match name.to_ascii_lowercase().as_str() {
            "light" => Ok(Self::light()),
            "dark" => Ok(Self::dark()),
            _ => Err(PickerError::InvalidTheme(name.to_string())),
        }
    }

    /// Apply the base visuals for this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.selection.bg_fill = self.primary;
        visuals.selection.stroke.color = self.primary_contrast;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

impl Default for PickerTheme {
    fn default() -> Self {
        Self::light()
    }
}
