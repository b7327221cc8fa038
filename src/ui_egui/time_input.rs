//! Time input: a read-only field that opens the clock.

use std::hash::Hash;

use chrono::NaiveDateTime;
use egui::Id;

use super::clock::show_clock;
use super::input::{InputShell, PickerResponse};
use super::overlay::{AnchorOrigin, Presentation};
use super::theme::PickerTheme;
use crate::models::selection::CommitMode;
use crate::services::clock::{ClockConfig, ClockEngine};
use crate::services::format::ValueFormat;

pub const TIME_ICON: &str = "🕐";

/// Builder for a time field. Call [`TimeFormatInput::show`] once per frame.
pub struct TimeFormatInput<'a> {
    id: Id,
    value: Option<NaiveDateTime>,
    label: Option<String>,
    error: Option<String>,
    format: ValueFormat,
    disabled: bool,
    full_width: bool,
    dialog: bool,
    ok_to_confirm: bool,
    minute_interval: Option<u32>,
    anchor_origin: AnchorOrigin,
    transform_origin: AnchorOrigin,
    end_icon: String,
    theme: PickerTheme,
    on_change: Option<Box<dyn FnMut(NaiveDateTime) + 'a>>,
}

impl<'a> TimeFormatInput<'a> {
    pub fn new(name: impl Hash, value: Option<NaiveDateTime>) -> Self {
        Self {
            id: Id::new(name),
            value,
            label: None,
            error: None,
            format: ValueFormat::default_time(),
            disabled: false,
            full_width: false,
            dialog: false,
            ok_to_confirm: false,
            minute_interval: None,
            anchor_origin: AnchorOrigin::default(),
            transform_origin: AnchorOrigin::top_left(),
            end_icon: TIME_ICON.to_string(),
            theme: PickerTheme::default(),
            on_change: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn time_format(mut self, format: ValueFormat) -> Self {
        self.format = format;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Stretch the field across the available width.
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn dialog(mut self, dialog: bool) -> Self {
        self.dialog = dialog;
        self
    }

    pub fn ok_to_confirm(mut self, ok_to_confirm: bool) -> Self {
        self.ok_to_confirm = ok_to_confirm;
        self
    }

    /// Only offer minutes divisible by `interval`.
    pub fn selectable_minutes_interval(mut self, interval: Option<u32>) -> Self {
        self.minute_interval = interval;
        self
    }

    pub fn anchor_origin(mut self, origin: AnchorOrigin) -> Self {
        self.anchor_origin = origin;
        self
    }

    pub fn transform_origin(mut self, origin: AnchorOrigin) -> Self {
        self.transform_origin = origin;
        self
    }

    pub fn end_icon(mut self, icon: impl Into<String>) -> Self {
        self.end_icon = icon.into();
        self
    }

    pub fn theme(mut self, theme: PickerTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn on_change(mut self, on_change: impl FnMut(NaiveDateTime) + 'a) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    /// Clock configuration; an out-of-range interval is dropped with a warning.
    fn clock_config(&self) -> ClockConfig {
        let config = ClockConfig::new(self.value)
            .with_minute_interval(self.minute_interval)
            .with_commit_mode(CommitMode::from_ok_to_confirm(self.ok_to_confirm));
        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("{}, allowing every minute", e);
                config.with_minute_interval(None)
            }
        }
    }

    pub fn show(mut self, ui: &mut egui::Ui) -> PickerResponse {
        let config = self.clock_config();
        let theme = self.theme;
        let clock_id = self.id.with("clock");

        let shell = InputShell {
            id: self.id,
            value: self.value,
            text: self.format.display(self.value),
            label: self.label.as_deref(),
            error: self.error.as_deref(),
            icon: &self.end_icon,
            disabled: self.disabled,
            full_width: self.full_width,
            presentation: Presentation::new(
                self.dialog,
                self.anchor_origin,
                self.transform_origin,
            ),
            theme: &theme,
        };

        shell.show(
            ui,
            || ClockEngine::new(config),
            |ui, engine, sink| show_clock(ui, clock_id, engine, &theme, sink),
            self.on_change.as_deref_mut(),
        )
    }
}
