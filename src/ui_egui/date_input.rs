//! Date input: a read-only field that opens the calendar.

use std::hash::Hash;
use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveDateTime};
use egui::Id;

use super::calendar::show_calendar;
use super::input::{InputShell, PickerResponse};
use super::overlay::{AnchorOrigin, Presentation};
use super::theme::PickerTheme;
use crate::models::bounds::DateBounds;
use crate::models::selection::CommitMode;
use crate::services::calendar::{CalendarConfig, CalendarEngine, DayPredicate};
use crate::services::format::ValueFormat;

pub const DATE_ICON: &str = "📅";

/// Builder for a date field. Call [`DateFormatInput::show`] once per frame.
pub struct DateFormatInput<'a> {
    id: Id,
    value: Option<NaiveDateTime>,
    label: Option<String>,
    error: Option<String>,
    bounds: DateBounds,
    date_disabled: Option<DayPredicate>,
    format: ValueFormat,
    disabled: bool,
    full_width: bool,
    dialog: bool,
    ok_to_confirm: bool,
    anchor_origin: AnchorOrigin,
    transform_origin: AnchorOrigin,
    end_icon: String,
    theme: PickerTheme,
    today: Option<NaiveDate>,
    on_change: Option<Box<dyn FnMut(NaiveDateTime) + 'a>>,
}

impl<'a> DateFormatInput<'a> {
    pub fn new(name: impl Hash, value: Option<NaiveDateTime>) -> Self {
        Self {
            id: Id::new(name),
            value,
            label: None,
            error: None,
            bounds: DateBounds::unbounded(),
            date_disabled: None,
            format: ValueFormat::default_date(),
            disabled: false,
            full_width: false,
            dialog: false,
            ok_to_confirm: false,
            anchor_origin: AnchorOrigin::default(),
            transform_origin: AnchorOrigin::top_left(),
            end_icon: DATE_ICON.to_string(),
            theme: PickerTheme::default(),
            today: None,
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

    pub fn min(mut self, min: NaiveDateTime) -> Self {
        self.bounds.min = Some(min);
        self
    }

    pub fn max(mut self, max: NaiveDateTime) -> Self {
        self.bounds.max = Some(max);
        self
    }

    pub fn date_disabled(
        mut self,
        predicate: impl Fn(NaiveDate) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.date_disabled = Some(Arc::new(predicate));
        self
    }

    pub fn date_format(mut self, format: ValueFormat) -> Self {
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

    /// Day the calendar opens on when there is no value. Defaults to the local date.
    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn on_change(mut self, on_change: impl FnMut(NaiveDateTime) + 'a) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    fn calendar_config(&self) -> CalendarConfig {
        CalendarConfig {
            value: self.value,
            bounds: self.bounds,
            date_disabled: self.date_disabled.clone(),
            commit_mode: CommitMode::from_ok_to_confirm(self.ok_to_confirm),
        }
    }

    pub fn show(mut self, ui: &mut egui::Ui) -> PickerResponse {
        let config = self.calendar_config();
        let today = self.today.unwrap_or_else(|| Local::now().date_naive());
        let theme = self.theme;

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
            || CalendarEngine::new(config, today),
            |ui, engine, sink| show_calendar(ui, engine, &theme, sink),
            self.on_change.as_deref_mut(),
        )
    }
}
