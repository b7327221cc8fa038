//! Demo window showing a date input and a time input side by side.

use chrono::{Local, NaiveDateTime};

use super::date_input::DateFormatInput;
use super::theme::PickerTheme;
use super::time_input::TimeFormatInput;
use crate::models::settings::PickerSettings;
use crate::services::format::{pattern_or, ValueFormat};

pub struct PickerDemoApp {
    settings: PickerSettings,
    theme: PickerTheme,
    date_format: ValueFormat,
    time_format: ValueFormat,
    date: Option<NaiveDateTime>,
    time: Option<NaiveDateTime>,
    disabled: bool,
}

impl PickerDemoApp {
    pub fn new(settings: PickerSettings) -> Self {
        let theme = PickerTheme::from_name(&settings.theme).unwrap_or_else(|e| {
            log::warn!("{}, using the light theme", e);
            PickerTheme::light()
        });
        let date_format = pattern_or(&settings.date_format, ValueFormat::default_date());
        let time_format = pattern_or(&settings.time_format, ValueFormat::default_time());

        Self {
            settings,
            theme,
            date_format,
            time_format,
            date: None,
            time: Some(Local::now().naive_local()),
            disabled: false,
        }
    }

    pub fn theme(&self) -> &PickerTheme {
        &self.theme
    }

    fn date_error(&self) -> Option<&'static str> {
        if self.date.is_none() && !self.disabled {
            Some("Pick a date")
        } else {
            None
        }
    }
}

impl eframe::App for PickerDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Pickers");
            ui.checkbox(&mut self.disabled, "Disable inputs");
            ui.add_space(12.0);

            let mut date_input = DateFormatInput::new("demo_date", self.date)
                .label("Date")
                .date_format(self.date_format.clone())
                .disabled(self.disabled)
                .dialog(self.settings.dialog)
                .ok_to_confirm(self.settings.ok_to_confirm)
                .theme(self.theme);
            if let Some(error) = self.date_error() {
                date_input = date_input.error(error);
            }
            let date = &mut self.date;
            date_input
                .on_change(|value| {
                    log::info!("Date changed to {}", value);
                    *date = Some(value);
                })
                .show(ui);

            ui.add_space(12.0);

            let time = &mut self.time;
            TimeFormatInput::new("demo_time", *time)
                .label("Time")
                .time_format(self.time_format.clone())
                .disabled(self.disabled)
                .dialog(self.settings.dialog)
                .ok_to_confirm(self.settings.ok_to_confirm)
                .selectable_minutes_interval(self.settings.minute_interval)
                .theme(self.theme)
                .on_change(|value| {
                    log::info!("Time changed to {}", value);
                    *time = Some(value);
                })
                .show(ui);
        });
    }
}
