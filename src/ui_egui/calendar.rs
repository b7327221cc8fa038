//! Calendar rendering: month grid, 18-year block and the confirm row.
//!
//! All decisions live in `CalendarEngine`; this module lays out what the
//! engine reports and feeds clicks back into it.

use chrono::{Datelike, NaiveDate};
use egui::{Align2, FontId, RichText, Sense, Vec2};

use super::theme::PickerTheme;
use crate::models::calendar::CalendarMode;
use crate::services::calendar::CalendarEngine;
use crate::services::selection::PickerListener;
use crate::utils::date::{is_same_day, start_of_day, WEEKDAY_LABELS};

const MIN_CELL: f32 = 32.0;
const MAX_CELL: f32 = 44.0;
const CALENDAR_WIDTH: f32 = 280.0;

/// Side of one day cell for a calendar `width` wide.
pub fn day_cell_size(width: f32) -> f32 {
    (width / 7.0).floor().clamp(MIN_CELL, MAX_CELL)
}

/// Months to move for one frame of wheel input, scrolling up goes back.
pub fn scroll_step(delta_y: f32) -> i32 {
    if delta_y > 0.5 {
        -1
    } else if delta_y < -0.5 {
        1
    } else {
        0
    }
}

pub fn show_calendar(
    ui: &mut egui::Ui,
    engine: &mut CalendarEngine,
    theme: &PickerTheme,
    listener: &mut dyn PickerListener,
) {
    let cell = day_cell_size(CALENDAR_WIDTH);
    ui.set_width(cell * 7.0);

    match engine.mode() {
        CalendarMode::Month => {
            month_header(ui, engine);
            ui.add_space(4.0);
            ui.scope(|ui| month_body(ui, engine, theme, cell, listener));
        }
        CalendarMode::Year => {
            year_header(ui, engine);
            ui.add_space(4.0);
            ui.scope(|ui| year_body(ui, engine, theme, cell * 7.0));
        }
    }

    if engine.commit_mode().is_deferred() {
        ui.add_space(6.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("OK").clicked() {
                engine.confirm(listener);
            }
            if ui.button("CANCEL").clicked() {
                engine.cancel(listener);
            }
        });
    }
}

fn month_header(ui: &mut egui::Ui, engine: &mut CalendarEngine) {
    ui.horizontal(|ui| {
        if ui
            .add_enabled(engine.previous_month_valid(), egui::Button::new("◀").small())
            .on_hover_text("Previous month")
            .clicked()
        {
            engine.previous_month();
        }

        let title = engine.title();
        if ui
            .selectable_label(false, RichText::new(title).strong())
            .on_hover_text("Choose a year")
            .clicked()
        {
            engine.show_years();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(engine.next_month_valid(), egui::Button::new("▶").small())
                .on_hover_text("Next month")
                .clicked()
            {
                engine.next_month();
            }
        });
    });
}

fn month_body(
    ui: &mut egui::Ui,
    engine: &mut CalendarEngine,
    theme: &PickerTheme,
    cell: f32,
    listener: &mut dyn PickerListener,
) {
    ui.spacing_mut().item_spacing = Vec2::ZERO;

    ui.horizontal(|ui| {
        for label in WEEKDAY_LABELS {
            let (rect, _) = ui.allocate_exact_size(Vec2::new(cell, 24.0), Sense::hover());
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                label,
                FontId::proportional(12.0),
                theme.text_hint,
            );
        }
    });

    let grid = ui.vertical(|ui| {
        for week in engine.current_month_grid() {
            ui.horizontal(|ui| {
                for slot in week {
                    match slot {
                        Some(date) => {
                            if day_cell(ui, engine, theme, date, cell) {
                                engine.select_day(date, listener);
                            }
                        }
                        None => {
                            ui.allocate_exact_size(Vec2::splat(cell), Sense::hover());
                        }
                    }
                }
            });
        }
    });

    if grid.response.contains_pointer() {
        let step = scroll_step(ui.input(|i| i.raw_scroll_delta.y));
        if step != 0 {
            engine.change_month_index(engine.cursor().month_index() + step);
        }
    }
}

/// Draw one day; returns true when it was clicked and may be selected.
fn day_cell(
    ui: &mut egui::Ui,
    engine: &CalendarEngine,
    theme: &PickerTheme,
    date: NaiveDate,
    cell: f32,
) -> bool {
    let disabled = engine.is_day_disabled(date);
    let selected = engine
        .active_day()
        .is_some_and(|active| is_same_day(active, start_of_day(date)));
    let sense = if disabled {
        Sense::hover()
    } else {
        Sense::click()
    };
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(cell), sense);

    let painter = ui.painter();
    let radius = cell / 2.0 - 3.0;
    if selected {
        let fill = if response.hovered() {
            theme.primary_dark
        } else {
            theme.primary
        };
        painter.circle_filled(rect.center(), radius, fill);
    } else if response.hovered() && !disabled {
        painter.circle_filled(rect.center(), radius, theme.primary.gamma_multiply(0.2));
    }

    let color = if selected {
        theme.primary_contrast
    } else if disabled {
        theme.text_disabled
    } else {
        theme.text_primary
    };
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        date.day().to_string(),
        FontId::proportional(14.0),
        color,
    );

    response.clicked() && !disabled
}

fn year_header(ui: &mut egui::Ui, engine: &mut CalendarEngine) {
    ui.horizontal(|ui| {
        if ui
            .add_enabled(engine.previous_years_valid(), egui::Button::new("◀").small())
            .on_hover_text("Earlier years")
            .clicked()
        {
            engine.previous_years();
        }

        let title = engine.year_block_title();
        if ui
            .selectable_label(false, RichText::new(title).strong())
            .on_hover_text("Back to the month")
            .clicked()
        {
            engine.select_year(None);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(engine.next_years_valid(), egui::Button::new("▶").small())
                .on_hover_text("Later years")
                .clicked()
            {
                engine.next_years();
            }
        });
    });
}

fn year_body(ui: &mut egui::Ui, engine: &mut CalendarEngine, theme: &PickerTheme, width: f32) {
    let shown_year = engine.cursor().year;
    let cell = Vec2::new(width / 3.0, 36.0);
    let mut picked = None;

    ui.spacing_mut().item_spacing = Vec2::ZERO;
    for row in engine.current_year_grid() {
        ui.horizontal(|ui| {
            for year in row {
                let current = year == shown_year;
                let disabled = engine.is_year_disabled(year);
                let sense = if disabled {
        Sense::hover()
    } else {
        Sense::click()
    };
                let (rect, response) = ui.allocate_exact_size(cell, sense);

                if current {
                    ui.painter()
                        .rect_filled(rect.shrink(4.0), 16.0, theme.primary);
                } else if response.hovered() && !disabled {
                    ui.painter()
                        .rect_filled(rect.shrink(4.0), 16.0, theme.primary.gamma_multiply(0.2));
                }

                let color = if current {
                    theme.primary_contrast
                } else if disabled {
                    theme.text_disabled
                } else {
                    theme.text_primary
                };
                ui.painter().text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    year.to_string(),
                    FontId::proportional(15.0),
                    color,
                );

                if response.clicked() && !disabled {
                    picked = Some(year);
                }
            }
        });
    }

    if let Some(year) = picked {
        engine.select_year(Some(year));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::selection::CommitMode;
    use crate::services::calendar::CalendarConfig;
    use crate::services::selection::ChangeSink;
    use test_case::test_case;

    #[test_case(280.0, 40.0 ; "fits seven columns")]
    #[test_case(100.0, MIN_CELL ; "never below minimum")]
    #[test_case(700.0, MAX_CELL ; "never above maximum")]
    fn test_day_cell_size(width: f32, expected: f32) {
        assert_eq!(day_cell_size(width), expected);
    }

    #[test]
    fn test_scroll_step() {
        assert_eq!(scroll_step(40.0), -1);
        assert_eq!(scroll_step(-40.0), 1);
        assert_eq!(scroll_step(0.1), 0);
    }

    fn run_frame(engine: &mut CalendarEngine, sink: &mut ChangeSink) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                show_calendar(ui, engine, &PickerTheme::default(), sink);
            });
        });
    }

    #[test]
    fn test_renders_both_modes_without_input() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let config = CalendarConfig::new(None).with_commit_mode(CommitMode::Deferred);
        let mut engine = CalendarEngine::new(config, today);
        let mut sink = ChangeSink::new();

        run_frame(&mut engine, &mut sink);
        engine.show_years();
        run_frame(&mut engine, &mut sink);

        assert_eq!(sink, ChangeSink::default());
        assert_eq!(engine.mode(), CalendarMode::Year);
    }
}
