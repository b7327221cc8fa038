//! Clock rendering: digital readout, AM/PM toggle and the analog face.

use egui::{Align2, FontId, Id, Pos2, RichText, Sense, Stroke, Vec2};

use super::pointer::{face_samples, PointerFrame};
use super::theme::PickerTheme;
use crate::models::clock::{ClockMode, Period};
use crate::services::clock::geometry::{point_at, position_angle, DEFAULT_FACE_WIDTH};
use crate::services::clock::ClockEngine;
use crate::services::selection::PickerListener;
use crate::utils::date::fill_in_digit;

const HAND_HEAD_RADIUS: f32 = 21.0;
const MINUTE_DOT_RADIUS: f32 = 2.0;

/// Text drawn for an option on the active ring; `None` draws a dot.
pub fn option_label(mode: ClockMode, option: u32) -> Option<String> {
    match mode {
        ClockMode::Hour => Some(option.to_string()),
        ClockMode::Minute if option % 5 == 0 => Some(fill_in_digit(option, 2)),
        ClockMode::Minute => None,
    }
}

pub fn show_clock(
    ui: &mut egui::Ui,
    id: Id,
    engine: &mut ClockEngine,
    theme: &PickerTheme,
    listener: &mut dyn PickerListener,
) {
    readout(ui, engine, theme, listener);
    ui.add_space(8.0);
    face(ui, id, engine, theme, listener);

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

fn readout(
    ui: &mut egui::Ui,
    engine: &mut ClockEngine,
    theme: &PickerTheme,
    listener: &mut dyn PickerListener,
) {
    let display = engine.display();
    let mode = engine.mode();
    let color_for = |active: bool| {
        if active {
            theme.primary
        } else {
            theme.text_hint
        }
    };

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 2.0;

        let hour = RichText::new(display.hour12.to_string())
            .size(40.0)
            .color(color_for(mode == ClockMode::Hour));
        if ui.add(egui::Label::new(hour).sense(Sense::click())).clicked() {
            engine.set_mode(ClockMode::Hour);
        }

        ui.label(RichText::new(":").size(40.0).color(theme.text_hint));

        let minute = RichText::new(fill_in_digit(display.minute, 2))
            .size(40.0)
            .color(color_for(mode == ClockMode::Minute));
        if ui.add(egui::Label::new(minute).sense(Sense::click())).clicked() {
            engine.set_mode(ClockMode::Minute);
        }

        ui.add_space(8.0);
        ui.vertical(|ui| {
            for period in [Period::Am, Period::Pm] {
                let label = RichText::new(period.label())
                    .size(16.0)
                    .color(color_for(display.period == period));
                if ui.add(egui::Label::new(label).sense(Sense::click())).clicked() {
                    engine.set_period(period, listener);
                }
            }
        });
    });
}

fn face(
    ui: &mut egui::Ui,
    id: Id,
    engine: &mut ClockEngine,
    theme: &PickerTheme,
    listener: &mut dyn PickerListener,
) {
    let width = ui.available_width().clamp(160.0, DEFAULT_FACE_WIDTH);
    let (rect, _response) = ui.allocate_exact_size(Vec2::splat(width), Sense::click_and_drag());
    engine.set_face_width(rect.width());
    let center = rect.center();

    let pos_id = id.with("last_pointer");
    let last_pos = ui
        .ctx()
        .memory_mut(|mem| mem.data.get_temp::<Pos2>(pos_id))
        .unwrap_or(center);
    let frame = PointerFrame::read(ui.ctx());
    if let Some(pos) = frame.pos {
        ui.ctx().memory_mut(|mem| mem.data.insert_temp(pos_id, pos));
    }
    for sample in face_samples(frame, rect, engine.is_dragging(), last_pos) {
        engine.handle_pointer(sample, center, listener);
    }
    if engine.is_dragging() {
        ui.ctx().request_repaint();
    }

    if !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter();
    painter.circle_filled(center, width / 2.0, theme.face_background);

    let radius = engine.radius();
    let head = point_at(center, radius, engine.hand_angle());
    painter.line_segment([center, head], Stroke::new(2.0, theme.primary));
    painter.circle_filled(center, 4.0, theme.primary);
    painter.circle_filled(head, HAND_HEAD_RADIUS, theme.primary);

    let mode = engine.mode();
    let ring = match mode {
        ClockMode::Hour => 12,
        ClockMode::Minute => 60,
    };
    for option in engine.options() {
        let pos = point_at(center, radius, position_angle((option % ring) as f32, ring));
        let color = if engine.is_selected_option(option) {
            theme.primary_contrast
        } else {
            theme.text_primary
        };
        match option_label(mode, option) {
            Some(text) => {
                painter.text(pos, Align2::CENTER_CENTER, text, FontId::proportional(15.0), color);
            }
            None => {
                painter.circle_filled(pos, MINUTE_DOT_RADIUS, color.gamma_multiply(0.5));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::selection::CommitMode;
    use crate::services::clock::ClockConfig;
    use crate::services::selection::ChangeSink;

    #[test]
    fn test_option_labels() {
        assert_eq!(option_label(ClockMode::Hour, 12).as_deref(), Some("12"));
        assert_eq!(option_label(ClockMode::Minute, 5).as_deref(), Some("05"));
        assert_eq!(option_label(ClockMode::Minute, 7), None);
    }

    #[test]
    fn test_renders_without_input() {
        let ctx = egui::Context::default();
        let config = ClockConfig::new(None).with_commit_mode(CommitMode::Deferred);
        let mut engine = ClockEngine::new(config);
        let mut sink = ChangeSink::new();

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                show_clock(ui, Id::new("clock"), &mut engine, &PickerTheme::default(), &mut sink);
            });
        });

        assert_eq!(sink, ChangeSink::default());
        assert!(!engine.is_dragging());
    }
}
