//! Shared shell behind `DateFormatInput` and `TimeFormatInput`.
//!
//! Draws the field, owns overlay visibility and keeps the open engine in egui
//! memory until the overlay closes.

use chrono::NaiveDateTime;
use egui::{Id, Rect};

use super::field::{show_field, FieldParts};
use super::overlay::{show_overlay, OverlayState, Presentation};
use super::theme::PickerTheme;
use crate::services::calendar::CalendarEngine;
use crate::services::clock::ClockEngine;
use crate::services::selection::ChangeSink;

/// Engine an input can hold open between frames.
pub trait OverlayEngine: Clone + Send + Sync + 'static {
    fn sync_value(&mut self, value: Option<NaiveDateTime>);
}

impl OverlayEngine for CalendarEngine {
    fn sync_value(&mut self, value: Option<NaiveDateTime>) {
        CalendarEngine::sync_value(self, value);
    }
}

impl OverlayEngine for ClockEngine {
    fn sync_value(&mut self, value: Option<NaiveDateTime>) {
        ClockEngine::sync_value(self, value);
    }
}

/// Result of showing an input for one frame.
pub struct PickerResponse {
    /// Response of the field itself
    pub response: egui::Response,
    /// Value committed this frame, already passed to `on_change`
    pub changed: Option<NaiveDateTime>,
    pub open: bool,
}

pub(super) struct InputShell<'s> {
    pub id: Id,
    pub value: Option<NaiveDateTime>,
    pub text: String,
    pub label: Option<&'s str>,
    pub error: Option<&'s str>,
    pub icon: &'s str,
    pub disabled: bool,
    pub full_width: bool,
    pub presentation: Presentation,
    pub theme: &'s PickerTheme,
}

impl InputShell<'_> {
    pub fn show<E: OverlayEngine>(
        self,
        ui: &mut egui::Ui,
        make_engine: impl FnOnce() -> E,
        draw: impl FnOnce(&mut egui::Ui, &mut E, &mut ChangeSink),
        on_change: Option<&mut (dyn FnMut(NaiveDateTime) + '_)>,
    ) -> PickerResponse {
        let ctx = ui.ctx().clone();
        let engine_id = self.id.with("engine");
        let mut state = OverlayState::load(&ctx, self.id);

        if state.observe_value(self.value) {
            log::debug!("{:?}: value changed while open, closing", self.id);
        }

        let parts = FieldParts {
            label: self.label,
            text: &self.text,
            error: self.error,
            icon: self.icon,
            floating: state.label_floating(self.value.is_some()),
            focused: state.focused,
            disabled: self.disabled,
            full_width: self.full_width,
        };
        let response = show_field(ui, &parts, self.theme);
        if response.clicked() {
            state.toggle(self.disabled);
        }

        let mut changed = None;
        if state.open {
            let mut engine = ctx
                .memory_mut(|mem| mem.data.get_temp::<E>(engine_id))
                .unwrap_or_else(make_engine);
            engine.sync_value(self.value);

            let mut sink = ChangeSink::new();
            let (_, overlay_rect) =
                show_overlay(&ctx, self.id, self.presentation, response.rect, |ui| {
                    draw(ui, &mut engine, &mut sink)
                });
            state.overlay_rect = Some(overlay_rect);

            let field_rect = match self.presentation {
                Presentation::Dialog => Rect::NOTHING,
                Presentation::Popover { .. } => response.rect,
            };
            let pressed_outside = ctx.input(|i| {
                i.pointer.any_pressed()
                    && i.pointer
                        .press_origin()
                        .is_some_and(|pos| state.is_outside_click(pos, field_rect))
            });

            if let Some(value) = sink.last_change() {
                state.note_emitted(value);
                engine.sync_value(Some(value));
                if let Some(on_change) = on_change {
                    on_change(value);
                }
                changed = Some(value);
            }

            if sink.close_requested || pressed_outside {
                state.close();
            } else {
                ctx.memory_mut(|mem| mem.data.insert_temp(engine_id, engine));
            }
        }

        if !state.open {
            ctx.memory_mut(|mem| mem.data.remove::<E>(engine_id));
        }
        state.focused = state.open;
        let open = state.open;
        state.store(&ctx, self.id);

        PickerResponse {
            response,
            changed,
            open,
        }
    }
}
