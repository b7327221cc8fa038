//! Popover and dialog chrome for the pickers.
//!
//! Each input keeps an [`OverlayState`] in egui memory under its own id. The
//! state decides when the overlay is open; [`show_overlay`] only draws it.

use chrono::NaiveDateTime;
use egui::{Align, Align2, Color32, Id, Order, Pos2, Rect, Sense, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalOrigin {
    Top,
    Center,
    #[default]
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalOrigin {
    #[default]
    Left,
    Center,
    Right,
}

/// A point on a rectangle, named by its edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnchorOrigin {
    pub vertical: VerticalOrigin,
    pub horizontal: HorizontalOrigin,
}

impl AnchorOrigin {
    pub const fn new(vertical: VerticalOrigin, horizontal: HorizontalOrigin) -> Self {
        Self { vertical, horizontal }
    }

    pub const fn top_left() -> Self {
        Self::new(VerticalOrigin::Top, HorizontalOrigin::Left)
    }

    pub fn align2(&self) -> Align2 {
        let x = match self.horizontal {
            HorizontalOrigin::Left => Align::Min,
            HorizontalOrigin::Center => Align::Center,
            HorizontalOrigin::Right => Align::Max,
        };
        let y = match self.vertical {
            VerticalOrigin::Top => Align::Min,
            VerticalOrigin::Center => Align::Center,
            VerticalOrigin::Bottom => Align::Max,
        };
        Align2([x, y])
    }

    /// The named point on `rect`.
    pub fn point_on(&self, rect: Rect) -> Pos2 {
        self.align2().pos_in_rect(&rect)
    }
}

/// How the picker is presented once opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Attached to the field: `anchor` is the point of the field, `transform`
    /// the point of the popover placed on it.
    Popover {
        anchor: AnchorOrigin,
        transform: AnchorOrigin,
    },
    /// Centered modal over a dimmed backdrop
    Dialog,
}

impl Default for Presentation {
    fn default() -> Self {
        Presentation::Popover {
            anchor: AnchorOrigin::default(),
            transform: AnchorOrigin::top_left(),
        }
    }
}

impl Presentation {
    pub fn new(dialog: bool, anchor: AnchorOrigin, transform: AnchorOrigin) -> Self {
        if dialog {
            Presentation::Dialog
        } else {
            Presentation::Popover { anchor, transform }
        }
    }
}

/// Visibility bookkeeping for one input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverlayState {
    pub open: bool,
    pub focused: bool,
    /// External value seen on the previous frame
    pub last_value: Option<NaiveDateTime>,
    /// Last value this input reported to its caller
    pub emitted: Option<NaiveDateTime>,
    /// Where the overlay was drawn on the previous frame
    pub overlay_rect: Option<Rect>,
}

impl OverlayState {
    pub fn load(ctx: &egui::Context, id: Id) -> Self {
        ctx.memory_mut(|mem| mem.data.get_temp::<Self>(id))
            .unwrap_or_default()
    }

    pub fn store(self, ctx: &egui::Context, id: Id) {
        ctx.memory_mut(|mem| mem.data.insert_temp(id, self));
    }

    /// Flip visibility on a field click. Returns whether it is open afterwards.
    pub fn toggle(&mut self, disabled: bool) -> bool {
        if disabled {
            return self.open;
        }
        if self.open {
            self.close();
        } else {
            self.open = true;
            self.focused = true;
            self.emitted = None;
        }
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
        self.overlay_rect = None;
        self.emitted = None;
    }

    pub fn note_emitted(&mut self, value: NaiveDateTime) {
        self.emitted = Some(value);
    }

    /// Track the caller's value. A change that did not come from this input
    /// while the overlay is open closes it. Returns true when it did.
    pub fn observe_value(&mut self, value: Option<NaiveDateTime>) -> bool {
        let changed = value != self.last_value;
        self.last_value = value;
        if !changed || !self.open {
            return false;
        }
        if value.is_some() && value == self.emitted {
            return false;
        }
        self.close();
        true
    }

    /// Whether a click at `pos` landed outside both the field and the overlay.
    /// Pass `Rect::NOTHING` as `field_rect` when a backdrop hides the field.
    pub fn is_outside_click(&self, pos: Pos2, field_rect: Rect) -> bool {
        !field_rect.contains(pos) && !self.overlay_rect.is_some_and(|rect| rect.contains(pos))
    }

    pub fn label_floating(&self, has_value: bool) -> bool {
        self.focused || self.open || has_value
    }
}

/// Draw the overlay for `presentation` and return what `add_contents`
/// returned along with the rect it occupied.
pub fn show_overlay<R>(
    ctx: &egui::Context,
    id: Id,
    presentation: Presentation,
    field_rect: Rect,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> (R, Rect) {
    match presentation {
        Presentation::Popover { anchor, transform } => {
            let response = egui::Area::new(id.with("popover"))
                .order(Order::Foreground)
                .fixed_pos(anchor.point_on(field_rect))
                .pivot(transform.align2())
                .show(ctx, |ui| {
                    egui::Frame::popup(ui.style())
                        .show(ui, add_contents)
                        .inner
                });
            (response.inner, response.response.rect)
        }
        Presentation::Dialog => {
            let screen = ctx.screen_rect();
            // Widgets under the dialog must not see clicks meant for the backdrop
            egui::Area::new(id.with("backdrop"))
                .order(Order::Middle)
                .fixed_pos(screen.min)
                .interactable(true)
                .show(ctx, |ui| {
                    ui.allocate_rect(screen, Sense::click());
                    ui.painter()
                        .rect_filled(screen, 0.0, Color32::from_black_alpha(128));
                });

            let response = egui::Area::new(id.with("dialog"))
                .order(Order::Foreground)
                .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
                .show(ctx, |ui| {
                    egui::Frame::window(ui.style())
                        .show(ui, add_contents)
                        .inner
                });
            (response.inner, response.response.rect)
        }
    }
}
