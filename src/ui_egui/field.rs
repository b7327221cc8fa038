//! Read-only text field the inputs render their value in.

use egui::{Align2, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::PickerTheme;

const LABEL_ROW: f32 = 16.0;
const VALUE_ROW: f32 = 24.0;
const ERROR_ROW: f32 = 18.0;
const DEFAULT_FIELD_WIDTH: f32 = 240.0;

/// Everything the field draws for one frame.
#[derive(Debug, Clone, Copy)]
pub struct FieldParts<'a> {
    pub label: Option<&'a str>,
    pub text: &'a str,
    pub error: Option<&'a str>,
    pub icon: &'a str,
    pub floating: bool,
    pub focused: bool,
    pub disabled: bool,
    pub full_width: bool,
}

/// Total height of the field, including the error line when present.
pub fn field_height(has_error: bool) -> f32 {
    let base = LABEL_ROW + VALUE_ROW + 2.0;
    if has_error {
        base + ERROR_ROW
    } else {
        base
    }
}

/// Width of the field given the space left in the layout.
pub fn field_width(available: f32, full_width: bool) -> f32 {
    if full_width {
        available
    } else {
        available.min(DEFAULT_FIELD_WIDTH)
    }
}

pub fn show_field(
    ui: &mut egui::Ui,
    parts: &FieldParts<'_>,
    theme: &PickerTheme,
) -> egui::Response {
    let width = field_width(ui.available_width(), parts.full_width);
    let sense = if parts.disabled {
        Sense::hover()
    } else {
        Sense::click()
    };
    let size = Vec2::new(width, field_height(parts.error.is_some()));
    let (rect, response) = ui.allocate_exact_size(size, sense);

    if !ui.is_rect_visible(rect) {
        return response;
    }

    let painter = ui.painter_at(rect.expand(1.0));
    let accent = if parts.error.is_some() {
        theme.error
    } else if parts.focused {
        theme.primary
    } else {
        theme.text_hint
    };
    let text_color = if parts.disabled {
        theme.text_disabled
    } else {
        theme.text_primary
    };

    let value_rect = Rect::from_min_size(
        Pos2::new(rect.left(), rect.top() + LABEL_ROW),
        Vec2::new(rect.width(), VALUE_ROW),
    );

    if let Some(label) = parts.label {
        if parts.floating {
            painter.text(
                rect.left_top(),
                Align2::LEFT_TOP,
                label,
                FontId::proportional(12.0),
                accent,
            );
        } else {
            painter.text(
                value_rect.left_center(),
                Align2::LEFT_CENTER,
                label,
                FontId::proportional(16.0),
                theme.text_hint,
            );
        }
    }

    if parts.floating || parts.label.is_none() {
        painter.text(
            value_rect.left_center(),
            Align2::LEFT_CENTER,
            parts.text,
            FontId::proportional(16.0),
            text_color,
        );
    }

    painter.text(
        value_rect.right_center(),
        Align2::RIGHT_CENTER,
        parts.icon,
        FontId::proportional(16.0),
        text_color,
    );

    let underline_y = value_rect.bottom() + 1.0;
    let underline = if parts.focused && !parts.disabled {
        Stroke::new(2.0, accent)
    } else {
        let color = if parts.error.is_some() {
            theme.error
        } else {
            theme.field_border
        };
        Stroke::new(1.0, color)
    };
    painter.hline(rect.x_range(), underline_y, underline);

    if let Some(error) = parts.error {
        painter.text(
            Pos2::new(rect.left(), underline_y + 3.0),
            Align2::LEFT_TOP,
            error,
            FontId::proportional(12.0),
            theme.error,
        );
    }

    if parts.disabled {
        response
    } else {
        response.on_hover_cursor(egui::CursorIcon::PointingHand)
    }
}
