//! Reusable UI components
//!
//! This module contains standalone UI components that can be used
//! throughout the screen.

use crate::theme;
use crate::types::ShopTag;
use crate::ui::icons::Icon;
use eframe::egui;

/// Chip labels for a tag list: one per tag, in order, duplicates kept
pub fn chip_labels(tags: &[ShopTag]) -> Vec<&'static str> {
    tags.iter().map(|t| t.label()).collect()
}

/// Pill-shaped outlined label
pub fn chip(ui: &mut egui::Ui, label: &str) -> egui::Response {
    theme::chip_frame()
        .show(ui, |ui| {
            ui.add(
                egui::Label::new(egui::RichText::new(label).size(theme::FONT_CHIP))
                    .selectable(false),
            );
        })
        .response
}

/// Wrapped row of tag chips
pub fn tag_chips(ui: &mut egui::Ui, tags: &[ShopTag]) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(theme::SPACING_CHIP, theme::SPACING_CHIP);
        for label in chip_labels(tags) {
            chip(ui, label);
        }
    });
}

/// Label at an opacity relative to the primary text color
pub fn muted_label(ui: &mut egui::Ui, text: egui::RichText, opacity: f32) -> egui::Response {
    ui.add(
        egui::Label::new(text.color(theme::with_opacity(theme::TEXT_PRIMARY, opacity)))
            .selectable(false),
    )
}

/// Outlined pill button with a trailing chevron; inverts while pressed
pub fn pill_button(ui: &mut egui::Ui, label: &str) -> egui::Response {
    let text = label.to_uppercase();
    let font = egui::FontId::proportional(theme::FONT_LOAD_MORE);
    let icon_font = egui::FontId::proportional(14.0);
    let gap = theme::SPACING_MD;
    let padding = egui::vec2(24.0, 12.0);

    let text_size = ui
        .painter()
        .layout_no_wrap(text.clone(), font.clone(), theme::TEXT_PRIMARY)
        .size();
    let icon_size = ui
        .painter()
        .layout_no_wrap(Icon::ChevronRight.glyph().to_owned(), icon_font, theme::TEXT_PRIMARY)
        .size();
    let size = egui::vec2(
        padding.x * 2.0 + text_size.x + gap + icon_size.x,
        padding.y * 2.0 + text_size.y.max(icon_size.y),
    );

    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    if ui.is_rect_visible(rect) {
        let (fill, text_color) = theme::pill_button_visual(&response);
        let painter = ui.painter();
        painter.rect_filled(rect, theme::RADIUS_PILL, fill);
        painter.rect_stroke(
            rect,
            theme::RADIUS_PILL,
            egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_STRONG),
            egui::StrokeKind::Inside,
        );
        let text_pos = egui::pos2(rect.min.x + padding.x, rect.center().y);
        let text_rect = painter.text(text_pos, egui::Align2::LEFT_CENTER, text, font, text_color);
        Icon::ChevronRight.paint(
            painter,
            egui::pos2(text_rect.max.x + gap, rect.center().y),
            egui::Align2::LEFT_CENTER,
            14.0,
            text_color,
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_chip_per_tag_in_order() {
        assert_eq!(
            chip_labels(&[ShopTag::LaptopFriendly, ShopTag::Patio]),
            ["Laptop Friendly", "Patio"]
        );
    }

    #[test]
    fn duplicate_tags_are_not_collapsed() {
        assert_eq!(
            chip_labels(&[ShopTag::Patio, ShopTag::Busy, ShopTag::Patio]),
            ["Patio", "Busy", "Patio"]
        );
    }

    #[test]
    fn no_tags_no_chips() {
        assert!(chip_labels(&[]).is_empty());
    }
}
