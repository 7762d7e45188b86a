//! One row of the coffee shop list

use crate::animation::Entrance;
use crate::theme;
use crate::types::CoffeeShop;
use crate::ui::badge::shape_badge;
use crate::ui::components::{muted_label, tag_chips};
use crate::ui::icons::Icon;
use eframe::egui;
use egui::{Color32, Stroke};

/// Row chrome that depends on position in the list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemStyle {
    pub top_border: Stroke,
}

impl ItemStyle {
    /// The first row gets a solid divider, the rest a faint one
    pub fn for_index(index: usize) -> Self {
        let color = if index == 0 {
            theme::BORDER_STRONG
        } else {
            theme::BORDER_SUBTLE
        };
        Self {
            top_border: Stroke::new(theme::STROKE_DEFAULT, color),
        }
    }
}

/// Row background: tinted only while the pointer is held down on it
pub fn item_fill(pressed: bool) -> Color32 {
    if pressed {
        theme::BG_ITEM_PRESSED
    } else {
        Color32::TRANSPARENT
    }
}

/// Render a list row. Pressing it only tints the background.
pub fn shop_item(
    ui: &mut egui::Ui,
    shop: &CoffeeShop,
    index: usize,
    entrance: &Entrance,
    badge_rotation: f32,
) -> egui::Response {
    let style = ItemStyle::for_index(index);
    let opacity = entrance.opacity();
    // Slides in from the left: shift margin left by the remaining offset
    let shift = entrance.offset().round() as i8;
    let pad_x = theme::ITEM_PADDING_X as i8;
    let pad_y = theme::ITEM_PADDING_Y as i8;

    let background = ui.painter().add(egui::Shape::Noop);
    let inner = ui.scope(|ui| {
        ui.multiply_opacity(opacity);
        egui::Frame::new()
            .inner_margin(egui::Margin {
                left: pad_x.saturating_sub(shift),
                right: pad_x.saturating_add(shift),
                top: pad_y,
                bottom: pad_y,
            })
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                item_row(ui, shop, badge_rotation);
            });
    });

    let rect = inner.response.rect;
    let response = ui.interact(rect, ui.id().with(("shop_item", shop.id)), egui::Sense::click());
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    let painter = ui.painter();
    let fill = theme::with_opacity(item_fill(response.is_pointer_button_down_on()), opacity);
    painter.set(background, egui::Shape::rect_filled(rect, 0.0, fill));
    painter.line_segment(
        [rect.left_top(), rect.right_top()],
        Stroke::new(
            style.top_border.width,
            theme::with_opacity(style.top_border.color, opacity),
        ),
    );

    response
}

fn item_row(ui: &mut egui::Ui, shop: &CoffeeShop, badge_rotation: f32) {
    ui.horizontal_top(|ui| {
        ui.spacing_mut().item_spacing.x = theme::ITEM_GAP;

        ui.allocate_ui_with_layout(
            egui::vec2(theme::RANK_MIN_WIDTH, 0.0),
            egui::Layout::top_down(egui::Align::Min),
            |ui| {
                ui.set_min_width(theme::RANK_MIN_WIDTH);
                ui.add(
                    egui::Label::new(egui::RichText::new(shop.rank).size(theme::FONT_RANK))
                        .selectable(false),
                );
            },
        );

        let info_width = (ui.available_width() - theme::ITEM_RIGHT_WIDTH - theme::ITEM_GAP).max(0.0);
        ui.allocate_ui_with_layout(
            egui::vec2(info_width, 0.0),
            egui::Layout::top_down(egui::Align::Min),
            |ui| {
                ui.set_width(info_width);
                ui.spacing_mut().item_spacing.y = theme::SPACING_SM;
                ui.add(
                    egui::Label::new(egui::RichText::new(shop.name).size(theme::FONT_SHOP_NAME))
                        .wrap()
                        .selectable(false),
                );
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing.x = theme::SPACING_MD;
                    let body = |s: &str| egui::RichText::new(s).size(theme::FONT_BODY);
                    muted_label(ui, body(shop.address), theme::TEXT_MUTED_OPACITY);
                    muted_label(ui, body("•"), theme::TEXT_MUTED_OPACITY);
                    muted_label(ui, body(shop.specialty).italics(), theme::TEXT_MUTED_OPACITY);
                });
                ui.add_space(theme::SPACING_SM);
                tag_chips(ui, shop.tags);
            },
        );

        ui.allocate_ui_with_layout(
            egui::vec2(theme::ITEM_RIGHT_WIDTH, 0.0),
            egui::Layout::top_down(egui::Align::Max),
            |ui| {
                ui.spacing_mut().item_spacing.y = theme::SPACING_MD;
                shape_badge(ui, shop.shape, shop.rating, badge_rotation);
                ui.add(
                    egui::Label::new(Icon::ChevronRight.rich_text(theme::CHEVRON_SIZE, theme::CHEVRON))
                        .selectable(false),
                );
            },
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_row_divider_stands_out() {
        let first = ItemStyle::for_index(0);
        for index in 1..5 {
            assert_ne!(ItemStyle::for_index(index), first);
        }
    }

    #[test]
    fn later_rows_share_one_divider() {
        let second = ItemStyle::for_index(1);
        for index in 2..10 {
            assert_eq!(ItemStyle::for_index(index), second);
        }
    }

    #[test]
    fn press_tints_background() {
        assert_eq!(item_fill(false), Color32::TRANSPARENT);
        assert_eq!(item_fill(true), theme::BG_ITEM_PRESSED);
    }
}
