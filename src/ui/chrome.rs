//! Fixed overlay chrome: scroll-reactive header and floating tab bar

use crate::constants::{HEADER_LOCATION, HEADER_SCROLL_THRESHOLD, HEADER_SORT};
use crate::theme;
use crate::types::{Insets, Tab};
use crate::ui::icons::Icon;
use eframe::egui;
use egui::{Color32, Stroke};

/// Header look for a given scroll offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderStyle {
    pub fill: Color32,
    pub bottom_border: Stroke,
}

impl HeaderStyle {
    pub fn for_offset(offset: f32) -> Self {
        if is_scrolled(offset) {
            Self {
                fill: theme::BG_HEADER_SCROLLED,
                bottom_border: Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_STRONG),
            }
        } else {
            Self {
                fill: Color32::TRANSPARENT,
                bottom_border: Stroke::NONE,
            }
        }
    }
}

/// Whether the content has scrolled far enough to fill the header
pub fn is_scrolled(offset: f32) -> bool {
    offset >= HEADER_SCROLL_THRESHOLD
}

pub fn tab_icon(tab: Tab) -> Icon {
    match tab {
        Tab::List => Icon::List,
        Tab::Map => Icon::Map,
        Tab::Saved => Icon::Bookmark,
    }
}

pub fn tab_color(tab: Tab, active: Tab) -> Color32 {
    if tab == active {
        theme::NAV_ACTIVE
    } else {
        theme::NAV_INACTIVE
    }
}

/// Paint the fixed header across the top of the screen
pub fn header(ctx: &egui::Context, insets: Insets, style: HeaderStyle) {
    let screen = ctx.screen_rect();
    let height = insets.top + theme::HEADER_PADDING * 2.0 + theme::HEADER_CONTENT_HEIGHT;

    egui::Area::new(egui::Id::new("fixed_header"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .interactable(false)
        .show(ctx, |ui| {
            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(screen.width(), height), egui::Sense::hover());
            let painter = ui.painter();
            painter.rect_filled(rect, 0.0, style.fill);
            if style.bottom_border.width > 0.0 {
                painter.line_segment([rect.left_bottom(), rect.right_bottom()], style.bottom_border);
            }

            let content = egui::Rect::from_min_max(
                egui::pos2(rect.min.x + theme::HEADER_PADDING, rect.min.y + insets.top + theme::HEADER_PADDING),
                egui::pos2(rect.max.x - theme::HEADER_PADDING, rect.max.y - theme::HEADER_PADDING),
            );
            let label_font = egui::FontId::proportional(theme::FONT_CAPTION);
            let value_font = egui::FontId::proportional(theme::FONT_BODY);
            let label_color = theme::with_opacity(theme::TEXT_PRIMARY, theme::TEXT_LABEL_OPACITY);
            let value_y = content.min.y + theme::FONT_CAPTION + theme::SPACING_XS + theme::FONT_BODY / 2.0 + 2.0;

            // Location column
            painter.text(
                content.left_top(),
                egui::Align2::LEFT_TOP,
                "LOCATION",
                label_font.clone(),
                label_color,
            );
            let arrow = Icon::Navigation.paint(
                painter,
                egui::pos2(content.min.x, value_y),
                egui::Align2::LEFT_CENTER,
                theme::FONT_CAPTION,
                theme::ACCENT_LOCATION,
            );
            painter.text(
                egui::pos2(arrow.max.x + theme::SPACING_SM, value_y),
                egui::Align2::LEFT_CENTER,
                HEADER_LOCATION,
                value_font.clone(),
                theme::TEXT_PRIMARY,
            );

            // Sort column
            painter.text(
                content.right_top(),
                egui::Align2::RIGHT_TOP,
                "SORTING BY",
                label_font,
                label_color,
            );
            let filter = Icon::Filter.paint(
                painter,
                egui::pos2(content.max.x, value_y),
                egui::Align2::RIGHT_CENTER,
                theme::FONT_CAPTION,
                theme::TEXT_PRIMARY,
            );
            painter.text(
                egui::pos2(filter.min.x - theme::SPACING_SM, value_y),
                egui::Align2::RIGHT_CENTER,
                HEADER_SORT,
                value_font,
                theme::TEXT_PRIMARY,
            );
        });
}

/// Paint the floating tab bar. Returns the tab tapped this frame, if any.
pub fn bottom_nav(ctx: &egui::Context, insets: Insets, active: Tab) -> Option<Tab> {
    let tab_count = Tab::ALL.len() as f32;
    let label_height = theme::FONT_CAPTION + 2.0;
    let tab_height = theme::NAV_ICON_SIZE + theme::SPACING_SM + label_height;
    let size = egui::vec2(
        theme::NAV_PADDING_X * 2.0
            + theme::NAV_TAB_WIDTH * tab_count
            + theme::NAV_TAB_GAP * (tab_count - 1.0),
        theme::NAV_PADDING_Y * 2.0 + tab_height,
    );
    let mut tapped = None;

    egui::Area::new(egui::Id::new("bottom_nav"))
        .order(egui::Order::Foreground)
        .anchor(
            egui::Align2::CENTER_BOTTOM,
            egui::vec2(0.0, -(insets.bottom + theme::NAV_BOTTOM_GAP)),
        )
        .show(ctx, |ui| {
            let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
            ui.painter().rect_filled(rect, theme::RADIUS_PILL, theme::BG_NAV);

            let mut x = rect.min.x + theme::NAV_PADDING_X;
            for tab in Tab::ALL {
                let tab_rect = egui::Rect::from_min_size(
                    egui::pos2(x, rect.min.y + theme::NAV_PADDING_Y),
                    egui::vec2(theme::NAV_TAB_WIDTH, tab_height),
                );
                x += theme::NAV_TAB_WIDTH + theme::NAV_TAB_GAP;

                let response = ui.interact(tab_rect, ui.id().with(("nav_tab", tab)), egui::Sense::click());
                if response.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                }
                if response.clicked() {
                    tapped = Some(tab);
                }

                let color = tab_color(tab, active);
                let painter = ui.painter();
                tab_icon(tab).paint(
                    painter,
                    tab_rect.center_top(),
                    egui::Align2::CENTER_TOP,
                    theme::NAV_ICON_SIZE,
                    color,
                );
                painter.text(
                    tab_rect.center_bottom(),
                    egui::Align2::CENTER_BOTTOM,
                    tab.label().to_uppercase(),
                    egui::FontId::proportional(theme::FONT_CAPTION),
                    color,
                );
            }
        });

    tapped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_fills_at_the_threshold() {
        let filled = HeaderStyle::for_offset(HEADER_SCROLL_THRESHOLD);
        assert_eq!(filled.fill, theme::BG_HEADER_SCROLLED);
        assert_eq!(filled.bottom_border.width, 1.0);
        assert_eq!(filled.bottom_border.color, theme::BORDER_STRONG);
    }

    #[test]
    fn header_is_clear_one_unit_below() {
        let clear = HeaderStyle::for_offset(HEADER_SCROLL_THRESHOLD - 1.0);
        assert_eq!(clear.fill, Color32::TRANSPARENT);
        assert_eq!(clear.bottom_border, Stroke::NONE);
        assert_eq!(HeaderStyle::for_offset(0.0), clear);
    }

    #[test]
    fn header_style_is_a_pure_function_of_offset() {
        for offset in [0.0, 19.9, 20.0, 500.0] {
            assert_eq!(HeaderStyle::for_offset(offset), HeaderStyle::for_offset(offset));
        }
        assert!(is_scrolled(1000.0));
        assert!(!is_scrolled(-10.0));
    }

    #[test]
    fn only_the_active_tab_is_highlighted() {
        for active in Tab::ALL {
            for tab in Tab::ALL {
                let expected = if tab == active { theme::NAV_ACTIVE } else { theme::NAV_INACTIVE };
                assert_eq!(tab_color(tab, active), expected);
            }
        }
    }

    #[test]
    fn tabs_map_to_icons() {
        assert_eq!(tab_icon(Tab::List), Icon::List);
        assert_eq!(tab_icon(Tab::Map), Icon::Map);
        assert_eq!(tab_icon(Tab::Saved), Icon::Bookmark);
    }
}
