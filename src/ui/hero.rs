//! Hero block: spinning four-petal glyph above the screen title

use crate::animation::Entrance;
use crate::constants::{HERO_TITLE, HERO_TITLE_OFFSET};
use crate::theme;
use eframe::egui;
use egui::Pos2;

const PETAL_DISTANCE: f32 = 0.24;
const PETAL_RADIUS: f32 = 0.19;
const CORE_RADIUS: f32 = 0.12;

/// Petal centers for a glyph of `size` at `rotation_deg`, first petal pointing up
pub fn petal_centers(center: Pos2, size: f32, rotation_deg: f32) -> [Pos2; 4] {
    let rotation = egui::emath::Rot2::from_angle(rotation_deg.to_radians());
    let reach = egui::vec2(0.0, -size * PETAL_DISTANCE);
    std::array::from_fn(|i| {
        let quarter = egui::emath::Rot2::from_angle(i as f32 * std::f32::consts::FRAC_PI_2);
        center + rotation * (quarter * reach)
    })
}

fn paint_glyph(painter: &egui::Painter, center: Pos2, size: f32, rotation_deg: f32) {
    if size <= 0.0 {
        return;
    }
    for petal in petal_centers(center, size, rotation_deg) {
        painter.circle_filled(petal, size * PETAL_RADIUS, theme::ACCENT_HERO);
    }
    painter.circle_filled(center, size * CORE_RADIUS, theme::ACCENT_HERO);
}

pub fn hero(ui: &mut egui::Ui, glyph_scale: f32, glyph_rotation: f32, title: &Entrance) {
    ui.vertical_centered(|ui| {
        ui.add_space(theme::SPACING_SM);

        let side = theme::HERO_GLYPH_SIZE;
        let (rect, _) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());
        if ui.is_rect_visible(rect) {
            paint_glyph(ui.painter(), rect.center(), side * glyph_scale, glyph_rotation);
        }

        // Slide up: the gap above the title shrinks while the gap below grows
        let lift = title.offset().clamp(0.0, HERO_TITLE_OFFSET);
        ui.add_space(lift);
        ui.scope(|ui| {
            ui.multiply_opacity(title.opacity());
            ui.set_max_width(theme::HERO_TITLE_MAX_WIDTH);
            ui.add(
                egui::Label::new(egui::RichText::new(HERO_TITLE).size(theme::FONT_HERO_TITLE))
                    .wrap()
                    .selectable(false),
            );
        });
        ui.add_space(HERO_TITLE_OFFSET - lift + theme::SPACING_MD);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn first_petal_points_up_at_rest() {
        let petals = petal_centers(pos2(100.0, 100.0), 100.0, 0.0);
        assert!((petals[0].x - 100.0).abs() < 1e-3);
        assert!((petals[0].y - 76.0).abs() < 1e-3);
    }

    #[test]
    fn half_turn_flips_the_petals() {
        let petals = petal_centers(pos2(0.0, 0.0), 100.0, -180.0);
        assert!(petals[0].x.abs() < 1e-3);
        assert!((petals[0].y - 24.0).abs() < 1e-3);
    }

    #[test]
    fn zero_scale_collapses_to_center() {
        let c = pos2(10.0, 20.0);
        for p in petal_centers(c, 0.0, 45.0) {
            assert!((p - c).length() < 1e-6);
        }
    }
}
