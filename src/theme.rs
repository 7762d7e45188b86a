//! Centralized theme constants for Coffee Rank
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_CREAM: Color32 = Color32::from_rgb(0xF4, 0xED, 0xD6);
pub const BG_HEADER_SCROLLED: Color32 = Color32::from_rgba_premultiplied(0xDC, 0xD5, 0xC1, 230); // cream @ 90%
pub const BG_ITEM_PRESSED: Color32 = Color32::from_rgba_premultiplied(102, 102, 102, 102); // white @ 40%
pub const BG_NAV: Color32 = Color32::BLACK;

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::BLACK;
pub const TEXT_ON_DARK: Color32 = BG_CREAM;
pub const TEXT_MUTED_OPACITY: f32 = 0.7;
pub const TEXT_LABEL_OPACITY: f32 = 0.6;

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_STRONG: Color32 = Color32::BLACK;
pub const BORDER_SUBTLE: Color32 = Color32::from_black_alpha(26); // black @ 10%

// =============================================================================
// COLORS - Accents
// =============================================================================
pub const ACCENT_LOCATION: Color32 = Color32::from_rgb(0xFF, 0x33, 0x33);
pub const ACCENT_HERO: Color32 = Color32::from_rgb(0x2E, 0x9B, 0xC7);
pub const CHEVRON: Color32 = Color32::from_black_alpha(51); // black @ 20%

// =============================================================================
// COLORS - Bottom navigation
// =============================================================================
pub const NAV_ACTIVE: Color32 = Color32::from_rgb(0xD1, 0x3F, 0x2A);
pub const NAV_INACTIVE: Color32 = Color32::from_rgba_premultiplied(0x92, 0x8E, 0x80, 153); // cream @ 60%

// =============================================================================
// COLORS - Badge glyphs
// =============================================================================
pub const BADGE_STAR: Color32 = Color32::from_rgb(0xFF, 0x5A, 0x36);
pub const BADGE_BLOB2: Color32 = Color32::from_rgb(0x2E, 0x9B, 0xC7);
pub const BADGE_BLOB: Color32 = Color32::WHITE;
pub const BADGE_CIRCLE: Color32 = Color32::from_black_alpha(26); // black @ 10%
pub const BADGE_TEXT_LIGHT: Color32 = Color32::WHITE;
pub const BADGE_TEXT_DARK: Color32 = Color32::BLACK;
pub const BADGE_TEXT_MUTED: Color32 = Color32::from_black_alpha(153); // black @ 60%

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_HERO_TITLE: f32 = 44.0;
pub const FONT_RANK: f32 = 30.0;
pub const FONT_SHOP_NAME: f32 = 24.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LOAD_MORE: f32 = 12.0;
pub const FONT_CHIP: f32 = 11.0;
pub const FONT_CAPTION: f32 = 10.0;

// =============================================================================
// DIMENSIONS - Layout
// =============================================================================
pub const WINDOW_SIZE: [f32; 2] = [390.0, 844.0];
pub const CONTENT_TOP_EXTRA: f32 = 70.0;
pub const CONTENT_BOTTOM_PADDING: f32 = 120.0;
pub const HEADER_PADDING: f32 = 16.0;
pub const HEADER_CONTENT_HEIGHT: f32 = 34.0;
pub const NAV_BOTTOM_GAP: f32 = 16.0;
pub const NAV_PADDING_X: f32 = 32.0;
pub const NAV_PADDING_Y: f32 = 12.0;
pub const NAV_TAB_GAP: f32 = 40.0;
pub const NAV_TAB_WIDTH: f32 = 36.0;
pub const NAV_ICON_SIZE: f32 = 20.0;

// =============================================================================
// DIMENSIONS - Components
// =============================================================================
pub const ITEM_PADDING_X: f32 = 16.0;
pub const ITEM_PADDING_Y: f32 = 24.0;
pub const ITEM_GAP: f32 = 16.0;
pub const RANK_MIN_WIDTH: f32 = 32.0;
pub const ITEM_RIGHT_WIDTH: f32 = 65.0;
pub const BADGE_SIZE: f32 = 40.0;
pub const BADGE_STAR_SIZE: f32 = 65.0;
pub const FONT_BADGE: f32 = 14.0;
pub const HERO_GLYPH_SIZE: f32 = 90.0;
pub const HERO_TITLE_MAX_WIDTH: f32 = 280.0;
pub const CHEVRON_SIZE: f32 = 18.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_PILL: f32 = 99.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_XS: f32 = 2.0;
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_CHIP: f32 = 6.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_XXL: f32 = 32.0;

// =============================================================================
// HELPER - Fonts
// =============================================================================

/// Register Phosphor icons as a fallback of the default proportional font
pub fn install_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);
}

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: false,
        panel_fill: BG_CREAM,
        window_fill: BG_CREAM,
        extreme_bg_color: BG_CREAM,
        override_text_color: Some(TEXT_PRIMARY),
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        ..egui::Visuals::light()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(SPACING_MD, SPACING_SM);
        style.spacing.scroll.bar_width = 4.0;
        style.spacing.scroll.floating = true;
    });
}

// =============================================================================
// HELPER - Chip frame
// =============================================================================
pub fn chip_frame() -> egui::Frame {
    egui::Frame::new()
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_STRONG))
        .corner_radius(RADIUS_PILL)
        .inner_margin(egui::Margin::symmetric(10, 2))
}

/// Apply a 0..=1 opacity on top of a color's own alpha
pub fn with_opacity(c: Color32, opacity: f32) -> Color32 {
    c.gamma_multiply(opacity.clamp(0.0, 1.0))
}

/// Returns (fill, text) for the outlined pill button: inverts while pressed.
pub fn pill_button_visual(response: &egui::Response) -> (Color32, Color32) {
    if response.is_pointer_button_down_on() {
        (TEXT_PRIMARY, TEXT_ON_DARK)
    } else {
        (Color32::TRANSPARENT, TEXT_PRIMARY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_opacity_scales_alpha() {
        let c = with_opacity(Color32::BLACK, 0.5);
        assert!(c.a() > 100 && c.a() < 140);
        assert_eq!(with_opacity(Color32::BLACK, 2.0), Color32::BLACK);
        assert_eq!(with_opacity(Color32::BLACK, 0.0).a(), 0);
    }

    #[test]
    fn nav_colors_differ() {
        assert_ne!(NAV_ACTIVE, NAV_INACTIVE);
    }
}
