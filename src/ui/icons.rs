//! Named icon set backed by the Phosphor icon font

use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Navigation,
    ChevronRight,
    Filter,
    List,
    Map,
    Bookmark,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Navigation => egui_phosphor::regular::NAVIGATION_ARROW,
            Icon::ChevronRight => egui_phosphor::regular::CARET_RIGHT,
            Icon::Filter => egui_phosphor::regular::FUNNEL,
            Icon::List => egui_phosphor::regular::LIST,
            Icon::Map => egui_phosphor::regular::MAP_TRIFOLD,
            Icon::Bookmark => egui_phosphor::regular::BOOKMARK_SIMPLE,
        }
    }

    pub fn rich_text(self, size: f32, color: egui::Color32) -> egui::RichText {
        egui::RichText::new(self.glyph()).size(size).color(color)
    }

    /// Paint the icon anchored at `pos`, returning the painted rect
    pub fn paint(
        self,
        painter: &egui::Painter,
        pos: egui::Pos2,
        anchor: egui::Align2,
        size: f32,
        color: egui::Color32,
    ) -> egui::Rect {
        painter.text(pos, anchor, self.glyph(), egui::FontId::proportional(size), color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_a_distinct_glyph() {
        let all = [
            Icon::Navigation,
            Icon::ChevronRight,
            Icon::Filter,
            Icon::List,
            Icon::Map,
            Icon::Bookmark,
        ];
        let glyphs: std::collections::HashSet<_> = all.iter().map(|i| i.glyph()).collect();
        assert_eq!(glyphs.len(), all.len());
    }
}
