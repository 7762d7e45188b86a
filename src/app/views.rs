//! Screen rendering: scroll content plus the fixed chrome on top

use super::ScreenState;
use crate::animation::Animation;
use crate::constants::LOAD_MORE_LABEL;
use crate::theme;
use crate::types::Insets;
use crate::ui::chrome::{bottom_nav, header};
use crate::ui::components::pill_button;
use crate::ui::hero::hero;
use crate::ui::shop_item::shop_item;
use eframe::egui;
use tracing::debug;

impl ScreenState {
    /// Render one frame of the screen
    pub fn show(&mut self, ctx: &egui::Context, insets: Insets) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::BG_CREAM))
            .show(ctx, |ui| {
                let output = egui::ScrollArea::vertical()
                    .id_salt("coffee_list")
                    .auto_shrink([false; 2])
                    .show(ui, |ui| self.render_scroll_content(ui, insets));
                self.set_scroll_offset(output.state.offset.y);
            });

        header(ctx, insets, self.header_style());

        if let Some(tab) = bottom_nav(ctx, insets, self.active_tab) {
            self.select_tab(tab);
        }
    }

    fn render_scroll_content(&self, ui: &mut egui::Ui, insets: Insets) {
        ui.add_space(insets.top + theme::CONTENT_TOP_EXTRA);

        hero(
            ui,
            self.hero_scale.value(),
            self.hero_rotation.value(),
            &self.hero_title,
        );

        ui.spacing_mut().item_spacing.y = 0.0;
        let rows = self.shops().iter().zip(&self.entrances).zip(&self.spins);
        for (index, ((shop, entrance), spin)) in rows.enumerate() {
            if shop_item(ui, shop, index, entrance, spin.value()).clicked() {
                debug!(shop = shop.name, "Shop pressed");
            }
        }

        ui.add_space(theme::SPACING_XXL);
        ui.vertical_centered(|ui| {
            if pill_button(ui, LOAD_MORE_LABEL).clicked() {
                debug!("Load more pressed");
            }
        });
        ui.add_space(theme::SPACING_XXL + theme::CONTENT_BOTTOM_PADDING);
    }
}
