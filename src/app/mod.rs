//! App module - contains the screen state and the window shell

mod views;

use crate::animation::{Animation, Entrance, Spring};
use crate::constants::*;
use crate::settings::Settings;
use crate::theme;
use crate::types::{CoffeeShop, Tab};
use crate::ui::badge::BadgeSpin;
use crate::ui::chrome::{is_scrolled, HeaderStyle};
use eframe::egui;
use std::path::PathBuf;
use tracing::debug;

// ============================================================================
// SCREEN STATE
// ============================================================================

/// Transient state of the coffee list screen. Rebuilding it replays every
/// entrance animation.
pub struct ScreenState {
    shops: &'static [CoffeeShop],
    active_tab: Tab,
    scroll_offset: f32,
    entrances: Vec<Entrance>,
    spins: Vec<BadgeSpin>,
    hero_scale: Spring,
    hero_rotation: Spring,
    hero_title: Entrance,
}

impl ScreenState {
    pub fn new(shops: &'static [CoffeeShop]) -> Self {
        let entrances = (0..shops.len())
            .map(|i| {
                Entrance::new(
                    i as f32 * ITEM_ENTRANCE_STAGGER_SECS,
                    ITEM_ENTRANCE_SECS,
                    ITEM_ENTRANCE_OFFSET,
                )
            })
            .collect();
        let spins = shops.iter().map(|s| BadgeSpin::for_shape(s.shape)).collect();

        Self {
            shops,
            active_tab: Tab::default(),
            scroll_offset: 0.0,
            entrances,
            spins,
            hero_scale: Spring::new(
                0.0,
                1.0,
                HERO_SPRING_STIFFNESS,
                HERO_SPRING_DAMPING,
                HERO_SPRING_MASS,
            ),
            hero_rotation: Spring::new(
                HERO_START_ROTATION_DEG,
                0.0,
                HERO_SPRING_STIFFNESS,
                HERO_SPRING_DAMPING,
                HERO_SPRING_MASS,
            ),
            hero_title: Entrance::new(HERO_TITLE_DELAY_SECS, HERO_TITLE_SECS, HERO_TITLE_OFFSET),
        }
    }

    pub fn shops(&self) -> &'static [CoffeeShop] {
        self.shops
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Highlight `tab`. Returns true if the selection changed.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if self.active_tab == tab {
            return false;
        }
        debug!(from = ?self.active_tab, to = ?tab, "Tab selected");
        self.active_tab = tab;
        true
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: f32) {
        let scrolled = is_scrolled(offset);
        if scrolled != is_scrolled(self.scroll_offset) {
            debug!(offset, scrolled, "Header state changed");
        }
        self.scroll_offset = offset;
    }

    pub fn header_style(&self) -> HeaderStyle {
        HeaderStyle::for_offset(self.scroll_offset)
    }

    /// Advance every animation by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        for entrance in &mut self.entrances {
            entrance.tick(dt);
        }
        for spin in &mut self.spins {
            spin.tick(dt);
        }
        self.hero_scale.tick(dt);
        self.hero_rotation.tick(dt);
        self.hero_title.tick(dt);
    }

    pub fn is_animating(&self) -> bool {
        self.entrances.iter().any(Animation::is_running)
            || self.spins.iter().any(Animation::is_running)
            || self.hero_scale.is_running()
            || self.hero_rotation.is_running()
            || self.hero_title.is_running()
    }
}

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) screen: ScreenState,
    pub(crate) settings: Settings,
    pub(crate) data_dir: PathBuf,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
}

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        shops: &'static [CoffeeShop],
        settings: Settings,
        data_dir: PathBuf,
    ) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Light);
        theme::install_fonts(&cc.egui_ctx);
        theme::apply_visuals(&cc.egui_ctx);

        Self {
            screen: ScreenState::new(shops),
            settings,
            data_dir,
            window_pos: None,
            window_size: None,
            needs_center: false,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            ..self.settings.clone()
        };
        settings.save(&self.data_dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::COFFEE_SHOPS;
    use crate::types::Insets;

    #[test]
    fn starts_on_the_list_tab_at_the_top() {
        let screen = ScreenState::new(&COFFEE_SHOPS);
        assert_eq!(screen.active_tab(), Tab::List);
        assert_eq!(screen.scroll_offset(), 0.0);
        assert_eq!(screen.header_style(), HeaderStyle::for_offset(0.0));
    }

    #[test]
    fn selecting_map_or_saved_only_moves_the_highlight() {
        for tab in [Tab::Map, Tab::Saved] {
            let mut screen = ScreenState::new(&COFFEE_SHOPS);
            screen.set_scroll_offset(140.0);
            let header = screen.header_style();

            assert!(screen.select_tab(tab));
            assert_eq!(screen.active_tab(), tab);
            assert_eq!(screen.shops(), &COFFEE_SHOPS[..]);
            assert_eq!(screen.scroll_offset(), 140.0);
            assert_eq!(screen.header_style(), header);
        }
    }

    #[test]
    fn reselecting_the_active_tab_is_a_no_op() {
        let mut screen = ScreenState::new(&COFFEE_SHOPS);
        assert!(!screen.select_tab(Tab::List));
        assert!(screen.select_tab(Tab::Saved));
        assert!(!screen.select_tab(Tab::Saved));
        assert!(screen.select_tab(Tab::List));
    }

    #[test]
    fn header_follows_scroll_offset() {
        let mut screen = ScreenState::new(&COFFEE_SHOPS);
        screen.set_scroll_offset(HEADER_SCROLL_THRESHOLD);
        assert_eq!(screen.header_style().fill, theme::BG_HEADER_SCROLLED);
        screen.set_scroll_offset(HEADER_SCROLL_THRESHOLD - 1.0);
        assert_eq!(screen.header_style().fill, egui::Color32::TRANSPARENT);
    }

    #[test]
    fn item_entrances_are_staggered_by_index() {
        let mut screen = ScreenState::new(&COFFEE_SHOPS);
        screen.tick(0.15);
        assert!(screen.entrances[0].opacity() > 0.0);
        assert!(screen.entrances[1].opacity() > 0.0);
        assert_eq!(screen.entrances[2].opacity(), 0.0);
        assert_eq!(screen.entrances[4].opacity(), 0.0);
        screen.tick(1.0);
        assert!(screen.entrances.iter().all(|e| e.opacity() == 1.0));
    }

    #[test]
    fn hero_settles_while_star_keeps_spinning() {
        let mut screen = ScreenState::new(&COFFEE_SHOPS);
        for _ in 0..(60 * 10) {
            screen.tick(1.0 / 60.0);
        }
        assert_eq!(screen.hero_scale.value(), 1.0);
        assert_eq!(screen.hero_rotation.value(), 0.0);
        assert_eq!(screen.hero_title.opacity(), 1.0);
        // The star badge never stops
        assert!(screen.is_animating());
    }

    #[test]
    fn screen_without_a_star_goes_idle() {
        let mut screen = ScreenState::new(&COFFEE_SHOPS[1..]);
        for _ in 0..(60 * 10) {
            screen.tick(1.0 / 60.0);
        }
        assert!(!screen.is_animating());
    }

    #[test]
    fn renders_headless() {
        let ctx = egui::Context::default();
        theme::install_fonts(&ctx);
        theme::apply_visuals(&ctx);
        let mut screen = ScreenState::new(&COFFEE_SHOPS);
        let insets = Insets { top: 47.0, bottom: 34.0 };

        for _ in 0..3 {
            let input = egui::RawInput {
                screen_rect: Some(egui::Rect::from_min_size(
                    egui::Pos2::ZERO,
                    egui::vec2(theme::WINDOW_SIZE[0], theme::WINDOW_SIZE[1]),
                )),
                ..Default::default()
            };
            screen.tick(1.0 / 60.0);
            let output = ctx.run(input, |ctx| screen.show(ctx, insets));
            assert!(!output.shapes.is_empty());
        }
        assert_eq!(screen.active_tab(), Tab::List);
        assert_eq!(screen.scroll_offset(), 0.0);
    }
}
