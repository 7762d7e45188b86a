//! Application constants and timing configuration

pub const APP_NAME: &str = "Coffee Rank";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scroll offset (px) at which the header gains its fill and border
pub const HEADER_SCROLL_THRESHOLD: f32 = 20.0;

// Star badge spin
pub const STAR_SPIN_SECS: f32 = 10.0;

// List item entrance (fade + slide from the left)
pub const ITEM_ENTRANCE_STAGGER_SECS: f32 = 0.1;
pub const ITEM_ENTRANCE_SECS: f32 = 0.4;
pub const ITEM_ENTRANCE_OFFSET: f32 = 25.0;

// Hero glyph spring
pub const HERO_SPRING_STIFFNESS: f32 = 260.0;
pub const HERO_SPRING_DAMPING: f32 = 90.0;
pub const HERO_SPRING_MASS: f32 = 1.0;
pub const HERO_START_ROTATION_DEG: f32 = -180.0;

// Hero title entrance (fade + slide up)
pub const HERO_TITLE_DELAY_SECS: f32 = 0.2;
pub const HERO_TITLE_SECS: f32 = 0.5;
pub const HERO_TITLE_OFFSET: f32 = 25.0;

/// Location shown in the header
pub const HEADER_LOCATION: &str = "Berlin, Mitte";
/// Sort label shown in the header
pub const HEADER_SORT: &str = "Rating";
pub const HERO_TITLE: &str = "Your Coffee List";
pub const LOAD_MORE_LABEL: &str = "Load 50 More";
