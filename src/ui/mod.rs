//! UI module - contains UI rendering components
//!
//! Everything here paints from explicit inputs; the screen state that
//! drives it lives in `app`.

pub mod badge;
pub mod chrome;
pub mod components;
pub mod hero;
pub mod icons;
pub mod shop_item;
